//! Snapshot module - owned copy of the session state for rendering

use crate::faller::Faller;
use crate::token::Token;
use crate::types::{FallerState, JewelColor, FALLER_LEN, HIDDEN_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallerSnapshot {
    pub column: usize,
    pub row: usize,
    pub components: [JewelColor; FALLER_LEN],
    pub state: FallerState,
}

impl From<&Faller> for FallerSnapshot {
    fn from(value: &Faller) -> Self {
        Self {
            column: value.column(),
            row: value.row(),
            components: value.components(),
            state: value.state(),
        }
    }
}

/// Owned copy of everything the presentation layer draws.
///
/// Reuse one instance with [`Session::snapshot_into`](crate::Session::snapshot_into)
/// to avoid reallocating the cell buffer every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Visible rows
    pub rows: usize,
    pub columns: usize,
    /// Row-major cells, hidden rows first
    pub cells: Vec<Token>,
    pub faller: Option<FallerSnapshot>,
    pub game_over: bool,
    pub soft_drop: bool,
}

impl SessionSnapshot {
    /// Token at `(row, col)` in field coordinates (hidden rows included)
    pub fn at(&self, row: usize, col: usize) -> Option<Token> {
        if col >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + col).copied()
    }

    /// The visible rows, top to bottom
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Token]> {
        self.cells.chunks(self.columns.max(1)).skip(HIDDEN_ROWS)
    }
}
