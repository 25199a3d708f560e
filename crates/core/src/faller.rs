//! Faller module - the three-jewel column under player control
//!
//! A faller occupies three vertically stacked cells of one column. It keeps
//! its own record of colors, position and state, and writes that record into
//! the field through [`Field::set`] whenever any of them changes, so the field
//! cells always mirror the faller. It never keeps a reference into the field;
//! every operation takes the field as an argument.
//!
//! Lifecycle:
//!
//! ```text
//!            check_landed            freeze
//! Falling ───────────────▶ Landed ─────────▶ Frozen
//!    ▲                       │
//!    └───────────────────────┘
//!          check_unlanded
//! ```

use crate::field::Field;
use crate::token::Token;
use crate::types::{FallerState, JewelColor, FALLER_LEN, HIDDEN_ROWS};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Faller {
    column: usize,
    /// Row of the bottom jewel
    row: usize,
    /// Colors from top to bottom
    components: [JewelColor; FALLER_LEN],
    state: FallerState,
}

impl Faller {
    /// Place a new faller in `column` with its bottom jewel on the first
    /// visible row.
    ///
    /// Returns `None` without touching the field when that cell is occupied.
    /// A faller spawned directly onto a full stack lands immediately.
    pub fn spawn(
        field: &mut Field,
        column: usize,
        components: [JewelColor; FALLER_LEN],
    ) -> Option<Self> {
        if !field.is_column_open(column) {
            return None;
        }

        let mut faller = Self {
            column,
            row: HIDDEN_ROWS,
            components,
            state: FallerState::Falling,
        };
        faller.write(field);
        faller.check_landed(field);
        Some(faller)
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Row of the bottom jewel
    pub fn row(&self) -> usize {
        self.row
    }

    /// Row of the top jewel
    pub fn top_row(&self) -> usize {
        self.row + 1 - FALLER_LEN
    }

    /// Colors from top to bottom
    pub fn components(&self) -> [JewelColor; FALLER_LEN] {
        self.components
    }

    pub fn state(&self) -> FallerState {
        self.state
    }

    /// Occupied `(row, col)` cells from top to bottom
    pub fn cells(&self) -> [(usize, usize); FALLER_LEN] {
        let top = self.top_row();
        std::array::from_fn(|i| (top + i, self.column))
    }

    /// The token this faller keeps in its `i`-th cell (0 = top)
    pub fn token(&self, i: usize) -> Token {
        Token::with_state(self.components[i], self.state.into())
    }

    fn write(&self, field: &mut Field) {
        for (i, (row, col)) in self.cells().into_iter().enumerate() {
            field.set(row, col, self.token(i));
        }
    }

    fn erase(&self, field: &mut Field) {
        for (row, col) in self.cells() {
            field.set(row, col, Token::EMPTY);
        }
    }

    fn set_state(&mut self, field: &mut Field, state: FallerState) {
        self.state = state;
        self.write(field);
    }

    /// Shift one column left. Returns false when blocked by the wall or a jewel.
    pub fn move_left(&mut self, field: &mut Field) -> bool {
        if self.column == 0 {
            return false;
        }
        self.shift_to(field, self.column - 1)
    }

    /// Shift one column right. Returns false when blocked by the wall or a jewel.
    pub fn move_right(&mut self, field: &mut Field) -> bool {
        if self.column + 1 >= field.columns() {
            return false;
        }
        self.shift_to(field, self.column + 1)
    }

    fn shift_to(&mut self, field: &mut Field, target: usize) -> bool {
        if self.state == FallerState::Frozen {
            return false;
        }
        // All three destination cells must be free, not just the one beside
        // the bottom jewel.
        let blocked = (self.top_row()..=self.row).any(|row| !field.is_empty(row, target));
        if blocked {
            return false;
        }

        self.erase(field);
        self.column = target;
        self.write(field);
        true
    }

    /// Cycle the jewels downward: the bottom jewel moves to the top.
    ///
    /// A frozen faller keeps its order. The cells are rewritten either way.
    pub fn rotate(&mut self, field: &mut Field) {
        if self.state != FallerState::Frozen {
            let [top, middle, bottom] = self.components;
            self.components = [bottom, top, middle];
        }
        self.write(field);
    }

    fn has_room_below(&self, field: &Field) -> bool {
        self.row < field.bottom_row() && field.is_empty(self.row + 1, self.column)
    }

    /// Falling → Landed when the bottom jewel is supported.
    pub fn check_landed(&mut self, field: &mut Field) {
        if self.state == FallerState::Falling && !self.has_room_below(field) {
            self.set_state(field, FallerState::Landed);
        }
    }

    /// Landed → Falling when the support underneath is gone.
    pub fn check_unlanded(&mut self, field: &mut Field) {
        if self.state == FallerState::Landed && self.has_room_below(field) {
            self.set_state(field, FallerState::Falling);
        }
    }

    /// Landed → Frozen. Returns true only on the transition.
    pub fn freeze(&mut self, field: &mut Field) -> bool {
        if self.state != FallerState::Landed {
            return false;
        }
        self.set_state(field, FallerState::Frozen);
        true
    }

    /// Advance the row counter after [`Field::tick_gravity_once`] carried the
    /// faller's jewels one row down.
    ///
    /// Returns true when the faller moved.
    pub fn follow_gravity(&mut self, field: &Field) -> bool {
        if self.state == FallerState::Frozen || self.row >= field.bottom_row() {
            return false;
        }
        let moved = field.at(self.row + 1, self.column) == self.token(FALLER_LEN - 1)
            && field.at(self.top_row(), self.column).is_empty();
        if moved {
            self.row += 1;
        }
        moved
    }
}
