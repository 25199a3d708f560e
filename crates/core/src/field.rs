//! Field module - the grid of jewels
//!
//! The field is `rows` visible rows by `columns` columns, plus [`HIDDEN_ROWS`]
//! rows above the visible area where fallers spawn. Storage is a flat
//! row-major vector that never changes size after construction.
//!
//! Coordinates are `(row, col)` with row 0 at the top (hidden) and
//! `total_rows() - 1` at the bottom. Out-of-bounds access through [`Field::at`]
//! and [`Field::set`] is a caller bug and panics; [`Field::get`] is the
//! checked variant for probing neighbors.
//!
//! Besides cell access the field owns the gravity and match passes:
//!
//! - [`Field::tick_gravity_once`] drops every unsupported jewel by one row
//! - [`Field::settle_all_gravity`] compacts every column completely
//! - [`Field::scan_and_mark_matches`] marks runs of three in eight directions
//! - [`Field::clear_matched_cells`] removes marked jewels

use arrayvec::ArrayVec;

use crate::error::FieldParseError;
use crate::token::Token;
use crate::types::{JewelColor, TokenState, HIDDEN_ROWS, MATCH_LEN};

/// Scan directions as `(row_delta, col_delta)`.
///
/// Opposite directions are both present, so every run is found from each end.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// The playing field, hidden rows included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: usize,
    columns: usize,
    /// Row-major cells (row * columns + col)
    cells: Vec<Token>,
}

impl Field {
    /// Create an empty field with `rows` visible rows.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "field dimensions must be non-zero");
        Self {
            rows,
            columns,
            cells: vec![Token::EMPTY; (rows + HIDDEN_ROWS) * columns],
        }
    }

    /// Build a field from a text diagram, hidden rows first.
    ///
    /// Each line is one row; `.` is empty and a color letter (see
    /// [`JewelColor::from_char`]) is a frozen jewel.
    ///
    /// ```
    /// use columns_core::Field;
    ///
    /// let field = Field::from_rows(&["...", "...", "...", "RGB"]).unwrap();
    /// assert_eq!(field.rows(), 2);
    /// assert_eq!(field.columns(), 3);
    /// assert!(!field.is_empty(3, 1));
    /// ```
    pub fn from_rows(lines: &[&str]) -> Result<Self, FieldParseError> {
        if lines.len() <= HIDDEN_ROWS {
            return Err(FieldParseError::TooFewRows(lines.len()));
        }
        let columns = lines[0].chars().count();
        if columns == 0 {
            return Err(FieldParseError::NoColumns);
        }

        let mut field = Field::new(lines.len() - HIDDEN_ROWS, columns);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(FieldParseError::RaggedRow {
                    row,
                    found,
                    expected: columns,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let color = JewelColor::from_char(ch)
                    .ok_or(FieldParseError::UnknownJewel { ch, row, col })?;
                field.set(row, col, Token::new(color));
            }
        }
        Ok(field)
    }

    /// Build a field from visible rows only; the hidden rows start empty.
    pub fn from_visible_rows(lines: &[&str]) -> Result<Self, FieldParseError> {
        let width = lines.first().map_or(0, |l| l.chars().count());
        let blank = ".".repeat(width);
        let mut all: Vec<&str> = vec![blank.as_str(); HIDDEN_ROWS];
        all.extend_from_slice(lines);
        Self::from_rows(&all)
    }

    /// Inverse of [`Field::from_rows`]: one string per row, hidden rows first.
    pub fn render_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.columns)
            .map(|row| {
                row.iter()
                    .map(|t| t.color().map_or('.', |c| c.as_char()))
                    .collect()
            })
            .collect()
    }

    /// Visible row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Visible plus hidden rows
    pub fn total_rows(&self) -> usize {
        self.rows + HIDDEN_ROWS
    }

    /// Lowest row index
    pub fn bottom_row(&self) -> usize {
        self.total_rows() - 1
    }

    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.total_rows() || col as usize >= self.columns {
            return None;
        }
        Some(row as usize * self.columns + col as usize)
    }

    #[inline(always)]
    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.total_rows() && col < self.columns,
            "cell ({row}, {col}) outside {}x{} field",
            self.total_rows(),
            self.columns
        );
        row * self.columns + col
    }

    /// Token at `(row, col)`, or `None` outside the field
    pub fn get(&self, row: isize, col: isize) -> Option<Token> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Token at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the field.
    pub fn at(&self, row: usize, col: usize) -> Token {
        self.cells[self.index_of(row, col)]
    }

    /// Replace the token at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the field.
    pub fn set(&mut self, row: usize, col: usize, token: Token) {
        let idx = self.index_of(row, col);
        self.cells[idx] = token;
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.at(row, col).is_empty()
    }

    /// A faller can spawn in `col` when the first visible cell is free.
    pub fn is_column_open(&self, col: usize) -> bool {
        self.is_empty(HIDDEN_ROWS, col)
    }

    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(|&col| self.is_column_open(col))
    }

    /// All cells, row-major, hidden rows first
    pub fn cells(&self) -> &[Token] {
        &self.cells
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> &[Token] {
        let start = self.index_of(row, 0);
        &self.cells[start..start + self.columns]
    }

    /// Number of non-empty cells
    pub fn jewel_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_empty()).count()
    }

    /// Compact every column so no jewel has an empty cell beneath it.
    ///
    /// Column order is preserved. Applying it twice is the same as once.
    pub fn settle_all_gravity(&mut self) {
        let width = self.columns;
        for col in 0..width {
            let mut write = self.total_rows();
            for row in (0..self.total_rows()).rev() {
                let idx = row * width + col;
                if self.cells[idx].is_empty() {
                    continue;
                }
                write -= 1;
                if write != row {
                    self.cells[write * width + col] = self.cells[idx];
                    self.cells[idx] = Token::EMPTY;
                }
            }
        }
    }

    /// Drop every jewel with an empty cell beneath it by exactly one row.
    ///
    /// Each column is scanned bottom to top in a single pass, so a stack of
    /// unsupported jewels moves down together. Returns how many jewels moved.
    pub fn tick_gravity_once(&mut self) -> usize {
        let width = self.columns;
        let mut moved = 0;
        for col in 0..width {
            for row in (0..self.bottom_row()).rev() {
                let idx = row * width + col;
                let below = idx + width;
                if !self.cells[idx].is_empty() && self.cells[below].is_empty() {
                    self.cells[below] = self.cells[idx];
                    self.cells[idx] = Token::EMPTY;
                    moved += 1;
                }
            }
        }
        moved
    }

    /// Cells of a same-colored run of [`MATCH_LEN`] starting at `(row, col)`
    /// and heading along `(dr, dc)`.
    fn run_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<ArrayVec<usize, MATCH_LEN>> {
        let (row, col) = (row as isize, col as isize);
        let start = self.index(row, col)?;
        let color = self.cells[start].color()?;

        let mut run = ArrayVec::new();
        run.push(start);
        for step in 1..MATCH_LEN as isize {
            let idx = self.index(row + dr * step, col + dc * step)?;
            if self.cells[idx].color() != Some(color) {
                return None;
            }
            run.push(idx);
        }
        Some(run)
    }

    /// Mark every jewel that is part of a run of three or more as Matched.
    ///
    /// Every cell is tried as a start in all eight [`DIRECTIONS`]. Marking only
    /// touches state, never color, so marking while scanning cannot hide a run.
    /// Returns whether any cell is Matched afterwards.
    pub fn scan_and_mark_matches(&mut self) -> bool {
        for row in 0..self.total_rows() {
            for col in 0..self.columns {
                for &(dr, dc) in DIRECTIONS.iter() {
                    if let Some(run) = self.run_from(row, col, dr, dc) {
                        for idx in run {
                            self.cells[idx].set_state(TokenState::Matched);
                        }
                    }
                }
            }
        }
        self.has_match()
    }

    /// True while any jewel is marked Matched
    pub fn has_match(&self) -> bool {
        self.cells
            .iter()
            .any(|t| t.is_jewel_in(TokenState::Matched))
    }

    /// Empty every Matched cell. Returns how many were removed.
    pub fn clear_matched_cells(&mut self) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if cell.is_jewel_in(TokenState::Matched) {
                *cell = Token::EMPTY;
                cleared += 1;
            }
        }
        cleared
    }

    /// A frozen jewel has reached the hidden rows and no match is pending.
    ///
    /// Falling or landed jewels in the hidden rows (an active faller) do not
    /// count.
    pub fn is_game_over_condition(&self) -> bool {
        if self.has_match() {
            return false;
        }
        self.cells[..HIDDEN_ROWS * self.columns]
            .iter()
            .any(|t| t.is_jewel_in(TokenState::Frozen))
    }
}
