//! Error types for session configuration and field diagrams.

use thiserror::Error;

/// Rejected [`SessionConfig`](crate::SessionConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field needs at least one visible row")]
    NoRows,
    #[error("field needs at least one column")]
    NoColumns,
    #[error("jewel palette is empty")]
    EmptyPalette,
    #[error("fall intervals must be positive (normal {normal_ms}ms, soft drop {soft_drop_ms}ms)")]
    ZeroInterval { normal_ms: u32, soft_drop_ms: u32 },
}

/// Rejected text diagram passed to [`Field::from_rows`](crate::Field::from_rows).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldParseError {
    #[error("diagram has {0} rows, needs the 2 hidden rows plus at least one visible row")]
    TooFewRows(usize),
    #[error("diagram rows must not be empty")]
    NoColumns,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown jewel '{ch}' at row {row}, column {col}")]
    UnknownJewel { ch: char, row: usize, col: usize },
}
