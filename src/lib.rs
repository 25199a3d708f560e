//! Columns (workspace facade crate).
//!
//! Re-exports the member crates under `columns::{core,input,term,types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use columns_core as core;
pub use columns_input as input;
pub use columns_term as term;
pub use columns_types as types;
