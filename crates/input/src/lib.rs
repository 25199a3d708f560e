//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks
//! the soft drop hold, releasing it after a short grace period on terminals
//! that never report key-up events.

pub mod handler;
pub mod map;

pub use columns_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
