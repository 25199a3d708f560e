//! Core game logic - pure, deterministic, and testable
//!
//! The simulation of a Columns-style matching game: a field of colored
//! jewels, a three-jewel faller under player control, gravity, eight-direction
//! match detection and removal, and game-over detection. It has no
//! dependencies on the terminal, input devices or wall-clock time, which makes
//! it:
//!
//! - **Deterministic**: the same seed and the same inputs replay the same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: the terminal front end is just one consumer
//!
//! # Module Structure
//!
//! - [`token`]: the value stored in a field cell
//! - [`field`]: the grid, gravity and match passes
//! - [`faller`]: the falling three-jewel unit and its state machine
//! - [`session`]: tick cycle, spawning, player intents, game over
//! - [`config`]: immutable session configuration
//! - [`rng`]: seeded LCG used for spawn column and colors
//! - [`snapshot`]: owned copy of the drawable state
//!
//! # Example
//!
//! ```
//! use columns_core::Session;
//! use columns_core::types::{FallerState, JewelColor};
//!
//! let mut session = Session::create(13, 6).unwrap();
//! assert!(session.spawn_faller_at(3, [JewelColor::Red; 3]));
//!
//! session.move_left();
//! session.rotate();
//! assert_eq!(session.active_faller().unwrap().column(), 2);
//!
//! // Twelve gravity steps carry the bottom jewel from row 2 to row 14.
//! for _ in 0..12 {
//!     session.step();
//! }
//! assert_eq!(session.active_faller().unwrap().state(), FallerState::Landed);
//! ```
//!
//! # Timing
//!
//! [`Session::tick`] takes elapsed milliseconds and runs one tick cycle each
//! time the accumulated time exceeds the fall interval (1000 ms, or 100 ms
//! while soft drop is held). Moves and rotations apply immediately.

pub mod config;
pub mod error;
pub mod faller;
pub mod field;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod token;

pub use columns_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use error::{ConfigError, FieldParseError};
pub use faller::Faller;
pub use field::{Field, DIRECTIONS};
pub use rng::SimpleRng;
pub use session::Session;
pub use snapshot::{FallerSnapshot, SessionSnapshot};
pub use token::Token;
