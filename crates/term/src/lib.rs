//! Terminal rendering module.
//!
//! Sessions are drawn into a plain framebuffer by the pure [`GameView`], and
//! [`TerminalRenderer`] flushes that framebuffer to the terminal, rewriting
//! only the cells that changed since the previous frame.
//!
//! Jewels are two terminal columns wide to make square-looking cells.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use columns_core as core;
pub use columns_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
