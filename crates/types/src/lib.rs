//! Core types module - shared data structures and constants
//!
//! Plain data used throughout the workspace: jewel colors, token and faller
//! states, player actions, and the default dimensions and timings. Nothing here
//! depends on the simulation, the terminal, or I/O, so every other crate can
//! share it.
//!
//! # Field Dimensions
//!
//! The classic field is 13 visible rows by 6 columns. Two hidden rows sit
//! above the visible area; a new faller spawns with its bottom jewel on the
//! first visible row (row index 2) and its upper two jewels in the hidden rows.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Presentation frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | One gravity tick per second |
//! | `SOFT_DROP_FALL_MS` | 100 | Gravity interval while soft drop is held |
//! | `SOFT_DROP_GRACE_MS` | 150 | Auto-release for terminals without key-up events |
//!
//! # Examples
//!
//! ```
//! use columns_types::{JewelColor, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! let color = JewelColor::from_char('g').unwrap();
//! assert_eq!(color, JewelColor::Green);
//! assert_eq!(color.as_char(), 'G');
//!
//! assert_eq!(DEFAULT_ROWS, 13);
//! assert_eq!(DEFAULT_COLUMNS, 6);
//! ```

/// Visible rows in the default field
pub const DEFAULT_ROWS: usize = 13;

/// Columns in the default field
pub const DEFAULT_COLUMNS: usize = 6;

/// Rows above the visible area used for spawning and overflow detection
pub const HIDDEN_ROWS: usize = 2;

/// Number of jewels in a faller
pub const FALLER_LEN: usize = 3;

/// Minimum run length that counts as a match
pub const MATCH_LEN: usize = 3;

/// Presentation frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at normal speed (1000ms = one row per second)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval while soft drop is held
pub const SOFT_DROP_FALL_MS: u32 = 100;

/// Soft drop auto-release timeout for terminals that never report key release.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Default RNG seed
pub const DEFAULT_SEED: u32 = 1;


/// The seven jewel colors
///
/// Each color has a one-letter code used by field diagrams and tests:
/// R, O, Y, G, B, P and Z (pink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JewelColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl JewelColor {
    /// Every color, in palette order
    pub const ALL: [JewelColor; 7] = [
        JewelColor::Red,
        JewelColor::Orange,
        JewelColor::Yellow,
        JewelColor::Green,
        JewelColor::Blue,
        JewelColor::Purple,
        JewelColor::Pink,
    ];

    /// Parse a color from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use columns_types::JewelColor;
    ///
    /// assert_eq!(JewelColor::from_char('R'), Some(JewelColor::Red));
    /// assert_eq!(JewelColor::from_char('z'), Some(JewelColor::Pink));
    /// assert_eq!(JewelColor::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(JewelColor::Red),
            'O' => Some(JewelColor::Orange),
            'Y' => Some(JewelColor::Yellow),
            'G' => Some(JewelColor::Green),
            'B' => Some(JewelColor::Blue),
            'P' => Some(JewelColor::Purple),
            'Z' => Some(JewelColor::Pink),
            _ => None,
        }
    }

    /// Uppercase letter for this color
    pub fn as_char(&self) -> char {
        match self {
            JewelColor::Red => 'R',
            JewelColor::Orange => 'O',
            JewelColor::Yellow => 'Y',
            JewelColor::Green => 'G',
            JewelColor::Blue => 'B',
            JewelColor::Purple => 'P',
            JewelColor::Pink => 'Z',
        }
    }
}

/// State of a single field token
///
/// - **Frozen**: settled, no longer controlled by the player
/// - **Falling**: part of a faller that is still dropping
/// - **Landed**: part of a faller resting on support, about to freeze
/// - **Matched**: part of a run of three or more, pending removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenState {
    #[default]
    Frozen,
    Falling,
    Landed,
    Matched,
}

/// Faller lifecycle: `Falling ⇄ Landed → Frozen`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallerState {
    Falling,
    Landed,
    Frozen,
}

impl FallerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallerState::Falling => "falling",
            FallerState::Landed => "landed",
            FallerState::Frozen => "frozen",
        }
    }
}

impl From<FallerState> for TokenState {
    fn from(state: FallerState) -> Self {
        match state {
            FallerState::Falling => TokenState::Falling,
            FallerState::Landed => TokenState::Landed,
            FallerState::Frozen => TokenState::Frozen,
        }
    }
}

/// Player intents forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the faller one column left
    MoveLeft,
    /// Move the faller one column right
    MoveRight,
    /// Cycle the faller's jewels (bottom goes to the top)
    Rotate,
    /// Start soft drop (released through `Session::set_soft_drop(false)`)
    SoftDrop,
    /// Start a fresh session with the same configuration
    Restart,
}
