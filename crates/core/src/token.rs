//! Token module - the value stored in every field cell
//!
//! A token is either empty or a jewel of one color. Jewels carry a state that
//! tracks whether they belong to the active faller, have settled, or are
//! marked for removal. Tokens are plain `Copy` values: moving a jewel means
//! writing it into a new cell and leaving [`Token::EMPTY`] behind.

use crate::types::{JewelColor, TokenState};

/// A single field cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Token {
    color: Option<JewelColor>,
    state: TokenState,
}

impl Token {
    /// The empty cell
    pub const EMPTY: Token = Token {
        color: None,
        state: TokenState::Frozen,
    };

    /// A settled jewel
    pub const fn new(color: JewelColor) -> Self {
        Self {
            color: Some(color),
            state: TokenState::Frozen,
        }
    }

    pub const fn with_state(color: JewelColor, state: TokenState) -> Self {
        Self {
            color: Some(color),
            state,
        }
    }

    pub fn color(&self) -> Option<JewelColor> {
        self.color
    }

    pub fn state(&self) -> TokenState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }

    /// True for a jewel in `state`; always false for the empty cell
    pub fn is_jewel_in(&self, state: TokenState) -> bool {
        self.color.is_some() && self.state == state
    }

    /// Update the state of a jewel. Empty cells stay inert.
    pub fn set_state(&mut self, state: TokenState) {
        if self.color.is_some() {
            self.state = state;
        }
    }
}

impl From<JewelColor> for Token {
    fn from(color: JewelColor) -> Self {
        Token::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_ignores_state_changes() {
        let mut token = Token::EMPTY;
        token.set_state(TokenState::Matched);
        assert_eq!(token, Token::EMPTY);
        assert!(!token.is_jewel_in(TokenState::Frozen));
    }

    #[test]
    fn jewel_starts_frozen() {
        let mut token = Token::new(JewelColor::Blue);
        assert_eq!(token.state(), TokenState::Frozen);
        assert!(token.is_jewel_in(TokenState::Frozen));

        token.set_state(TokenState::Matched);
        assert_eq!(token.color(), Some(JewelColor::Blue));
        assert!(token.is_jewel_in(TokenState::Matched));
    }
}
