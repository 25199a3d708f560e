//! Soft drop hold tracking for terminal environments.
//!
//! Soft drop lasts while the key is held. Terminals without key release
//! events only report presses (and auto-repeat presses), so the hold is
//! released once no press has arrived for the grace period.

use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::{GameAction, SOFT_DROP_GRACE_MS};

/// Tracks whether soft drop is currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    since_soft_drop_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            since_soft_drop_ms: 0,
            key_release_timeout_ms: SOFT_DROP_GRACE_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Map a press (or auto-repeat) to an action.
    ///
    /// Repeated soft drop presses only refresh the hold and yield nothing.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        let action = handle_key_event(key)?;
        if action != GameAction::SoftDrop {
            return Some(action);
        }

        self.since_soft_drop_ms = 0;
        if self.soft_drop_held {
            None
        } else {
            self.soft_drop_held = true;
            Some(GameAction::SoftDrop)
        }
    }

    /// Returns true when this release ends a held soft drop.
    pub fn handle_key_release(&mut self, key: KeyEvent) -> bool {
        if handle_key_event(key) == Some(GameAction::SoftDrop) && self.soft_drop_held {
            self.release();
            return true;
        }
        false
    }

    /// Advance the grace timer. Returns true when the hold timed out.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if !self.soft_drop_held {
            return false;
        }
        self.since_soft_drop_ms = self.since_soft_drop_ms.saturating_add(elapsed_ms);
        if self.since_soft_drop_ms > self.key_release_timeout_ms {
            self.release();
            return true;
        }
        false
    }

    fn release(&mut self) {
        self.soft_drop_held = false;
        self.since_soft_drop_ms = 0;
    }

    pub fn reset(&mut self) {
        self.release();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
