//! Session module - drives one game from spawn to game over
//!
//! The session owns the field, at most one active faller, the fall timer and
//! the RNG. Player intents ([`Session::move_left`], [`Session::rotate`], ...)
//! apply immediately; [`Session::tick`] accumulates elapsed time and runs one
//! tick cycle ([`Session::step`]) per fall interval:
//!
//! 1. No faller, no pending match: end the game if a frozen jewel reached the
//!    hidden rows, otherwise spawn a faller in a random open column.
//! 2. No faller, match pending: clear, settle, re-scan. Chains resolve over
//!    the following ticks because spawning waits for a match-free field.
//! 3. Active faller: one gravity step, then the landing/un-landing/freeze
//!    checks. A faller that freezes is dropped and the field is scanned.

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::faller::Faller;
use crate::field::Field;
use crate::rng::SimpleRng;
use crate::snapshot::{FallerSnapshot, SessionSnapshot};
use crate::types::{FallerState, GameAction, JewelColor, FALLER_LEN};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    field: Field,
    faller: Option<Faller>,
    game_over: bool,
    soft_drop: bool,
    fall_timer_ms: u32,
    rng: SimpleRng,
}

impl Session {
    /// Create a session with an empty field and no faller.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            field: Field::new(config.rows, config.columns),
            faller: None,
            game_over: false,
            soft_drop: false,
            fall_timer_ms: 0,
            rng: SimpleRng::new(config.seed),
            config,
        })
    }

    /// Default palette and speeds with the given dimensions
    pub fn create(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        Self::new(SessionConfig::new(rows, columns))
    }

    /// Spawn the first faller right away instead of waiting a full interval.
    pub fn start(&mut self) {
        if self.faller.is_none() && !self.game_over {
            self.step();
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Direct field access for setting up positions in tests and tools
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn active_faller(&self) -> Option<&Faller> {
        self.faller.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// Current gravity interval
    pub fn fall_interval_ms(&self) -> u32 {
        if self.soft_drop {
            self.config.soft_drop_interval_ms
        } else {
            self.config.fall_interval_ms
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.rows = self.field.rows();
        out.columns = self.field.columns();
        out.cells.clear();
        out.cells.extend_from_slice(self.field.cells());
        out.faller = self.faller.as_ref().map(FallerSnapshot::from);
        out.game_over = self.game_over;
        out.soft_drop = self.soft_drop;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the fall timer. Runs one tick cycle and returns true once the
    /// accumulated time exceeds the current interval.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= self.fall_interval_ms() {
            return false;
        }

        self.fall_timer_ms = 0;
        self.step();
        true
    }

    /// Run one tick cycle immediately.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        if self.faller.is_some() {
            self.advance_faller();
        } else if self.field.has_match() {
            self.resolve_matches();
        } else if self.field.is_game_over_condition() {
            info!("frozen jewel reached the hidden rows, game over");
            self.game_over = true;
        } else {
            self.spawn_random();
        }
    }

    fn advance_faller(&mut self) {
        let Some(mut faller) = self.faller.take() else {
            return;
        };

        self.field.tick_gravity_once();
        faller.follow_gravity(&self.field);

        match faller.state() {
            FallerState::Falling => faller.check_landed(&mut self.field),
            FallerState::Landed => {
                faller.check_unlanded(&mut self.field);
                if faller.freeze(&mut self.field) {
                    debug!(column = faller.column(), row = faller.row(), "faller frozen");
                    if self.field.scan_and_mark_matches() {
                        debug!("match pending");
                    }
                    return;
                }
            }
            FallerState::Frozen => return,
        }

        self.faller = Some(faller);
    }

    fn resolve_matches(&mut self) {
        let cleared = self.field.clear_matched_cells();
        self.field.settle_all_gravity();
        let chained = self.field.scan_and_mark_matches();
        debug!(cleared, chained, "matches cleared");
    }

    fn spawn_random(&mut self) {
        let open = self.field.open_columns().count();
        if open == 0 {
            info!("no open column to spawn into, game over");
            self.game_over = true;
            return;
        }

        let pick = self.rng.next_range(open as u32) as usize;
        let Some(column) = self.field.open_columns().nth(pick) else {
            return;
        };

        let mut colors = [JewelColor::Red; FALLER_LEN];
        for color in &mut colors {
            if let Some(c) = self.rng.choose(&self.config.palette) {
                *color = c;
            }
        }

        self.spawn_faller_at(column, colors);
    }

    /// Spawn a faller with the given colors (top to bottom) in `column`.
    ///
    /// Sets game over and returns false when the spawn cell is occupied. Does
    /// nothing while another faller is active or after game over.
    pub fn spawn_faller_at(&mut self, column: usize, colors: [JewelColor; FALLER_LEN]) -> bool {
        if self.faller.is_some() || self.game_over {
            return false;
        }

        match Faller::spawn(&mut self.field, column, colors) {
            Some(faller) => {
                debug!(column, colors = ?colors, "faller spawned");
                self.faller = Some(faller);
                true
            }
            None => {
                info!(column, "spawn blocked, game over");
                self.game_over = true;
                false
            }
        }
    }

    fn with_faller(&mut self, f: impl FnOnce(&mut Faller, &mut Field) -> bool) -> bool {
        if self.game_over {
            return false;
        }
        let Some(faller) = self.faller.as_mut() else {
            return false;
        };
        f(faller, &mut self.field)
    }

    /// Move the faller one column left, then re-check support.
    pub fn move_left(&mut self) -> bool {
        self.with_faller(|faller, field| {
            let moved = faller.move_left(field);
            faller.check_landed(field);
            faller.check_unlanded(field);
            moved
        })
    }

    /// Move the faller one column right, then re-check support.
    pub fn move_right(&mut self) -> bool {
        self.with_faller(|faller, field| {
            let moved = faller.move_right(field);
            faller.check_landed(field);
            faller.check_unlanded(field);
            moved
        })
    }

    pub fn rotate(&mut self) -> bool {
        self.with_faller(|faller, field| {
            faller.rotate(field);
            faller.state() != FallerState::Frozen
        })
    }

    /// Switch between the normal and the soft drop fall interval.
    pub fn set_soft_drop(&mut self, on: bool) {
        self.soft_drop = on;
    }

    /// Fresh field with the same configuration; the RNG keeps its sequence.
    pub fn restart(&mut self) {
        self.field = Field::new(self.config.rows, self.config.columns);
        self.faller = None;
        self.game_over = false;
        self.soft_drop = false;
        self.fall_timer_ms = 0;
        info!(seed = self.rng.state(), "session restarted");
        self.start();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                if self.game_over {
                    return false;
                }
                self.set_soft_drop(true);
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}
