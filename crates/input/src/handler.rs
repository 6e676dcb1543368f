//! Press/release tracking for terminal environments.
//!
//! Soft drop is level-triggered: the game needs to know while the key is down,
//! not just that it was pressed. Terminals with the keyboard enhancement
//! protocol report releases; the rest only report presses (and auto-repeat
//! presses), so a hold is also dropped after a quiet timeout.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, is_soft_drop_key};
use crate::types::{GameAction, SOFT_DROP_RELEASE_MS};

/// Tracks held-key state and converts key events into game actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    /// Milliseconds since the last soft-drop press or repeat.
    since_soft_drop_ms: u32,
    release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            since_soft_drop_ms: 0,
            release_timeout_ms: SOFT_DROP_RELEASE_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Translate one key event. Returns the action to apply, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        if is_soft_drop_key(key.code) {
            return match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.since_soft_drop_ms = 0;
                    if self.soft_drop_held {
                        None
                    } else {
                        self.soft_drop_held = true;
                        Some(GameAction::SoftDropOn)
                    }
                }
                KeyEventKind::Release => self.release_soft_drop(),
            };
        }

        match key.kind {
            KeyEventKind::Press => {
                let action = handle_key_event(key);
                // A reset game is not soft dropping, so a still-held key must
                // be able to turn it back on.
                if action == Some(GameAction::Reset) {
                    self.reset();
                }
                action
            }
            // Edge-triggered: repeats and releases do nothing.
            KeyEventKind::Repeat | KeyEventKind::Release => None,
        }
    }

    /// Advance the release timeout. Returns `SoftDropOff` when a hold expires.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if !self.soft_drop_held {
            return None;
        }

        self.since_soft_drop_ms = self.since_soft_drop_ms.saturating_add(elapsed_ms);
        if self.since_soft_drop_ms > self.release_timeout_ms {
            return self.release_soft_drop();
        }
        None
    }

    fn release_soft_drop(&mut self) -> Option<GameAction> {
        if !self.soft_drop_held {
            return None;
        }
        self.soft_drop_held = false;
        self.since_soft_drop_ms = 0;
        Some(GameAction::SoftDropOff)
    }

    pub fn reset(&mut self) {
        self.soft_drop_held = false;
        self.since_soft_drop_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
