//! Tunables for a game session.

use crate::types::{GRAVITY_MS, LINE_CLEAR_REWARD, SOFT_DROP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Queue seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Milliseconds between gravity steps.
    pub gravity_ms: u32,
    /// Milliseconds between gravity steps while soft drop is held.
    pub soft_drop_ms: u32,
    /// Score per cleared row.
    pub line_reward: u32,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_ms: GRAVITY_MS,
            soft_drop_ms: SOFT_DROP_MS,
            line_reward: LINE_CLEAR_REWARD,
        }
    }
}
