//! Run configuration read from the environment.
//!
//! - `BLOCKFALL_SEED`: piece queue seed (default: OS entropy)
//! - `BLOCKFALL_GRAVITY_MS`: gravity interval (default: 250)
//! - `BLOCKFALL_SOFT_DROP_MS`: gravity interval while soft drop is held (default: 100)
//! - `BLOCKFALL_LINE_REWARD`: score per cleared row (default: 100)
//! - `BLOCKFALL_TICK_MS`: frame interval of the terminal loop (default: 16)
//! - `BLOCKFALL_LOG_PATH`: write `log` output to this file (default: logging off)
//!
//! Unparsable or zero values fall back to the defaults.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::GameConfig;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub game: GameConfig,
    pub tick_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let positive = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(default)
        };

        let game = GameConfig {
            seed: lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok()),
            gravity_ms: positive("BLOCKFALL_GRAVITY_MS", defaults.game.gravity_ms),
            soft_drop_ms: positive("BLOCKFALL_SOFT_DROP_MS", defaults.game.soft_drop_ms),
            line_reward: positive("BLOCKFALL_LINE_REWARD", defaults.game.line_reward),
        };

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            game,
            tick_ms: positive("BLOCKFALL_TICK_MS", defaults.tick_ms),
            log_path,
        }
    }

    /// Route `log` output to the configured file, if any.
    ///
    /// The terminal UI owns stdout and stderr, so without a path nothing is
    /// logged. `RUST_LOG` controls the filter (default `info`).
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };

        let file = File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("install logger")?;
        Ok(())
    }
}
