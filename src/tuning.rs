//! Data-driven game balance
//!
//! Every constant the simulation reads lives in [`Tuning`]. Defaults match
//! [`crate::consts`]; hosts may override any subset from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub tick_interval_ms: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub actor_x_fraction: f32,
    pub default_actor_width: f32,
    pub default_actor_height: f32,
    pub pipe_speed: f32,
    pub pipe_spawn_interval_ms: f32,
    pub gap_size: f32,
    pub gap_center_min_fraction: f32,
    pub gap_center_max_fraction: f32,
    pub pipe_min_width: f32,
    pub pipe_width_fraction: f32,
    pub pipe_removal_margin: f32,
    /// Seed for the gap placement RNG
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            actor_x_fraction: ACTOR_X_FRACTION,
            default_actor_width: DEFAULT_ACTOR_WIDTH,
            default_actor_height: DEFAULT_ACTOR_HEIGHT,
            pipe_speed: PIPE_SPEED,
            pipe_spawn_interval_ms: PIPE_SPAWN_INTERVAL_MS,
            gap_size: GAP_SIZE,
            gap_center_min_fraction: GAP_CENTER_MIN_FRACTION,
            gap_center_max_fraction: GAP_CENTER_MAX_FRACTION,
            pipe_min_width: PIPE_MIN_WIDTH,
            pipe_width_fraction: PIPE_WIDTH_FRACTION,
            pipe_removal_margin: PIPE_REMOVAL_MARGIN,
            seed: 0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse tuning from JSON, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning (seed {})", tuning.seed);
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Reject values that leave the clock or spawner ill-defined.
    ///
    /// Odd-but-finite physics constants are the host's business.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.tick_interval_ms > 0.0) {
            return Err(TuningError::Invalid {
                field: "tick_interval_ms",
                reason: "must be positive",
            });
        }
        if !(self.pipe_spawn_interval_ms > 0.0) {
            return Err(TuningError::Invalid {
                field: "pipe_spawn_interval_ms",
                reason: "must be positive",
            });
        }
        if !(self.gap_size > 0.0) {
            return Err(TuningError::Invalid {
                field: "gap_size",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Nominal tick interval as a `Duration`
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_micros((self.tick_interval_ms * 1000.0).round() as u64)
    }
}
