//! Obstacle spawn timing and placement
//!
//! Timing runs on nominal tick time only; placement draws the gap centre
//! from an injected [`UnitRandom`] so tests can pin exact positions.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::PlayArea;
use crate::tuning::Tuning;

/// Source of uniform values in `[0, 1)`
pub trait UnitRandom {
    fn next_unit(&mut self) -> f32;
}

impl UnitRandom for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of values, wrapping at the end
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

impl UnitRandom for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

/// Geometry of a pair about to be created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

/// Accumulates tick time and fires at most one spawn per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPolicy {
    interval_ms: f32,
    time_since_last_spawn_ms: f32,
}

impl SpawnPolicy {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            time_since_last_spawn_ms: 0.0,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.pipe_spawn_interval_ms)
    }

    pub fn time_since_last_spawn_ms(&self) -> f32 {
        self.time_since_last_spawn_ms
    }

    pub fn reset(&mut self) {
        self.time_since_last_spawn_ms = 0.0;
    }

    /// Add one tick's worth of time. Returns true when a spawn is due;
    /// overshoot is discarded, not carried into the next interval.
    pub fn accumulate(&mut self, tick_ms: f32) -> bool {
        self.time_since_last_spawn_ms += tick_ms;
        if self.time_since_last_spawn_ms >= self.interval_ms {
            self.time_since_last_spawn_ms = 0.0;
            return true;
        }
        false
    }
}

/// Place a new pair just off the right edge with a randomised gap.
///
/// Returns `None` for a degenerate play area.
pub fn spawn_geometry(
    area: PlayArea,
    tuning: &Tuning,
    rng: &mut impl UnitRandom,
) -> Option<SpawnRequest> {
    if !area.is_valid() {
        return None;
    }

    let width = tuning
        .pipe_min_width
        .max(area.width * tuning.pipe_width_fraction);
    let height = area.height;

    let min_center = area.height * tuning.gap_center_min_fraction;
    let max_center = area.height * tuning.gap_center_max_fraction;
    let gap_center = rng.next_unit() * (max_center - min_center) + min_center;
    let half_gap = tuning.gap_size / 2.0;

    Some(SpawnRequest {
        x: area.width + width,
        width,
        height,
        gap_top: gap_center - half_gap,
        gap_bottom: gap_center + half_gap,
    })
}
