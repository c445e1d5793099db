//! Fixed-interval tick driver
//!
//! Every tick stands for exactly one nominal interval of simulated time.
//! Real elapsed time is only used to decide how many ticks are due.

use std::time::Duration;

use crate::consts::MAX_TICKS_PER_ADVANCE;

#[derive(Debug, Clone)]
pub struct SimulationClock {
    interval: Duration,
    running: bool,
    /// Real time not yet consumed by a tick
    accumulator: Duration,
    tick_count: u64,
}

impl SimulationClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            accumulator: Duration::ZERO,
            tick_count: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks fired since construction
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Idempotent
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulator = Duration::ZERO;
        }
    }

    /// Idempotent. Drops any partially accumulated time so no stale tick
    /// fires after a later restart.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Claim one tick. Returns the new tick number, or `None` when stopped.
    pub fn fire(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.tick_count += 1;
        Some(self.tick_count)
    }

    /// Feed real elapsed time; returns how many ticks are now due.
    ///
    /// Capped at [`MAX_TICKS_PER_ADVANCE`] so a long stall can't spiral.
    /// The caller must run each due tick through [`fire`](Self::fire),
    /// which keeps honouring a `stop()` issued between them.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_TICKS_PER_ADVANCE {
            self.accumulator -= self.interval;
            due += 1;
        }
        if due == MAX_TICKS_PER_ADVANCE && self.accumulator >= self.interval {
            log::debug!(
                "Clock fell behind by {:?}, dropping backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        due
    }
}
