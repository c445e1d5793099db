//! Flappy Sim - a side-scrolling flap-through-the-pipes arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `clock`: Fixed-interval tick driver
//! - `controller`: Lifecycle state machine and host-facing commands
//! - `observer`: Outbound render/lifecycle notifications
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input wiring and score display belong to the host. The core
//! only drives a [`GameObserver`] and never touches presentation objects.

pub mod clock;
pub mod controller;
pub mod observer;
pub mod sim;
pub mod tuning;

pub use clock::SimulationClock;
pub use controller::GameController;
pub use observer::{EventLog, GameObserver};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal tick interval in milliseconds (~60 Hz)
    pub const TICK_INTERVAL_MS: f32 = 16.0;
    /// Maximum ticks a single clock advance may fire
    pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

    /// Downward acceleration, units/tick²
    pub const GRAVITY: f32 = 0.25;
    /// Velocity set by a jump, units/tick (negative is up)
    pub const JUMP_STRENGTH: f32 = -7.0;

    /// Actor horizontal position as a fraction of play width
    pub const ACTOR_X_FRACTION: f32 = 0.3;
    /// Fallback actor size when the host can't measure it
    pub const DEFAULT_ACTOR_WIDTH: f32 = 34.0;
    pub const DEFAULT_ACTOR_HEIGHT: f32 = 24.0;

    /// Obstacle scroll speed, units/tick
    pub const PIPE_SPEED: f32 = 2.25;
    /// Time between obstacle spawns
    pub const PIPE_SPAWN_INTERVAL_MS: f32 = 1500.0;
    /// Vertical opening between top and bottom obstacle
    pub const GAP_SIZE: f32 = 140.0;
    /// Gap centre is drawn from [height * MIN, height * MAX]
    pub const GAP_CENTER_MIN_FRACTION: f32 = 0.18;
    pub const GAP_CENTER_MAX_FRACTION: f32 = 0.72;
    /// Obstacle width is max(MIN, width * FRACTION)
    pub const PIPE_MIN_WIDTH: f32 = 48.0;
    pub const PIPE_WIDTH_FRACTION: f32 = 0.12;
    /// Obstacles are dropped once their right edge is this far left of 0
    pub const PIPE_REMOVAL_MARGIN: f32 = 10.0;
}
