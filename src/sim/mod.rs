//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Nominal tick time only, never wall-clock time
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod obstacle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{PassOutcome, update_obstacles};
pub use geometry::{Rect, intersects};
pub use obstacle::ObstaclePair;
pub use spawn::{ScriptedRandom, SpawnPolicy, SpawnRequest, UnitRandom, spawn_geometry};
pub use state::{ActorState, Boundary, GameEvent, GamePhase, PlayArea, SimulationState};
pub use tick::{TickOutcome, end_run, jump, tick};
