//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`SimulationState`].

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::obstacle::ObstaclePair;
use super::spawn::{SpawnPolicy, SpawnRequest};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start
    #[default]
    Idle,
    /// Clock running, physics and input live
    Running,
    /// Run ended, state frozen until the next start
    GameOver,
}

/// Play area dimensions in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Outbound notifications produced by a tick or a lifecycle change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ActorMoved { rect: Rect },
    ObstacleSpawned { id: u32, top: Rect, bottom: Rect },
    ObstacleMoved { id: u32, top: Rect, bottom: Rect },
    ObstacleRemoved { id: u32 },
    ScoreChanged { score: u32 },
    GameOver,
    GameStarted,
}

/// Result of clamping the actor against the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Inside,
    /// Hit the top; position and velocity were zeroed
    Ceiling,
    /// Hit the bottom; lethal
    Floor,
}

/// The player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    /// Fixed horizontal position (fraction of play width)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl ActorState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            velocity: 0.0,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Vertical centre of the area, velocity zeroed
    pub fn center_in(&mut self, area: PlayArea) {
        self.y = area.height / 2.0 - self.height / 2.0;
        self.velocity = 0.0;
    }

    /// One tick of constant-acceleration motion
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Clamp to `[0, area.height - height]`
    pub fn clamp_to(&mut self, area: PlayArea) -> Boundary {
        let floor = area.height - self.height;
        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
            Boundary::Ceiling
        } else if self.y > floor {
            self.y = floor;
            Boundary::Floor
        } else {
            Boundary::Inside
        }
    }

    /// Overrides any accumulated velocity
    pub fn jump(&mut self, strength: f32) {
        self.velocity = strength;
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub phase: GamePhase,
    pub area: PlayArea,
    pub actor: ActorState,
    /// Active obstacles in spawn order (left to right on screen)
    pub obstacles: Vec<ObstaclePair>,
    pub score: u32,
    pub spawn: SpawnPolicy,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Next obstacle ID
    next_id: u32,
}

impl SimulationState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            area: PlayArea::default(),
            actor: ActorState::new(tuning.default_actor_width, tuning.default_actor_height),
            obstacles: Vec::new(),
            score: 0,
            spawn: SpawnPolicy::from_tuning(tuning),
            time_ticks: 0,
            next_id: 1,
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Recompute the actor's fixed column from the play width
    pub fn place_actor_column(&mut self, tuning: &Tuning) {
        self.actor.x = self.area.width * tuning.actor_x_fraction;
    }

    /// Clear the previous run and enter `Running`
    pub fn reset_for_run(&mut self, tuning: &Tuning) {
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.spawn.reset();
        self.place_actor_column(tuning);
        self.actor.center_in(self.area);
        self.phase = GamePhase::Running;
    }

    /// Append a new pair at the right; returns its index
    pub fn push_obstacle(&mut self, req: SpawnRequest) -> usize {
        let id = self.next_obstacle_id();
        self.obstacles.push(ObstaclePair::new(
            id,
            req.x,
            req.width,
            req.height,
            req.gap_top,
            req.gap_bottom,
        ));
        self.obstacles.len() - 1
    }
}
