//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Each tick runs,
//! in order: spawn timer, actor physics with boundary clamp, obstacle pass.
//! A lethal boundary or collision ends the tick on the spot.

use super::collision::{PassOutcome, update_obstacles};
use super::spawn::{UnitRandom, spawn_geometry};
use super::state::{Boundary, GameEvent, GamePhase, SimulationState};
use crate::tuning::Tuning;

/// What a tick did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Skipped,
    Continue,
    /// Run ended during this tick
    GameOver,
}

/// Advance the simulation by one nominal tick
pub fn tick(
    state: &mut SimulationState,
    tuning: &Tuning,
    rng: &mut impl UnitRandom,
    events: &mut Vec<GameEvent>,
) -> TickOutcome {
    if !state.running() {
        return TickOutcome::Skipped;
    }

    state.time_ticks += 1;

    // Spawn check
    if state.spawn.accumulate(tuning.tick_interval_ms) {
        if let Some(mut req) = spawn_geometry(state.area, tuning, rng) {
            // a shrunk play area must not place the new pair left of the newest one
            if let Some(last) = state.obstacles.last() {
                req.x = req.x.max(last.right());
            }
            let idx = state.push_obstacle(req);
            let pair = &state.obstacles[idx];
            log::debug!(
                "Spawned obstacle {} at x={:.1} gap=[{:.1}, {:.1}]",
                pair.id,
                pair.x,
                pair.gap_top,
                pair.gap_bottom
            );
            events.push(GameEvent::ObstacleSpawned {
                id: pair.id,
                top: pair.top_rect(),
                bottom: pair.bottom_rect(),
            });
        }
    }

    // Actor physics
    state.actor.integrate(tuning.gravity);
    let boundary = state.actor.clamp_to(state.area);
    events.push(GameEvent::ActorMoved {
        rect: state.actor.rect(),
    });
    log::trace!(
        "tick {} y={:.2} v={:.2}",
        state.time_ticks,
        state.actor.y,
        state.actor.velocity
    );

    if boundary == Boundary::Floor {
        end_run(state, events);
        return TickOutcome::GameOver;
    }

    // Obstacles
    if let PassOutcome::Collided(id) = update_obstacles(state, tuning, events) {
        log::debug!("Actor hit obstacle {id}");
        end_run(state, events);
        return TickOutcome::GameOver;
    }

    TickOutcome::Continue
}

/// Apply a jump. Ignored unless running.
pub fn jump(state: &mut SimulationState, tuning: &Tuning) -> bool {
    if !state.running() {
        return false;
    }
    state.actor.jump(tuning.jump_strength);
    true
}

/// Transition to `GameOver`. Re-entering is a no-op.
pub fn end_run(state: &mut SimulationState, events: &mut Vec<GameEvent>) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over: score {} after {} ticks",
        state.score,
        state.time_ticks
    );
    events.push(GameEvent::GameOver);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::ScriptedRandom;
    use crate::sim::state::PlayArea;

    fn running_state(tuning: &Tuning) -> SimulationState {
        let mut state = SimulationState::new(tuning);
        state.area = PlayArea::new(400.0, 600.0);
        state.reset_for_run(tuning);
        state
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let tuning = Tuning::default();
        let mut state = SimulationState::new(&tuning);
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, &tuning, &mut rng, &mut events), TickOutcome::Skipped);
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_gravity_from_ceiling() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.actor.y = 0.0;
        state.actor.velocity = 0.0;
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut events = Vec::new();

        tick(&mut state, &tuning, &mut rng, &mut events);
        assert_eq!(state.actor.velocity, 0.25);
        assert_eq!(state.actor.y, 0.25);

        assert!(jump(&mut state, &tuning));
        assert_eq!(state.actor.velocity, -7.0);
    }

    #[test]
    fn test_jump_ignored_when_not_running() {
        let tuning = Tuning::default();
        let mut state = SimulationState::new(&tuning);
        assert!(!jump(&mut state, &tuning));
        assert_eq!(state.actor.velocity, 0.0);
    }

    #[test]
    fn test_spawn_on_tick_94() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut events = Vec::new();

        for _ in 0..93 {
            // hold the actor mid-air so the floor never ends the run
            state.actor.y = 250.0;
            state.actor.velocity = 0.0;
            tick(&mut state, &tuning, &mut rng, &mut events);
        }
        assert!(state.obstacles.is_empty());

        state.actor.y = 250.0;
        state.actor.velocity = 0.0;
        tick(&mut state, &tuning, &mut rng, &mut events);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn.time_since_last_spawn_ms(), 0.0);
        // spawned at 448 then scrolled once in the same tick
        assert_eq!(state.obstacles[0].x, 445.75);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::ObstacleSpawned { .. }))
        );
    }

    #[test]
    fn test_spawn_never_lands_left_of_newest() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        // left over from a wider layout, still off the right edge
        state.push_obstacle(crate::sim::spawn::SpawnRequest {
            x: 900.0,
            width: 120.0,
            height: 600.0,
            gap_top: 200.0,
            gap_bottom: 340.0,
        });
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut events = Vec::new();

        for _ in 0..94 {
            state.actor.y = 250.0;
            state.actor.velocity = 0.0;
            tick(&mut state, &tuning, &mut rng, &mut events);
        }
        assert_eq!(state.obstacles.len(), 2);
        let (older, newer) = (&state.obstacles[0], &state.obstacles[1]);
        assert!(newer.x > older.x);
        assert!((newer.x - older.right()).abs() < 1e-3);
    }

    #[test]
    fn test_floor_ends_run_once() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut events = Vec::new();
        state.actor.y = 575.0;
        state.actor.velocity = 3.0;

        assert_eq!(tick(&mut state, &tuning, &mut rng, &mut events), TickOutcome::GameOver);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.actor.y, 576.0);

        let frozen_y = state.actor.y;
        assert_eq!(tick(&mut state, &tuning, &mut rng, &mut events), TickOutcome::Skipped);
        assert!(!end_run(&mut state, &mut events));
        assert_eq!(state.actor.y, frozen_y);
        let overs = events.iter().filter(|e| **e == GameEvent::GameOver).count();
        assert_eq!(overs, 1);
    }

    #[test]
    fn test_floor_skips_obstacle_pass() {
        let tuning = Tuning::default();
        let mut state = running_state(&tuning);
        state.push_obstacle(crate::sim::spawn::SpawnRequest {
            x: 300.0,
            width: 48.0,
            height: 600.0,
            gap_top: 200.0,
            gap_bottom: 340.0,
        });
        state.actor.y = 576.0;
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut events = Vec::new();

        tick(&mut state, &tuning, &mut rng, &mut events);
        assert_eq!(state.obstacles[0].x, 300.0);
    }
}
