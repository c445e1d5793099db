//! Obstacle scrolling, pass-through scoring and collision detection
//!
//! Obstacles are walked newest-first so expired ones can be removed in place.
//! Per obstacle the order is fixed: move, score, collide, expire. A collision
//! ends the pass immediately; a point scored on the same obstacle stands.

use super::state::{GameEvent, SimulationState};
use crate::tuning::Tuning;

/// Result of one obstacle pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Clear,
    /// Actor overlapped the obstacle with this ID
    Collided(u32),
}

/// Advance every obstacle by one tick against the actor's current position
pub fn update_obstacles(
    state: &mut SimulationState,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> PassOutcome {
    let actor_x = state.actor.x;
    let actor_rect = state.actor.rect();

    for i in (0..state.obstacles.len()).rev() {
        let pair = &mut state.obstacles[i];

        pair.advance(tuning.pipe_speed);
        events.push(GameEvent::ObstacleMoved {
            id: pair.id,
            top: pair.top_rect(),
            bottom: pair.bottom_rect(),
        });

        if pair.check_pass(actor_x) {
            state.score += 1;
            events.push(GameEvent::ScoreChanged { score: state.score });
        }

        if pair.hits(&actor_rect) {
            return PassOutcome::Collided(pair.id);
        }

        if pair.is_expired(tuning.pipe_removal_margin) {
            let id = pair.id;
            state.obstacles.remove(i);
            log::debug!("Obstacle {id} left the play area");
            events.push(GameEvent::ObstacleRemoved { id });
        }
    }

    PassOutcome::Clear
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::SpawnRequest;
    use crate::sim::state::PlayArea;

    fn running_state() -> (SimulationState, Tuning) {
        let tuning = Tuning::default();
        let mut state = SimulationState::new(&tuning);
        state.area = PlayArea::new(400.0, 600.0);
        state.reset_for_run(&tuning);
        state.actor.x = 120.0;
        state.actor.y = 250.0;
        (state, tuning)
    }

    fn pair_at(x: f32, gap_top: f32, gap_bottom: f32) -> SpawnRequest {
        SpawnRequest {
            x,
            width: 48.0,
            height: 600.0,
            gap_top,
            gap_bottom,
        }
    }

    #[test]
    fn test_scroll_and_event() {
        let (mut state, tuning) = running_state();
        state.push_obstacle(pair_at(300.0, 200.0, 340.0));
        let mut events = Vec::new();

        assert_eq!(update_obstacles(&mut state, &tuning, &mut events), PassOutcome::Clear);
        assert_eq!(state.obstacles[0].x, 297.75);
        assert!(matches!(events[0], GameEvent::ObstacleMoved { .. }));
    }

    #[test]
    fn test_score_once_per_obstacle() {
        let (mut state, tuning) = running_state();
        // right edge at 121, one step puts it at 118.75 < 120
        state.push_obstacle(pair_at(73.0, 200.0, 340.0));
        let mut events = Vec::new();

        update_obstacles(&mut state, &tuning, &mut events);
        assert_eq!(state.score, 1);
        assert!(events.contains(&GameEvent::ScoreChanged { score: 1 }));

        events.clear();
        update_obstacles(&mut state, &tuning, &mut events);
        assert_eq!(state.score, 1);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::ScoreChanged { .. })));
    }

    #[test]
    fn test_collision_stops_pass() {
        let (mut state, tuning) = running_state();
        // oldest: far right, would move if processed
        state.push_obstacle(pair_at(380.0, 200.0, 340.0));
        // newest: overlapping the actor column with a gap the actor misses
        state.push_obstacle(pair_at(110.0, 50.0, 190.0));
        let mut events = Vec::new();

        let id = state.obstacles[1].id;
        assert_eq!(
            update_obstacles(&mut state, &tuning, &mut events),
            PassOutcome::Collided(id)
        );
        assert_eq!(state.obstacles[0].x, 380.0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_collision_preempts_older_score() {
        let (mut state, tuning) = running_state();
        // oldest: about to clear the actor column
        state.push_obstacle(pair_at(73.0, 200.0, 340.0));
        // newest: actor at y=250 sits below this gap
        state.push_obstacle(pair_at(130.0, 50.0, 190.0));
        let mut events = Vec::new();

        let outcome = update_obstacles(&mut state, &tuning, &mut events);
        assert!(matches!(outcome, PassOutcome::Collided(_)));
        assert_eq!(state.score, 0);
        assert!(!state.obstacles[0].passed);
    }

    #[test]
    fn test_expired_obstacle_removed() {
        let (mut state, tuning) = running_state();
        state.push_obstacle(pair_at(-56.0, 200.0, 340.0));
        state.push_obstacle(pair_at(300.0, 200.0, 340.0));
        state.obstacles[0].passed = true;
        let gone = state.obstacles[0].id;
        let kept = state.obstacles[1].id;
        let mut events = Vec::new();

        // -56 - 2.25 + 48 = -10.25 < -10
        update_obstacles(&mut state, &tuning, &mut events);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].id, kept);
        assert!(events.contains(&GameEvent::ObstacleRemoved { id: gone }));
    }
}
