//! Attract-mode policy: decides when to jump without player input

use super::obstacle::ObstaclePair;
use super::state::SimulationState;

/// How far above the gap's lower edge the actor tries to stay
const GAP_MARGIN: f32 = 24.0;

/// The closest obstacle the actor has not cleared yet
pub fn next_obstacle(state: &SimulationState) -> Option<&ObstaclePair> {
    state
        .obstacles
        .iter()
        .filter(|p| p.right() >= state.actor.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
}

/// True if a jump now keeps the actor on course for the next gap
pub fn wants_jump(state: &SimulationState) -> bool {
    if !state.running() || state.actor.velocity < 0.0 {
        return false;
    }

    let target = match next_obstacle(state) {
        Some(pair) => pair.gap_bottom - GAP_MARGIN,
        None => state.area.height * 0.6,
    };

    state.actor.y + state.actor.height > target
}
