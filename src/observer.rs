//! Outbound notifications to the presentation layer
//!
//! The controller never touches rendering objects. It reports every visible
//! change through a [`GameObserver`]; all methods default to no-ops so a host
//! only implements what it draws.

use crate::sim::{GameEvent, Rect};

pub trait GameObserver {
    fn actor_moved(&mut self, _rect: Rect) {}
    fn obstacle_spawned(&mut self, _id: u32, _top: Rect, _bottom: Rect) {}
    fn obstacle_moved(&mut self, _id: u32, _top: Rect, _bottom: Rect) {}
    fn obstacle_removed(&mut self, _id: u32) {}
    fn score_changed(&mut self, _score: u32) {}
    fn game_over(&mut self) {}
    fn game_started(&mut self) {}

    /// Route one event to the matching callback
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::ActorMoved { rect } => self.actor_moved(rect),
            GameEvent::ObstacleSpawned { id, top, bottom } => {
                self.obstacle_spawned(id, top, bottom)
            }
            GameEvent::ObstacleMoved { id, top, bottom } => self.obstacle_moved(id, top, bottom),
            GameEvent::ObstacleRemoved { id } => self.obstacle_removed(id),
            GameEvent::ScoreChanged { score } => self.score_changed(score),
            GameEvent::GameOver => self.game_over(),
            GameEvent::GameStarted => self.game_started(),
        }
    }
}

/// Observer that ignores everything
impl GameObserver for () {}

/// Records every event in order (replays, tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|&e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ScoreBoard {
        score: u32,
        removed: Vec<u32>,
    }

    impl GameObserver for ScoreBoard {
        fn score_changed(&mut self, score: u32) {
            self.score = score;
        }

        fn obstacle_removed(&mut self, id: u32) {
            self.removed.push(id);
        }
    }

    #[test]
    fn test_notify_routes_to_callbacks() {
        let mut board = ScoreBoard::default();
        board.notify(&GameEvent::ScoreChanged { score: 4 });
        board.notify(&GameEvent::ObstacleRemoved { id: 9 });
        board.notify(&GameEvent::GameOver);
        assert_eq!(board.score, 4);
        assert_eq!(board.removed, vec![9]);
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.notify(&GameEvent::GameStarted);
        log.notify(&GameEvent::ScoreChanged { score: 1 });
        assert_eq!(
            log.events,
            vec![GameEvent::GameStarted, GameEvent::ScoreChanged { score: 1 }]
        );
        assert_eq!(log.count(|e| *e == GameEvent::GameStarted), 1);
    }
}
