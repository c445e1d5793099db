//! Flappy Sim headless runner
//!
//! Plays one autopilot session on a fixed play area and logs the outcome.
//! Set `FLAPPY_TUNING` to a JSON object to override tuning values.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use flappy_sim::sim::{Rect, TickOutcome, autopilot};
    use flappy_sim::{GameController, GameObserver, Tuning};

    const PLAY_WIDTH: f32 = 400.0;
    const PLAY_HEIGHT: f32 = 600.0;
    /// Five minutes of nominal ticks
    const MAX_TICKS: u32 = 60 * 60 * 5;

    /// Counts what a renderer would have drawn
    #[derive(Default)]
    struct RunStats {
        spawned: u32,
        removed: u32,
        score: u32,
    }

    impl GameObserver for RunStats {
        fn obstacle_spawned(&mut self, _id: u32, _top: Rect, _bottom: Rect) {
            self.spawned += 1;
        }

        fn obstacle_removed(&mut self, _id: u32) {
            self.removed += 1;
        }

        fn score_changed(&mut self, score: u32) {
            self.score = score;
        }

        fn game_over(&mut self) {
            log::info!("Crashed with {} points", self.score);
        }
    }

    pub fn run() {
        let tuning = std::env::var("FLAPPY_TUNING")
            .map(|json| Tuning::from_json_or_default(&json))
            .unwrap_or_default();

        let mut game = GameController::new(tuning, RunStats::default());
        // Start before layout like a real host would; the resize replays it
        game.start();
        game.on_resize(PLAY_WIDTH, PLAY_HEIGHT);

        let mut ticks = 0;
        while ticks < MAX_TICKS {
            if autopilot::wants_jump(game.state()) {
                game.jump();
            }
            ticks += 1;
            if game.tick() == TickOutcome::GameOver {
                break;
            }
        }

        let stats = game.observer();
        println!(
            "Score {} after {} ticks ({} obstacles spawned, {} cleared off-screen)",
            game.state().score,
            ticks,
            stats.spawned,
            stats.removed
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Sim (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; hosts embed GameController directly
}
