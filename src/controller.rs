//! Lifecycle state machine and host-facing commands
//!
//! `Idle --start--> Running --floor/collision--> GameOver --start--> Running`
//!
//! Commands that don't apply to the current phase are silently ignored.
//! A start issued before the play area is known is parked and replayed
//! once by the first usable `on_resize`.
//!
//! A resize is honoured in every phase, `GameOver` included: the actor's
//! column follows the new width and an `ActorMoved` goes out, while the
//! frozen vertical state and obstacles stay as they were.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clock::SimulationClock;
use crate::observer::GameObserver;
use crate::sim::{self, GameEvent, GamePhase, PlayArea, SimulationState, TickOutcome, UnitRandom};
use crate::tuning::Tuning;

pub struct GameController<O: GameObserver, R: UnitRandom = Pcg32> {
    state: SimulationState,
    tuning: Tuning,
    clock: SimulationClock,
    rng: R,
    observer: O,
    actor_measured: bool,
    pending_start: bool,
    /// Scratch buffer, drained into the observer after every command
    events: Vec<GameEvent>,
}

impl<O: GameObserver> GameController<O, Pcg32> {
    /// Controller with a PCG stream seeded from `tuning.seed`
    pub fn new(tuning: Tuning, observer: O) -> Self {
        let rng = Pcg32::seed_from_u64(tuning.seed);
        Self::with_rng(tuning, observer, rng)
    }
}

impl<O: GameObserver, R: UnitRandom> GameController<O, R> {
    pub fn with_rng(tuning: Tuning, observer: O, rng: R) -> Self {
        Self {
            state: SimulationState::new(&tuning),
            clock: SimulationClock::new(tuning.tick_interval()),
            tuning,
            rng,
            observer,
            actor_measured: false,
            pending_start: false,
            events: Vec::with_capacity(16),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn is_start_pending(&self) -> bool {
        self.pending_start
    }

    /// Record the actor's rendered size. The first call counts, as long as
    /// it arrives before the first `start`; non-positive values fall back to
    /// the tuning defaults per axis. Until then `on_resize` lays the actor out
    /// at the default size.
    pub fn measure_actor(&mut self, width: f32, height: f32) {
        if self.actor_measured {
            log::warn!(
                "Actor size already fixed at {}x{}; ignoring {width}x{height}",
                self.state.actor.width,
                self.state.actor.height
            );
            return;
        }
        self.set_actor_size(width, height);
        self.actor_measured = true;
        log::debug!(
            "Actor measured at {}x{}",
            self.state.actor.width,
            self.state.actor.height
        );

        if self.state.phase == GamePhase::Idle && self.state.area.is_valid() {
            self.state.actor.center_in(self.state.area);
            self.events.push(GameEvent::ActorMoved {
                rect: self.state.actor.rect(),
            });
            self.flush();
        }
    }

    /// Host layout changed. Non-positive dimensions are ignored.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        let area = PlayArea::new(width, height);
        if !area.is_valid() {
            return;
        }

        self.state.area = area;
        if !self.actor_measured {
            self.set_actor_size(0.0, 0.0);
        }
        self.state.place_actor_column(&self.tuning);
        if self.state.phase == GamePhase::Idle && self.state.actor.y == 0.0 {
            self.state.actor.center_in(area);
        }
        self.events.push(GameEvent::ActorMoved {
            rect: self.state.actor.rect(),
        });
        self.flush();

        if self.pending_start {
            self.pending_start = false;
            log::info!("Play area is {width}x{height}; replaying deferred start");
            self.start();
        }
    }

    /// Begin a new run from `Idle` or `GameOver`.
    ///
    /// Deferred until the first valid `on_resize` if the play area is unknown.
    pub fn start(&mut self) {
        if self.state.running() {
            return;
        }
        if !self.state.area.is_valid() {
            if !self.pending_start {
                log::info!("Start requested before layout; deferring");
                self.pending_start = true;
            }
            return;
        }
        if !self.actor_measured {
            self.set_actor_size(0.0, 0.0);
            self.actor_measured = true;
        }

        for pair in &self.state.obstacles {
            self.events.push(GameEvent::ObstacleRemoved { id: pair.id });
        }
        self.state.reset_for_run(&self.tuning);
        self.clock.start();

        log::info!(
            "Game started on {}x{} play area",
            self.state.area.width,
            self.state.area.height
        );
        self.events.push(GameEvent::GameStarted);
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        self.events.push(GameEvent::ActorMoved {
            rect: self.state.actor.rect(),
        });
        self.flush();
    }

    /// Flap. Ignored unless running.
    pub fn jump(&mut self) {
        sim::jump(&mut self.state, &self.tuning);
    }

    /// One clock tick. A stopped clock makes this a no-op.
    pub fn tick(&mut self) -> TickOutcome {
        if self.clock.fire().is_none() {
            return TickOutcome::Skipped;
        }

        let outcome = sim::tick(&mut self.state, &self.tuning, &mut self.rng, &mut self.events);
        if outcome == TickOutcome::GameOver {
            self.clock.stop();
        }
        self.flush();
        outcome
    }

    /// Drive from real elapsed time; returns the number of ticks run.
    ///
    /// Stops early if a tick ends the run, so nothing queued fires afterwards.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.clock.advance(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            match self.tick() {
                TickOutcome::Skipped => break,
                TickOutcome::Continue => ran += 1,
                TickOutcome::GameOver => {
                    ran += 1;
                    break;
                }
            }
        }
        ran
    }

    fn set_actor_size(&mut self, width: f32, height: f32) {
        let actor = &mut self.state.actor;
        actor.width = if width > 0.0 {
            width
        } else {
            self.tuning.default_actor_width
        };
        actor.height = if height > 0.0 {
            height
        } else {
            self.tuning.default_actor_height
        };
    }

    fn flush(&mut self) {
        for event in self.events.drain(..) {
            self.observer.notify(&event);
        }
    }
}
