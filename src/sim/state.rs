//! Session state and core simulation types
//!
//! A session owns everything that changes during a game: the live pokables,
//! the spawn timers, the stats and the RNG. Hosts drive it through the
//! `on_*` entry points, once per frame and once per input event.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{TapOutcome, resolve_tap};
use super::pokable::{Pokable, PokableState};
use super::spawn::SpawnScheduler;
use crate::audio::{AudioCue, CueSink};
use crate::error::Result;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Field shown, waiting for the first tap
    Intro,
    /// Active gameplay
    Run,
    /// Frozen, no time passes
    Pause,
    /// End sequence before handing over to results
    Over,
}

/// Which rules end the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Timed: the first expired pokable ends the game
    Play,
    /// Untimed: only an explicit stop ends the game
    Practice,
    /// Unconfigured: ends as soon as it runs
    None,
}

/// Counters shown on the HUD and results screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Seconds spent in `Run`
    pub elapsed_time: f32,
    pub hit_count: u32,
    pub miss_count: u32,
    pub expired_count: u32,
}

impl SessionStats {
    /// Hits over total taps, `None` before the first tap
    pub fn accuracy(&self) -> Option<f32> {
        let taps = self.hit_count + self.miss_count;
        (taps > 0).then(|| self.hit_count as f32 / taps as f32)
    }
}

/// Handed to the results display once a session is over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionEnd {
    pub mode: GameMode,
    pub stats: SessionStats,
}

/// One game from intro to results
#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    rng: Pcg32,
    tuning: Tuning,
    mode: GameMode,
    phase: GamePhase,
    stats: SessionStats,
    /// Live pokables in insertion order
    pokables: Vec<Pokable>,
    scheduler: SpawnScheduler,
    game_over_elapsed: f32,
    tap_to_end_armed: bool,
    end: Option<SessionEnd>,
}

impl Session {
    /// Create a session with the given seed. Fails if the tuning is unsatisfiable.
    pub fn new(mode: GameMode, tuning: Tuning, seed: u64) -> Result<Self> {
        tuning.validate()?;

        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            mode,
            phase: GamePhase::Intro,
            stats: SessionStats::default(),
            pokables: Vec::new(),
            scheduler: SpawnScheduler::new(),
            game_over_elapsed: 0.0,
            tap_to_end_armed: false,
            end: None,
        };

        // The field is never empty at start
        session
            .scheduler
            .force_spawn(&mut session.pokables, &mut session.rng, &session.tuning);

        log::info!("Session created: mode {:?}, seed {}", mode, seed);
        Ok(session)
    }

    /// Advance the session by `dt` seconds
    pub fn on_tick(&mut self, dt: f32) {
        if self.end.is_some() {
            return;
        }
        let dt = dt.max(0.0);

        match self.phase {
            GamePhase::Intro | GamePhase::Pause => {}
            GamePhase::Run => self.run_tick(dt),
            GamePhase::Over => self.over_tick(dt),
        }
    }

    fn run_tick(&mut self, dt: f32) {
        self.stats.elapsed_time += dt;

        for pokable in &mut self.pokables {
            pokable.update(dt);
        }
        self.reap();
        self.check_end_condition();

        self.scheduler
            .step(dt, &mut self.pokables, &mut self.rng, &self.tuning);
    }

    /// Drop finished pokables, counting the ones that expired
    fn reap(&mut self) {
        let mut expired = 0;
        self.pokables.retain(|p| match p.state() {
            PokableState::Expired => {
                expired += 1;
                false
            }
            PokableState::Destruct => false,
            _ => true,
        });
        self.stats.expired_count += expired;
    }

    fn check_end_condition(&mut self) {
        let over = match self.mode {
            GameMode::Play => self.stats.expired_count > 0,
            GameMode::Practice => false,
            GameMode::None => true,
        };
        if over {
            self.enter_over();
        }
    }

    fn over_tick(&mut self, dt: f32) {
        self.game_over_elapsed += dt;

        if !self.tap_to_end_armed && self.game_over_elapsed >= self.tuning.tap_to_end_delay {
            self.tap_to_end_armed = true;
            log::debug!("Tap to continue armed");
        }
        if self.game_over_elapsed >= self.tuning.game_end_max_wait {
            self.finish();
        }
    }

    fn enter_over(&mut self) {
        self.phase = GamePhase::Over;
        self.game_over_elapsed = 0.0;
        self.tap_to_end_armed = false;
        log::info!(
            "Game over after {:.2}s: {} hits, {} misses, {} expired",
            self.stats.elapsed_time,
            self.stats.hit_count,
            self.stats.miss_count,
            self.stats.expired_count
        );
    }

    fn finish(&mut self) {
        if self.end.is_none() {
            self.end = Some(SessionEnd {
                mode: self.mode,
                stats: self.stats,
            });
            log::info!("Session ended ({:?})", self.mode);
        }
    }

    /// Handle a tap at world coordinates. Returns the outcome when the tap was hit-tested.
    pub fn on_tap(&mut self, point: Vec2, cues: &mut impl CueSink) -> Option<TapOutcome> {
        if self.end.is_some() {
            return None;
        }

        match self.phase {
            GamePhase::Intro => {
                // The first tap only starts the game
                self.phase = GamePhase::Run;
                log::info!("Session started");
                None
            }
            GamePhase::Run => {
                let outcome = resolve_tap(&mut self.pokables, point, self.tuning.max_radius);
                match outcome {
                    TapOutcome::Hit { .. } => self.stats.hit_count += 1,
                    TapOutcome::Miss => self.stats.miss_count += 1,
                }
                cues.emit(outcome.cue());
                Some(outcome)
            }
            GamePhase::Pause => None,
            GamePhase::Over => {
                if self.tap_to_end_armed {
                    self.finish();
                }
                None
            }
        }
    }

    /// Pause button pressed
    pub fn on_pause_requested(&mut self, cues: &mut impl CueSink) -> bool {
        if self.phase != GamePhase::Run {
            return false;
        }
        cues.emit(AudioCue::UiAction);
        self.pause();
        true
    }

    /// Resume button pressed
    pub fn on_resume_requested(&mut self, cues: &mut impl CueSink) -> bool {
        if self.phase != GamePhase::Pause {
            return false;
        }
        cues.emit(AudioCue::UiAction);
        self.resume();
        true
    }

    /// Stop button pressed; ends the session whatever the mode
    pub fn on_stop_requested(&mut self, cues: &mut impl CueSink) -> bool {
        if !matches!(self.phase, GamePhase::Run | GamePhase::Pause) {
            return false;
        }
        cues.emit(AudioCue::UiAction);
        self.enter_over();
        true
    }

    /// App lost foreground focus
    pub fn on_focus_lost(&mut self) {
        if self.phase == GamePhase::Run {
            self.pause();
        }
    }

    /// App regained foreground focus
    pub fn on_focus_gained(&mut self) {
        if self.phase == GamePhase::Pause {
            self.resume();
        }
    }

    fn pause(&mut self) {
        self.phase = GamePhase::Pause;
        log::info!("Paused at {:.2}s", self.stats.elapsed_time);
    }

    fn resume(&mut self) {
        self.phase = GamePhase::Run;
        log::info!("Resumed");
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn pokables(&self) -> &[Pokable] {
        &self.pokables
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn game_over_elapsed(&self) -> f32 {
        self.game_over_elapsed
    }

    pub fn tap_to_end_armed(&self) -> bool {
        self.tap_to_end_armed
    }

    /// Set once the end sequence is done; the host then shows results
    pub fn end(&self) -> Option<&SessionEnd> {
        self.end.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }
}
