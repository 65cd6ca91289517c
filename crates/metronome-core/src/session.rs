//! Simulation session: owns the boundary, particle set and run state, and
//! drives one frame at a time through physics, audio and drawing.
//!
//! The host supplies collaborators through [`Host`]: live controls, a drawing
//! surface, a tone emitter, a progress indicator and a tick scheduler. Tests
//! drive [`Session::tick`] directly with chosen timestamps.

use crate::boundary::Boundary;
use crate::config::{Configuration, ControlSource};
use crate::particle::ParticleSet;
use crate::physics;
use crate::render::{render, Surface};
use crate::tone::ToneEmitter;

/// Host "next frame" primitive. Each request yields at most one later call
/// to [`Session::tick`].
pub trait TickScheduler {
    fn request_tick(&self);
}

/// One-way output for the loop progress, a fraction in `[0, 1)`.
pub trait ProgressDisplay {
    fn set_progress(&mut self, fraction: f64);
}

/// Collaborators a tick reads from and writes to.
pub struct Host<'a> {
    pub controls: &'a dyn ControlSource,
    pub surface: &'a mut dyn Surface,
    pub tone: &'a dyn ToneEmitter,
    pub progress: &'a mut dyn ProgressDisplay,
    pub scheduler: &'a dyn TickScheduler,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunState {
    Paused,
    Running { last_frame_ms: f64 },
}

/// What a completed tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub dt: f64,
    pub collisions: usize,
    pub progress: f64,
}

pub struct Session {
    boundary: Boundary,
    particles: ParticleSet,
    run_state: RunState,
    progress: f64,
    tick_pending: bool,
}

impl Session {
    /// New paused session with particles built from `config`.
    pub fn new(boundary: Boundary, config: &Configuration) -> Self {
        let config = config.normalized();
        log::info!(
            "[session] boundary center=({:.1},{:.1}) radius={:.1} particles={}",
            boundary.center.x,
            boundary.center.y,
            boundary.radius,
            config.particle_count
        );
        Self {
            boundary,
            particles: ParticleSet::initialize(
                config.particle_count,
                &boundary,
                config.pitch_offset_cents,
            ),
            run_state: RunState::Paused,
            progress: 0.0,
            tick_pending: false,
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running { .. })
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether a tick has been requested from the scheduler and not yet run.
    pub fn tick_pending(&self) -> bool {
        self.tick_pending
    }

    /// Paused -> Running. Returns false if already running.
    ///
    /// A tick still pending from before a pause is reused instead of
    /// requesting a second one, so only one tick is ever in flight.
    pub fn start(&mut self, now_ms: f64, scheduler: &dyn TickScheduler) -> bool {
        if self.is_running() {
            return false;
        }
        self.run_state = RunState::Running {
            last_frame_ms: now_ms,
        };
        if !self.tick_pending {
            self.tick_pending = true;
            scheduler.request_tick();
        }
        log::info!("[session] running");
        true
    }

    /// Running -> Paused. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.run_state = RunState::Paused;
        log::info!("[session] paused");
        true
    }

    /// Start when paused, pause when running. Returns the new state.
    pub fn toggle(&mut self, now_ms: f64, scheduler: &dyn TickScheduler) -> RunState {
        if self.is_running() {
            self.pause();
        } else {
            self.start(now_ms, scheduler);
        }
        self.run_state
    }

    /// Rebuild the particle set from `config` and zero progress. The run
    /// state is left as it is.
    pub fn reset(&mut self, config: &Configuration) {
        let config = config.normalized();
        self.particles = ParticleSet::initialize(
            config.particle_count,
            &self.boundary,
            config.pitch_offset_cents,
        );
        self.progress = 0.0;
        log::info!("[session] reset particles={}", config.particle_count);
    }

    /// Paint the current state without stepping.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, show_lines: bool) {
        render(surface, &self.boundary, self.particles.as_slice(), show_lines);
    }

    /// Run one frame at host time `now_ms` (milliseconds).
    ///
    /// Returns `None` without scheduling when paused. Otherwise polls the
    /// controls, steps physics by the scaled elapsed time, voices every wall
    /// hit, repaints, publishes progress and requests the next tick.
    pub fn tick(&mut self, now_ms: f64, host: &mut Host<'_>) -> Option<TickReport> {
        self.tick_pending = false;
        let last_frame_ms = match self.run_state {
            RunState::Running { last_frame_ms } => last_frame_ms,
            RunState::Paused => return None,
        };

        let config = host.controls.read();
        if config.particle_count != self.particles.len() {
            log::debug!(
                "[session] particle count changed {} -> {}",
                self.particles.len(),
                config.particle_count
            );
            self.reset(&config);
        }

        let elapsed_ms = (now_ms - last_frame_ms).max(0.0);
        let dt = elapsed_ms * config.speed_multiplier / 1000.0;
        self.run_state = RunState::Running {
            last_frame_ms: now_ms,
        };
        self.advance_progress(dt);

        let tone = host.tone;
        let collisions = physics::advance(
            self.particles.as_mut_slice(),
            dt,
            &self.boundary,
            config.pitch_mode,
            config.pitch_offset_cents,
            |c| {
                log::trace!("[session] hit particle={} freq={:.2}", c.index, c.frequency_hz);
                tone.play_note(c.frequency_hz, c.duration_sec)
            },
        );

        render(
            &mut *host.surface,
            &self.boundary,
            self.particles.as_slice(),
            config.show_lines,
        );
        host.progress.set_progress(self.progress);

        self.tick_pending = true;
        host.scheduler.request_tick();

        Some(TickReport {
            dt,
            collisions,
            progress: self.progress,
        })
    }

    fn advance_progress(&mut self, dt: f64) {
        let Some(loop_time) = self.particles.loop_time() else {
            return;
        };
        if dt.is_finite() && dt > 0.0 {
            self.progress = (self.progress + dt / loop_time).rem_euclid(1.0);
        }
    }
}
