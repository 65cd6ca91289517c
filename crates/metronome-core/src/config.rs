//! Live user configuration and the read interface the frame loop polls.
//!
//! Controls are pulled once per tick rather than pushed on change, so the
//! simulation's inputs for a frame are a single `Configuration` value.

use crate::constants::{
    DEFAULT_PARTICLE_COUNT, DEFAULT_PITCH_OFFSET_CENTS, DEFAULT_SPEED_MULTIPLIER,
};
use crate::error::{MetronomeError, Result};

/// How a colliding particle's pitch is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PitchMode {
    /// Pitch from the particle index and the cents offset at collision time.
    #[default]
    ByIndex,
    /// Pitch precomputed per particle when the set is initialized.
    Fixed,
}

/// Values of the user controls.
///
/// - `particle_count`: number of particles; anything below 1 is read as 1
/// - `pitch_offset_cents`: spacing between neighbouring particles' pitches
/// - `speed_multiplier`: simulation time per real time, 1.0 is real time
/// - `show_lines`: draw the index-ordered polyline through the particles
/// - `pitch_mode`: see [`PitchMode`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    pub particle_count: usize,
    pub pitch_offset_cents: f64,
    pub speed_multiplier: f64,
    pub show_lines: bool,
    pub pitch_mode: PitchMode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            pitch_offset_cents: DEFAULT_PITCH_OFFSET_CENTS,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            show_lines: false,
            pitch_mode: PitchMode::ByIndex,
        }
    }
}

impl Configuration {
    /// Clamp values into the ranges the simulation can step with.
    pub fn normalized(self) -> Self {
        let speed_multiplier = if self.speed_multiplier.is_finite() {
            self.speed_multiplier.max(0.0)
        } else {
            0.0
        };
        let pitch_offset_cents = if self.pitch_offset_cents.is_finite() {
            self.pitch_offset_cents
        } else {
            0.0
        };
        Self {
            particle_count: self.particle_count.max(1),
            pitch_offset_cents,
            speed_multiplier,
            ..self
        }
    }

    pub fn parse_particle_count(raw: &str) -> Result<usize> {
        raw.trim()
            .parse::<usize>()
            .map_err(|_| invalid("particle count", raw))
    }

    pub fn parse_pitch_offset_cents(raw: &str) -> Result<f64> {
        parse_finite(raw, "pitch offset")
    }

    pub fn parse_speed_multiplier(raw: &str) -> Result<f64> {
        parse_finite(raw, "speed multiplier")
    }
}

fn parse_finite(raw: &str, field: &'static str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(field, raw)),
    }
}

fn invalid(field: &'static str, raw: &str) -> MetronomeError {
    MetronomeError::InvalidControlValue {
        field,
        value: raw.to_string(),
    }
}

/// Source of the current configuration, polled once per tick and on reset.
pub trait ControlSource {
    fn read(&self) -> Configuration;
}

impl ControlSource for Configuration {
    fn read(&self) -> Configuration {
        self.normalized()
    }
}

impl ControlSource for std::cell::Cell<Configuration> {
    fn read(&self) -> Configuration {
        self.get().normalized()
    }
}
