//! Platform-independent core of the bouncing-ball metronome.
//!
//! Particles start at the center of a circle and fan out at evenly spaced
//! headings with speeds that ramp by index. Every wall hit reflects the
//! particle and emits a tone whose pitch rises with the index, so the set
//! plays a slowly phasing polyrhythm. Frontends implement the collaborator
//! traits ([`Surface`], [`ToneEmitter`], [`ControlSource`], [`TickScheduler`],
//! [`ProgressDisplay`]) and feed timestamps into a [`Session`].

pub mod boundary;
pub mod config;
pub mod constants;
pub mod error;
pub mod particle;
pub mod physics;
pub mod render;
pub mod session;
pub mod tone;

pub use boundary::*;
pub use config::*;
pub use constants::*;
pub use error::{MetronomeError, Result};
pub use particle::*;
pub use physics::{advance, reflect_heading, Collision};
pub use render::{particle_color, particle_hue, render, Surface};
pub use session::*;
pub use tone::*;
