// Shared simulation/audio/visual tuning constants used by the core and the web frontend.

// Motion
pub const BASE_SPEED: f64 = 500.0; // px/s of the fastest particle
pub const MAX_BOUNCES_PER_STEP: usize = 8; // wall hits resolved for one particle in one step

// Pitch
pub const BASE_FREQUENCY_HZ: f64 = 110.0; // A2, pitch of particle 0
pub const CENTS_PER_OCTAVE: f64 = 1200.0;
pub const NOTE_DURATION_SEC: f64 = 0.1;
pub const TONE_GAIN: f32 = 0.1; // single fixed output gain stage

// Defaults for the live controls
pub const DEFAULT_PARTICLE_COUNT: usize = 64;
pub const DEFAULT_PITCH_OFFSET_CENTS: f64 = 50.0;
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

// Drawing
pub const DEFAULT_SURFACE_SIZE: f64 = 500.0; // used when the container reports no width
pub const PARTICLE_RADIUS: f64 = 10.0;
pub const BOUNDARY_LINE_WIDTH: f64 = 10.0;
pub const OUTLINE_LINE_WIDTH: f64 = 1.0;
pub const CONNECTOR_LINE_WIDTH: f64 = 1.0;

// Palette
pub const BACKGROUND_COLOR: &str = "white";
pub const BOUNDARY_COLOR: &str = "#000000";
pub const OUTLINE_COLOR: &str = "#003300";
pub const CONNECTOR_COLOR: &str = "#000000";
