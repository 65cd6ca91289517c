// Host-side sanity checks for tuning constants and their relationships.

use metronome_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(BASE_SPEED > 0.0);
    assert!(BASE_FREQUENCY_HZ > 20.0 && BASE_FREQUENCY_HZ < 20_000.0);
    assert!(NOTE_DURATION_SEC > 0.0 && NOTE_DURATION_SEC < 1.0);
    assert!(TONE_GAIN > 0.0 && TONE_GAIN <= 1.0);
    assert!(MAX_BOUNCES_PER_STEP >= 1);
    assert!(DEFAULT_PARTICLE_COUNT >= 1);
    assert!(DEFAULT_SPEED_MULTIPLIER >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drawing_sizes_fit_the_default_surface() {
    assert!(PARTICLE_RADIUS > 0.0);
    assert!(BOUNDARY_LINE_WIDTH > OUTLINE_LINE_WIDTH);
    assert!(PARTICLE_RADIUS * 2.0 < DEFAULT_SURFACE_SIZE / 2.0);
}

#[test]
fn default_configuration_is_already_normalized() {
    let cfg = Configuration::default();
    assert_eq!(cfg.normalized(), cfg);
    assert_eq!(cfg.particle_count, DEFAULT_PARTICLE_COUNT);
    assert_eq!(cfg.pitch_offset_cents, DEFAULT_PITCH_OFFSET_CENTS);
}
