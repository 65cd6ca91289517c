//! Kinematic step and circular-wall collision resolution.
//!
//! Particles never interact, so each one is stepped on its own, in index
//! order. A wall hit reflects the heading specularly about the normal at the
//! exit point and carries the overshoot past the wall back into the circle.

use crate::boundary::Boundary;
use crate::config::PitchMode;
use crate::constants::{MAX_BOUNCES_PER_STEP, NOTE_DURATION_SEC};
use crate::particle::Particle;
use crate::tone::step_frequency_hz;
use glam::DVec2;
use std::f64::consts::{PI, TAU};

// Relative slack below which a resolved particle counts as on the wall.
const WALL_EPSILON: f64 = 1e-9;

/// A wall hit, reported to the caller so it can be voiced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    pub index: usize,
    pub frequency_hz: f64,
    pub duration_sec: f64,
}

/// Heading after bouncing off a wall whose normal points at `normal_angle`.
///
/// `2 * normal - theta` mirrors the heading about the normal line; the extra
/// half turn sends it back inward. Result is wrapped into `[0, TAU)`.
#[inline]
pub fn reflect_heading(theta: f64, normal_angle: f64) -> f64 {
    (2.0 * normal_angle - theta + PI).rem_euclid(TAU)
}

#[inline]
fn unit(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

#[inline]
fn collision_frequency(p: &Particle, mode: PitchMode, pitch_offset_cents: f64) -> f64 {
    match mode {
        PitchMode::ByIndex => step_frequency_hz(p.index as f64, pitch_offset_cents),
        PitchMode::Fixed => p.pitch_hz,
    }
}

/// Advance every particle by `dt` seconds, resolving wall hits.
///
/// `on_collision` fires once per hit, in particle order. A `dt` that is zero,
/// negative or not finite leaves the particles untouched. Returns the number
/// of hits.
pub fn advance<F>(
    particles: &mut [Particle],
    dt: f64,
    boundary: &Boundary,
    pitch_mode: PitchMode,
    pitch_offset_cents: f64,
    mut on_collision: F,
) -> usize
where
    F: FnMut(&Collision),
{
    if !dt.is_finite() || dt <= 0.0 {
        return 0;
    }
    let mut hits = 0;
    for p in particles.iter_mut() {
        p.position += p.velocity() * dt;
        hits += resolve_wall(p, boundary, |p| {
            on_collision(&Collision {
                index: p.index,
                frequency_hz: collision_frequency(p, pitch_mode, pitch_offset_cents),
                duration_sec: NOTE_DURATION_SEC,
            })
        });
    }
    hits
}

// Bounce `p` back inside `boundary`. A particle exactly on the wall counts as
// a hit. Long steps can cross the circle again after one reflection, so
// bouncing repeats (up to MAX_BOUNCES_PER_STEP) and the result is finally
// snapped onto the circle if still outside.
fn resolve_wall<F>(p: &mut Particle, boundary: &Boundary, mut on_hit: F) -> usize
where
    F: FnMut(&Particle),
{
    let r = boundary.radius;
    let mut d = boundary.distance_from_center(p.position);
    if d < r {
        return 0;
    }
    let mut hits = 0;
    loop {
        let normal = boundary.normal_angle(p.position);
        let overshoot = d - r;
        p.heading = reflect_heading(p.heading, normal);
        p.position = boundary.point_at(normal) + unit(p.heading) * overshoot;
        hits += 1;
        on_hit(&*p);
        d = boundary.distance_from_center(p.position);
        if d <= r * (1.0 + WALL_EPSILON) || hits >= MAX_BOUNCES_PER_STEP {
            break;
        }
    }
    if d > r {
        p.position = boundary.center + (p.position - boundary.center) * (r / d);
    }
    hits
}
