use crate::boundary::Boundary;
use crate::constants::BASE_SPEED;
use crate::tone::step_frequency_hz;
use glam::DVec2;
use std::f64::consts::TAU;

/// One simulated ball.
///
/// `speed` is fixed at initialization; `heading` changes only on a wall hit.
/// `pitch_hz` is the pitch precomputed for [`crate::PitchMode::Fixed`].
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub position: DVec2,
    pub speed: f64,
    pub heading: f64,
    pub pitch_hz: f64,
}

impl Particle {
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.heading.cos(), self.heading.sin()) * self.speed
    }
}

/// Ordered particles; index order drives color, connector lines and pitch.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    loop_time: Option<f64>,
}

impl ParticleSet {
    /// Build `count` particles at the boundary center (at least one).
    ///
    /// Particle `i` moves at `BASE_SPEED * (i + 1) / count` along heading
    /// `TAU * i / count`, so speeds strictly increase with index and headings
    /// are evenly spread around the circle.
    pub fn initialize(count: usize, boundary: &Boundary, pitch_offset_cents: f64) -> Self {
        let count = count.max(1);
        let n = count as f64;
        let particles = (0..count)
            .map(|i| Particle {
                index: i,
                position: boundary.center,
                speed: BASE_SPEED * (i + 1) as f64 / n,
                heading: TAU * i as f64 / n,
                pitch_hz: step_frequency_hz(i as f64, pitch_offset_cents),
            })
            .collect::<Vec<_>>();
        let slowest = particles.iter().map(|p| p.speed).fold(f64::INFINITY, f64::min);
        let loop_time = (slowest.is_finite() && slowest > 0.0).then(|| boundary.diameter() / slowest);
        log::debug!(
            "[particles] initialized count={} loop_time={:?}",
            count,
            loop_time
        );
        Self {
            particles,
            loop_time,
        }
    }

    /// Seconds for the slowest particle to cross the diameter.
    #[inline]
    pub fn loop_time(&self) -> Option<f64> {
        self.loop_time
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn boundary() -> Boundary {
        Boundary::from_square(500.0).unwrap()
    }

    #[test]
    fn initialize_builds_requested_count_at_center() {
        let set = ParticleSet::initialize(7, &boundary(), 50.0);
        assert_eq!(set.len(), 7);
        for (i, p) in set.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.position, DVec2::new(250.0, 250.0));
        }
    }

    #[test]
    fn initialize_zero_yields_single_particle() {
        let set = ParticleSet::initialize(0, &boundary(), 0.0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].speed, BASE_SPEED);
        assert_eq!(set.loop_time(), Some(1.0));
    }

    #[test]
    fn speeds_strictly_increase_and_headings_are_evenly_spaced() {
        let n = 16;
        let set = ParticleSet::initialize(n, &boundary(), 50.0);
        let ps = set.as_slice();
        for w in ps.windows(2) {
            assert!(w[0].speed < w[1].speed);
            let gap = w[1].heading - w[0].heading;
            assert!((gap - TAU / n as f64).abs() < 1e-12);
        }
        assert_eq!(ps[n - 1].speed, BASE_SPEED);
    }

    #[test]
    fn four_particles_face_the_compass_points() {
        let set = ParticleSet::initialize(4, &boundary(), 0.0);
        let headings: Vec<f64> = set.iter().map(|p| p.heading).collect();
        let expected = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
        for (h, e) in headings.iter().zip(expected) {
            assert!((h - e).abs() < 1e-12);
        }
    }

    #[test]
    fn loop_time_uses_slowest_particle() {
        let set = ParticleSet::initialize(4, &boundary(), 0.0);
        // slowest = 500 / 4 = 125 px/s across a 500 px diameter
        assert_eq!(set.loop_time(), Some(4.0));
    }

    #[test]
    fn fixed_pitches_follow_index() {
        let set = ParticleSet::initialize(3, &boundary(), 1200.0);
        let pitches: Vec<f64> = set.iter().map(|p| p.pitch_hz).collect();
        assert!((pitches[0] - 110.0).abs() < 1e-9);
        assert!((pitches[1] - 220.0).abs() < 1e-9);
        assert!((pitches[2] - 440.0).abs() < 1e-9);
    }
}
