use crate::error::{MetronomeError, Result};
use glam::DVec2;

/// Circular wall the particles are confined to. Fixed for a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub center: DVec2,
    pub radius: f64,
}

impl Boundary {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Inscribe the boundary in a square drawing surface of side `size`.
    pub fn from_square(size: f64) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(MetronomeError::InvalidSurfaceSize(size));
        }
        let half = size / 2.0;
        Ok(Self::new(DVec2::splat(half), half))
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    #[inline]
    pub fn distance_from_center(&self, p: DVec2) -> f64 {
        (p - self.center).length()
    }

    /// Angle from the center to `p`, the reflection axis for a wall hit at `p`.
    #[inline]
    pub fn normal_angle(&self, p: DVec2) -> f64 {
        let d = p - self.center;
        d.y.atan2(d.x)
    }

    /// Point on the circle at `angle`.
    #[inline]
    pub fn point_at(&self, angle: f64) -> DVec2 {
        self.center + DVec2::new(angle.cos(), angle.sin()) * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_square_inscribes_circle() {
        let b = Boundary::from_square(500.0).unwrap();
        assert_eq!(b.center, DVec2::new(250.0, 250.0));
        assert_eq!(b.radius, 250.0);
        assert_eq!(b.diameter(), 500.0);
    }

    #[test]
    fn from_square_rejects_degenerate_sizes() {
        assert_eq!(
            Boundary::from_square(0.0),
            Err(MetronomeError::InvalidSurfaceSize(0.0))
        );
        assert!(Boundary::from_square(-10.0).is_err());
        assert!(Boundary::from_square(f64::NAN).is_err());
        assert!(Boundary::from_square(f64::INFINITY).is_err());
    }

    #[test]
    fn point_at_lies_on_circle() {
        let b = Boundary::new(DVec2::new(10.0, -4.0), 3.0);
        for k in 0..16 {
            let angle = k as f64 * std::f64::consts::TAU / 16.0;
            let p = b.point_at(angle);
            assert!((b.distance_from_center(p) - 3.0).abs() < 1e-12);
            let back = b.normal_angle(p);
            assert!((back.cos() - angle.cos()).abs() < 1e-12);
            assert!((back.sin() - angle.sin()).abs() < 1e-12);
        }
    }
}
