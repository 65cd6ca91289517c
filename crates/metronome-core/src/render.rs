//! Frame painting against an abstract 2D surface.
//!
//! Each call repaints everything from the current particle state; nothing is
//! retained between frames.

use crate::boundary::Boundary;
use crate::constants::{
    BACKGROUND_COLOR, BOUNDARY_COLOR, BOUNDARY_LINE_WIDTH, CONNECTOR_COLOR, CONNECTOR_LINE_WIDTH,
    OUTLINE_COLOR, OUTLINE_LINE_WIDTH, PARTICLE_RADIUS,
};
use crate::particle::Particle;
use glam::DVec2;

/// Drawing primitives provided by the host (a canvas 2D context on the web).
pub trait Surface {
    /// Fill the whole surface with a solid color.
    fn clear(&mut self, color: &str);
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
}

/// Hue in degrees for particle `index` of `count`, spread over the color wheel.
#[inline]
pub fn particle_hue(index: usize, count: usize) -> f64 {
    360.0 * index as f64 / count.max(1) as f64
}

#[inline]
pub fn particle_color(index: usize, count: usize) -> String {
    format!("hsl({}, 100%, 50%)", particle_hue(index, count))
}

pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    boundary: &Boundary,
    particles: &[Particle],
    show_lines: bool,
) {
    surface.clear(BACKGROUND_COLOR);

    surface.set_line_width(BOUNDARY_LINE_WIDTH);
    surface.set_stroke_style(BOUNDARY_COLOR);
    surface.stroke_circle(boundary.center, boundary.radius);

    let count = particles.len();
    for p in particles {
        surface.set_fill_style(&particle_color(p.index, count));
        surface.fill_circle(p.position, PARTICLE_RADIUS);
        surface.set_line_width(OUTLINE_LINE_WIDTH);
        surface.set_stroke_style(OUTLINE_COLOR);
        surface.stroke_circle(p.position, PARTICLE_RADIUS);
    }

    if show_lines {
        surface.set_line_width(CONNECTOR_LINE_WIDTH);
        surface.set_stroke_style(CONNECTOR_COLOR);
        for pair in particles.windows(2) {
            surface.stroke_line(pair[0].position, pair[1].position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleSet;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(String),
        Fill(String),
        Stroke(String),
        Width(f64),
        FillCircle(DVec2, f64),
        StrokeCircle(DVec2, f64),
        Line(DVec2, DVec2),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Surface for Recorder {
        fn clear(&mut self, color: &str) {
            self.0.push(Op::Clear(color.to_string()));
        }
        fn set_fill_style(&mut self, style: &str) {
            self.0.push(Op::Fill(style.to_string()));
        }
        fn set_stroke_style(&mut self, style: &str) {
            self.0.push(Op::Stroke(style.to_string()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.0.push(Op::Width(width));
        }
        fn fill_circle(&mut self, center: DVec2, radius: f64) {
            self.0.push(Op::FillCircle(center, radius));
        }
        fn stroke_circle(&mut self, center: DVec2, radius: f64) {
            self.0.push(Op::StrokeCircle(center, radius));
        }
        fn stroke_line(&mut self, from: DVec2, to: DVec2) {
            self.0.push(Op::Line(from, to));
        }
    }

    fn spread_set(n: usize) -> (Boundary, ParticleSet) {
        let b = Boundary::from_square(500.0).unwrap();
        let mut set = ParticleSet::initialize(n, &b, 0.0);
        for (i, p) in set.as_mut_slice().iter_mut().enumerate() {
            p.position = DVec2::new(100.0 + i as f64 * 10.0, 200.0);
        }
        (b, set)
    }

    #[test]
    fn hue_spans_full_wheel_by_index() {
        assert_eq!(particle_hue(0, 4), 0.0);
        assert_eq!(particle_hue(1, 4), 90.0);
        assert_eq!(particle_hue(3, 4), 270.0);
        assert_eq!(particle_color(2, 4), "hsl(180, 100%, 50%)");
        assert_eq!(particle_hue(0, 0), 0.0);
    }

    #[test]
    fn frame_starts_with_background_then_boundary() {
        let (b, set) = spread_set(3);
        let mut rec = Recorder::default();
        render(&mut rec, &b, set.as_slice(), false);
        assert_eq!(rec.0[0], Op::Clear(BACKGROUND_COLOR.to_string()));
        assert_eq!(rec.0[1], Op::Width(BOUNDARY_LINE_WIDTH));
        assert_eq!(rec.0[2], Op::Stroke(BOUNDARY_COLOR.to_string()));
        assert_eq!(rec.0[3], Op::StrokeCircle(b.center, b.radius));
    }

    #[test]
    fn particles_drawn_in_index_order_with_outline() {
        let (b, set) = spread_set(3);
        let mut rec = Recorder::default();
        render(&mut rec, &b, set.as_slice(), false);
        let fills: Vec<&Op> = rec
            .0
            .iter()
            .filter(|op| matches!(op, Op::FillCircle(..)))
            .collect();
        assert_eq!(fills.len(), 3);
        for (i, op) in fills.iter().enumerate() {
            assert_eq!(
                **op,
                Op::FillCircle(set.as_slice()[i].position, PARTICLE_RADIUS)
            );
        }
        let outlines = rec
            .0
            .iter()
            .filter(|op| **op == Op::Stroke(OUTLINE_COLOR.to_string()))
            .count();
        assert_eq!(outlines, 3);
        assert!(!rec.0.iter().any(|op| matches!(op, Op::Line(..))));
    }

    #[test]
    fn lines_follow_index_order() {
        let (b, set) = spread_set(4);
        let mut rec = Recorder::default();
        render(&mut rec, &b, set.as_slice(), true);
        let lines: Vec<Op> = rec
            .0
            .iter()
            .filter(|op| matches!(op, Op::Line(..)))
            .cloned()
            .collect();
        let ps = set.as_slice();
        assert_eq!(
            lines,
            vec![
                Op::Line(ps[0].position, ps[1].position),
                Op::Line(ps[1].position, ps[2].position),
                Op::Line(ps[2].position, ps[3].position),
            ]
        );
    }

    #[test]
    fn identical_state_renders_identically() {
        let (b, set) = spread_set(5);
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        render(&mut first, &b, set.as_slice(), true);
        render(&mut second, &b, set.as_slice(), true);
        assert_eq!(first.0, second.0);
    }
}
