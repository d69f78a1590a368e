//! Line segments.

use crate::{Point3D, PrimitiveRenderer};

/// A line segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line3D {
    start: Point3D,
    end: Point3D,
}

impl Line3D {
    /// Creates a new line segment from `start` to `end`.
    pub fn new(start: Point3D, end: Point3D) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Point3D {
        &self.start
    }

    pub fn end(&self) -> &Point3D {
        &self.end
    }

    /// Computes the length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Emits the segment to the given renderer.
    pub fn render(&self, renderer: &mut impl PrimitiveRenderer) {
        renderer.draw_line(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Primitive, PrimitiveRecorder};
    use approx::assert_abs_diff_eq;

    #[test]
    fn line_keeps_endpoint_order() {
        let start = Point3D::new(0.0, 1.0, 2.0);
        let end = Point3D::new(3.0, 4.0, 5.0);
        let line = Line3D::new(start, end);
        assert_eq!(line.start(), &start);
        assert_eq!(line.end(), &end);
    }

    #[test]
    fn degenerate_line_has_zero_length() {
        let point = Point3D::new(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(Line3D::new(point, point).length(), 0.0);
    }

    #[test]
    fn rendering_line_emits_single_line_primitive() {
        let mut recorder = PrimitiveRecorder::new();
        let line = Line3D::new(Point3D::origin(), Point3D::new(1.0, 0.0, 0.0));
        line.render(&mut recorder);
        assert_eq!(recorder.primitives(), &[Primitive::Line(line)]);
    }
}
