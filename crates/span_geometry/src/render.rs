//! Interface to whatever draws span geometry.

use crate::{Line3D, Point3D};

/// Something that can draw the primitives making up span geometry.
///
/// Every `draw_*` call corresponds to exactly one primitive, and the
/// arguments are snapshots that the renderer may copy but not rely on
/// beyond the call.
pub trait PrimitiveRenderer {
    /// Draws a single point.
    fn draw_point(&mut self, point: &Point3D);

    /// Draws a line segment.
    fn draw_line(&mut self, line: &Line3D);

    /// Draws a planar quadrilateral with the given corners in winding order.
    fn draw_quad(&mut self, corners: &[Point3D; 4]);
}

/// A primitive that was emitted to a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Point(Point3D),
    Line(Line3D),
    Quad([Point3D; 4]),
}

/// Renderer that records every emitted primitive in order.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveRecorder {
    primitives: Vec<Primitive>,
}

impl PrimitiveRecorder {
    /// Creates a recorder with no recorded primitives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded primitives in emission order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the number of recorded point primitives.
    pub fn n_points(&self) -> usize {
        self.count(|primitive| matches!(primitive, Primitive::Point(_)))
    }

    /// Returns the number of recorded line primitives.
    pub fn n_lines(&self) -> usize {
        self.count(|primitive| matches!(primitive, Primitive::Line(_)))
    }

    /// Returns the number of recorded quad primitives.
    pub fn n_quads(&self) -> usize {
        self.count(|primitive| matches!(primitive, Primitive::Quad(_)))
    }

    /// Removes and returns all recorded primitives.
    pub fn take_primitives(&mut self) -> Vec<Primitive> {
        std::mem::take(&mut self.primitives)
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    fn count(&self, predicate: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives
            .iter()
            .filter(|&primitive| predicate(primitive))
            .count()
    }
}

impl PrimitiveRenderer for PrimitiveRecorder {
    fn draw_point(&mut self, point: &Point3D) {
        self.primitives.push(Primitive::Point(*point));
    }

    fn draw_line(&mut self, line: &Line3D) {
        self.primitives.push(Primitive::Line(*line));
    }

    fn draw_quad(&mut self, corners: &[Point3D; 4]) {
        self.primitives.push(Primitive::Quad(*corners));
    }
}

impl<R: PrimitiveRenderer + ?Sized> PrimitiveRenderer for &mut R {
    fn draw_point(&mut self, point: &Point3D) {
        (**self).draw_point(point);
    }

    fn draw_line(&mut self, line: &Line3D) {
        (**self).draw_line(line);
    }

    fn draw_quad(&mut self, corners: &[Point3D; 4]) {
        (**self).draw_quad(corners);
    }
}
