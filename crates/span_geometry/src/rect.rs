//! Planar quadrilaterals spanned by three corners.

use crate::{Point3D, PrimitiveRenderer};
use nalgebra::Vector3;

/// A parallelogram spanned by three consecutive corners.
///
/// The fourth corner closes the parallelogram as `p4 = p1 + (p3 - p2)`, so
/// the four corners are always coplanar. When the angle at `p2` is a right
/// angle the quadrilateral is a rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect3D {
    corners: [Point3D; 4],
}

impl Rect3D {
    /// Creates the parallelogram with consecutive corners `p1`, `p2` and
    /// `p3`, computing the fourth corner.
    pub fn new(p1: Point3D, p2: Point3D, p3: Point3D) -> Self {
        let p4 = p1.translated(&(p3.to_vector() - p2.to_vector()));
        Self {
            corners: [p1, p2, p3, p4],
        }
    }

    /// Returns the four corners in winding order `[p1, p2, p3, p4]`.
    pub fn points(&self) -> &[Point3D; 4] {
        &self.corners
    }

    /// Creates the parallelogram obtained by displacing the three spanning
    /// corners of this one by the given vector.
    pub fn translated(&self, displacement: &Vector3<f64>) -> Self {
        let [p1, p2, p3, _] = &self.corners;
        Self::new(
            p1.translated(displacement),
            p2.translated(displacement),
            p3.translated(displacement),
        )
    }

    /// Emits the quadrilateral face to the given renderer.
    pub fn render(&self, renderer: &mut impl PrimitiveRenderer) {
        renderer.draw_quad(&self.corners);
    }
}
