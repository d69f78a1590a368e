//! Construction of boxes from four spanning points.

use crate::{Cuboid, Line3D, Point3D, PrimitiveRenderer, Rect3D, compute_centroid};
use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Builds an oriented box from four points placed in sequence.
///
/// The first three points span the bottom face (see [`Rect3D`]), and the
/// displacement from the third to the fourth point extrudes the bottom face
/// into the top face.
///
/// The extents and heading are heuristics that assume the bottom face is
/// roughly horizontal:
///
/// - The width is the longer and the depth the shorter of the first two edges
///   (`p1 -> p2` and `p2 -> p3`), regardless of which edge comes first. The
///   height is the length of the extrusion.
/// - The orientation is a pure rotation about the z-axis by the heading of the
///   longer of the first two edges in the xy-plane. Tilt about the x- and
///   y-axis is never represented.
///
/// Nothing is cached: the faces and edges are recomputed on every query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CuboidBuilder {
    points: [Point3D; 4],
}

impl CuboidBuilder {
    pub fn new(p1: Point3D, p2: Point3D, p3: Point3D, p4: Point3D) -> Self {
        Self {
            points: [p1, p2, p3, p4],
        }
    }

    /// Returns the four spanning points.
    pub fn points(&self) -> &[Point3D; 4] {
        &self.points
    }

    /// Computes the extrusion vector `p4 - p3`.
    pub fn compute_extrusion(&self) -> Vector3<f64> {
        let [_, _, p3, p4] = &self.points;
        p4.to_vector() - p3.to_vector()
    }

    /// Computes the face spanned by the first three points.
    pub fn compute_bottom_face(&self) -> Rect3D {
        let [p1, p2, p3, _] = self.points;
        Rect3D::new(p1, p2, p3)
    }

    /// Computes the bottom face displaced by the extrusion vector.
    pub fn compute_top_face(&self) -> Rect3D {
        self.compute_bottom_face().translated(&self.compute_extrusion())
    }

    /// Computes the eight corners of the box, bottom face first.
    pub fn compute_corners(&self) -> [Point3D; 8] {
        let bottom = self.compute_bottom_face();
        let top = self.compute_top_face();
        let [b1, b2, b3, b4] = *bottom.points();
        let [t1, t2, t3, t4] = *top.points();
        [b1, b2, b3, b4, t1, t2, t3, t4]
    }

    /// Computes the four edges joining corresponding corners of the bottom
    /// and top face.
    pub fn compute_connecting_edges(&self) -> [Line3D; 4] {
        let bottom = self.compute_bottom_face();
        let top = self.compute_top_face();
        let (bottom_corners, top_corners) = (bottom.points(), top.points());
        std::array::from_fn(|idx| Line3D::new(bottom_corners[idx], top_corners[idx]))
    }

    /// Computes the center of the box as the mean of its eight corners.
    pub fn compute_center(&self) -> Point3<f64> {
        // The corner array is never empty, so the fallback is unreachable
        compute_centroid(&self.compute_corners()).unwrap_or_else(Point3::origin)
    }

    /// Computes the extents as `(width, depth, height)`.
    ///
    /// Width and depth are the longer and shorter of the edges `p1 -> p2` and
    /// `p2 -> p3`, independent of which one is geometrically first.
    pub fn compute_dimensions(&self) -> Vector3<f64> {
        let (length_12, length_23) = self.compute_base_edge_lengths();
        let [_, _, p3, p4] = &self.points;
        Vector3::new(
            length_12.max(length_23),
            length_12.min(length_23),
            p3.distance_to(p4),
        )
    }

    /// Computes the angle in radians, measured in the xy-plane from the
    /// x-axis, of the longer of the edges `p1 -> p2` and `p2 -> p3`. The
    /// first edge wins ties. The z-components are ignored.
    pub fn compute_heading(&self) -> f64 {
        let edge = self.compute_heading_edge();
        edge.y.atan2(edge.x)
    }

    /// Returns the edge whose direction sets the heading: `p1 -> p2` if it
    /// is at least as long as `p2 -> p3`, otherwise `p2 -> p3`.
    pub fn compute_heading_edge(&self) -> Vector3<f64> {
        let [p1, p2, p3, _] = &self.points;
        let (length_12, length_23) = self.compute_base_edge_lengths();
        if length_12 >= length_23 {
            p2.to_vector() - p1.to_vector()
        } else {
            p3.to_vector() - p2.to_vector()
        }
    }

    /// Computes the length of the heading edge projected onto the xy-plane.
    /// The heading is undefined when this is zero.
    pub fn compute_horizontal_heading_length(&self) -> f64 {
        self.compute_heading_edge().xy().norm()
    }

    /// Computes the orientation of the box as a rotation by the heading
    /// about the z-axis.
    pub fn compute_rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.compute_heading())
    }

    /// Computes the lengths of the edges `p1 -> p2` and `p2 -> p3`.
    pub fn compute_base_edge_lengths(&self) -> (f64, f64) {
        let [p1, p2, p3, _] = &self.points;
        (p1.distance_to(p2), p2.distance_to(p3))
    }

    /// Computes the center, extents and orientation of the box.
    pub fn build(&self) -> Cuboid {
        let dimensions = self.compute_dimensions();
        Cuboid::new(
            self.compute_center(),
            self.compute_rotation(),
            dimensions.x,
            dimensions.y,
            dimensions.z,
        )
    }

    /// Emits the bottom face, the top face and the four connecting edges to
    /// the given renderer.
    pub fn render(&self, renderer: &mut impl PrimitiveRenderer) {
        self.compute_bottom_face().render(renderer);
        self.compute_top_face().render(renderer);
        for edge in self.compute_connecting_edges() {
            edge.render(renderer);
        }
    }
}
