//! Representation of spanned boxes with a heading about the vertical axis.

use crate::Point3D;
use nalgebra::{Point3, UnitQuaternion, UnitVector3, Vector3};

/// A box with arbitrary position, orientation and extents.
///
/// The width, depth and height axes are the x-, y- and z-axis rotated by the
/// orientation quaternion.
#[derive(Clone, Debug, PartialEq)]
pub struct Cuboid {
    center: Point3<f64>,
    orientation: UnitQuaternion<f64>,
    width: f64,
    depth: f64,
    height: f64,
}

impl Cuboid {
    /// Creates a new box with the given center position, orientation
    /// quaternion and full extents along each of its three axes.
    pub fn new(
        center: Point3<f64>,
        orientation: UnitQuaternion<f64>,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Self {
        Self {
            center,
            orientation,
            width,
            depth,
            height,
        }
    }

    /// Returns the center of the box.
    pub fn center(&self) -> &Point3<f64> {
        &self.center
    }

    /// Returns the orientation of the box.
    pub fn orientation(&self) -> &UnitQuaternion<f64> {
        &self.orientation
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the extents as `(width, depth, height)`.
    pub fn dimensions(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.depth, self.height)
    }

    /// Computes the unit vector representing the width axis of the box.
    pub fn compute_width_axis(&self) -> UnitVector3<f64> {
        UnitVector3::new_unchecked(self.orientation.transform_vector(&Vector3::x()))
    }

    /// Computes the unit vector representing the depth axis of the box.
    pub fn compute_depth_axis(&self) -> UnitVector3<f64> {
        UnitVector3::new_unchecked(self.orientation.transform_vector(&Vector3::y()))
    }

    /// Computes the unit vector representing the height axis of the box.
    pub fn compute_height_axis(&self) -> UnitVector3<f64> {
        UnitVector3::new_unchecked(self.orientation.transform_vector(&Vector3::z()))
    }

    /// Computes the eight corners of the box.
    pub fn compute_corners(&self) -> [Point3D; 8] {
        let half_width_vector = self.compute_width_axis().scale(0.5 * self.width);
        let half_depth_vector = self.compute_depth_axis().scale(0.5 * self.depth);
        let half_height_vector = self.compute_height_axis().scale(0.5 * self.height);
        [
            self.center - half_width_vector - half_depth_vector - half_height_vector,
            self.center - half_width_vector - half_depth_vector + half_height_vector,
            self.center - half_width_vector + half_depth_vector - half_height_vector,
            self.center - half_width_vector + half_depth_vector + half_height_vector,
            self.center + half_width_vector - half_depth_vector - half_height_vector,
            self.center + half_width_vector - half_depth_vector + half_height_vector,
            self.center + half_width_vector + half_depth_vector - half_height_vector,
            self.center + half_width_vector + half_depth_vector + half_height_vector,
        ]
        .map(Point3D::from)
    }
}
