//! Geometrical objects used while spanning an oriented box.

mod builder;
mod cuboid;
mod line;
mod point;
mod rect;
mod render;

pub use builder::CuboidBuilder;
pub use cuboid::Cuboid;
pub use line::Line3D;
pub use point::Point3D;
pub use rect::Rect3D;
pub use render::{Primitive, PrimitiveRecorder, PrimitiveRenderer};

use nalgebra::{Point3, Vector3};

/// Computes the arithmetic mean of the given points.
///
/// # Returns
/// `None` if there are no points.
pub fn compute_centroid<'a>(
    points: impl IntoIterator<Item = &'a Point3D>,
) -> Option<Point3<f64>> {
    let (sum, count) = points
        .into_iter()
        .fold((Vector3::<f64>::zeros(), 0_u32), |(sum, count), point| {
            (sum + point.to_vector(), count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(Point3::from(sum / f64::from(count)))
    }
}
