//! Points placed while spanning a box.

use crate::PrimitiveRenderer;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Point3, Vector2, Vector3};

/// An immutable point in 3D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3D {
    position: Point3<f64>,
}

impl Point3D {
    /// Creates a new point with the given coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    /// Creates a new point in the xy-plane.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Creates a point at the origin.
    pub fn origin() -> Self {
        Self {
            position: Point3::origin(),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Returns the position of the point.
    pub fn position(&self) -> &Point3<f64> {
        &self.position
    }

    /// Returns the position of the point as a displacement from the origin.
    pub fn to_vector(&self) -> Vector3<f64> {
        self.position.coords
    }

    /// Returns the point displaced by the given vector.
    pub fn translated(&self, displacement: &Vector3<f64>) -> Self {
        Self {
            position: self.position + displacement,
        }
    }

    /// Whether all coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|coord| coord.is_finite())
    }

    /// Computes the Euclidean distance to the given point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }

    /// Emits the point to the given renderer.
    pub fn render(&self, renderer: &mut impl PrimitiveRenderer) {
        renderer.draw_point(self);
    }
}

impl From<Point3<f64>> for Point3D {
    fn from(position: Point3<f64>) -> Self {
        Self { position }
    }
}

impl From<Vector3<f64>> for Point3D {
    fn from(vector: Vector3<f64>) -> Self {
        Self {
            position: Point3::from(vector),
        }
    }
}

impl From<Vector2<f64>> for Point3D {
    fn from(vector: Vector2<f64>) -> Self {
        Self::from_xy(vector.x, vector.y)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 2]> for Point3D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::from_xy(x, y)
    }
}

impl From<(f64, f64)> for Point3D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::from_xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3D> for Point3<f64> {
    fn from(point: Point3D) -> Self {
        point.position
    }
}

impl From<Point3D> for Vector3<f64> {
    fn from(point: Point3D) -> Self {
        point.to_vector()
    }
}

impl From<Point3D> for [f64; 3] {
    fn from(point: Point3D) -> Self {
        [point.x(), point.y(), point.z()]
    }
}

impl AbsDiffEq for Point3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
    }
}

impl RelativeEq for Point3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.position.relative_eq(&other.position, epsilon, max_relative)
    }
}
