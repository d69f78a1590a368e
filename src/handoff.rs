//! Handing finished boxes to whatever creates the persisted annotation.

use anyhow::bail;
use nalgebra::{Point3, Quaternion, UnitQuaternion};
use serde::{Deserialize, Serialize};
use span_geometry::Cuboid;

/// Plain description of a finished box, as received by a [`BoxCreator`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxAnnotation {
    pub center: [f64; 3],
    /// Extents as `[width, depth, height]`.
    pub dimensions: [f64; 3],
    /// Orientation quaternion as `[i, j, k, w]`.
    pub rotation: [f64; 4],
    /// Category assigned by the labelling step. Spanning leaves this unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Something that materializes finished boxes.
pub trait BoxCreator {
    fn create_box(&mut self, annotation: BoxAnnotation) -> anyhow::Result<()>;
}

impl BoxAnnotation {
    /// Returns the annotation with the given label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Reconstructs the box described by the annotation.
    ///
    /// # Errors
    /// If any extent is negative or the rotation is not a unit quaternion.
    pub fn to_cuboid(&self) -> anyhow::Result<Cuboid> {
        let [width, depth, height] = self.dimensions;
        if width < 0.0 || depth < 0.0 || height < 0.0 {
            bail!("Negative box dimensions in annotation: {:?}", self.dimensions);
        }

        let [i, j, k, w] = self.rotation;
        let quaternion = Quaternion::new(w, i, j, k);
        if (quaternion.norm() - 1.0).abs() > 1e-6 {
            bail!("Box rotation is not a unit quaternion: {:?}", self.rotation);
        }

        Ok(Cuboid::new(
            Point3::from(self.center),
            UnitQuaternion::new_normalize(quaternion),
            width,
            depth,
            height,
        ))
    }
}

impl From<&Cuboid> for BoxAnnotation {
    fn from(cuboid: &Cuboid) -> Self {
        let rotation = cuboid.orientation().coords;
        Self {
            center: cuboid.center().coords.into(),
            dimensions: cuboid.dimensions().into(),
            rotation: [rotation.x, rotation.y, rotation.z, rotation.w],
            label: None,
        }
    }
}

impl BoxCreator for Vec<BoxAnnotation> {
    fn create_box(&mut self, annotation: BoxAnnotation) -> anyhow::Result<()> {
        self.push(annotation);
        Ok(())
    }
}
