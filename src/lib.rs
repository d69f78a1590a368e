//! Interactive placement of oriented boxes.
//!
//! A box is spanned by four points placed one at a time: the first three span
//! the bottom face and the fourth sets how far the face is extruded. While
//! points are being placed, a [`SpanController`] previews the geometry
//! defined so far together with a live cursor, and once all four points are
//! in place it computes the box's center, extents and orientation.

pub mod config;
pub mod error;
pub mod gestures;
pub mod handoff;
pub mod replay;
pub mod span;

pub use config::SpanConfig;
pub use error::SpanError;
pub use gestures::{ClickOutcome, PointerId, SpanGestures};
pub use handoff::{BoxAnnotation, BoxCreator};
pub use span::{SpanController, SpanState};

pub use span_geometry as geometry;
