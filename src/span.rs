//! State machine for spanning a box by placing points one at a time.

use crate::{
    BoxAnnotation, BoxCreator, SpanConfig,
    error::{self, SpanError},
};
use span_geometry::{Cuboid, CuboidBuilder, Line3D, Point3D, PrimitiveRenderer, Rect3D};

/// Progress of a span, carrying exactly the points placed so far.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpanState {
    Empty,
    HasOne([Point3D; 1]),
    HasTwo([Point3D; 2]),
    HasThree([Point3D; 3]),
    Complete([Point3D; 4]),
}

/// Accumulates the four points of a box span and previews the geometry they
/// define while the next point follows the cursor.
///
/// One controller covers a single gesture. Once complete it accepts no more
/// points, and a new gesture needs a new controller.
#[derive(Clone, Debug)]
pub struct SpanController {
    config: SpanConfig,
    state: SpanState,
    live_cursor: Point3D,
}

impl SpanState {
    /// Returns the name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::HasOne(_) => "HasOne",
            Self::HasTwo(_) => "HasTwo",
            Self::HasThree(_) => "HasThree",
            Self::Complete(_) => "Complete",
        }
    }

    /// Returns the points placed so far, in placement order.
    pub fn points(&self) -> &[Point3D] {
        match self {
            Self::Empty => &[],
            Self::HasOne(points) => points,
            Self::HasTwo(points) => points,
            Self::HasThree(points) => points,
            Self::Complete(points) => points,
        }
    }

    pub fn n_points(&self) -> usize {
        self.points().len()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the state obtained by placing the given point next.
    ///
    /// # Errors
    /// [`SpanError::OverfullSpan`] if the span is already complete.
    fn with_point(self, point: Point3D) -> error::Result<Self> {
        match self {
            Self::Empty => Ok(Self::HasOne([point])),
            Self::HasOne([p1]) => Ok(Self::HasTwo([p1, point])),
            Self::HasTwo([p1, p2]) => Ok(Self::HasThree([p1, p2, point])),
            Self::HasThree([p1, p2, p3]) => Ok(Self::Complete([p1, p2, p3, point])),
            Self::Complete(_) => Err(SpanError::OverfullSpan),
        }
    }
}

impl SpanController {
    /// Creates a controller for a new span using the given configuration.
    pub fn new(config: SpanConfig) -> Self {
        Self {
            config,
            state: SpanState::Empty,
            live_cursor: Point3D::origin(),
        }
    }

    pub fn config(&self) -> &SpanConfig {
        &self.config
    }

    /// Returns the current state of the span.
    pub fn state(&self) -> &SpanState {
        &self.state
    }

    /// Returns the points placed so far, in placement order.
    pub fn points(&self) -> &[Point3D] {
        self.state.points()
    }

    pub fn n_points(&self) -> usize {
        self.state.n_points()
    }

    /// Whether all four points have been placed.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Returns the provisional point following the cursor.
    pub fn live_cursor(&self) -> &Point3D {
        &self.live_cursor
    }

    /// Places the next point of the span. Placing the fourth point completes
    /// the span.
    ///
    /// # Errors
    /// [`SpanError::OverfullSpan`] if the span is already complete.
    pub fn register_point(&mut self, coords: impl Into<Point3D>) -> error::Result<()> {
        let point = coords.into();
        match self.state.with_point(point) {
            Ok(state) => {
                span_log::debug!(
                    "Registered span point ({}, {}, {}), span is now {}",
                    point.x(),
                    point.y(),
                    point.z(),
                    state.name()
                );
                self.state = state;
                Ok(())
            }
            Err(error) => {
                span_log::warn!("Rejected span point: {}", error);
                Err(error)
            }
        }
    }

    /// Moves the provisional point following the cursor. Has no visible
    /// effect once the span is complete.
    pub fn update_live_cursor(&mut self, coords: impl Into<Point3D>) {
        self.live_cursor = coords.into();
    }

    /// Emits the preview geometry for the current state to the given renderer:
    ///
    /// - `Empty`: nothing.
    /// - `HasOne`: the first point and a line from it to the cursor.
    /// - `HasTwo`: both points and the rectangle spanned by them and the
    ///   cursor.
    /// - `HasThree`: the three points.
    ///
    /// # Errors
    /// [`SpanError::InvalidRenderState`] if the span is complete, since the
    /// preview loop should have ended.
    pub fn render(&self, renderer: &mut impl PrimitiveRenderer) -> error::Result<()> {
        span_log::trace!("Rendering span preview in {} state", self.state.name());
        match &self.state {
            SpanState::Empty => {}
            SpanState::HasOne([p1]) => {
                p1.render(renderer);
                Line3D::new(*p1, self.live_cursor).render(renderer);
            }
            SpanState::HasTwo([p1, p2]) => {
                p1.render(renderer);
                p2.render(renderer);
                Rect3D::new(*p1, *p2, self.live_cursor).render(renderer);
            }
            SpanState::HasThree(points) => {
                for point in points {
                    point.render(renderer);
                }
            }
            SpanState::Complete(_) => {
                return Err(SpanError::InvalidRenderState {
                    state: self.state.name(),
                });
            }
        }
        Ok(())
    }

    /// Computes the box defined by the four placed points.
    ///
    /// # Errors
    /// - [`SpanError::PrematureFinalize`] if fewer than four points are
    ///   placed.
    /// - [`SpanError::NonFinitePoint`] if a point has a NaN or infinite
    ///   coordinate.
    /// - [`SpanError::UndefinedHeading`] if the edge selected for the heading
    ///   is shorter than the configured minimum in the xy-plane.
    /// - [`SpanError::FlatSpan`] if the box would have a depth or height
    ///   below the configured minimum.
    pub fn finalize(&self) -> error::Result<Cuboid> {
        let SpanState::Complete(points) = self.state else {
            return Err(SpanError::PrematureFinalize {
                n_points: self.n_points(),
            });
        };

        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(SpanError::NonFinitePoint { index });
        }

        let [p1, p2, p3, p4] = points;
        let builder = CuboidBuilder::new(p1, p2, p3, p4);
        let min_length = self.config.min_edge_length;

        let horizontal_length = builder.compute_horizontal_heading_length();
        if horizontal_length < min_length {
            return Err(SpanError::UndefinedHeading { horizontal_length });
        }

        let dimensions = builder.compute_dimensions();
        for (axis, length) in [("depth", dimensions.y), ("height", dimensions.z)] {
            if length < min_length {
                return Err(SpanError::FlatSpan { axis, length });
            }
        }

        let cuboid = builder.build();
        span_log::debug!(
            "Finalized span into box at {:?} with dimensions {:?}",
            cuboid.center(),
            cuboid.dimensions()
        );
        Ok(cuboid)
    }

    /// Finalizes the span and hands the resulting box to the given creator.
    pub fn finalize_into(&self, creator: &mut impl BoxCreator) -> anyhow::Result<()> {
        let cuboid = self.finalize()?;
        creator.create_box(BoxAnnotation::from(&cuboid))
    }
}

impl Default for SpanController {
    fn default() -> Self {
        Self::new(SpanConfig::default())
    }
}
