//! Concurrent span gestures from multiple pointers.

use crate::{BoxCreator, SpanConfig, SpanController, error::SpanError};
use anyhow::Context;
use span_geometry::{Point3D, PrimitiveRenderer};
use std::collections::BTreeMap;

/// Identifier of the pointer driving a gesture.
pub type PointerId = u32;

/// Owns one [`SpanController`] per active pointer gesture and routes input to
/// the gesture of the pointer it came from.
#[derive(Clone, Debug)]
pub struct SpanGestures {
    config: SpanConfig,
    active: BTreeMap<PointerId, SpanController>,
    n_finished: usize,
}

/// Result of a click on a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The gesture accepted the point and needs more.
    Advanced { n_points: usize },
    /// The gesture completed and its box was handed off.
    Finished,
}

impl SpanGestures {
    /// Creates a host with no active gestures. Every gesture started by the
    /// host uses the given configuration.
    pub fn new(config: SpanConfig) -> Self {
        Self {
            config,
            active: BTreeMap::new(),
            n_finished: 0,
        }
    }

    /// Returns the number of gestures in progress.
    pub fn n_active(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of gestures whose box was handed off.
    pub fn n_finished(&self) -> usize {
        self.n_finished
    }

    /// Returns the controller of the given pointer's gesture, if it has one.
    pub fn controller(&self, pointer: PointerId) -> Option<&SpanController> {
        self.active.get(&pointer)
    }

    /// Moves the live cursor of the given pointer's gesture. Does nothing if
    /// the pointer has no gesture in progress.
    pub fn pointer_moved(&mut self, pointer: PointerId, coords: impl Into<Point3D>) {
        if let Some(controller) = self.active.get_mut(&pointer) {
            controller.update_live_cursor(coords);
        }
    }

    /// Places a point in the given pointer's gesture, beginning a new gesture
    /// if the pointer has none. When the point completes the gesture, the
    /// gesture ends and its box is handed to `creator`.
    ///
    /// # Errors
    /// If the completed span cannot be finalized or the creator fails. The
    /// gesture is ended either way.
    pub fn pointer_clicked(
        &mut self,
        pointer: PointerId,
        coords: impl Into<Point3D>,
        creator: &mut impl BoxCreator,
    ) -> anyhow::Result<ClickOutcome> {
        let point = coords.into();

        let controller = self.active.entry(pointer).or_insert_with(|| {
            span_log::debug!("Beginning span gesture for pointer {}", pointer);
            SpanController::new(self.config.clone())
        });

        controller.register_point(point)?;
        controller.update_live_cursor(point);

        if !controller.is_complete() {
            return Ok(ClickOutcome::Advanced {
                n_points: controller.n_points(),
            });
        }

        if let Some(controller) = self.active.remove(&pointer) {
            controller
                .finalize_into(creator)
                .with_context(|| format!("Failed to finish span gesture of pointer {pointer}"))?;
        }
        self.n_finished += 1;
        span_log::debug!("Finished span gesture for pointer {}", pointer);

        Ok(ClickOutcome::Finished)
    }

    /// Abandons the given pointer's gesture.
    ///
    /// # Returns
    /// Whether the pointer had a gesture in progress.
    pub fn cancel(&mut self, pointer: PointerId) -> bool {
        let had_gesture = self.active.remove(&pointer).is_some();
        if had_gesture {
            span_log::debug!("Cancelled span gesture for pointer {}", pointer);
        }
        had_gesture
    }

    /// Renders the previews of all gestures in progress, in pointer order.
    pub fn render(&self, renderer: &mut impl PrimitiveRenderer) -> Result<(), SpanError> {
        for controller in self.active.values() {
            controller.render(renderer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxAnnotation;
    use span_geometry::PrimitiveRecorder;

    const UNIT_BOX_POINTS: [[f64; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 2.0, 0.0],
        [1.0, 2.0, 1.0],
    ];

    fn gestures() -> SpanGestures {
        SpanGestures::new(SpanConfig::default())
    }

    #[test]
    fn first_click_begins_gesture() {
        let mut gestures = gestures();
        let mut created: Vec<BoxAnnotation> = Vec::new();

        let outcome = gestures
            .pointer_clicked(0, UNIT_BOX_POINTS[0], &mut created)
            .unwrap();

        assert_eq!(outcome, ClickOutcome::Advanced { n_points: 1 });
        assert_eq!(gestures.n_active(), 1);
    }

    #[test]
    fn fourth_click_finishes_gesture_and_hands_off_box() {
        let mut gestures = gestures();
        let mut created: Vec<BoxAnnotation> = Vec::new();

        let mut outcomes = Vec::new();
        for point in UNIT_BOX_POINTS {
            outcomes.push(gestures.pointer_clicked(3, point, &mut created).unwrap());
        }

        assert_eq!(outcomes[3], ClickOutcome::Finished);
        assert_eq!(gestures.n_active(), 0);
        assert_eq!(gestures.n_finished(), 1);
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].dimensions, [2.0, 1.0, 1.0]);
    }

    #[test]
    fn pointers_drive_separate_gestures() {
        let mut gestures = gestures();
        let mut created: Vec<BoxAnnotation> = Vec::new();

        gestures.pointer_clicked(0, [0.0, 0.0, 0.0], &mut created).unwrap();
        gestures.pointer_clicked(1, [5.0, 5.0, 0.0], &mut created).unwrap();
        gestures.pointer_clicked(1, [6.0, 5.0, 0.0], &mut created).unwrap();

        assert_eq!(gestures.controller(0).unwrap().n_points(), 1);
        assert_eq!(gestures.controller(1).unwrap().n_points(), 2);
    }

    #[test]
    fn moving_pointer_only_moves_its_own_cursor() {
        let mut gestures = gestures();
        let mut created: Vec<BoxAnnotation> = Vec::new();
        gestures.pointer_clicked(0, [0.0, 0.0, 0.0], &mut created).unwrap();
        gestures.pointer_clicked(1, [5.0, 5.0, 0.0], &mut created).unwrap();

        gestures.pointer_moved(1, [8.0, 8.0, 0.0]);
        gestures.pointer_moved(2, [9.0, 9.0, 0.0]);

        assert_eq!(
            gestures.controller(0).unwrap().live_cursor(),
            &Point3D::new(0.0, 0.0, 0.0)
        );
        assert_eq!(
            gestures.controller(1).unwrap().live_cursor(),
            &Point3D::new(8.0, 8.0, 0.0)
        );
        assert!(gestures.controller(2).is_none());
    }

    #[test]
    fn cancelling_discards_gesture() {
        let mut gestures = gestures();
        let mut created: Vec<BoxAnnotation> = Vec::new();
        gestures.pointer_clicked(0, [0.0, 0.0, 0.0], &mut created).unwrap();

        assert!(gestures.cancel(0));
        assert!(!gestures.cancel(0));
        assert_eq!(gestures.n_active(), 0);

        gestures.pointer_clicked(0, [4.0, 0.0, 0.0], &mut created).unwrap();
        assert_eq!(gestures.controller(0).unwrap().n_points(), 1);
    }

    #[test]
    fn degenerate_gesture_ends_with_error_and_no_box() {
        let mut gestures = gestures();
        let mut created: Vec<BoxAnnotation> = Vec::new();
        for _ in 0..3 {
            gestures.pointer_clicked(0, [0.0, 0.0, 0.0], &mut created).unwrap();
        }
        assert!(gestures.pointer_clicked(0, [0.0, 0.0, 1.0], &mut created).is_err());
        assert_eq!(gestures.n_active(), 0);
        assert_eq!(gestures.n_finished(), 0);
        assert!(created.is_empty());
    }

    #[test]
    fn rendering_covers_every_active_gesture() {
        let mut gestures = gestures();
        let mut created: Vec<BoxAnnotation> = Vec::new();
        gestures.pointer_clicked(0, [0.0, 0.0, 0.0], &mut created).unwrap();
        gestures.pointer_clicked(1, [5.0, 5.0, 0.0], &mut created).unwrap();
        gestures.pointer_clicked(1, [6.0, 5.0, 0.0], &mut created).unwrap();

        let mut recorder = PrimitiveRecorder::new();
        gestures.render(&mut recorder).unwrap();

        assert_eq!(recorder.n_points(), 3);
        assert_eq!(recorder.n_lines(), 1);
        assert_eq!(recorder.n_quads(), 1);
    }
}
