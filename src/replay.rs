//! Replaying recorded pointer input through span gestures.

use crate::{BoxCreator, SpanConfig, SpanGestures, gestures::PointerId};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use span_geometry::PrimitiveRenderer;
use std::path::Path;

/// A recorded sequence of pointer input, with the configuration to replay it
/// under.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub config: SpanConfig,
    pub events: Vec<InputEvent>,
}

/// A single pointer input event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The pointer moved to the given position.
    Move {
        pointer: PointerId,
        position: [f64; 3],
    },
    /// The pointer placed a point at the given position.
    Click {
        pointer: PointerId,
        position: [f64; 3],
    },
    /// The pointer's gesture was abandoned.
    Cancel { pointer: PointerId },
}

/// What happened during a replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub n_frames: usize,
    pub n_finished: usize,
    pub n_rejected: usize,
    pub n_cancelled: usize,
}

impl ReplayScript {
    /// Reads a replay script from the RON file at the given path.
    pub fn from_ron_file(file_path: impl AsRef<Path>) -> Result<Self> {
        span_io::parse_ron_file(file_path)
    }
}

/// Feeds every event of the script to a fresh [`SpanGestures`], rendering
/// all previews to `renderer` after each event and handing finished boxes to
/// `creator`.
///
/// Clicks that a gesture rejects are logged and counted, and the replay
/// continues.
///
/// # Errors
/// If rendering fails.
pub fn replay(
    script: &ReplayScript,
    renderer: &mut impl PrimitiveRenderer,
    creator: &mut impl BoxCreator,
) -> Result<ReplaySummary> {
    let mut gestures = SpanGestures::new(script.config.clone());
    let mut summary = ReplaySummary::default();

    for event in &script.events {
        match event {
            InputEvent::Move { pointer, position } => {
                gestures.pointer_moved(*pointer, *position);
            }
            InputEvent::Click { pointer, position } => {
                if let Err(error) = gestures.pointer_clicked(*pointer, *position, creator) {
                    span_log::warn!("Rejected click from pointer {}: {:#}", pointer, error);
                    summary.n_rejected += 1;
                }
            }
            InputEvent::Cancel { pointer } => {
                if gestures.cancel(*pointer) {
                    summary.n_cancelled += 1;
                }
            }
        }

        span_log::with_trace_logging!("Rendering frame {}", summary.n_frames;
            gestures.render(renderer)
        )?;
        summary.n_frames += 1;
    }

    summary.n_finished = gestures.n_finished();
    Ok(summary)
}
