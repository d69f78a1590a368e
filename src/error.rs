//! Errors from misusing a span.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpanError>;

/// Contract violations when driving a [`SpanController`](crate::SpanController).
///
/// None of these are transient: the caller must change what it does rather
/// than retry.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SpanError {
    #[error("Tried to register a point on a span that already has all four points")]
    OverfullSpan,

    #[error("No preview is defined for a span in the {state} state")]
    InvalidRenderState { state: &'static str },

    #[error("Tried to finalize a span with only {n_points} of four points")]
    PrematureFinalize { n_points: usize },

    #[error("Span point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error(
        "Span heading edge has horizontal length {horizontal_length}, too short to define a heading"
    )]
    UndefinedHeading { horizontal_length: f64 },

    #[error("Span gives the box a {axis} of {length}, below the minimum extent")]
    FlatSpan { axis: &'static str, length: f64 },
}
