//! Configuration of span validation.

use serde::{Deserialize, Serialize};

/// Configuration parameters for spanning boxes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanConfig {
    /// Finalizing a span fails if its heading edge is shorter than this in
    /// the xy-plane, or if the box depth or height is below it.
    pub min_edge_length: f64,
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            min_edge_length: 1e-6,
        }
    }
}
