//! Logging for box spanning.

#[macro_use]
mod macros;

pub use log::{debug, info, trace, warn};
