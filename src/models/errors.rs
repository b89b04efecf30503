//! Configuration errors
//!
//! Invalid layout options are caller programming errors: the engine refuses
//! to compute rather than silently clamping, so layout bugs surface at the
//! call site instead of producing a subtly wrong chart.

use thiserror::Error;

/// Errors raised while validating layout configuration.
///
/// Geometric degeneracy (more seats than fit in the available width) is
/// deliberately *not* represented here: the engine always returns a layout
/// for any valid configuration, accepting visual overlap as a degraded
/// outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("sections must be at least 1 (got {0})")]
    InvalidSections(u32),

    #[error("section gap must be a non-negative number (got {0})")]
    InvalidSectionGap(f32),

    #[error("seat radius must be a positive number (got {0})")]
    InvalidSeatRadius(f32),

    #[error("row height must be a positive number (got {0})")]
    InvalidRowHeight(f32),

    #[error("available width must be a positive number (got {0})")]
    InvalidWidth(f32),
}
