//! Layout options
//!
//! An explicit immutable configuration value replacing the original chart's
//! getter/setter accessors. Options are supplied fresh on every layout pass;
//! the engine holds no configuration state between calls.

use serde::{Deserialize, Serialize};

use super::errors::ChartError;

/// Visual options for a layout pass.
///
/// Serialized with camelCase keys so JavaScript callers can pass the same
/// option objects the original d3 plugin accepted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Number of sections to divide the half circle into
    pub sections: u32,

    /// The gap of the aisle between sections (px)
    pub section_gap: f32,

    /// The radius of each seat (px)
    pub seat_radius: f32,

    /// The height of each row (px)
    pub row_height: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            sections: 4,
            section_gap: 60.0,
            seat_radius: 12.0,
            row_height: 42.0,
        }
    }
}

impl LayoutOptions {
    /// Create options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with a different section count.
    pub fn with_sections(self, sections: u32) -> Self {
        Self { sections, ..self }
    }

    /// Return a copy with a different aisle gap.
    pub fn with_section_gap(self, section_gap: f32) -> Self {
        Self { section_gap, ..self }
    }

    /// Return a copy with a different seat radius.
    pub fn with_seat_radius(self, seat_radius: f32) -> Self {
        Self { seat_radius, ..self }
    }

    /// Return a copy with a different row height.
    pub fn with_row_height(self, row_height: f32) -> Self {
        Self { row_height, ..self }
    }

    /// Validate the options, refusing values the layout math cannot honor.
    ///
    /// Comparisons are written so that NaN fails validation too.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.sections < 1 {
            return Err(ChartError::InvalidSections(self.sections));
        }
        if !(self.section_gap >= 0.0) || !self.section_gap.is_finite() {
            return Err(ChartError::InvalidSectionGap(self.section_gap));
        }
        if !(self.seat_radius > 0.0) || !self.seat_radius.is_finite() {
            return Err(ChartError::InvalidSeatRadius(self.seat_radius));
        }
        if !(self.row_height > 0.0) || !self.row_height.is_finite() {
            return Err(ChartError::InvalidRowHeight(self.row_height));
        }
        Ok(())
    }
}

/// Validate the available width for a layout pass.
///
/// Width is per-invocation (it changes on every resize) rather than part of
/// [`LayoutOptions`], so it is checked separately.
pub fn validate_width(width: f32) -> Result<(), ChartError> {
    if !(width > 0.0) || !width.is_finite() {
        return Err(ChartError::InvalidWidth(width));
    }
    Ok(())
}
