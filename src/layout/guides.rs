//! Debug construction guides
//!
//! Computes the row arcs and aisle boundaries the layout engine used for a
//! given configuration, as drawable primitives for a JavaScript debug
//! overlay. Useful for visual QA of the layout math; drawing itself stays
//! out of the engine.

use serde::{Deserialize, Serialize};

use crate::models::errors::ChartError;
use crate::models::geometry::Point;
use crate::models::options::{validate_width, LayoutOptions};

use super::rows::{build_rows, max_row_radius};
use super::sections::section_arcs;

/// Construction guides for one layout configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DebugGuides {
    /// X position of the chart center on the flat edge
    pub center_x: f32,

    /// Outer bounding radius imposed by the available width
    pub outer_radius: f32,

    /// One arc per constructed row, innermost first
    pub row_arcs: Vec<GuideArc>,

    /// Center line of each aisle between adjacent sections
    pub aisles: Vec<GuideSegment>,
}

/// A row construction arc.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GuideArc {
    /// Arc radius (px from the chart center)
    pub radius: f32,

    /// Seat capacity of the row at this radius
    pub capacity: u32,
}

/// A straight guide segment in chart coordinates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct GuideSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Compute the guides for the same row plan the engine would use.
///
/// The aisle keeps a constant linear width, so its center line is only
/// approximately radial; the segment connects the aisle centers at the
/// innermost and outermost row radii, which is what the overlay needs to
/// eyeball gap placement.
pub fn compute_debug_guides(
    seat_count: usize,
    options: &LayoutOptions,
    width: f32,
) -> Result<DebugGuides, ChartError> {
    options.validate()?;
    validate_width(width)?;

    let center_x = width / 2.0;
    let outer_radius = max_row_radius(options, width);

    if seat_count == 0 {
        return Ok(DebugGuides {
            center_x,
            outer_radius,
            row_arcs: Vec::new(),
            aisles: Vec::new(),
        });
    }

    let plans = build_rows(seat_count, options, width);
    let row_arcs = plans
        .iter()
        .map(|plan| GuideArc {
            radius: plan.radius,
            capacity: plan.capacity as u32,
        })
        .collect();

    let inner_radius = plans.first().map(|p| p.radius).unwrap_or(0.0);
    let outermost = plans.last().map(|p| p.radius).unwrap_or(0.0);

    let mut aisles = Vec::new();
    for boundary in 1..options.sections as usize {
        let near = section_arcs(inner_radius, options).aisle_center(boundary);
        let far = section_arcs(outermost, options).aisle_center(boundary);
        let p1 = Point::from_polar(center_x, inner_radius, near);
        let p2 = Point::from_polar(center_x, outermost, far);
        aisles.push(GuideSegment {
            x1: p1.x,
            y1: p1.y,
            x2: p2.x,
            y2: p2.y,
        });
    }

    Ok(DebugGuides {
        center_x,
        outer_radius,
        row_arcs,
        aisles,
    })
}
