//! Seat position computation
//!
//! This module contains the main entry point for layout calculations:
//! a pure function from `(seat_count, options, width)` to an ordered list
//! of seat centers. No state is kept between calls; identical inputs always
//! produce identical output.

use crate::models::errors::ChartError;
use crate::models::geometry::Point;
use crate::models::options::{validate_width, LayoutOptions};

use super::rows::{assign_row_counts, build_rows};
use super::sections::{apportion_sections, section_arcs};

/// Compute one position per requested seat.
///
/// Seats fill rows from the innermost arc outward; within a row the sweep
/// runs left to right across all sections, so index order is a consistent
/// reading order. Callers that color seats by contiguous index ranges get
/// contiguous visual wedges.
///
/// # Arguments
/// * `seat_count` - Number of seats to place (0 is valid and yields `[]`)
/// * `options` - Visual options for this pass
/// * `width` - Available width in px; the flat edge spans it
///
/// # Errors
/// Returns a [`ChartError`] for invalid options or a non-positive width.
/// Too many seats for the width is *not* an error: the layout degrades to
/// overlapping seats but every requested seat gets a position.
pub fn compute_seat_positions(
    seat_count: usize,
    options: &LayoutOptions,
    width: f32,
) -> Result<Vec<Point>, ChartError> {
    options.validate()?;
    validate_width(width)?;

    if seat_count == 0 {
        return Ok(Vec::new());
    }

    let plans = build_rows(seat_count, options, width);
    let row_counts = assign_row_counts(seat_count, &plans);
    log::debug!(
        "placing {} seats in {} rows at width {}",
        seat_count,
        row_counts.iter().filter(|&&c| c > 0).count(),
        width
    );

    let center_x = width / 2.0;
    let mut points = Vec::with_capacity(seat_count);
    for (plan, &used) in plans.iter().zip(&row_counts) {
        if used == 0 {
            continue;
        }
        let arcs = section_arcs(plan.radius, options);
        let per_section = apportion_sections(used, options.sections);
        for (section, &section_used) in per_section.iter().enumerate() {
            for seat in 0..section_used {
                let angle = arcs.seat_angle(section, seat, section_used);
                points.push(Point::from_polar(center_x, plan.radius, angle));
            }
        }
    }

    debug_assert_eq!(points.len(), seat_count);
    Ok(points)
}
