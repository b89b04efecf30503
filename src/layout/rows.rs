//! Row construction and seat-count assignment
//!
//! Rows are concentric arcs built outward from the innermost radius in
//! `row_height` steps until their cumulative capacity covers the requested
//! seat count. Row radii never exceed the bound imposed by the available
//! width; when the request cannot fit, seats are apportioned across the
//! clamped rows instead of failing.

use std::f32::consts::PI;

use crate::models::options::LayoutOptions;

/// One concentric row of the hemicycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowPlan {
    /// Arc radius of the row (px from the chart center)
    pub radius: f32,

    /// Seats this row can hold without overlap
    pub capacity: usize,
}

/// Radius of the innermost row.
///
/// The first row must be wide enough that every section can hold at least
/// one seat after the aisle gaps are subtracted, and no seat disc may cover
/// the chart center.
pub fn min_row_radius(options: &LayoutOptions) -> f32 {
    let seats_arc = 2.0 * options.seat_radius * options.sections as f32;
    let gaps_arc = (options.sections - 1) as f32 * options.section_gap;
    ((seats_arc + gaps_arc) / PI).max(options.seat_radius)
}

/// Largest row radius that keeps the outermost seat's edge inside the
/// canvas: the flat diameter spans the available width.
pub fn max_row_radius(options: &LayoutOptions, width: f32) -> f32 {
    (width / 2.0 - options.seat_radius).max(0.0)
}

/// Seat capacity of a row at the given radius.
///
/// Usable arc length is the semicircle arc minus the linear width of the
/// `sections - 1` internal aisles; each seat consumes one diameter of arc.
pub fn row_capacity(radius: f32, options: &LayoutOptions) -> usize {
    let gaps_arc = (options.sections - 1) as f32 * options.section_gap;
    let usable = PI * radius - gaps_arc;
    if usable <= 0.0 {
        0
    } else {
        // tolerance keeps exact slot boundaries from flooring one short
        (usable / (2.0 * options.seat_radius) + 1e-4).floor() as usize
    }
}

/// Build rows outward from the innermost radius until cumulative capacity
/// reaches `seat_count` or the width bound is hit.
///
/// Always returns at least one row. Under a too-small width, nominal radii
/// past the bound clamp to it, so the returned plan may end with coinciding
/// rows of equal radius; the caller handles the resulting over-assignment
/// as documented overlap degradation.
pub fn build_rows(seat_count: usize, options: &LayoutOptions, width: f32) -> Vec<RowPlan> {
    let min_radius = min_row_radius(options);
    let max_radius = max_row_radius(options, width);

    let mut plans = Vec::new();
    let mut total = 0usize;
    let mut index = 0u32;
    loop {
        let nominal = min_radius + index as f32 * options.row_height;
        let radius = nominal.min(max_radius);
        let capacity = row_capacity(radius, options);
        plans.push(RowPlan { radius, capacity });
        total += capacity;
        if total >= seat_count || nominal >= max_radius {
            break;
        }
        index += 1;
    }
    plans
}

/// Assign the requested seat count across rows.
///
/// With enough capacity, rows fill innermost-out and the last occupied row
/// keeps only the needed prefix. With too little capacity, seats are
/// apportioned proportionally to row capacity so the overlap spreads evenly
/// instead of piling onto one arc.
pub fn assign_row_counts(seat_count: usize, plans: &[RowPlan]) -> Vec<usize> {
    let total: usize = plans.iter().map(|p| p.capacity).sum();
    if total >= seat_count {
        let mut remaining = seat_count;
        plans
            .iter()
            .map(|plan| {
                let take = plan.capacity.min(remaining);
                remaining -= take;
                take
            })
            .collect()
    } else {
        let weights: Vec<usize> = plans.iter().map(|p| p.capacity).collect();
        apportion_by_weight(seat_count, &weights)
    }
}

/// Largest-remainder apportionment of `count` over integer weights.
///
/// Pure integer arithmetic keeps the split bit-reproducible; ties go to the
/// earlier (inner) row. A zero weight vector assigns everything to row 0.
fn apportion_by_weight(count: usize, weights: &[usize]) -> Vec<usize> {
    let total: u64 = weights.iter().map(|&w| w as u64).sum();
    if total == 0 {
        let mut counts = vec![0; weights.len()];
        if let Some(first) = counts.first_mut() {
            *first = count;
        }
        return counts;
    }

    let mut counts: Vec<usize> = Vec::with_capacity(weights.len());
    let mut remainders: Vec<(u64, usize)> = Vec::with_capacity(weights.len());
    let mut assigned = 0usize;
    for (idx, &weight) in weights.iter().enumerate() {
        let scaled = count as u64 * weight as u64;
        counts.push((scaled / total) as usize);
        remainders.push((scaled % total, idx));
        assigned += (scaled / total) as usize;
    }

    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for &(_, idx) in remainders.iter().take(count - assigned) {
        counts[idx] += 1;
    }
    counts
}
