//! Section subdivision of a row
//!
//! Each row's semicircle arc is divided into `sections` equal angular
//! wedges separated by aisle gaps of constant linear width. Seats within a
//! section spread evenly over its span, so partially filled rows come out
//! centered rather than left-packed.

use std::f32::consts::PI;

use crate::models::options::LayoutOptions;

/// Angular geometry of the sections at one row radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionArcs {
    /// Angular span of one section (radians)
    pub span: f32,

    /// Angular width of one aisle gap at this radius (radians)
    pub gap: f32,
}

/// Compute the section spans for a row at the given radius.
///
/// The aisle keeps a constant linear width, so its angular width shrinks as
/// the radius grows. Degenerate rows (radius too small for the gaps) clamp
/// the span to zero rather than going negative.
pub fn section_arcs(radius: f32, options: &LayoutOptions) -> SectionArcs {
    let gap = if radius > 0.0 {
        options.section_gap / radius
    } else {
        0.0
    };
    let internal = (options.sections - 1) as f32 * gap;
    let span = ((PI - internal) / options.sections as f32).max(0.0);
    SectionArcs { span, gap }
}

impl SectionArcs {
    /// Angle of the left edge of section `index` (sections are numbered
    /// left to right, so index 0 starts at the left end of the flat edge).
    pub fn left_edge(&self, index: usize) -> f32 {
        PI - index as f32 * (self.span + self.gap)
    }

    /// Angle of the center of the aisle to the *left* of section `index`
    /// (valid for index ≥ 1).
    pub fn aisle_center(&self, index: usize) -> f32 {
        self.left_edge(index) + self.gap / 2.0
    }

    /// Angle of seat `seat` out of `used` seats occupying section `index`.
    ///
    /// Used seats distribute evenly over the full span with half-slot
    /// padding at both edges, which centers partial rows.
    pub fn seat_angle(&self, index: usize, seat: usize, used: usize) -> f32 {
        let step = self.span / used as f32;
        let angle = self.left_edge(index) - (seat as f32 + 0.5) * step;
        // degenerate rows can push angles past the diameter; keep seats in
        // the bowl so coordinates stay inside the canvas
        angle.clamp(0.0, PI)
    }
}

/// Split a row's used seat count into near-equal per-section shares.
///
/// The remainder goes to the sections closest to the center aisle first,
/// matching the conventional look of parliament diagrams. Ordering is fully
/// deterministic (distance from center, then lower index).
pub fn apportion_sections(count: usize, sections: u32) -> Vec<usize> {
    let s = sections as usize;
    let base = count / s;
    let remainder = count % s;
    let mut counts = vec![base; s];

    let center = (s as f32 - 1.0) / 2.0;
    let mut order: Vec<usize> = (0..s).collect();
    order.sort_by(|a, b| {
        let da = (*a as f32 - center).abs();
        let db = (*b as f32 - center).abs();
        da.total_cmp(&db).then(a.cmp(b))
    });
    for &idx in order.iter().take(remainder) {
        counts[idx] += 1;
    }
    counts
}
