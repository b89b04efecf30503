//! Hemicycle Layout Engine
//!
//! This module computes seat positions for the parliament chart: concentric
//! rows packed outward from the innermost arc, each row split into sections
//! by aisle gaps, producing a DisplayList with all positioning data needed
//! for JavaScript to render.

pub mod rows;
pub mod sections;
pub mod engine;
pub mod display_list;
pub mod guides;

pub use engine::compute_seat_positions;
pub use display_list::{build_display_list, ChartDisplayList, RenderSeat};
pub use guides::{compute_debug_guides, DebugGuides, GuideArc, GuideSegment};
