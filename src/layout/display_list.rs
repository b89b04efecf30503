//! Display list for chart rendering
//!
//! This module defines the output structure returned from the layout engine
//! to JavaScript. The display list carries pre-calculated seat positions
//! zipped with the caller's own attributes, so the renderer binds markers
//! to data without doing any layout work.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::errors::ChartError;
use crate::models::options::LayoutOptions;

use super::engine::compute_seat_positions;

/// A per-seat attribute record supplied by the caller.
///
/// The engine never interprets these beyond copying them; color, slug,
/// label and any other keys stay caller-owned.
pub type SeatRecord = Map<String, Value>;

/// Top-level display list containing all rendering information.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChartDisplayList {
    /// All seats with positions and caller attributes, in layout order
    pub seats: Vec<RenderSeat>,

    /// Marker radius to draw each seat with (px)
    pub seat_radius: f32,

    /// Width of the chart area (px)
    pub width: f32,

    /// Height of the chart area (px); the lowest seat edge fits inside
    pub height: f32,
}

/// A single positioned seat.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderSeat {
    /// X position of the seat center
    pub x: f32,

    /// Y position of the seat center
    pub y: f32,

    /// Caller-supplied attributes (color, slug, label, ...), flattened into
    /// the seat object on the JavaScript side
    #[serde(flatten)]
    pub attrs: SeatRecord,
}

/// Lay out one seat per record and zip positions back onto the records by
/// index.
pub fn build_display_list(
    records: Vec<SeatRecord>,
    options: &LayoutOptions,
    width: f32,
) -> Result<ChartDisplayList, ChartError> {
    let points = compute_seat_positions(records.len(), options, width)?;

    let seats: Vec<RenderSeat> = records
        .into_iter()
        .zip(points)
        .map(|(attrs, point)| RenderSeat {
            x: point.x,
            y: point.y,
            attrs,
        })
        .collect();

    let lowest = seats.iter().map(|s| s.y).fold(0.0, f32::max);
    Ok(ChartDisplayList {
        seats,
        seat_radius: options.seat_radius,
        width,
        height: if lowest > 0.0 { lowest + options.seat_radius } else { 0.0 },
    })
}
