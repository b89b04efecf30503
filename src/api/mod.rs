//! Parliament Chart WASM API
//!
//! This module provides the JavaScript-facing API for the chart. Every
//! function recomputes its result from scratch out of its arguments; there
//! is no module state, so re-render and resize paths simply call again with
//! the current width.

use wasm_bindgen::prelude::*;

use crate::data::{clean_raw, expand_aggregated};
use crate::layout::display_list::{build_display_list, SeatRecord};
use crate::layout::engine::compute_seat_positions;
use crate::layout::guides::compute_debug_guides;
use crate::models::options::LayoutOptions;

fn layout_error(e: crate::models::errors::ChartError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn options_from_js(options: JsValue) -> Result<LayoutOptions, JsValue> {
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid layout options: {}", e)))
}

fn records_from_js(data: JsValue) -> Result<Vec<SeatRecord>, JsValue> {
    serde_wasm_bindgen::from_value(data)
        .map_err(|e| JsValue::from_str(&format!("Invalid seat data: {}", e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Compute seat center positions only.
///
/// Returns an array of `{x, y}` objects, one per seat, in layout order
/// (innermost row outward, each row swept left to right).
#[wasm_bindgen(js_name = computeSeatPositions)]
pub fn compute_seat_positions_js(
    seat_count: u32,
    options: JsValue,
    width: f32,
) -> Result<JsValue, JsValue> {
    let opts = options_from_js(options)?;
    let points =
        compute_seat_positions(seat_count as usize, &opts, width).map_err(layout_error)?;
    to_js(&points)
}

/// Lay out flat per-seat records and return a display list.
///
/// `data` is an array of objects with arbitrary attributes; any stale
/// `x`/`y` keys are stripped before positions are assigned by index.
#[wasm_bindgen(js_name = computeChart)]
pub fn compute_chart(data: JsValue, options: JsValue, width: f32) -> Result<JsValue, JsValue> {
    let opts = options_from_js(options)?;
    let records = clean_raw(records_from_js(data)?);
    let list = build_display_list(records, &opts, width).map_err(layout_error)?;
    to_js(&list)
}

/// Lay out aggregated records (`{seats: k, ...attrs}`) and return a
/// display list with one entry per individual seat.
#[wasm_bindgen(js_name = computeAggregatedChart)]
pub fn compute_aggregated_chart(
    data: JsValue,
    options: JsValue,
    width: f32,
) -> Result<JsValue, JsValue> {
    let opts = options_from_js(options)?;
    let records = expand_aggregated(records_from_js(data)?);
    let list = build_display_list(records, &opts, width).map_err(layout_error)?;
    to_js(&list)
}

/// Compute construction guides (row arcs, aisle center lines) for the
/// debug overlay, using the same row plan as the layout itself.
#[wasm_bindgen(js_name = computeDebugGuides)]
pub fn compute_debug_guides_js(
    seat_count: u32,
    options: JsValue,
    width: f32,
) -> Result<JsValue, JsValue> {
    let opts = options_from_js(options)?;
    let guides =
        compute_debug_guides(seat_count as usize, &opts, width).map_err(layout_error)?;
    to_js(&guides)
}

/// The default visual options of the original chart.
#[wasm_bindgen(js_name = defaultLayoutOptions)]
pub fn default_layout_options() -> Result<JsValue, JsValue> {
    to_js(&LayoutOptions::default())
}
