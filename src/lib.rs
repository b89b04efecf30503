//! Parliament Chart Layout WASM Module
//!
//! This is the main WASM module for the parliament chart. It computes
//! deterministic hemicycle seat layouts (concentric rows split into
//! gap-separated sections) and hands pre-positioned display lists to
//! JavaScript for rendering.

pub mod models;
pub mod layout;
pub mod data;
pub mod api;

// Re-export commonly used types
pub use models::errors::ChartError;
pub use models::geometry::Point;
pub use models::options::LayoutOptions;
pub use layout::engine::compute_seat_positions;
pub use layout::display_list::{build_display_list, ChartDisplayList, RenderSeat};
pub use layout::guides::{compute_debug_guides, DebugGuides};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Parliament chart layout WASM module initialized");
}
