//! Core data model for the parliament chart
//!
//! Layout options, geometric primitives, and configuration errors shared
//! across the layout engine and the WASM API.

pub mod errors;
pub mod geometry;
pub mod options;

pub use errors::ChartError;
pub use geometry::Point;
pub use options::LayoutOptions;
