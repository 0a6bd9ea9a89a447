//! Bus Route Library - Visible route segments and legend colors for a selected stop
//!
//! Given the stop selected on a map, this library works out which straight pieces of
//! the routes serving it can be seen in the current viewport, how wide they should be
//! stroked at the current zoom level, and which color each route gets in the legend.
//!
//! # Architecture
//!
//! - **[`is_segment_visible`]**: Line/rectangle test used to skip off-screen geometry
//! - **[`plan_routes`]**: One planning pass over routes, patterns and point pairs
//! - **[`Legend`]**: Per-pass route number to color assignment
//! - **[`RouteDrawer`]**: Host-facing holder of the latest plan as drawable overlays
//! - **[`TransitStop`]**, **[`TransitRoute`]**, **[`TransitRoutePattern`]**: Data model seams
//!
//! Planning is synchronous and works on data already in memory. It is meant to run
//! on the UI thread every time the selection or the viewport changes.

mod color;
mod geometry;
mod legend;
mod model;
mod overlay;
mod planner;

// Public API exports
pub use color::{Color, DEFAULT_PALETTE};
pub use geometry::{GeoPoint, MAX_LATITUDE, MAX_LONGITUDE, Viewport, is_segment_visible};
pub use legend::{Legend, LegendEntry};
pub use model::{
    RouteImpl, RoutePatternImpl, StopImpl, TransitRoute, TransitRoutePattern, TransitStop,
};
pub use overlay::{LegendOverlay, Overlay, RouteDrawer, RouteLineOverlay, Surface};
pub use planner::{Config, RenderableSegment, RoutePlan, line_width, plan_routes};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid coordinate: ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

pub type Result<T> = std::result::Result<T, OverlayError>;
