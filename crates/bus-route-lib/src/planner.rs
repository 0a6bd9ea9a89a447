//! Route render planning for the selected stop
//!
//! A planning pass walks every route serving the selected stop, splits each
//! pattern path into consecutive point pairs and keeps the pairs that may be
//! visible in the viewport. Every pass starts from an empty legend, so the
//! resulting [`RoutePlan`] depends only on its inputs.

use crate::{
    Color, DEFAULT_PALETTE, GeoPoint, Legend, OverlayError, Result, TransitRoute,
    TransitRoutePattern, TransitStop, Viewport, is_segment_visible,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zoom level above which the widest stroke is used
pub const CLOSE_ZOOM_THRESHOLD: i32 = 14;

/// Zoom level above which the medium stroke is used
pub const MEDIUM_ZOOM_THRESHOLD: i32 = 10;

/// Base stroke widths in density-independent units
pub const CLOSE_LINE_WIDTH: f32 = 7.0;
pub const MEDIUM_LINE_WIDTH: f32 = 5.0;
pub const FAR_LINE_WIDTH: f32 = 2.0;

/// Base legend text size in density-independent units
pub const DEFAULT_LEGEND_TEXT_SIZE: f32 = 16.0;

/// Configuration shared by every planning pass
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Device-specific scale from logical units to physical pixels.
    /// Default: 1.0
    pub density_factor: f32,
    /// Colors assigned to routes in first-seen order
    pub palette: Vec<Color>,
    /// Legend text size before density scaling
    pub legend_text_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            density_factor: 1.0,
            palette: DEFAULT_PALETTE.to_vec(),
            legend_text_size: DEFAULT_LEGEND_TEXT_SIZE,
        }
    }
}

impl Config {
    /// Default configuration for a display with the given density factor
    pub fn with_density(density_factor: f32) -> Self {
        Self {
            density_factor,
            ..Self::default()
        }
    }

    /// Check that the configuration can drive a planning pass
    pub fn validate(&self) -> Result<()> {
        if !self.density_factor.is_finite() || self.density_factor <= 0.0 {
            return Err(OverlayError::InvalidConfig(format!(
                "density factor must be a positive number, got {}",
                self.density_factor
            )));
        }
        if !self.legend_text_size.is_finite() || self.legend_text_size <= 0.0 {
            return Err(OverlayError::InvalidConfig(format!(
                "legend text size must be a positive number, got {}",
                self.legend_text_size
            )));
        }
        if self.palette.is_empty() {
            return Err(OverlayError::InvalidConfig(
                "palette must contain at least one color".to_string(),
            ));
        }
        Ok(())
    }
}

/// A visible piece of a route, ready to be stroked by the map view
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderableSegment {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Stroke width in physical pixels
    pub width: f32,
    pub color: Color,
}

/// Output of one planning pass
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    /// Segments in route -> pattern -> pair order
    pub segments: Vec<RenderableSegment>,
    /// One entry per distinct route serving the stop
    pub legend: Legend,
}

impl RoutePlan {
    /// A plan with nothing to draw
    pub fn empty(palette: Vec<Color>) -> Self {
        Self {
            segments: Vec::new(),
            legend: Legend::new(palette),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.legend.is_empty()
    }
}

/// Stroke width for the given zoom level, scaled to physical pixels
#[inline]
pub fn line_width(zoom_level: i32, density_factor: f32) -> f32 {
    let base = if zoom_level > CLOSE_ZOOM_THRESHOLD {
        CLOSE_LINE_WIDTH
    } else if zoom_level > MEDIUM_ZOOM_THRESHOLD {
        MEDIUM_LINE_WIDTH
    } else {
        FAR_LINE_WIDTH
    };
    base * density_factor
}

/// Plan every visible segment of every pattern of every route through the selected stop
///
/// Without a selected stop the plan is empty. Each route gets its legend color
/// before any of its patterns are visited, so a route whose paths are all too
/// short or off-screen still shows up in the legend.
pub fn plan_routes<S: TransitStop>(
    selected_stop: Option<&S>,
    viewport: &Viewport,
    zoom_level: i32,
    config: &Config,
) -> RoutePlan {
    #[cfg(feature = "profiling")]
    profiling::scope!("planner::plan_routes");

    let mut plan = RoutePlan::empty(config.palette.clone());
    let Some(stop) = selected_stop else {
        tracing::debug!("No stop selected, nothing to plan");
        return plan;
    };

    let width = line_width(zoom_level, config.density_factor);
    let mut dropped: usize = 0;

    for route in stop.routes() {
        let color = plan.legend.assign_color(route.number());

        for pattern in route.patterns() {
            let path = pattern.path();
            if path.len() < 2 {
                tracing::trace!(
                    "Route {} has a pattern with {} point(s), skipping",
                    route.number(),
                    path.len()
                );
                continue;
            }

            for pair in path.windows(2) {
                let (start, end) = (pair[0], pair[1]);
                if is_segment_visible(viewport, start, end) {
                    plan.segments.push(RenderableSegment {
                        start,
                        end,
                        width,
                        color,
                    });
                } else {
                    dropped += 1;
                }
            }
        }
    }

    tracing::debug!(
        "Planned {} segments for {} routes ({} off-screen, width {})",
        plan.segments.len(),
        plan.legend.len(),
        dropped,
        width
    );

    plan
}
