//! Map overlays for the planned routes and their legend
//!
//! The host map view owns the drawing surface and decides when to draw. This
//! module only keeps the latest plan split into two overlays (route lines and
//! legend text) and replays them onto whatever [`Surface`] the host provides.

use crate::{
    Color, Config, GeoPoint, Legend, LegendEntry, RenderableSegment, Result, RoutePlan,
    TransitStop, Viewport, plan_routes,
};

/// Drawing primitives offered by the host map view
pub trait Surface {
    /// Stroke a straight line between two geographic points
    fn draw_line(&mut self, start: GeoPoint, end: GeoPoint, width: f32, color: Color);

    /// Draw one line of legend text; `row` counts from the top of the legend
    fn draw_text(&mut self, row: usize, text: &str, size: f32, color: Color);
}

/// Something the map view can draw and reset
pub trait Overlay {
    fn render(&self, surface: &mut dyn Surface);
    fn clear(&mut self);
}

/// Route lines of the current plan
#[derive(Clone, Debug, Default)]
pub struct RouteLineOverlay {
    segments: Vec<RenderableSegment>,
}

impl RouteLineOverlay {
    #[inline]
    pub fn segments(&self) -> &[RenderableSegment] {
        &self.segments
    }
}

impl Overlay for RouteLineOverlay {
    fn render(&self, surface: &mut dyn Surface) {
        #[cfg(feature = "profiling")]
        profiling::scope!("RouteLineOverlay::render");

        for segment in &self.segments {
            surface.draw_line(segment.start, segment.end, segment.width, segment.color);
        }
    }

    fn clear(&mut self) {
        self.segments.clear();
    }
}

/// Color-keyed route numbers shown above the map
#[derive(Clone, Debug)]
pub struct LegendOverlay {
    legend: Legend,
    /// Text size in physical pixels
    text_size: f32,
}

impl LegendOverlay {
    fn new(legend: Legend, text_size: f32) -> Self {
        Self { legend, text_size }
    }

    #[inline]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    #[inline]
    pub fn text_size(&self) -> f32 {
        self.text_size
    }
}

impl Overlay for LegendOverlay {
    fn render(&self, surface: &mut dyn Surface) {
        let entries = self.legend.entries().iter().enumerate();
        for (row, LegendEntry { route_number, color }) in entries {
            surface.draw_text(row, route_number, self.text_size, *color);
        }
    }

    fn clear(&mut self) {
        self.legend.clear();
    }
}

/// Draws the routes through the selected stop
///
/// Every call to [`RouteDrawer::plot_routes`] plans from scratch and swaps
/// both overlays for the new ones, so a draw pass never sees a mix of two
/// plans.
#[derive(Clone, Debug)]
pub struct RouteDrawer {
    config: Config,
    route_lines: RouteLineOverlay,
    legend: LegendOverlay,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl RouteDrawer {
    /// Create a drawer with nothing plotted
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let legend = LegendOverlay::new(
            Legend::new(config.palette.clone()),
            config.legend_text_size * config.density_factor,
        );
        Ok(Self {
            config,
            route_lines: RouteLineOverlay::default(),
            legend,
        })
    }

    /// Re-plan for a new selection or viewport, replacing the previous overlays
    pub fn plot_routes<S: TransitStop>(
        &mut self,
        selected_stop: Option<&S>,
        viewport: &Viewport,
        zoom_level: i32,
    ) {
        let RoutePlan { segments, legend } =
            plan_routes(selected_stop, viewport, zoom_level, &self.config);

        self.route_lines = RouteLineOverlay { segments };
        self.legend = LegendOverlay::new(legend, self.text_size());
    }

    /// Change the display density; takes effect on the next plot
    pub fn set_density_factor(&mut self, density_factor: f32) -> Result<()> {
        let config = Config {
            density_factor,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn segments(&self) -> &[RenderableSegment] {
        self.route_lines.segments()
    }

    #[inline]
    pub fn legend(&self) -> &Legend {
        self.legend.legend()
    }

    #[inline]
    pub fn route_line_overlay(&self) -> &RouteLineOverlay {
        &self.route_lines
    }

    #[inline]
    pub fn legend_overlay(&self) -> &LegendOverlay {
        &self.legend
    }

    /// Draw route lines first, then the legend on top
    pub fn render(&self, surface: &mut dyn Surface) {
        self.route_lines.render(surface);
        self.legend.render(surface);
    }

    /// Drop everything plotted so far
    pub fn clear(&mut self) {
        self.route_lines.clear();
        self.legend.clear();
    }

    fn text_size(&self) -> f32 {
        self.config.legend_text_size * self.config.density_factor
    }
}
