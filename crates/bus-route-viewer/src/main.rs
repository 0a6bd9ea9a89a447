//! Headless host for the bus route overlays
//!
//! Loads a stop, plots its routes for the viewport and zoom given on the command
//! line, and draws the result as text (or dumps it as JSON).

mod logging;
mod settings;
mod stop_file;
mod surface;

use bus_route_lib::{Config, LegendEntry, RenderableSegment, RouteDrawer, StopImpl};
use clap::Parser;
use serde::Serialize;
use settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use surface::TextSurface;

/// Error types for the viewer
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid stop file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Overlay(#[from] bus_route_lib::OverlayError),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

/// JSON view of a plotted plan
#[derive(Serialize)]
struct PlanReport<'a> {
    segments: &'a [RenderableSegment],
    legend: &'a [LegendEntry],
}

fn main() -> ExitCode {
    let settings = Settings::parse();
    logging::setup_logging();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<()> {
    let viewport = settings.viewport()?;
    let stop: Option<StopImpl> = settings
        .stop_file
        .as_deref()
        .map(stop_file::load_stop)
        .transpose()?;
    if stop.is_none() {
        tracing::info!("No stop file given, plotting without a selected stop");
    }

    let mut drawer = RouteDrawer::new(Config::with_density(settings.density))?;
    drawer.plot_routes(stop.as_ref(), &viewport, settings.zoom);
    tracing::info!(
        "Plotted {} segments for {} routes at zoom {}",
        drawer.segments().len(),
        drawer.legend().len(),
        settings.zoom
    );

    let stdout = std::io::stdout().lock();
    if settings.json {
        let report = PlanReport {
            segments: drawer.segments(),
            legend: drawer.legend().entries(),
        };
        serde_json::to_writer_pretty(stdout, &report).map_err(std::io::Error::from)?;
        println!();
    } else {
        let mut surface = TextSurface::new(stdout);
        drawer.render(&mut surface);
        surface.finish()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bus_route_lib::DEFAULT_PALETTE;

    #[test]
    fn test_sample_stop_with_default_viewport() {
        let settings = Settings::parse_from(["bus-route-viewer"]);
        let stop = stop_file::parse_stop(include_str!("../data/stop_51479.json")).unwrap();

        let mut drawer = RouteDrawer::new(Config::with_density(settings.density)).unwrap();
        drawer.plot_routes(Some(&stop), &settings.viewport().unwrap(), settings.zoom);

        // Every point of the sample lies inside the default viewport
        assert_eq!(drawer.segments().len(), 8 + 8 + 8 + 6);
        let numbers: Vec<&str> = drawer
            .legend()
            .entries()
            .iter()
            .map(|e| e.route_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["099", "014", "004"]);
        assert_eq!(drawer.legend().color_of("004"), Some(DEFAULT_PALETTE[2]));
        assert!(drawer.segments().iter().all(|s| s.width == 5.0));
    }

    #[test]
    fn test_text_rendering_of_sample() {
        let stop = stop_file::parse_stop(include_str!("../data/stop_51479.json")).unwrap();
        let viewport = bus_route_lib::Viewport::from_bounds(49.27, -123.25, 49.26, -123.20);

        let mut drawer = RouteDrawer::new(Config::default()).unwrap();
        drawer.plot_routes(Some(&stop), &viewport, 16);

        let mut surface = TextSurface::new(Vec::new());
        drawer.render(&mut surface);
        let out = String::from_utf8(surface.finish().unwrap()).unwrap();

        let legend_rows = out.lines().filter(|l| l.starts_with("legend[")).count();
        let line_rows = out.lines().filter(|l| l.starts_with("line ")).count();
        assert_eq!(legend_rows, 3);
        assert_eq!(line_rows, drawer.segments().len());
        assert!(out.lines().all(|l| !l.starts_with("line ") || l.contains("width 7.0")));
    }
}
