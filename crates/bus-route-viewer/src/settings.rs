use bus_route_lib::{GeoPoint, Viewport};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Bus Route Viewer - Plots the routes through a transit stop for a map viewport
pub struct Settings {
    /// JSON file describing the selected stop and its routes (no stop selected if omitted)
    #[clap(short, long, value_name = "FILE")]
    pub stop_file: Option<PathBuf>,

    /// Northern edge of the viewport in degrees
    #[clap(long, default_value = "49.30", allow_negative_numbers = true)]
    pub north: f64,

    /// Western edge of the viewport in degrees
    #[clap(long, default_value = "-123.27", allow_negative_numbers = true)]
    pub west: f64,

    /// Southern edge of the viewport in degrees
    #[clap(long, default_value = "49.20", allow_negative_numbers = true)]
    pub south: f64,

    /// Eastern edge of the viewport in degrees
    #[clap(long, default_value = "-123.02", allow_negative_numbers = true)]
    pub east: f64,

    /// Map zoom level, used to pick the stroke width
    #[clap(short, long, default_value = "14", allow_negative_numbers = true)]
    pub zoom: i32,

    /// Screen density factor applied to stroke widths and legend text
    #[clap(short, long, default_value = "1.0")]
    pub density: f32,

    /// Print the plan as JSON instead of drawing it
    #[clap(long, default_value = "false")]
    pub json: bool,
}

impl Settings {
    /// Viewport described by the four edges, rejecting impossible coordinates
    pub fn viewport(&self) -> bus_route_lib::Result<Viewport> {
        let north_west = GeoPoint::try_new(self.north, self.west)?;
        let south_east = GeoPoint::try_new(self.south, self.east)?;
        Ok(Viewport::new(north_west, south_east))
    }
}
