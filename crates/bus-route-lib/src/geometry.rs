//! Geographic points, viewports and the segment visibility test
//!
//! Coordinates are kept in WGS84 degrees. Internally they are mapped onto
//! `geo` types with `x = longitude` and `y = latitude`.

use crate::{OverlayError, Result};
use geo::{Coord, Intersects, Line, Rect};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum absolute latitude in degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Maximum absolute longitude in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// An immutable (latitude, longitude) pair in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point without range validation
    ///
    /// Coordinates must be finite.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        debug_assert!(
            lat.is_finite() && lon.is_finite(),
            "non-finite coordinate ({lat}, {lon})"
        );
        Self { lat, lon }
    }

    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite()
            || !lon.is_finite()
            || lat.abs() > MAX_LATITUDE
            || lon.abs() > MAX_LONGITUDE
        {
            return Err(OverlayError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Convert to a `geo` coordinate (x = longitude, y = latitude)
    #[inline]
    pub fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        point.to_coord()
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(coord: Coord<f64>) -> Self {
        GeoPoint::new(coord.y, coord.x)
    }
}

/// The geographic rectangle currently shown by the map
///
/// Corners are normalized on construction, so a viewport built from swapped
/// corners describes the same area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    rect: Rect<f64>,
}

impl Viewport {
    /// Create a viewport from its northwest and southeast corners
    pub fn new(north_west: GeoPoint, south_east: GeoPoint) -> Self {
        Self {
            rect: Rect::new(north_west.to_coord(), south_east.to_coord()),
        }
    }

    /// Create a viewport from its four edges in degrees
    pub fn from_bounds(north: f64, west: f64, south: f64, east: f64) -> Self {
        Self::new(GeoPoint::new(north, west), GeoPoint::new(south, east))
    }

    #[inline]
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.rect.max().y, self.rect.min().x)
    }

    #[inline]
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.rect.min().y, self.rect.max().x)
    }

    /// The normalized rectangle (x = longitude, y = latitude)
    #[inline]
    pub fn rect(&self) -> Rect<f64> {
        self.rect
    }

    /// Whether the point lies inside the viewport, boundary included
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.rect.intersects(&point.to_coord())
    }
}

impl From<Rect<f64>> for Viewport {
    fn from(rect: Rect<f64>) -> Self {
        Self { rect }
    }
}

/// Decide whether the segment `start`-`end` could be visible in the viewport
///
/// A segment is visible when either endpoint lies inside the rectangle or the
/// segment crosses one of its four edges. A zero-length segment is visible
/// iff its point is inside.
pub fn is_segment_visible(viewport: &Viewport, start: GeoPoint, end: GeoPoint) -> bool {
    if viewport.contains(start) || viewport.contains(end) {
        return true;
    }
    if start == end {
        return false;
    }

    let segment = Line::new(start.to_coord(), end.to_coord());
    viewport
        .rect()
        .to_lines()
        .iter()
        .any(|edge| edge.intersects(&segment))
}
