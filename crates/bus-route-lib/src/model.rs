//! Transit data model seams
//!
//! The planner only reads stops, routes and patterns through these traits, so
//! any data model that keeps its data in memory can be plugged in. Simple
//! owned implementations are provided for hosts that have nothing better.

use crate::GeoPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Traits
// ============================================================================

/// One concrete path variant (direction or branch) of a route
pub trait TransitRoutePattern {
    /// Ordered points of the path; may be empty
    fn path(&self) -> &[GeoPoint];
}

/// A bus route (e.g. "99", "R4")
pub trait TransitRoute {
    type Pattern: TransitRoutePattern;

    /// Route number, used as the legend key
    fn number(&self) -> &str;

    /// Patterns in data-model order
    fn patterns(&self) -> &[Self::Pattern];
}

/// A stop that can be selected on the map
pub trait TransitStop {
    type Route: TransitRoute;

    /// Routes serving this stop, in data-model order
    fn routes(&self) -> &[Self::Route];
}

// ============================================================================
// In-memory implementations
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutePatternImpl {
    /// Pattern name as published by the agency (e.g. "EB1")
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub path: Vec<GeoPoint>,
}

impl RoutePatternImpl {
    pub fn new(name: impl Into<String>, path: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

impl TransitRoutePattern for RoutePatternImpl {
    fn path(&self) -> &[GeoPoint] {
        &self.path
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteImpl {
    pub number: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub patterns: Vec<RoutePatternImpl>,
}

impl RouteImpl {
    pub fn new(number: impl Into<String>, patterns: Vec<RoutePatternImpl>) -> Self {
        Self {
            number: number.into(),
            patterns,
        }
    }
}

impl TransitRoute for RouteImpl {
    type Pattern = RoutePatternImpl;

    fn number(&self) -> &str {
        &self.number
    }

    fn patterns(&self) -> &[RoutePatternImpl] {
        &self.patterns
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StopImpl {
    /// Agency stop number
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub location: GeoPoint,
    #[cfg_attr(feature = "serde", serde(default))]
    pub routes: Vec<RouteImpl>,
}

impl StopImpl {
    pub fn new(id: u32, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            routes: Vec::new(),
        }
    }

    /// Register a route at this stop; a route already present by number is ignored
    pub fn add_route(&mut self, route: RouteImpl) {
        if self.routes.iter().any(|r| r.number == route.number) {
            tracing::warn!(
                "Route {} already serves stop {}, ignoring duplicate",
                route.number,
                self.id
            );
            return;
        }
        self.routes.push(route);
    }

    pub fn with_route(mut self, route: RouteImpl) -> Self {
        self.add_route(route);
        self
    }
}

impl TransitStop for StopImpl {
    type Route = RouteImpl;

    fn routes(&self) -> &[RouteImpl] {
        &self.routes
    }
}
