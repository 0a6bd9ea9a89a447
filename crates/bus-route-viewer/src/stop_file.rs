//! Loading the selected stop from a JSON description

use crate::{Result, ViewerError};
use bus_route_lib::{GeoPoint, StopImpl, TransitRoute, TransitRoutePattern, TransitStop};
use std::path::Path;

/// Read and validate a stop from a JSON file
pub fn load_stop(path: &Path) -> Result<StopImpl> {
    let contents = std::fs::read_to_string(path).map_err(|source| ViewerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stop = parse_stop(&contents)?;

    tracing::info!(
        "Loaded stop {} ({}) with {} routes from {}",
        stop.id,
        stop.name,
        stop.routes().len(),
        path.display()
    );
    Ok(stop)
}

/// Parse a stop from JSON, rejecting coordinates outside WGS84 bounds
pub fn parse_stop(json: &str) -> Result<StopImpl> {
    let stop: StopImpl = serde_json::from_str(json)?;

    check_point(stop.location)?;
    for route in stop.routes() {
        for pattern in route.patterns() {
            for &point in pattern.path() {
                check_point(point)?;
            }
        }
    }
    Ok(stop)
}

fn check_point(point: GeoPoint) -> Result<()> {
    GeoPoint::try_new(point.lat(), point.lon())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../data/stop_51479.json");

    #[test]
    fn test_parse_sample() {
        let stop = parse_stop(SAMPLE).unwrap();
        assert_eq!(stop.id, 51479);

        let numbers: Vec<&str> = stop.routes().iter().map(|r| r.number()).collect();
        assert_eq!(numbers, vec!["099", "014", "004"]);
        assert!(stop.routes()[0].patterns().len() >= 2);
    }

    #[test]
    fn test_optional_fields_default() {
        let stop = parse_stop(r#"{"id": 7, "location": {"lat": 49.2, "lon": -123.1}}"#).unwrap();
        assert!(stop.name.is_empty());
        assert!(stop.routes().is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_point() {
        let json = r#"{
            "id": 1,
            "location": {"lat": 49.2, "lon": -123.1},
            "routes": [{"number": "1", "patterns": [{"path": [{"lat": 120.0, "lon": 0.0}]}]}]
        }"#;
        assert!(matches!(parse_stop(json), Err(ViewerError::Overlay(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_stop("{"), Err(ViewerError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_stop(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ViewerError::Io { .. })));
    }
}
