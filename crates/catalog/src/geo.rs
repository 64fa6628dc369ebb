//! Great-circle distance between coordinates.

use crate::error::Result;
use crate::types::Coordinate;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Both coordinates are validated first; an out-of-range latitude or
/// longitude yields `InvalidCoordinate` instead of a NaN distance.
pub fn distance(a: Coordinate, b: Coordinate) -> Result<f64> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_meters(a, b))
}

/// Haversine formula on pre-validated coordinates
fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.min(1.0).sqrt().asin();

    EARTH_RADIUS_METERS * c
}
