//! Great-circle distance and bearing on a spherical Earth

use crate::coordinate::GeographicPoint;

/// Mean Earth radius in statute miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
    "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Central angle between two points in radians (haversine)
fn central_angle(p1: &GeographicPoint, p2: &GeographicPoint) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (p2.longitude - p1.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin()
}

/// Great-circle distance in statute miles
pub fn distance(p1: &GeographicPoint, p2: &GeographicPoint) -> f64 {
    EARTH_RADIUS_MILES * central_angle(p1, p2)
}

/// Great-circle distance in kilometers
pub fn distance_km(p1: &GeographicPoint, p2: &GeographicPoint) -> f64 {
    EARTH_RADIUS_KM * central_angle(p1, p2)
}

/// Great-circle distance in meters
pub fn distance_meters(p1: &GeographicPoint, p2: &GeographicPoint) -> f64 {
    distance_km(p1, p2) * 1000.0
}

/// Initial bearing from `p1` towards `p2`, degrees in [0, 360)
pub fn bearing(p1: &GeographicPoint, p2: &GeographicPoint) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let dlon = (p2.longitude - p1.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    let degrees = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Nearest of the sixteen compass points
pub fn bearing_to_compass(degrees: f64) -> &'static str {
    let index = (degrees.rem_euclid(360.0) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// Three-digit bearing with its compass point, e.g. `045° (NE)`
pub fn format_bearing(degrees: f64) -> String {
    let whole = degrees.rem_euclid(360.0).round() as u32 % 360;
    format!("{:03}° ({})", whole, bearing_to_compass(whole as f64))
}
