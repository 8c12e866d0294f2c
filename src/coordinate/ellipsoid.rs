//! WGS84 ellipsoid parameters and the UTM projection constants

/// Semi-major axis in meters
pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// Flattening
pub const FLATTENING: f64 = 1.0 / 298.257_223_563;

/// First eccentricity squared
pub const E2: f64 = FLATTENING * (2.0 - FLATTENING);

/// Second eccentricity squared
pub const EP2: f64 = E2 / (1.0 - E2);

/// UTM central scale factor
pub const K0: f64 = 0.9996;

/// False easting applied to every zone
pub const FALSE_EASTING: f64 = 500_000.0;

/// False northing applied south of the equator
pub const FALSE_NORTHING: f64 = 10_000_000.0;

/// First eccentricity
pub fn eccentricity() -> f64 {
    E2.sqrt()
}

/// Footpoint series parameter derived from the first eccentricity
pub fn e1() -> f64 {
    let root = (1.0 - E2).sqrt();
    (1.0 - root) / (1.0 + root)
}

/// Meridian arc length from the equator to latitude `phi` (radians)
pub fn meridian_arc(phi: f64) -> f64 {
    let e4 = E2 * E2;
    let e6 = e4 * E2;

    SEMI_MAJOR_AXIS
        * ((1.0 - E2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * E2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Radius of curvature in the prime vertical at latitude `phi` (radians)
pub fn transverse_radius(phi: f64) -> f64 {
    SEMI_MAJOR_AXIS / (1.0 - E2 * phi.sin().powi(2)).sqrt()
}

/// Radius of curvature in the meridian at latitude `phi` (radians)
pub fn meridian_radius(phi: f64) -> f64 {
    SEMI_MAJOR_AXIS * (1.0 - E2) / (1.0 - E2 * phi.sin().powi(2)).powf(1.5)
}
