//! Forward and inverse UTM transforms on the WGS84 ellipsoid

use log::debug;

use super::cell::{clip_to_window, GridCell};
use super::zones::{self, MAX_UTM_LATITUDE, MIN_UTM_LATITUDE};
use crate::coordinate::ellipsoid::{self, E2, EP2, FALSE_EASTING, FALSE_NORTHING, K0};
use crate::coordinate::{GeographicPoint, UtmCoordinate};
use crate::errors::{CoordError, CoordResult};

// Outline samples per cell side when clipping a cell to its zone
const OUTLINE_POINTS_PER_SIDE: usize = 8;

/// Projector between geographic coordinates and UTM
///
/// Uses the sixth-order series expansions of the transverse Mercator
/// projection. Round trips stay within a few centimeters across a full
/// six degree zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodeticProjector;

impl GeodeticProjector {
    /// Create a new projector
    pub fn new() -> Self {
        GeodeticProjector
    }

    /// Project a latitude/longitude pair into its UTM zone
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees, within [-80, 84]
    /// * `lon` - Longitude in degrees, within [-180, 180]
    ///
    /// # Returns
    /// The UTM coordinate, or `InvalidLatitude`/`InvalidLongitude`
    pub fn forward(&self, lat: f64, lon: f64) -> CoordResult<UtmCoordinate> {
        if !(MIN_UTM_LATITUDE..=MAX_UTM_LATITUDE).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }

        let lon = zones::normalize_longitude(lon);
        self.forward_in_zone(lat, lon, zones::zone_number(lat, lon))
    }

    /// Project into a given zone, whichever zone the point itself falls in
    ///
    /// Used to measure a point against a neighbouring zone's grid; the band
    /// letter still follows the latitude.
    pub fn forward_in_zone(&self, lat: f64, lon: f64, zone: u8) -> CoordResult<UtmCoordinate> {
        let zone = zones::validate_zone(zone)?;
        let band = zones::band_letter(lat)?;

        let phi = lat.to_radians();
        let (sin_phi, cos_phi, tan_phi) = (phi.sin(), phi.cos(), phi.tan());

        let n = ellipsoid::transverse_radius(phi);
        let t = tan_phi * tan_phi;
        let c = EP2 * cos_phi * cos_phi;
        let a = cos_phi * zones::longitude_offset(lon, zone).to_radians();
        let m = ellipsoid::meridian_arc(phi);

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let easting = K0 * n
            * (a + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * EP2) * a5 / 120.0)
            + FALSE_EASTING;

        let mut northing = K0
            * (m + n * sin_phi / cos_phi
                * (a2 / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * EP2) * a6 / 720.0));

        if lat < 0.0 {
            northing += FALSE_NORTHING;
        }

        debug!("forward ({}, {}) -> zone {}{} E {:.3} N {:.3}", lat, lon, zone, band, easting, northing);

        Ok(UtmCoordinate::new(zone, band, easting, northing))
    }

    /// Recover latitude/longitude from a UTM position
    ///
    /// The hemisphere is taken from the band letter: `N` and later are north.
    ///
    /// # Arguments
    /// * `zone` - Zone number, 1 to 60
    /// * `band` - Latitude band letter
    /// * `easting` - Meters east including the false easting
    /// * `northing` - Meters north including any false northing
    pub fn inverse(&self, zone: u8, band: char, easting: f64, northing: f64) -> CoordResult<GeographicPoint> {
        let zone = zones::validate_zone(zone)?;
        if !UtmCoordinate::is_valid_band(band) {
            return Err(CoordError::InvalidBand(band));
        }
        let utm = UtmCoordinate::new(zone, band.to_ascii_uppercase(), easting, northing);

        let x = easting - FALSE_EASTING;
        let y = if utm.is_northern() { northing } else { northing - FALSE_NORTHING };

        let e1 = ellipsoid::e1();
        let e4 = E2 * E2;
        let e6 = e4 * E2;

        // Footpoint latitude from the rectifying latitude
        let mu = y / K0 / (ellipsoid::SEMI_MAJOR_AXIS * (1.0 - E2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let (cos1, tan1) = (phi1.cos(), phi1.tan());
        let c1 = EP2 * cos1 * cos1;
        let t1 = tan1 * tan1;
        let n1 = ellipsoid::transverse_radius(phi1);
        let r1 = ellipsoid::meridian_radius(phi1);
        let d = x / (n1 * K0);

        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let lat = phi1
            - (n1 * tan1 / r1)
                * (d2 / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * EP2) * d4 / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * EP2 - 3.0 * c1 * c1) * d6 / 720.0);

        let dlon = (d - (1.0 + 2.0 * t1 + c1) * d3 / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * EP2 + 24.0 * t1 * t1) * d5 / 120.0)
            / cos1;

        let mut lon = zones::central_meridian(zone) + dlon.to_degrees();
        if lon < -180.0 {
            lon += 360.0;
        } else if lon > 180.0 {
            lon -= 360.0;
        }

        debug!("inverse {} -> ({}, {})", utm, lat.to_degrees(), lon);

        Ok(GeographicPoint::new(lat.to_degrees(), lon))
    }

    /// Project a point, see [`GeodeticProjector::forward`]
    pub fn forward_point(&self, point: &GeographicPoint) -> CoordResult<UtmCoordinate> {
        self.forward(point.latitude, point.longitude)
    }

    /// Unproject a UTM coordinate, see [`GeodeticProjector::inverse`]
    pub fn inverse_utm(&self, utm: &UtmCoordinate) -> CoordResult<GeographicPoint> {
        self.inverse(utm.zone, utm.band, utm.easting, utm.northing)
    }

    /// Unproject a grid cell to a point that projects back into it
    ///
    /// The centre of the cell is used when it lies in the cell's own zone and
    /// band. A cell cut by a zone or band edge has its centre on the wrong
    /// side of that edge at times; the point is then the centroid of the part
    /// of the cell inside the zone and band, found by clipping the cell's
    /// outline against the zone's latitude/longitude window.
    pub fn inverse_within(&self, cell: &GridCell) -> CoordResult<GeographicPoint> {
        let (easting, northing) = cell.centre();
        let centre = self.inverse(cell.zone, cell.band, easting, northing)?;
        if self.lands_in(&centre, cell) {
            return Ok(centre);
        }

        let (south, north) = zones::band_latitudes(cell.band).ok_or(CoordError::InvalidBand(cell.band))?;
        let (west, east) = match zones::zone_longitudes(cell.zone, cell.band) {
            Some(edges) => edges,
            None => {
                debug!("zone {} is not used in band {}", cell.zone, cell.band);
                return Ok(centre);
            },
        };

        let mut outline = Vec::with_capacity(4 * OUTLINE_POINTS_PER_SIDE);
        for (easting, northing) in cell.outline(OUTLINE_POINTS_PER_SIDE) {
            let point = self.inverse(cell.zone, cell.band, easting, northing)?;
            outline.push([point.latitude, zones::longitude_offset(point.longitude, cell.zone)]);
        }

        let meridian = zones::central_meridian(cell.zone);
        let inside = clip_to_window(outline, south, north, west - meridian, east - meridian);
        if inside.is_empty() {
            debug!("cell {:?} lies outside zone {}{}", cell, cell.zone, cell.band);
            return Ok(centre);
        }

        let count = inside.len() as f64;
        let latitude = inside.iter().map(|v| v[0]).sum::<f64>() / count;
        let offset = inside.iter().map(|v| v[1]).sum::<f64>() / count;
        let point = GeographicPoint::new(latitude, zones::normalize_longitude(meridian + offset));

        debug!("centre {} of cell in zone {}{} moved to {}", centre, cell.zone, cell.band, point);
        Ok(point)
    }

    /// Whether `point` selects the cell's zone and band and projects inside the cell
    fn lands_in(&self, point: &GeographicPoint, cell: &GridCell) -> bool {
        let lon = zones::normalize_longitude(point.longitude);
        match zones::band_letter(point.latitude) {
            Ok(band) if band == cell.band => {},
            _ => return false,
        }

        zones::zone_number(point.latitude, lon) == cell.zone
            && self.forward_in_zone(point.latitude, lon, cell.zone)
                .map_or(false, |utm| cell.contains(utm.easting, utm.northing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

    #[test]
    fn test_forward_known_point() {
        let utm = GeodeticProjector::new().forward(37.4215, -119.1892).unwrap();
        assert_eq!(utm.zone, 11);
        assert_eq!(utm.band, 'S');
        assert!((utm.easting - 306_281.618).abs() < 0.01);
        assert!((utm.northing - 4_143_881.948).abs() < 0.01);
    }

    #[test]
    fn test_forward_southern_hemisphere() {
        let utm = GeodeticProjector::new().forward(-33.8688, 151.2093).unwrap();
        assert_eq!(utm.zone, 56);
        assert_eq!(utm.band, 'H');
        assert!((utm.easting - 334_368.634).abs() < 0.01);
        assert!((utm.northing - 6_250_948.345).abs() < 0.01);
    }

    #[test]
    fn test_forward_origin() {
        let utm = GeodeticProjector::new().forward(0.0, 0.0).unwrap();
        assert_eq!(utm.zone, 31);
        assert_eq!(utm.band, 'N');
        assert!((utm.easting - 166_021.443).abs() < 0.01);
        assert!(utm.northing.abs() < 1e-6);
    }

    #[test]
    fn test_norway_zone() {
        assert_eq!(GeodeticProjector::new().forward(60.0, 5.0).unwrap().zone, 32);
    }

    #[test]
    fn test_antimeridian_single_zone() {
        let projector = GeodeticProjector::new();
        let east = projector.forward(10.0, 180.0).unwrap();
        let west = projector.forward(10.0, -180.0).unwrap();
        assert_eq!(east, west);
        assert_eq!(east.zone, 1);
    }

    #[test]
    fn test_domain_violations() {
        let projector = GeodeticProjector::new();
        assert!(matches!(projector.forward(84.1, 0.0), Err(CoordError::InvalidLatitude(_))));
        assert!(matches!(projector.forward(-80.1, 0.0), Err(CoordError::InvalidLatitude(_))));
        assert!(matches!(projector.forward(10.0, 180.5), Err(CoordError::InvalidLongitude(_))));
        assert!(matches!(projector.inverse(0, 'N', 500_000.0, 0.0), Err(CoordError::InvalidZone(0))));
        assert!(matches!(projector.inverse(61, 'N', 500_000.0, 0.0), Err(CoordError::InvalidZone(61))));
        assert!(matches!(projector.inverse(31, 'O', 500_000.0, 0.0), Err(CoordError::InvalidBand('O'))));
    }

    #[test]
    fn test_inverse_central_meridian_equator() {
        let point = GeodeticProjector::new().inverse(31, 'N', 500_000.0, 0.0).unwrap();
        assert!(point.latitude.abs() < 1e-9);
        assert!((point.longitude - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_grid() {
        let projector = GeodeticProjector::new();
        let mut worst: f64 = 0.0;

        let mut lat = -80.0;
        while lat <= 84.0 {
            let mut lon = -180.0;
            while lon < 180.0 {
                let utm = projector.forward(lat, lon).unwrap();
                let back = projector.inverse_utm(&utm).unwrap();
                let error = geometry::distance_meters(&GeographicPoint::new(lat, lon), &back);
                worst = worst.max(error);
                lon += 2.5;
            }
            lat += 2.0;
        }

        assert!(worst < 1.0, "worst round trip error {} m", worst);
    }

    fn square_around(lat: f64, lon: f64, size: f64) -> GridCell {
        let utm = GeodeticProjector::new().forward(lat, lon).unwrap();
        let corner = UtmCoordinate::new(utm.zone, utm.band,
                                        (utm.easting / size).floor() * size,
                                        (utm.northing / size).floor() * size);
        GridCell::square(&corner, size)
    }

    fn assert_lands_in(point: &GeographicPoint, cell: &GridCell) {
        let lon = zones::normalize_longitude(point.longitude);
        assert_eq!(zones::zone_number(point.latitude, lon), cell.zone, "{}", point);
        assert_eq!(zones::band_letter(point.latitude).unwrap(), cell.band, "{}", point);
        let utm = GeodeticProjector::new().forward_in_zone(point.latitude, lon, cell.zone).unwrap();
        assert!(cell.contains(utm.easting, utm.northing), "{} projects to {}", point, utm);
    }

    #[test]
    fn test_forward_in_neighbouring_zone() {
        let projector = GeodeticProjector::new();
        let own = projector.forward(37.0, -114.0001).unwrap();
        let neighbour = projector.forward_in_zone(37.0, -114.0001, 12).unwrap();
        assert_eq!(own.zone, 11);
        assert_eq!(neighbour.zone, 12);
        assert!(own.easting > 500_000.0 && neighbour.easting < 500_000.0);

        let across = projector.forward_in_zone(-79.9, 179.99, 1).unwrap();
        assert!(across.easting < 500_000.0);
    }

    #[test]
    fn test_inverse_within_keeps_centre_when_possible() {
        let cell = square_around(37.4215, -119.1892, 1.0);
        let point = GeodeticProjector::new().inverse_within(&cell).unwrap();
        let (easting, northing) = cell.centre();
        let centre = GeodeticProjector::new().inverse(cell.zone, cell.band, easting, northing).unwrap();
        assert_eq!(point, centre);
    }

    #[test]
    fn test_inverse_within_edge_cells() {
        let projector = GeodeticProjector::new();
        let cases = [
            // Coarse squares cut by a zone edge, including the antimeridian
            (-72.3, 18.04, 100_000.0),
            (-79.4, -179.96, 10_000.0),
            (81.1, 33.2, 100_000.0),
            (60.4, 3.3, 100_000.0),
            // 1 m squares straddling a band edge and a zone edge
            (39.9999999, -117.0, 1.0),
            (37.0, -114.0000001, 1.0),
        ];

        for (lat, lon, size) in cases {
            let cell = square_around(lat, lon, size);
            let point = projector.inverse_within(&cell).unwrap();
            assert_lands_in(&point, &cell);
        }
    }

    #[test]
    fn test_inverse_within_rounded_value() {
        let utm = GeodeticProjector::new().forward(-79.95, 78.00001).unwrap();
        let written = UtmCoordinate::new(utm.zone, utm.band, utm.easting.round(), utm.northing.round());
        let cell = GridCell::rounded(&written, 0);
        let point = GeodeticProjector::new().inverse_within(&cell).unwrap();
        assert_lands_in(&point, &cell);
    }

    #[test]
    fn test_round_trip_zone_edges() {
        let projector = GeodeticProjector::new();
        let edges = [(0.0, 5.999), (70.0, -0.0001), (75.0, 8.99), (75.0, 20.99),
                     (60.0, 11.99), (83.9, 41.99), (-79.9, -179.99), (-0.0001, 2.9)];

        for (lat, lon) in edges {
            let utm = projector.forward(lat, lon).unwrap();
            let back = projector.inverse_utm(&utm).unwrap();
            let error = geometry::distance_meters(&GeographicPoint::new(lat, lon), &back);
            assert!(error < 1.0, "({}, {}) drifted {} m", lat, lon, error);
        }
    }
}
