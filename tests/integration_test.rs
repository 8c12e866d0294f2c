//! Integration tests for the public CoordKit API

extern crate std;

use coordkit::geometry;
use coordkit::{CoordError, CoordKit, FormatKind, FormatOptions, GeographicPoint};

fn sample_points() -> Vec<GeographicPoint> {
    [
        (37.4215, -119.1892),
        (-33.8688, 151.2093),
        (51.5074, -0.1278),
        (60.0, 5.0),
        (78.2, 15.6),
        (-79.5, -170.3),
        (10.0, 179.9),
        (83.5, -40.0),
        (38.8977, -77.0365),
    ]
    .iter()
    .map(|&(lat, lon)| GeographicPoint::new(lat, lon))
    .collect()
}

/// Points within centimeters of a band or zone edge
fn edge_points() -> Vec<GeographicPoint> {
    [
        (39.9999999, -117.0),
        (37.0, -114.0000001),
        (-72.0000001, 23.99),
        (63.99, 2.9999999),
        (72.0000001, 8.9999999),
        (-79.9, -179.9999999),
        (0.0000001, 179.9999999),
        (-0.0000001, 0.0000001),
        (60.0, 11.9999999),
        (83.9999999, 41.9),
        (-79.95, 78.00001),
        (47.8, -180.0),
    ]
    .iter()
    .map(|&(lat, lon)| GeographicPoint::new(lat, lon))
    .collect()
}

/// Worst-case error in meters for each format at its default precision
fn resolution_meters(kind: FormatKind) -> f64 {
    match kind {
        FormatKind::DD => 8.0,
        FormatKind::DMS => 3.0,
        FormatKind::DDM => 1.5,
        FormatKind::UTM => 1.0,
        FormatKind::MGRS => 1.0,
    }
}

#[test]
fn test_known_fixtures() {
    let kit = CoordKit::new();
    let mammoth = GeographicPoint::new(37.4215, -119.1892);

    std::assert_eq!(kit.format(&mammoth, FormatKind::DD, &FormatOptions::default()).unwrap(),
                    "37.4215° N, 119.1892° W");
    std::assert_eq!(kit.projector().forward(37.4215, -119.1892).unwrap().zone, 11);
    std::assert_eq!(kit.projector().forward(60.0, 5.0).unwrap().zone, 32);

    let sf = GeographicPoint::new(37.7749, -122.4194);
    let la = GeographicPoint::new(34.0522, -118.2437);
    std::assert!((kit.distance(&sf, &la) - 347.0).abs() < 5.0);

    std::assert_eq!(kit.bearing_to_compass(44.0), "NE");
    std::assert_eq!(kit.bearing_to_compass(0.0), "N");
    std::assert_eq!(kit.format_bearing(45.0), "045° (NE)");
}

#[test]
fn test_format_parse_inverse() {
    let kit = CoordKit::new();

    for point in sample_points() {
        for kind in FormatKind::ALL {
            for options in [FormatOptions::default(), FormatOptions::compact()] {
                let text = kit.format(&point, kind, &options).unwrap();
                let parsed = kit.parse_detailed(&text).unwrap();
                std::assert_eq!(parsed.format, kind, "{}", text);

                let error = geometry::distance_meters(&point, &parsed.point);
                std::assert!(error <= resolution_meters(kind),
                             "{} drifted {} m from {}", text, error, point);
            }
        }
    }
}

#[test]
fn test_format_is_idempotent() {
    let kit = CoordKit::new();

    for point in sample_points().into_iter().chain(edge_points()) {
        for kind in FormatKind::ALL {
            let options = FormatOptions::default();
            let first = kit.format(&point, kind, &options).unwrap();
            let reparsed = kit.parse(&first).unwrap();
            let second = kit.format(&reparsed, kind, &options).unwrap();
            std::assert_eq!(first, second);

            let third = kit.format(&kit.parse(&second).unwrap(), kind, &options).unwrap();
            std::assert_eq!(second, third);
        }
    }
}

#[test]
fn test_mgrs_idempotent_at_every_precision() {
    let kit = CoordKit::new();
    let mut points = edge_points();
    // Some of these longitudes fall on zone edges (-84, 90, ...)
    for i in 0..97 {
        for j in 0..125 {
            let lon = -179.7 + 2.9 * j as f64;
            if lon < 180.0 {
                points.push(GeographicPoint::new(-79.5 + 1.7 * i as f64, lon));
            }
        }
    }

    for point in points {
        for precision in 0..=5u8 {
            let options = FormatOptions::default().with_precision(precision);
            let first = kit.format(&point, FormatKind::MGRS, &options).unwrap();
            let second = kit.format(&kit.parse(&first).unwrap(), FormatKind::MGRS, &options).unwrap();
            std::assert_eq!(first, second, "{} at precision {}", point, precision);
        }
    }
}

#[test]
fn test_references_cut_by_edges_reformat_unchanged() {
    let kit = CoordKit::new();
    let cases = [
        ("34C CE", 0),
        ("1C DM 3 7", 1),
        ("11S NE 00000 27757", 5),
        ("11S QA 66962 99080", 5),
    ];

    for (text, precision) in cases {
        let options = FormatOptions::default().with_precision(precision);
        let point = kit.parse(text).unwrap();
        std::assert_eq!(kit.format(&point, FormatKind::MGRS, &options).unwrap(), text);
    }

    let point = kit.parse("44C 441580E 1122488N").unwrap();
    std::assert_eq!(kit.format(&point, FormatKind::UTM, &FormatOptions::default()).unwrap(),
                    "44C 441580E 1122488N");
}

#[test]
fn test_mgrs_round_trip_each_precision() {
    let kit = CoordKit::new();
    let point = GeographicPoint::new(-33.8688, 151.2093);
    let utm = kit.to_utm(&point).unwrap();

    for precision in 0..=5u8 {
        let mgrs = kit.to_mgrs(&point, precision).unwrap();
        std::assert_eq!(mgrs.precision, precision);
        std::assert_eq!(mgrs.easting.len(), precision as usize);

        let back = kit.from_mgrs(&mgrs).unwrap();
        let resolution = 10f64.powi(5 - precision as i32);
        std::assert!((utm.easting - back.easting).abs() <= resolution);
        std::assert!((utm.northing - back.northing).abs() <= resolution);
    }
}

#[test]
fn test_utm_round_trip_through_api() {
    let kit = CoordKit::new();
    for point in sample_points() {
        let utm = kit.to_utm(&point).unwrap();
        let back = kit.from_utm(&utm).unwrap();
        std::assert!(geometry::distance_meters(&point, &back) < 1.0);
    }
}

#[test]
fn test_boundaries() {
    let kit = CoordKit::new();
    let origin = GeographicPoint::new(0.0, 0.0);
    std::assert_eq!(kit.format(&origin, FormatKind::DDM, &FormatOptions::default()).unwrap(),
                    "0° 0.000' N, 0° 0.000' E");

    let east = kit.to_utm(&GeographicPoint::new(-45.0, 180.0)).unwrap();
    let west = kit.to_utm(&GeographicPoint::new(-45.0, -180.0)).unwrap();
    std::assert_eq!(east.zone, west.zone);
    std::assert_eq!(east.zone, 1);
}

#[test]
fn test_user_input_errors() {
    let kit = CoordKit::new();
    std::assert!(std::matches!(kit.parse("not a coordinate"), Err(CoordError::ParseFailure(_))));
    std::assert!(!kit.is_valid("not a coordinate"));
    std::assert!(kit.is_valid("11S LB 06281 43881"));

    let error = kit.parse("123.0, 45.0").unwrap_err();
    std::assert_eq!(error.kind_name(), "OutOfRange");
}

#[test]
fn test_convert_and_format_all() {
    let kit = CoordKit::new();
    std::assert_eq!(kit.convert("37.4215, -119.1892", FormatKind::MGRS, &FormatOptions::compact()).unwrap(),
                    "11SLB0628143881");

    let polar = GeographicPoint::new(88.0, 10.0);
    let all = kit.format_all(&polar, &FormatOptions::default());
    std::assert_eq!(all.len(), 5);
    std::assert!(all[0].1.is_ok());
    std::assert!(std::matches!(all[3].1, Err(CoordError::InvalidLatitude(_))));
    std::assert!(std::matches!(all[4].1, Err(CoordError::InvalidLatitude(_))));
}
