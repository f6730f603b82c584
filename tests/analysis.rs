#![allow(clippy::unwrap_used)]

use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use caliper::analysis::{AnalyzeFeature, ReportFormat};
use caliper::error::{GeometryError, ProjectionError};
use caliper::geodesy::{Ellipsoid, GeoPoint, MARS};
use caliper::math::Point2;
use caliper::projection::{Equirectangular, LocalOrthographic, LonLat, SpatialRef};
use caliper::CaliperError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A closed ring of `n` vertices approximating a circle of `radius_m`
/// around `center`, digitized in `source` coordinates.
fn crater_ring(center: GeoPoint, radius_m: f64, n: u32, source: &impl SpatialRef) -> Vec<Point2> {
    let plane = LocalOrthographic::new(center, &MARS).unwrap();
    let mut ring: Vec<Point2> = (0..n)
        .map(|k| {
            let t = f64::from(k) * TAU / f64::from(n);
            let geo = plane
                .to_geographic(Point2::new(radius_m * t.cos(), radius_m * t.sin()))
                .unwrap();
            source.from_geographic(geo).unwrap()
        })
        .collect();
    ring.push(ring[0]);
    ring
}

#[test]
fn crater_in_equirectangular_frame() {
    init_tracing();
    let eqc = Equirectangular::new(0.0, 0.0, MARS.a).unwrap();
    let ring = crater_ring(GeoPoint::new(137.4, -4.6), 50_000.0, 72, &eqc);

    let report = AnalyzeFeature::new(&ring, &eqc, MARS).execute().unwrap();

    assert_relative_eq!(report.extent.centroid.lon, 137.4, epsilon = 1e-2);
    assert_relative_eq!(report.extent.centroid.lat, -4.6, epsilon = 1e-2);
    assert!(report.extent.min.lon < 137.4 && report.extent.max.lon > 137.4);
    assert!(report.extent.min.lat < -4.6 && report.extent.max.lat > -4.6);

    assert_relative_eq!(report.diameter_km, 100.0, max_relative = 5e-3);
    assert_relative_eq!(report.area_km2, PI * 50.0 * 50.0, max_relative = 1e-2);
    assert_relative_eq!(report.haversine_km, report.diameter_km, max_relative = 1e-2);

    // The planar diameter and both surface distances agree to within the
    // body's flattening.
    assert!(report.geodesic.converged);
    assert_relative_eq!(report.geodesic_km(), report.diameter_km, max_relative = 1e-2);
}

#[test]
fn hull_drops_concave_vertices() {
    init_tracing();
    // A star: alternating outer and inner vertices; only the outer ones are
    // on the hull.
    let center = GeoPoint::new(-60.0, 20.0);
    let plane = LocalOrthographic::new(center, &MARS).unwrap();
    let ring: Vec<Point2> = (0..10)
        .map(|k| {
            let t = f64::from(k) * TAU / 10.0;
            let r = if k % 2 == 0 { 20_000.0 } else { 8_000.0 };
            let g = plane.to_geographic(Point2::new(r * t.cos(), r * t.sin())).unwrap();
            Point2::new(g.lon, g.lat)
        })
        .collect();

    let report = AnalyzeFeature::new(&ring, &LonLat, MARS).execute().unwrap();
    assert_eq!(report.hull.len(), 5);
    // Diameter of a regular pentagon with circumradius r is 2 r sin(72°).
    let expected_km = 2.0 * 20.0 * (2.0 * PI / 5.0).sin();
    assert_relative_eq!(report.diameter_km, expected_km, max_relative = 5e-3);
}

#[test]
fn unit_square_fixture_on_large_sphere() {
    // Tiny square at the equator: the local plane is effectively the
    // tangent plane, so the diameter is the square's diagonal.
    let r: f64 = 6_378_137.0;
    let side_deg = (1000.0 / r).to_degrees();
    let ring = vec![
        Point2::new(0.0, 0.0),
        Point2::new(side_deg, 0.0),
        Point2::new(side_deg, side_deg),
        Point2::new(0.0, side_deg),
    ];
    let sphere = Ellipsoid::sphere(r).unwrap();
    let report = AnalyzeFeature::new(&ring, &LonLat, sphere).execute().unwrap();
    assert_relative_eq!(report.diameter_km, 2.0_f64.sqrt(), max_relative = 1e-6);
    assert_relative_eq!(report.area_km2, 1.0, max_relative = 1e-6);
    assert_relative_eq!(report.haversine_km, report.geodesic_km(), max_relative = 1e-12);
}

#[test]
fn hemisphere_spanning_feature_fails_to_project() {
    let ring = vec![
        Point2::new(-100.0, 0.0),
        Point2::new(100.0, 0.0),
        Point2::new(0.0, 10.0),
    ];
    let err = AnalyzeFeature::new(&ring, &LonLat, MARS).execute().unwrap_err();
    match err {
        CaliperError::Projection(ProjectionError::OutOfDomain { reference, .. }) => {
            assert!(reference.starts_with("+proj=ortho"), "{reference}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn coincident_vertices_are_degenerate() {
    let ring = vec![Point2::new(3.0, 3.0); 4];
    let err = AnalyzeFeature::new(&ring, &LonLat, MARS).execute().unwrap_err();
    assert!(matches!(
        err,
        CaliperError::Geometry(GeometryError::DegenerateHull(_))
    ));
}

#[test]
fn report_renders_in_lon360() {
    let ring = vec![
        Point2::new(-10.0, 1.0),
        Point2::new(-9.0, 1.0),
        Point2::new(-9.0, 2.0),
        Point2::new(-10.0, 2.0),
    ];
    let report = AnalyzeFeature::new(&ring, &LonLat, MARS).execute().unwrap();
    let text = report.render(
        "Feature 7",
        &ReportFormat {
            decimals: 1,
            lon360: true,
        },
    );
    assert!(text.contains("Centroid: 350.5 E, 1.5"), "{text}");
    assert!(text.contains("Bounding box: 350.0 E, 1.0 and 351.0 E, 2.0"), "{text}");
}
