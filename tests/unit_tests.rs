// Unit tests for Nearby Locations

use nearby_locations::core::{distance::haversine_distance, search::filter_within_radius};
use nearby_locations::models::{Coordinate, Location};

fn location(id: &str, lat: f64, lon: f64) -> Location {
    Location {
        id: id.to_string(),
        name: format!("Location {}", id),
        address: format!("{} Broadway", id),
        latitude: lat,
        longitude: lon,
        category: "park".to_string(),
    }
}

#[test]
fn test_haversine_distance_zero() {
    for (lat, lon) in [(40.7128, -74.0060), (-90.0, 0.0), (0.0, 180.0), (-33.8688, 151.2093)] {
        assert_eq!(haversine_distance(lat, lon, lat, lon), 0.0);
    }
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan_lat = 40.7580;
    let manhattan_lon = -73.9855;
    let brooklyn_lat = 40.6782;
    let brooklyn_lon = -73.9442;

    let distance = haversine_distance(manhattan_lat, manhattan_lon, brooklyn_lat, brooklyn_lon);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_haversine_new_york_to_los_angeles() {
    // Approximately 3944 km
    let distance = haversine_distance(40.7128, -74.0060, 34.0522, -118.2437);
    assert!((distance - 3944.0).abs() < 100.0, "Expected ~3944km, got {}", distance);
}

#[test]
fn test_haversine_symmetry() {
    let points = [
        (40.0, -73.0),
        (40.1, -73.0),
        (51.5074, -0.1278),
        (-33.8688, 151.2093),
        (89.9, 45.0),
    ];

    for a in points {
        for b in points {
            assert_eq!(
                haversine_distance(a.0, a.1, b.0, b.1),
                haversine_distance(b.0, b.1, a.0, a.1),
                "asymmetric for {:?} / {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_one_degree_of_latitude() {
    let distance = haversine_distance(0.0, 0.0, 1.0, 0.0);
    assert!((distance - 111.195).abs() < 0.01, "got {}", distance);
}

#[test]
fn test_filter_matches_distance_predicate() {
    let origin = Coordinate::new(40.7128, -74.0060);
    let radius_km = 25.0;

    let candidates: Vec<Location> = (0..60)
        .map(|i| location(&i.to_string(), 40.7128 + i as f64 * 0.01, -74.0060 + i as f64 * 0.005))
        .collect();

    let expected: Vec<String> = candidates
        .iter()
        .filter(|l| haversine_distance(origin.latitude, origin.longitude, l.latitude, l.longitude) <= radius_km)
        .map(|l| l.id.clone())
        .collect();

    let results = filter_within_radius(origin, candidates, radius_km);
    let ids: Vec<String> = results.iter().map(|r| r.id.clone()).collect();

    assert_eq!(ids, expected);
    assert!(!ids.is_empty() && ids.len() < 60);
    for r in &results {
        assert!(r.distance <= radius_km);
    }
}

#[test]
fn test_filter_point_exactly_on_radius() {
    let origin = Coordinate::new(40.0, -73.0);
    let target = location("edge", 40.1, -73.0);
    let radius_km = haversine_distance(40.0, -73.0, 40.1, -73.0);

    let results = filter_within_radius(origin, vec![target.clone()], radius_km);
    assert_eq!(results.len(), 1);

    let results = filter_within_radius(origin, vec![target], radius_km - 1e-9);
    assert!(results.is_empty());
}

#[test]
fn test_filter_negative_radius_matches_nothing() {
    let origin = Coordinate::new(40.0, -73.0);
    let results = filter_within_radius(origin, vec![location("a", 40.0, -73.0)], -1.0);
    assert!(results.is_empty());
}
