//! Unit tests for coordinates and haversine distance.

use super::support::{north_of, user_position};
use crate::feed::domain::{
    Coordinates, FeedDomainError, distance_label, haversine_km, round_km,
};
use rstest::rstest;

fn coords(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates::new(latitude, longitude).expect("valid coordinates")
}

#[rstest]
#[case(coords(40.7128, -74.006))]
#[case(coords(0.0, 0.0))]
#[case(coords(-33.8688, 151.2093))]
#[case(coords(90.0, 180.0))]
fn distance_to_self_is_zero(#[case] point: Coordinates) {
    assert!(haversine_km(point, point).abs() < 1e-12);
}

#[rstest]
#[case(coords(40.7128, -74.006), coords(34.0522, -118.2437))]
#[case(coords(51.5074, -0.1278), coords(48.8566, 2.3522))]
#[case(coords(-33.8688, 151.2093), coords(35.6762, 139.6503))]
#[case(coords(0.0, 179.9), coords(0.0, -179.9))]
fn distance_is_symmetric(#[case] a: Coordinates, #[case] b: Coordinates) {
    let forward = haversine_km(a, b);
    let backward = haversine_km(b, a);
    assert!(
        (forward - backward).abs() < 1e-9,
        "{forward} != {backward}"
    );
}

#[rstest]
#[case(coords(40.7128, -74.006), coords(34.0522, -118.2437), 3935.75)]
#[case(coords(51.5074, -0.1278), coords(48.8566, 2.3522), 343.56)]
#[case(coords(0.0, 179.9), coords(0.0, -179.9), 22.24)]
fn distance_matches_known_values(
    #[case] a: Coordinates,
    #[case] b: Coordinates,
    #[case] expected_km: f64,
) {
    let distance = haversine_km(a, b);
    assert!(
        (distance - expected_km).abs() < 0.5,
        "expected about {expected_km} km, got {distance}"
    );
}

#[rstest]
#[case(5.0)]
#[case(29.99)]
#[case(30.01)]
fn meridian_offsets_measure_back_to_their_distance(#[case] km: f64) {
    let origin = user_position();
    let distance = origin.distance_km(north_of(origin, km));
    assert!((distance - km).abs() < 1e-6, "{distance} vs {km}");
}

#[rstest]
#[case(12.345_678, "12.35 km")]
#[case(0.0, "0.00 km")]
#[case(29.996, "30.00 km")]
#[case(7.1, "7.10 km")]
fn distance_label_rounds_to_two_places(#[case] km: f64, #[case] expected: &str) {
    assert_eq!(distance_label(km), expected);
}

#[rstest]
fn rounding_is_for_display_only() {
    let distance = 30.004;
    assert!((round_km(distance) - 30.0).abs() < f64::EPSILON);
    assert!(distance > 30.0);
}

#[rstest]
#[case(90.5, 0.0)]
#[case(-91.0, 0.0)]
#[case(0.0, 180.5)]
#[case(0.0, -181.0)]
#[case(f64::NAN, 0.0)]
#[case(0.0, f64::INFINITY)]
fn invalid_coordinates_are_rejected(#[case] latitude: f64, #[case] longitude: f64) {
    let result = Coordinates::new(latitude, longitude);
    assert!(matches!(
        result,
        Err(FeedDomainError::InvalidCoordinates { .. })
    ));
}

#[rstest]
fn out_of_range_coordinates_fail_to_deserialize() {
    let result: Result<Coordinates, _> =
        serde_json::from_str(r#"{"latitude": 123.0, "longitude": 10.0}"#);
    assert!(result.is_err());
}
