//! Tests for bounding coordinates and regions

use std::f64::consts::PI;

use crate::config::EARTH_RADIUS_KM;
use crate::coordinate::{BoundingRegion, GeoPoint};
use crate::errors::GeoError;
use super::test_utils::*;

fn rad_point(lon: f64, lat: f64) -> GeoPoint {
    GeoPoint::from_radians_with_radius(lon, lat, EARTH_RADIUS_KM).unwrap()
}

#[test]
fn test_single_box_for_ordinary_point() {
    let bounds = adelaide().bounding_coordinates(800.0).unwrap();
    assert_eq!(bounds.size(), 2);
    assert!(!bounds.is_split());
    assert!(!bounds.is_radians());

    let (min, max) = (bounds[0], bounds[1]);
    assert!(min.lat() < adelaide().lat() && adelaide().lat() < max.lat());
    assert!(min.lon() < adelaide().lon() && adelaide().lon() < max.lon());
}

#[test]
fn test_box_near_north_pole() {
    let distance = 1000.0;
    assert!(alert().distance_to(&north_pole()) < distance);

    let bounds = alert().bounding_coordinates(distance).unwrap();
    assert_eq!(bounds.size(), 2);
    assert_eq!(bounds[0], rad_point(-PI, 1.2830831813688377));
    assert_eq!(bounds[1], rad_point(PI, PI / 2.0));
}

#[test]
fn test_box_near_south_pole() {
    let distance = 1500.0;
    assert!(mcmurdo().distance_to(&south_pole()) < distance);

    let bounds = mcmurdo().bounding_coordinates(distance).unwrap().to_radians();
    assert_eq!(bounds.size(), 2);
    assert_close(bounds[0].lat(), -PI / 2.0, EPSILON);
    assert_close(bounds[0].lon(), -PI, EPSILON);
    assert_close(bounds[1].lat(), -1.1232275454125775, EPSILON);
    assert_close(bounds[1].lon(), PI, EPSILON);
}

#[test]
fn test_two_boxes_near_180th_meridian() {
    let bounds = somosomo().bounding_coordinates(50.0).unwrap();
    assert_eq!(bounds.size(), 4);
    assert!(bounds.is_split());

    let expected = [
        (179.48835163412107, -17.222760097167342),
        (180.0, -16.323439902832657),
        (-180.0, -17.222760097167342),
        (-179.57236563412113, -16.323439902832657),
    ];
    for (point, (lon, lat)) in bounds.iter().zip(expected) {
        assert_close(point.lon(), lon, EPSILON);
        assert_close(point.lat(), lat, EPSILON);
    }
    assert_eq!(bounds[1].lon(), 180.0);
    assert_eq!(bounds[2].lon(), -180.0);
}

#[test]
fn test_two_boxes_west_of_180th_meridian() {
    let bounds = km_point(-179.95, 10.0).bounding_coordinates(50.0).unwrap();
    assert_eq!(bounds.size(), 4);
    assert_close(bounds[0].lon(), 179.59340302530157, 1e-6);
    assert_close(bounds[1].lon(), 180.0, EPSILON);
    assert_close(bounds[2].lon(), -180.0, EPSILON);
    assert_close(bounds[3].lon(), -179.49340302530157, 1e-6);
    assert_close(bounds[0].lat(), 9.550339902832656, 1e-6);
    assert_close(bounds[3].lat(), 10.449660097167342, 1e-6);
}

#[test]
fn test_radian_point_yields_radian_region() {
    let point = somosomo().to_radians();
    let bounds = point.bounding_coordinates(50.0).unwrap();
    assert!(bounds.is_radians());
    assert!(bounds.iter().all(|p| p.is_radians()));
    assert_eq!(bounds[1].lon(), PI);
    assert_eq!(bounds.to_degrees(), somosomo().bounding_coordinates(50.0).unwrap());
}

#[test]
fn test_invalid_distance_is_rejected() {
    for distance in [0.0, -5.0, f64::NAN] {
        let result = sydney().bounding_coordinates(distance);
        assert!(matches!(result, Err(GeoError::InvalidDistance(_))), "distance {}", distance);
    }
}

#[test]
fn test_corners_are_in_canonical_range() {
    let centers = [sydney(), alert(), mcmurdo(), somosomo(), km_point(-179.95, 10.0), north_pole()];
    for center in centers {
        for distance in [1.0, 50.0, 800.0, 5000.0] {
            let bounds = center.bounding_coordinates(distance).unwrap();
            for corner in &bounds {
                assert!(corner.is_valid(), "{} invalid for {} at {}", corner, center, distance);
            }
            for b in bounds.boxes() {
                assert!(b.min.lat() <= b.max.lat());
                assert!(b.min.lon() <= b.max.lon());
            }
        }
    }
}

#[test]
fn test_region_contains_search_circle() {
    let centers = [sydney(), adelaide(), alert(), mcmurdo(), somosomo(), km_point(-179.95, 10.0)];
    for center in centers {
        for distance in [10.0, 250.0, 1200.0] {
            let bounds = center.bounding_coordinates(distance).unwrap();
            for step in 0..72 {
                let bearing = step as f64 * 5.0_f64.to_radians();
                for fraction in [0.25, 0.5, 0.999] {
                    let inside = destination(&center, bearing, distance * fraction);
                    assert!(bounds.contains(&inside),
                            "{} not in {} (center {}, distance {})", inside, bounds, center, distance);
                }
            }
        }
    }
}

#[test]
fn test_latitude_extremes_lie_at_distance() {
    let center = sydney();
    let distance = 300.0;
    let bounds = center.bounding_coordinates(distance).unwrap();

    let south = km_point(center.lon(), bounds[0].lat());
    let north = km_point(center.lon(), bounds[1].lat());
    assert_close(center.distance_to(&south), distance, 1e-6);
    assert_close(center.distance_to(&north), distance, 1e-6);
}

#[test]
fn test_region_from_points() {
    let a = rad_point(0.0, 0.0);
    let b = km_point(10.0, 10.0);
    let region = BoundingRegion::from_points(&[a, b]).unwrap();
    assert!(region.is_radians());
    assert!(region[1].is_radians());
    assert_eq!(region[1], b);
    assert_eq!(region.get(2), None);

    assert!(matches!(BoundingRegion::from_points(&[a]), Err(GeoError::InvalidRegion(1))));
    assert!(matches!(BoundingRegion::from_points(&[a, b, a]), Err(GeoError::InvalidRegion(3))));
    assert!(BoundingRegion::from_points(&[a, b, a, b]).is_ok());
}

#[test]
fn test_region_unit_conversion() {
    let bounds = sydney().bounding_coordinates(100.0).unwrap();
    let radians = bounds.to_radians();
    assert!(radians.is_radians());
    assert_eq!(radians.size(), bounds.size());
    assert_eq!(radians.to_radians(), radians);

    let back = radians.to_degrees();
    for (a, b) in back.iter().zip(bounds.iter()) {
        assert_close(a.lat(), b.lat(), EPSILON);
        assert_close(a.lon(), b.lon(), EPSILON);
    }
}

#[test]
fn test_box_contains_and_display() {
    let region = BoundingRegion::from_points(&[km_point(-10.0, -5.0), km_point(10.0, 5.0)]).unwrap();
    let boxes = region.boxes();
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].to_string(), "-10,-5,10,5");
    assert_eq!(boxes[0].width(), 20.0);
    assert_eq!(boxes[0].height(), 10.0);

    assert!(region.contains(&km_point(0.0, 0.0)));
    assert!(region.contains(&km_point(10.0, 5.0)));
    assert!(region.contains(&km_point(0.0, 0.0).to_radians()));
    assert!(!region.contains(&km_point(11.0, 0.0)));
    assert!(!region.contains(&km_point(0.0, -6.0)));
}

#[test]
fn test_split_region_contains_both_sides() {
    let bounds = somosomo().bounding_coordinates(50.0).unwrap();
    assert_eq!(bounds.boxes().len(), 2);
    assert!(bounds.contains(&km_point(179.9, -16.8)));
    assert!(bounds.contains(&km_point(-179.9, -16.8)));
    assert!(!bounds.contains(&km_point(0.0, -16.8)));
    assert!(bounds.to_string().starts_with("BoundingRegion[GeoPoint("));
}
