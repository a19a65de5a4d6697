use crate::coordinate::WGS84Point;
use crate::geohash::errors::GeoHashError;

#[test]
fn test_range_check() {
    assert!(matches!(
        WGS84Point::new(180.0, 240.0),
        Err(GeoHashError::InvalidArgument(_))
    ));
    assert!(WGS84Point::new(-90.5, 0.0).is_err());
    assert!(WGS84Point::new(f64::NAN, 0.0).is_err());
    assert!(WGS84Point::new(90.0, -180.0).is_ok());
}

#[test]
fn test_from_string() {
    let p = WGS84Point::from_string("47.3, 8.5").unwrap();
    assert_eq!(p.latitude(), 47.3);
    assert_eq!(p.longitude(), 8.5);

    assert!(WGS84Point::from_string("47.3").is_err());
    assert!(WGS84Point::from_string("north,8.5").is_err());
    assert!(WGS84Point::from_string("95,8.5").is_err());
}

#[test]
fn test_display() {
    let p = WGS84Point::new(47.25, -8.5).unwrap();
    assert_eq!(p.to_string(), "(47.25,-8.5)");
}
