use crate::core::types::LatLon;
use geo_types::Point;

/// Trait for types that can provide a WGS84 position in degrees.
///
/// Implemented for `(lon, lat)` tuples, `geo_types::Point<f64>` (x = longitude)
/// and [`LatLon`]. This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;

    fn longitude(&self) -> f64 {
        self.x()
    }

    fn latitude(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for LatLon {
    fn x(&self) -> f64 {
        self.longitude
    }
    fn y(&self) -> f64 {
        self.latitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (-157.9, 21.4);
        assert_eq!(tuple.longitude(), -157.9);
        assert_eq!(tuple.latitude(), 21.4);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(-157.9, 21.4);
        assert_eq!(point.longitude(), -157.9);
        assert_eq!(point.latitude(), 21.4);
    }

    #[test]
    fn test_coordinate_trait_latlon() {
        let position = LatLon::new(21.4, -157.9);
        assert_eq!(position.x(), -157.9);
        assert_eq!(position.y(), 21.4);
    }

    #[test]
    fn test_same_result_for_every_type() {
        fn describe<C: Coordinate>(coord: &C) -> (f64, f64) {
            (coord.latitude(), coord.longitude())
        }

        let from_tuple = describe(&(-157.9, 21.4));
        let from_point = describe(&Point::new(-157.9, 21.4));
        let from_latlon = describe(&LatLon::new(21.4, -157.9));

        assert_eq!(from_tuple, from_point);
        assert_eq!(from_tuple, from_latlon);
    }
}
