//! Transverse Mercator projection between WGS84 latitude/longitude and UTM.
//!
//! Uses the classic series expansion in powers of the eccentricity (Snyder,
//! "Map Projections: A Working Manual", p. 61-64). The series coefficients are
//! derived from the ellipsoid constants once and shared by every conversion.

use crate::core::alphabet::LATITUDE_BANDS;
use crate::core::constants::{
    FALSE_EASTING, FALSE_NORTHING_SOUTH, INVALID_BAND, MAX_LATITUDE, MIN_LATITUDE, UTM_K0,
    WGS84_A, WGS84_ECC_SQUARED,
};
use crate::core::types::{GridZone, Hemisphere, LatLon, Utm, central_meridian};
use crate::error::{MgrsError, Result};
use log::trace;
use std::sync::LazyLock;

/// Series coefficients of the transverse Mercator projection for one ellipsoid.
#[derive(Debug, Clone, PartialEq)]
pub struct TransverseMercator {
    /// Semi-major axis (m)
    pub a: f64,
    /// First eccentricity squared
    pub ecc_squared: f64,
    /// Second eccentricity squared, e² / (1 - e²)
    pub ecc_prime_squared: f64,
    /// Central meridian scale factor
    pub k0: f64,
    /// Meridional arc coefficients for φ, sin 2φ, sin 4φ, sin 6φ
    pub arc: [f64; 4],
    /// e1 = (1 - √(1 - e²)) / (1 + √(1 - e²))
    pub e1: f64,
    /// Footpoint latitude coefficients for sin 2μ, sin 4μ, sin 6μ
    pub footpoint: [f64; 3],
}

static WGS84: LazyLock<TransverseMercator> =
    LazyLock::new(|| TransverseMercator::new(WGS84_A, WGS84_ECC_SQUARED, UTM_K0));

impl TransverseMercator {
    pub fn new(a: f64, ecc_squared: f64, k0: f64) -> Self {
        let e2 = ecc_squared;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        let arc = [
            1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0,
            3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0,
            15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0,
            35.0 * e6 / 3072.0,
        ];

        let root = (1.0 - e2).sqrt();
        let e1 = (1.0 - root) / (1.0 + root);
        let footpoint = [
            3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0,
            21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0,
            151.0 * e1.powi(3) / 96.0,
        ];

        Self {
            a,
            ecc_squared: e2,
            ecc_prime_squared: e2 / (1.0 - e2),
            k0,
            arc,
            e1,
            footpoint,
        }
    }

    /// The WGS84 / UTM instance used by every conversion in this crate.
    pub fn wgs84() -> &'static Self {
        &WGS84
    }

    /// Meridional arc length (m) from the equator to latitude `phi` (radians).
    pub fn meridional_arc(&self, phi: f64) -> f64 {
        let [c0, c2, c4, c6] = self.arc;
        self.a
            * (c0 * phi - c2 * (2.0 * phi).sin() + c4 * (4.0 * phi).sin()
                - c6 * (6.0 * phi).sin())
    }

    /// Divisor turning an arc length into the rectifying latitude μ.
    pub fn rectifying_radius(&self) -> f64 {
        self.a * self.arc[0]
    }

    /// Projects a point onto the transverse Mercator plane of a central
    /// meridian, returning `(easting, northing)` before any false northing.
    pub fn project(&self, latitude: f64, longitude: f64, central_meridian: f64) -> (f64, f64) {
        let e2 = self.ecc_squared;
        let ep2 = self.ecc_prime_squared;

        let lat = latitude.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let tan_lat = lat.tan();

        let n = self.a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let t = tan_lat * tan_lat;
        let c = ep2 * cos_lat * cos_lat;
        let a = cos_lat * (longitude.to_radians() - central_meridian.to_radians());
        let m = self.meridional_arc(lat);

        let easting = self.k0
            * n
            * (a + (1.0 - t + c) * a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
            + FALSE_EASTING;

        let northing = self.k0
            * (m + n
                * tan_lat
                * (a * a / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6)
                        / 720.0));

        (easting, northing)
    }

    /// Inverse of [`TransverseMercator::project`]: plane coordinates with the
    /// false northing already removed, back to `(latitude, longitude)` degrees.
    pub fn unproject(&self, easting: f64, northing: f64, central_meridian: f64) -> (f64, f64) {
        let e2 = self.ecc_squared;
        let ep2 = self.ecc_prime_squared;
        let [f2, f4, f6] = self.footpoint;

        let x = easting - FALSE_EASTING;
        let mu = (northing / self.k0) / self.rectifying_radius();
        let phi1 = mu + f2 * (2.0 * mu).sin() + f4 * (4.0 * mu).sin() + f6 * (6.0 * mu).sin();

        let (sin_phi1, cos_phi1) = phi1.sin_cos();
        let tan_phi1 = phi1.tan();
        let denom = 1.0 - e2 * sin_phi1 * sin_phi1;

        let n1 = self.a / denom.sqrt();
        let t1 = tan_phi1 * tan_phi1;
        let c1 = ep2 * cos_phi1 * cos_phi1;
        let r1 = self.a * (1.0 - e2) / denom.powf(1.5);
        let d = x / (n1 * self.k0);

        let lat = phi1
            - (n1 * tan_phi1 / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);

        let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos_phi1;

        (lat.to_degrees(), central_meridian + lon.to_degrees())
    }
}

/// Latitude band letter for `latitude`, or `'Z'` outside the -80°..84° MGRS limits.
///
/// Bands are 8° tall except `X`, which covers 72°..84°.
///
/// # Example
/// ```
/// use mgrs_rs::band_designator;
///
/// assert_eq!(band_designator(21.4), 'Q');
/// assert_eq!(band_designator(85.0), 'Z');
/// ```
pub fn band_designator(latitude: f64) -> char {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return INVALID_BAND;
    }
    let index = (((latitude - MIN_LATITUDE) / 8.0).floor() as i64).min(19);
    LATITUDE_BANDS.letter_at(index)
}

/// UTM zone number for a position, including the Norway and Svalbard exceptions.
///
/// Within 72°..84° the longitudes 33°..37° and from 42° east keep their
/// regular zone.
pub fn zone_number(latitude: f64, longitude: f64) -> u8 {
    if longitude == 180.0 {
        return 60;
    }

    let mut zone = (((longitude + 180.0) / 6.0).floor() as i64 + 1).clamp(1, 60) as u8;

    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        trace!("Norway exception: zone {zone} -> 32 at ({latitude}, {longitude})");
        zone = 32;
    }

    if (72.0..84.0).contains(&latitude) {
        let svalbard = match longitude {
            lon if (0.0..9.0).contains(&lon) => Some(31),
            lon if (9.0..21.0).contains(&lon) => Some(33),
            lon if (21.0..33.0).contains(&lon) => Some(35),
            lon if (37.0..42.0).contains(&lon) => Some(37),
            _ => None,
        };
        if let Some(exception) = svalbard {
            trace!("Svalbard exception: zone {zone} -> {exception} at ({latitude}, {longitude})");
            zone = exception;
        }
    }

    zone
}

/// Converts WGS84 latitude/longitude (degrees) to UTM.
///
/// # Example
/// ```
/// use mgrs_rs::forward;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let utm = forward(0.0, 3.0)?;
/// assert_eq!(utm.zone.to_string(), "31N");
/// assert!((utm.easting - 500000.0).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`MgrsError::Type`] - latitude or longitude is not a finite number
/// - [`MgrsError::Range`] - latitude outside -80°..84° or longitude outside -180°..180°
pub fn forward(latitude: f64, longitude: f64) -> Result<Utm> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(MgrsError::Type(format!(
            "latitude/longitude must be finite, got ({latitude}, {longitude})"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(MgrsError::Range(format!(
            "longitude {longitude} outside -180..180"
        )));
    }

    let band = band_designator(latitude);
    if band == INVALID_BAND {
        return Err(MgrsError::Range(format!(
            "latitude {latitude} outside {MIN_LATITUDE}..{MAX_LATITUDE}"
        )));
    }

    let zone_number = zone_number(latitude, longitude);
    let zone = GridZone::new(zone_number, band)?;

    let (easting, mut northing) =
        TransverseMercator::wgs84().project(latitude, longitude, zone.central_meridian());
    if latitude < 0.0 {
        northing += FALSE_NORTHING_SOUTH;
    }

    Ok(Utm::new(zone, easting, northing))
}

/// Converts a UTM position back to WGS84 latitude/longitude (degrees).
///
/// The hemisphere comes from the band letter: bands below `N` have the
/// southern false northing removed first.
pub fn inverse(utm: &Utm) -> LatLon {
    let northing = match utm.hemisphere() {
        Hemisphere::South => utm.northing - FALSE_NORTHING_SOUTH,
        Hemisphere::North => utm.northing,
    };
    let (latitude, longitude) = TransverseMercator::wgs84().unproject(
        utm.easting,
        northing,
        central_meridian(utm.zone.zone_number()),
    );
    LatLon::new(latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let relative = ((actual - expected) / expected).abs();
        assert!(relative < 1e-10, "{actual} vs {expected}");
    }

    #[test]
    fn test_wgs84_series_constants() {
        let tm = TransverseMercator::wgs84();

        assert_close(tm.ecc_prime_squared, 0.006739496752268451);
        assert_close(tm.e1, 0.0016792203888649744);
        assert_close(tm.rectifying_radius(), 6367449.145945056);

        assert_close(tm.arc[0], 0.9983242984503243);
        assert_close(tm.arc[1], 0.002514607064228144);
        assert_close(tm.arc[2], 2.639046602129982e-06);
        assert_close(tm.arc[3], 3.418046101696858e-09);

        assert_close(tm.footpoint[0], 0.002518826588112575);
        assert_close(tm.footpoint[1], 3.7009490465577744e-06);
        assert_close(tm.footpoint[2], 7.447813800519332e-09);
    }

    #[test]
    fn test_band_designator() {
        assert_eq!(band_designator(0.0), 'N');
        assert_eq!(band_designator(-0.1), 'M');
        assert_eq!(band_designator(-80.0), 'C');
        assert_eq!(band_designator(71.9), 'W');
        assert_eq!(band_designator(72.0), 'X');
        assert_eq!(band_designator(84.0), 'X');
        assert_eq!(band_designator(56.0), 'V');
        assert_eq!(band_designator(21.4), 'Q');
    }

    #[test]
    fn test_band_designator_out_of_limits() {
        assert_eq!(band_designator(85.0), INVALID_BAND);
        assert_eq!(band_designator(-85.0), INVALID_BAND);
        assert_eq!(band_designator(-80.0001), INVALID_BAND);
        assert_eq!(band_designator(f64::NAN), INVALID_BAND);
    }

    #[test]
    fn test_band_designator_never_restricted_letters() {
        let mut lat = -80.0;
        while lat <= 84.0 {
            let band = band_designator(lat);
            assert!(!matches!(band, 'I' | 'O' | 'Z'), "latitude {lat}");
            lat += 0.25;
        }
    }

    #[test]
    fn test_default_zone_numbers() {
        assert_eq!(zone_number(0.0, -180.0), 1);
        assert_eq!(zone_number(0.0, -177.0), 1);
        assert_eq!(zone_number(0.0, 0.0), 31);
        assert_eq!(zone_number(0.0, 179.9), 60);
        assert_eq!(zone_number(0.0, 180.0), 60);
    }

    #[test]
    fn test_norway_exception() -> Result<()> {
        assert_eq!(zone_number(60.0, 4.0), 32);
        assert_eq!(forward(60.0, 4.0)?.zone.zone_number(), 32);
        assert_eq!(forward(55.9, 4.0)?.zone.zone_number(), 31);
        assert_eq!(forward(64.0, 4.0)?.zone.zone_number(), 31);
        assert_eq!(forward(60.0, 2.9)?.zone.zone_number(), 31);
        Ok(())
    }

    #[test]
    fn test_svalbard_exception() -> Result<()> {
        assert_eq!(forward(75.0, 10.0)?.zone.zone_number(), 33);
        assert_eq!(forward(75.0, 8.0)?.zone.zone_number(), 31);
        assert_eq!(forward(75.0, 22.0)?.zone.zone_number(), 35);
        assert_eq!(forward(75.0, 38.0)?.zone.zone_number(), 37);
        assert_eq!(forward(71.0, 10.0)?.zone.zone_number(), 32);
        Ok(())
    }

    #[test]
    fn test_svalbard_gaps_keep_default_zone() -> Result<()> {
        // 33°..37° and 42°.. fall back to the regular zone
        assert_eq!(forward(75.0, 34.0)?.zone.zone_number(), 36);
        assert_eq!(forward(75.0, 36.5)?.zone.zone_number(), 37);
        assert_eq!(forward(75.0, 43.0)?.zone.zone_number(), 38);
        Ok(())
    }

    #[test]
    fn test_forward_on_central_meridian() -> Result<()> {
        let utm = forward(0.0, 3.0)?;
        assert_eq!(utm.zone.to_string(), "31N");
        assert!((utm.easting - 500_000.0).abs() < 1e-6);
        assert!(utm.northing.abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_forward_southern_hemisphere() -> Result<()> {
        let utm = forward(-33.9, 151.0)?;
        assert_eq!(utm.zone.to_string(), "56H");
        assert!(utm.northing > 6_000_000.0 && utm.northing < 6_500_000.0);
        Ok(())
    }

    #[test]
    fn test_forward_rejects_out_of_limits() {
        assert!(matches!(forward(85.0, 0.0), Err(MgrsError::Range(_))));
        assert!(matches!(forward(-85.0, 0.0), Err(MgrsError::Range(_))));
        assert!(matches!(forward(0.0, 181.0), Err(MgrsError::Range(_))));
        assert!(matches!(forward(f64::NAN, 0.0), Err(MgrsError::Type(_))));
        assert!(matches!(forward(0.0, f64::INFINITY), Err(MgrsError::Type(_))));
    }

    #[test]
    fn test_roundtrip_grid() -> Result<()> {
        let mut lat = -79.5;
        while lat < 84.0 {
            let mut lon = -179.5;
            while lon < 180.0 {
                let utm = forward(lat, lon)?;
                let back = inverse(&utm);
                assert!(
                    (back.latitude - lat).abs() < 1e-5 && (back.longitude - lon).abs() < 1e-5,
                    "({lat}, {lon}) -> {utm} -> ({}, {})",
                    back.latitude,
                    back.longitude
                );
                lon += 7.25;
            }
            lat += 3.5;
        }
        Ok(())
    }

    #[test]
    fn test_roundtrip_exception_zones() -> Result<()> {
        for (lat, lon) in [(60.0, 3.1), (63.9, 11.9), (75.0, 0.5), (83.0, 20.9), (73.0, 41.5)] {
            let back = inverse(&forward(lat, lon)?);
            assert!((back.latitude - lat).abs() < 1e-5);
            assert!((back.longitude - lon).abs() < 1e-5);
        }
        Ok(())
    }
}
