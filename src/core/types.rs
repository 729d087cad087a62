use crate::core::alphabet::LATITUDE_BANDS;
use crate::core::constants::{
    BAND_MIN_NORTHING, MAX_PRECISION, MAX_ZONE_NUMBER, MIN_ZONE_NUMBER, ZONE_SETS,
};
use crate::core::grid_square::GridSquareId;
use crate::error::{MgrsError, Result};
use geo_types::Point;
use std::fmt;

/// Northern or southern hemisphere, as implied by a latitude band letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Bands `N` and above lie north of the equator.
    pub fn from_band(band: char) -> Self {
        if band >= 'N' {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }
}

/// A grid zone designator: UTM zone number plus latitude band letter (e.g. `4Q`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridZone {
    zone_number: u8,
    band: char,
}

impl GridZone {
    /// Creates a grid zone, rejecting zone numbers outside 1-60 and letters
    /// that are not latitude bands.
    pub fn new(zone_number: u8, band: char) -> Result<Self> {
        if !(MIN_ZONE_NUMBER..=MAX_ZONE_NUMBER).contains(&zone_number) {
            return Err(MgrsError::Range(format!(
                "zone number {zone_number} outside {MIN_ZONE_NUMBER}-{MAX_ZONE_NUMBER}"
            )));
        }
        if !LATITUDE_BANDS.contains(band) {
            return Err(MgrsError::Range(format!("invalid latitude band '{band}'")));
        }
        Ok(Self { zone_number, band })
    }

    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    pub fn band(&self) -> char {
        self.band
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_band(self.band)
    }

    /// Which of the six periodic 100k letter-origin sets this zone uses (1-6).
    pub fn zone_set(&self) -> u8 {
        zone_set(self.zone_number)
    }

    /// Lowest northing (m) inside this zone's latitude band.
    pub fn min_northing(&self) -> f64 {
        LATITUDE_BANDS
            .position(self.band)
            .map_or(0.0, |i| BAND_MIN_NORTHING[i])
    }

    /// Longitude (degrees) of the zone's central meridian.
    pub fn central_meridian(&self) -> f64 {
        central_meridian(self.zone_number)
    }
}

impl fmt::Display for GridZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.zone_number, self.band)
    }
}

/// Maps a zone number onto its 100k letter set, 1-6.
pub fn zone_set(zone_number: u8) -> u8 {
    match zone_number % ZONE_SETS {
        0 => ZONE_SETS,
        set => set,
    }
}

pub fn central_meridian(zone_number: u8) -> f64 {
    (f64::from(zone_number) - 1.0) * 6.0 - 180.0 + 3.0
}

/// Number of digits in each half of an MGRS numeric location.
///
/// `L` digits count in units of `10^(5-L)` meters: five digits is 1 m,
/// zero digits names the 100 km square alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u8);

impl Precision {
    pub const HUNDRED_KILOMETERS: Self = Self(0);
    pub const TEN_KILOMETERS: Self = Self(1);
    pub const KILOMETER: Self = Self(2);
    pub const HUNDRED_METERS: Self = Self(3);
    pub const TEN_METERS: Self = Self(4);
    pub const METER: Self = Self(5);

    pub fn new(digits: u8) -> Result<Self> {
        if digits > MAX_PRECISION {
            return Err(MgrsError::Range(format!(
                "precision of {digits} digits exceeds {MAX_PRECISION}"
            )));
        }
        Ok(Self(digits))
    }

    pub fn digits(self) -> u8 {
        self.0
    }

    /// Meters represented by one unit of the last digit.
    pub fn meters_per_unit(self) -> u32 {
        10u32.pow(u32::from(MAX_PRECISION - self.0))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::METER
    }
}

/// A geographic position on the WGS84 ellipsoid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLon> for Point<f64> {
    fn from(value: LatLon) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

/// A UTM position: grid zone plus easting/northing in meters.
///
/// Southern-hemisphere northings carry the 10,000,000 m false northing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utm {
    pub zone: GridZone,
    pub easting: f64,
    pub northing: f64,
}

impl Utm {
    pub fn new(zone: GridZone, easting: f64, northing: f64) -> Self {
        Self {
            zone,
            easting,
            northing,
        }
    }

    /// Drops the sub-meter part of easting and northing.
    pub fn truncated(&self) -> Self {
        // + 0.0 folds -0.0 into 0.0
        Self::new(
            self.zone,
            self.easting.trunc() + 0.0,
            self.northing.trunc() + 0.0,
        )
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.zone.hemisphere()
    }
}

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.zone,
            self.easting.trunc(),
            self.northing.trunc()
        )
    }
}

/// An MGRS reference: grid zone, 100k square and a numeric location inside
/// the square at some precision.
///
/// `easting` and `northing` are counted in units of
/// [`Precision::meters_per_unit`], so they are always below `10^digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mgrs {
    pub zone: GridZone,
    pub square: GridSquareId,
    pub easting: u32,
    pub northing: u32,
    pub precision: Precision,
}

impl Mgrs {
    pub fn new(
        zone: GridZone,
        square: GridSquareId,
        easting: u32,
        northing: u32,
        precision: Precision,
    ) -> Result<Self> {
        let limit = 10u32.pow(u32::from(precision.digits()));
        if easting >= limit || northing >= limit {
            return Err(MgrsError::Range(format!(
                "numeric location {easting}/{northing} does not fit {} digits",
                precision.digits()
            )));
        }
        Ok(Self {
            zone,
            square,
            easting,
            northing,
            precision,
        })
    }

    /// Easting digits, zero-padded to the precision (empty at 100 km precision).
    pub fn easting_digits(&self) -> String {
        pad_digits(self.easting, self.precision)
    }

    /// Northing digits, zero-padded to the precision (empty at 100 km precision).
    pub fn northing_digits(&self) -> String {
        pad_digits(self.northing, self.precision)
    }

    pub fn numerical_location(&self) -> String {
        format!("{}{}", self.easting_digits(), self.northing_digits())
    }

    /// Renders the reference with each logical field separated by a space.
    pub fn to_separated_string(&self) -> String {
        let mut text = format!("{} {}", self.zone, self.square);
        if self.precision.digits() > 0 {
            text.push(' ');
            text.push_str(&self.easting_digits());
            text.push(' ');
            text.push_str(&self.northing_digits());
        }
        text
    }
}

fn pad_digits(value: u32, precision: Precision) -> String {
    match precision.digits() {
        0 => String::new(),
        width => format!("{:0width$}", value, width = width as usize),
    }
}

impl fmt::Display for Mgrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.zone,
            self.square,
            self.numerical_location()
        )
    }
}
