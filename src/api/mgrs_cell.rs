use crate::api::format::MgrsFormat;
use crate::api::record::MgrsRecord;
use crate::api::utm_cell::UtmCell;
use crate::core::constants::INVALID_BAND;
use crate::core::convert::{utm_to_mgrs, validate, validate_utm};
use crate::core::projection::{band_designator, forward, inverse};
use crate::core::types::{GridZone, Hemisphere, LatLon, Mgrs, Precision, Utm};
use crate::error::{MgrsError, Result};
use crate::util::coord::Coordinate;
use geo_types::Point;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Committed state of an [`MgrsCell`]. The UTM value is the lower-left
/// corner of the reference, derived once when the state is built.
#[derive(Debug, Clone, PartialEq)]
struct MgrsState {
    mgrs: Mgrs,
    utm: Utm,
    position: String,
}

impl MgrsState {
    fn from_mgrs(mgrs: Mgrs) -> Result<Self> {
        let utm = validate(&mgrs)?;
        Ok(Self {
            position: mgrs.to_string(),
            mgrs,
            utm,
        })
    }

    fn from_lat_lon(position: LatLon, precision: Precision) -> Result<Self> {
        let utm = forward(position.latitude, position.longitude)?;
        Self::from_mgrs(utm_to_mgrs(&utm, precision)?)
    }
}

enum Request<'a> {
    Position(&'a str),
    LatLong(LatLon),
    Latitude(f64),
    Longitude(f64),
    Precision(Precision),
    Record(&'a MgrsRecord),
}

/// Builds the state that `request` leads to from `current`, without
/// touching `current`.
fn try_transition(current: Option<&MgrsState>, request: Request<'_>) -> Result<MgrsState> {
    let precision = current.map_or(Precision::default(), |s| s.mgrs.precision);
    match request {
        Request::Position(text) => MgrsState::from_mgrs(text.parse()?),
        Request::LatLong(position) => MgrsState::from_lat_lon(position, precision),
        Request::Latitude(latitude) => {
            let state = current.ok_or(MgrsError::Empty)?;
            let longitude = inverse(&state.utm).longitude;
            MgrsState::from_lat_lon(LatLon::new(latitude, longitude), precision)
        }
        Request::Longitude(longitude) => {
            let state = current.ok_or(MgrsError::Empty)?;
            let latitude = inverse(&state.utm).latitude;
            MgrsState::from_lat_lon(LatLon::new(latitude, longitude), precision)
        }
        Request::Precision(precision) => {
            let state = current.ok_or(MgrsError::Empty)?;
            MgrsState::from_mgrs(utm_to_mgrs(&state.utm, precision)?)
        }
        Request::Record(record) => MgrsState::from_mgrs(record.to_mgrs()?),
    }
}

/// A mutable, always-consistent MGRS position.
///
/// Every setter is all-or-nothing: when the new value fails to parse or
/// validate, the error is returned and the cell keeps its previous state.
///
/// # Example
///
/// ```
/// use mgrs_rs::MgrsCell;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let mut cell = MgrsCell::from_position("4QFJ1234567890")?;
/// assert_eq!(cell.gzd(), Some("4Q".to_string()));
/// assert_eq!(cell.gsid(), Some("FJ".to_string()));
///
/// // A rejected update leaves the cell untouched
/// assert!(cell.set_position("4QFJ123").is_err());
/// assert_eq!(cell.position(), Some("4QFJ1234567890"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MgrsCell {
    state: Option<MgrsState>,
}

impl MgrsCell {
    /// An empty cell holding no position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates MGRS text.
    ///
    /// # Errors
    ///
    /// Any parse, range or consistency error from the text.
    pub fn from_position(position: &str) -> Result<Self> {
        let mut cell = Self::new();
        cell.set_position(position)?;
        Ok(cell)
    }

    /// Converts a WGS84 latitude/longitude at 1 m precision.
    ///
    /// # Example
    /// ```
    /// use mgrs_rs::MgrsCell;
    ///
    /// # fn main() -> Result<(), mgrs_rs::MgrsError> {
    /// let cell = MgrsCell::from_lat_long(21.409, -157.916)?;
    /// assert_eq!(cell.gzd(), Some("4Q".to_string()));
    /// assert_eq!(cell.gsid(), Some("FJ".to_string()));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_long(latitude: f64, longitude: f64) -> Result<Self> {
        Self::from_lat_long_with_precision(latitude, longitude, Precision::default())
    }

    pub fn from_lat_long_with_precision(
        latitude: f64,
        longitude: f64,
        precision: Precision,
    ) -> Result<Self> {
        let state = MgrsState::from_lat_lon(LatLon::new(latitude, longitude), precision)?;
        Ok(Self { state: Some(state) })
    }

    /// Converts any [`Coordinate`] (x = longitude, y = latitude).
    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self> {
        Self::from_lat_long(coord.latitude(), coord.longitude())
    }

    /// Converts a UTM position at `precision`.
    ///
    /// # Errors
    ///
    /// [`MgrsError::Consistency`] if the UTM position lies outside its
    /// latitude band, [`MgrsError::Range`] if it lies outside the zone grid.
    pub fn from_utm(utm: &Utm, precision: Precision) -> Result<Self> {
        validate_utm(utm)?;
        let state = MgrsState::from_mgrs(utm_to_mgrs(utm, precision)?)?;
        Ok(Self { state: Some(state) })
    }

    pub fn from_record(record: &MgrsRecord) -> Result<Self> {
        let mut cell = Self::new();
        cell.load(record)?;
        Ok(cell)
    }

    fn apply(&mut self, request: Request<'_>) -> Result<()> {
        match try_transition(self.state.as_ref(), request) {
            Ok(state) => {
                self.state = Some(state);
                Ok(())
            }
            Err(err) => {
                debug!("MGRS cell update rejected, keeping {:?}: {err}", self.position());
                Err(err)
            }
        }
    }

    pub fn set_position(&mut self, position: &str) -> Result<()> {
        self.apply(Request::Position(position))
    }

    /// Moves the cell to `latitude`, keeping its longitude and precision.
    ///
    /// # Errors
    ///
    /// [`MgrsError::Empty`] on an empty cell, otherwise any projection error.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        self.apply(Request::Latitude(latitude))
    }

    /// Moves the cell to `longitude`, keeping its latitude and precision.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<()> {
        self.apply(Request::Longitude(longitude))
    }

    pub fn set_lat_long(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        self.apply(Request::LatLong(LatLon::new(latitude, longitude)))
    }

    /// Re-derives the reference at a new precision. Increasing precision
    /// appends zeros since the cell only knows its square's corner.
    pub fn set_precision(&mut self, precision: Precision) -> Result<()> {
        self.apply(Request::Precision(precision))
    }

    /// Replaces the cell with a structured record. The record's `position` is
    /// recomputed from its other fields.
    pub fn load(&mut self, record: &MgrsRecord) -> Result<()> {
        self.apply(Request::Record(record))
    }

    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let record: MgrsRecord = serde_json::from_str(json)?;
        self.load(&record)
    }

    pub fn dump(&self) -> Option<MgrsRecord> {
        self.mgrs().map(MgrsRecord::from)
    }

    /// JSON form of [`dump`](Self::dump); `null` for an empty cell.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.dump())?)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    pub fn mgrs(&self) -> Option<&Mgrs> {
        self.state.as_ref().map(|s| &s.mgrs)
    }

    /// Canonical compact text at the cell's precision.
    pub fn position(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.position.as_str())
    }

    /// Grid zone designator, e.g. `"4Q"`.
    pub fn gzd(&self) -> Option<String> {
        self.mgrs().map(|m| m.zone.to_string())
    }

    /// Grid square identifier, e.g. `"FJ"`.
    pub fn gsid(&self) -> Option<String> {
        self.mgrs().map(|m| m.square.to_string())
    }

    pub fn zone_number(&self) -> Option<u8> {
        self.mgrs().map(|m| m.zone.zone_number())
    }

    pub fn latitude_band(&self) -> Option<char> {
        self.mgrs().map(|m| m.zone.band())
    }

    pub fn square_identification(&self) -> Option<String> {
        self.gsid()
    }

    pub fn easting(&self) -> Option<String> {
        self.mgrs().map(Mgrs::easting_digits)
    }

    pub fn northing(&self) -> Option<String> {
        self.mgrs().map(Mgrs::northing_digits)
    }

    pub fn numerical_location(&self) -> Option<String> {
        self.mgrs().map(Mgrs::numerical_location)
    }

    pub fn precision(&self) -> Option<Precision> {
        self.mgrs().map(|m| m.precision)
    }

    pub fn hemisphere(&self) -> Option<Hemisphere> {
        self.mgrs().map(|m| m.zone.hemisphere())
    }

    /// UTM position of the reference's lower-left corner.
    pub fn utm(&self) -> Option<Utm> {
        self.state.as_ref().map(|s| s.utm)
    }

    pub fn lat_lon(&self) -> Option<LatLon> {
        self.state.as_ref().map(|s| inverse(&s.utm))
    }

    pub fn latitude(&self) -> Option<f64> {
        self.lat_lon().map(|p| p.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.lat_lon().map(|p| p.longitude)
    }

    /// The corner as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Option<Point<f64>> {
        self.lat_lon().map(Point::from)
    }

    /// UTM cell at the reference's lower-left corner.
    ///
    /// The UTM band is the corner's own latitude band. It differs from the
    /// reference's band when a coarse square straddles a band edge.
    pub fn to_utm_cell(&self) -> Result<UtmCell> {
        let Some(utm) = self.utm() else {
            return Ok(UtmCell::new());
        };
        let band = band_designator(inverse(&utm).latitude);
        if band == INVALID_BAND {
            return Err(MgrsError::Consistency(format!(
                "corner {utm} lies outside the latitude bands"
            )));
        }
        let zone = GridZone::new(utm.zone.zone_number(), band)?;
        UtmCell::from_utm(&Utm::new(zone, utm.easting, utm.northing))
    }

    /// Renders the reference with `format`.
    pub fn format(&self, format: &MgrsFormat) -> Result<Option<String>> {
        self.mgrs().map(|m| format.render(m)).transpose()
    }
}

impl fmt::Display for MgrsCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mgrs() {
            Some(m) => write!(
                f,
                "{}{} {} {}",
                m.zone,
                m.square,
                m.easting_digits(),
                m.northing_digits()
            ),
            None => Ok(()),
        }
    }
}

impl FromStr for MgrsCell {
    type Err = MgrsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_position(s)
    }
}
