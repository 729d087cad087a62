use crate::api::mgrs_cell::MgrsCell;
use crate::api::record::UtmRecord;
use crate::core::convert::validate_utm;
use crate::core::projection::forward;
use crate::core::types::{Hemisphere, LatLon, Precision, Utm};
use crate::error::{MgrsError, Result};
use crate::util::coord::Coordinate;
use crate::util::parse::parse_utm;
use geo_types::Point;
use log::debug;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
struct UtmState {
    utm: Utm,
    position: String,
    lat_lon: LatLon,
}

impl UtmState {
    /// Whole-meter UTM positions only. The position must project back into
    /// its own latitude band.
    fn from_utm(utm: Utm) -> Result<Self> {
        let utm = utm.truncated();
        let lat_lon = validate_utm(&utm)?;
        Ok(Self {
            position: utm.to_string(),
            lat_lon,
            utm,
        })
    }

    fn from_lat_lon(position: LatLon) -> Result<Self> {
        Self::from_utm(forward(position.latitude, position.longitude)?)
    }
}

enum Request<'a> {
    Position(&'a str),
    LatLong(LatLon),
    Latitude(f64),
    Longitude(f64),
    Record(&'a UtmRecord),
}

fn try_transition(current: Option<&UtmState>, request: Request<'_>) -> Result<UtmState> {
    match request {
        Request::Position(text) => UtmState::from_utm(parse_utm(text)?.to_utm()?),
        Request::LatLong(position) => UtmState::from_lat_lon(position),
        Request::Latitude(latitude) => {
            let state = current.ok_or(MgrsError::Empty)?;
            UtmState::from_lat_lon(LatLon::new(latitude, state.lat_lon.longitude))
        }
        Request::Longitude(longitude) => {
            let state = current.ok_or(MgrsError::Empty)?;
            UtmState::from_lat_lon(LatLon::new(state.lat_lon.latitude, longitude))
        }
        Request::Record(record) => UtmState::from_utm(record.to_utm()?),
    }
}

/// A mutable UTM position in whole meters, with its WGS84 equivalent.
///
/// Setters follow the same all-or-nothing rule as [`MgrsCell`].
///
/// # Example
///
/// ```
/// use mgrs_rs::UtmCell;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let cell = UtmCell::from_position("4Q 612345 2367890")?;
/// assert_eq!(cell.zone(), Some("4Q".to_string()));
/// assert_eq!(cell.easting(), Some(612345));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtmCell {
    state: Option<UtmState>,
}

impl UtmCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: &str) -> Result<Self> {
        let mut cell = Self::new();
        cell.set_position(position)?;
        Ok(cell)
    }

    /// Projects a WGS84 latitude/longitude, truncating to whole meters.
    pub fn from_lat_long(latitude: f64, longitude: f64) -> Result<Self> {
        let state = UtmState::from_lat_lon(LatLon::new(latitude, longitude))?;
        Ok(Self { state: Some(state) })
    }

    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self> {
        Self::from_lat_long(coord.latitude(), coord.longitude())
    }

    /// Wraps a UTM value, truncated to whole meters.
    ///
    /// # Errors
    ///
    /// - [`MgrsError::Range`] - easting or northing outside the zone grid
    /// - [`MgrsError::Consistency`] - the position lies outside its latitude band
    pub fn from_utm(utm: &Utm) -> Result<Self> {
        Ok(Self {
            state: Some(UtmState::from_utm(*utm)?),
        })
    }

    pub fn from_record(record: &UtmRecord) -> Result<Self> {
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
                debug!("UTM cell update rejected, keeping {:?}: {err}", self.position());
                Err(err)
            }
        }
    }

    pub fn set_position(&mut self, position: &str) -> Result<()> {
        self.apply(Request::Position(position))
    }

    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        self.apply(Request::Latitude(latitude))
    }

    pub fn set_longitude(&mut self, longitude: f64) -> Result<()> {
        self.apply(Request::Longitude(longitude))
    }

    pub fn set_lat_long(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        self.apply(Request::LatLong(LatLon::new(latitude, longitude)))
    }

    pub fn load(&mut self, record: &UtmRecord) -> Result<()> {
        self.apply(Request::Record(record))
    }

    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let record: UtmRecord = serde_json::from_str(json)?;
        self.load(&record)
    }

    pub fn dump(&self) -> Option<UtmRecord> {
        self.utm().as_ref().map(UtmRecord::from)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.dump())?)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    pub fn utm(&self) -> Option<Utm> {
        self.state.as_ref().map(|s| s.utm)
    }

    /// Canonical text, e.g. `"4Q 612345 2367890"`.
    pub fn position(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.position.as_str())
    }

    /// Grid zone designator, e.g. `"4Q"`.
    pub fn zone(&self) -> Option<String> {
        self.utm().map(|u| u.zone.to_string())
    }

    pub fn zone_number(&self) -> Option<u8> {
        self.utm().map(|u| u.zone.zone_number())
    }

    pub fn latitude_band(&self) -> Option<char> {
        self.utm().map(|u| u.zone.band())
    }

    /// Easting in whole meters. Committed eastings always lie in `0..1_000_000`.
    pub fn easting(&self) -> Option<u32> {
        self.utm().map(|u| u.easting as u32)
    }

    /// Northing in whole meters, including the false northing in the south.
    pub fn northing(&self) -> Option<u32> {
        self.utm().map(|u| u.northing as u32)
    }

    pub fn hemisphere(&self) -> Option<Hemisphere> {
        self.utm().map(|u| u.hemisphere())
    }

    pub fn lat_lon(&self) -> Option<LatLon> {
        self.state.as_ref().map(|s| s.lat_lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.lat_lon().map(|p| p.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.lat_lon().map(|p| p.longitude)
    }

    pub fn to_point(&self) -> Option<Point<f64>> {
        self.lat_lon().map(Point::from)
    }

    /// The MGRS reference containing this position, at `precision`.
    pub fn to_mgrs_cell(&self, precision: Precision) -> Result<MgrsCell> {
        match self.utm() {
            Some(utm) => MgrsCell::from_utm(&utm, precision),
            None => Ok(MgrsCell::new()),
        }
    }
}

impl fmt::Display for UtmCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(position) => f.write_str(position),
            None => Ok(()),
        }
    }
}

impl FromStr for UtmCell {
    type Err = MgrsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_position(s)
    }
}
