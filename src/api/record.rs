use crate::core::convert::validate;
use crate::core::grid_square::GridSquareId;
use crate::core::types::{GridZone, Mgrs, Utm};
use crate::error::{MgrsError, Result};
use crate::util::parse::{mgrs_from_fields, parse_digits, parse_gsid, parse_gzd};
use serde::{Deserialize, Serialize};

/// Structured snapshot of an MGRS cell.
///
/// ```json
/// {"position":"4QFJ1234567890","gzd":"4Q","gsid":"FJ","easting":"12345","northing":"67890"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MgrsRecord {
    pub position: String,
    pub gzd: String,
    pub gsid: String,
    pub easting: String,
    pub northing: String,
}

impl MgrsRecord {
    /// Rebuilds and validates the MGRS value from the structured fields.
    /// `position` is not consulted.
    pub fn to_mgrs(&self) -> Result<Mgrs> {
        let (zone_number, band) = parse_gzd(&self.gzd)?;
        let (column, row) = parse_gsid(&self.gsid)?;
        let mgrs = mgrs_from_fields(
            GridZone::new(zone_number, band)?,
            GridSquareId::new(column, row)?,
            self.easting.trim(),
            self.northing.trim(),
        )?;
        validate(&mgrs)?;
        Ok(mgrs)
    }
}

impl From<&Mgrs> for MgrsRecord {
    fn from(mgrs: &Mgrs) -> Self {
        Self {
            position: mgrs.to_string(),
            gzd: mgrs.zone.to_string(),
            gsid: mgrs.square.to_string(),
            easting: mgrs.easting_digits(),
            northing: mgrs.northing_digits(),
        }
    }
}

/// Structured snapshot of a UTM cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmRecord {
    pub position: String,
    pub zone: String,
    pub easting: String,
    pub northing: String,
}

impl UtmRecord {
    /// Rebuilds the UTM value from zone, easting and northing.
    pub fn to_utm(&self) -> Result<Utm> {
        let (zone_number, band) = parse_gzd(&self.zone)?;
        let easting = self.easting.trim();
        let northing = self.northing.trim();
        if easting.is_empty() || northing.is_empty() {
            return Err(MgrsError::Format(
                "UTM record needs both easting and northing".to_string(),
            ));
        }
        Ok(Utm::new(
            GridZone::new(zone_number, band)?,
            f64::from(parse_digits(easting, "easting")?),
            f64::from(parse_digits(northing, "northing")?),
        ))
    }
}

impl From<&Utm> for UtmRecord {
    fn from(utm: &Utm) -> Self {
        let utm = utm.truncated();
        Self {
            position: utm.to_string(),
            zone: utm.zone.to_string(),
            easting: utm.easting.to_string(),
            northing: utm.northing.to_string(),
        }
    }
}
