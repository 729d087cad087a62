use crate::core::constants::{
    BAND_EDGE_TOLERANCE, GRID_SQUARE_SIZE, MAX_UTM_EASTING, MAX_UTM_NORTHING, ROW_CYCLE_METERS,
};
use crate::core::grid_square::GridSquareId;
use crate::core::projection::{band_designator, inverse};
use crate::core::types::{GridZone, LatLon, Mgrs, Precision, Utm};
use crate::error::{MgrsError, Result};
use log::trace;

/// Moves a 100k row origin up by whole 2,000 km cycles until it reaches the
/// lowest northing of the zone's latitude band.
pub fn disambiguate_northing(northing_block: f64, zone: GridZone) -> f64 {
    let min_northing = zone.min_northing();
    let mut northing = northing_block;
    while northing < min_northing {
        northing += ROW_CYCLE_METERS;
    }
    trace!("northing block {northing_block} -> {northing} for band {}", zone.band());
    northing
}

/// Converts an MGRS reference to the UTM position of its lower-left corner.
///
/// At 100 km precision this is the corner of the grid square itself.
///
/// # Example
/// ```
/// use mgrs_rs::{Mgrs, mgrs_to_utm};
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let mgrs: Mgrs = "4QFJ1234567890".parse()?;
/// let utm = mgrs_to_utm(&mgrs)?;
/// assert_eq!(utm.to_string(), "4Q 612345 2367890");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`MgrsError::Consistency`] if the column letter does not belong to the zone.
pub fn mgrs_to_utm(mgrs: &Mgrs) -> Result<Utm> {
    let (easting_block, northing_block) = mgrs.square.decode(mgrs.zone.zone_number())?;
    let northing_block = disambiguate_northing(northing_block, mgrs.zone);

    let unit = f64::from(mgrs.precision.meters_per_unit());
    Ok(Utm::new(
        mgrs.zone,
        easting_block + f64::from(mgrs.easting) * unit,
        northing_block + f64::from(mgrs.northing) * unit,
    ))
}

/// Converts a UTM position to an MGRS reference at `precision`.
///
/// Digits are truncated, never rounded, so the reference names the square
/// that contains the position.
pub fn utm_to_mgrs(utm: &Utm, precision: Precision) -> Result<Mgrs> {
    let square = GridSquareId::encode(utm.zone.zone_number(), utm.easting, utm.northing);
    let unit = precision.meters_per_unit();

    let easting = within_square(utm.easting) / unit;
    let northing = within_square(utm.northing) / unit;

    Mgrs::new(utm.zone, square, easting, northing, precision)
}

/// Whole meters past the last 100 km boundary.
fn within_square(meters: f64) -> u32 {
    (meters.floor() as i64).rem_euclid(i64::from(GRID_SQUARE_SIZE)) as u32
}

/// Resolves an MGRS reference to UTM and checks that the UTM position maps
/// back onto exactly the same reference.
///
/// # Errors
///
/// [`MgrsError::Consistency`] when the grid square, easting or northing do not
/// survive the round trip.
pub fn validate(mgrs: &Mgrs) -> Result<Utm> {
    let utm = mgrs_to_utm(mgrs)?;
    let derived = utm_to_mgrs(&utm, mgrs.precision)?;

    if derived.zone != mgrs.zone {
        return Err(MgrsError::Consistency(format!(
            "grid zone {} re-derives as {}",
            mgrs.zone, derived.zone
        )));
    }
    if derived.square != mgrs.square {
        return Err(MgrsError::Consistency(format!(
            "grid square {} re-derives as {}",
            mgrs.square, derived.square
        )));
    }
    if derived.easting != mgrs.easting || derived.northing != mgrs.northing {
        return Err(MgrsError::Consistency(format!(
            "numeric location {} re-derives as {}",
            mgrs.numerical_location(),
            derived.numerical_location()
        )));
    }
    Ok(utm)
}

/// Checks that a UTM position lies inside its zone's latitude band and
/// returns the geographic position.
///
/// Positions within [`BAND_EDGE_TOLERANCE`] degrees of the band edge pass.
///
/// # Errors
///
/// - [`MgrsError::Range`] - easting outside `0..1_000_000` or northing outside
///   `0..=10_000_000`
/// - [`MgrsError::Consistency`] - the position projects outside the band
pub fn validate_utm(utm: &Utm) -> Result<LatLon> {
    if !(0.0..MAX_UTM_EASTING).contains(&utm.easting)
        || !(0.0..=MAX_UTM_NORTHING).contains(&utm.northing)
    {
        return Err(MgrsError::Range(format!(
            "UTM easting/northing {} {} outside the zone grid",
            utm.easting, utm.northing
        )));
    }

    let position = inverse(utm);
    let latitude = position.latitude;
    let band = utm.zone.band();
    let in_band = latitude.is_finite()
        && position.longitude.is_finite()
        && [latitude, latitude - BAND_EDGE_TOLERANCE, latitude + BAND_EDGE_TOLERANCE]
            .into_iter()
            .any(|lat| band_designator(lat) == band);
    if !in_band {
        return Err(MgrsError::Consistency(format!(
            "{utm} lies at latitude {latitude:.5}, outside band {band}"
        )));
    }
    Ok(position)
}
