//! # mgrs-rs
//!
//! Conversions between MGRS references, UTM positions and WGS84
//! latitude/longitude. There are three main entry points.
//!
//! ### 1. `MgrsCell` - MGRS Positions
//!
//! ```
//! use mgrs_rs::MgrsCell;
//!
//! # fn main() -> Result<(), mgrs_rs::MgrsError> {
//! let mut cell = MgrsCell::from_position("4QFJ1234567890")?;
//! println!("{} -> {:?}", cell, cell.utm());
//!
//! cell.set_lat_long(-33.8688, 151.2093)?;
//! assert_eq!(cell.gzd(), Some("56H".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `UtmCell` - UTM Positions
//!
//! ```
//! use mgrs_rs::{Precision, UtmCell};
//!
//! # fn main() -> Result<(), mgrs_rs::MgrsError> {
//! let cell = UtmCell::from_lat_long(21.409, -157.916)?;
//! println!("{}", cell);
//!
//! let mgrs = cell.to_mgrs_cell(Precision::HUNDRED_METERS)?;
//! assert_eq!(mgrs.gsid(), Some("FJ".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `ToMgrs` - Batch Conversion
//!
//! Convert slices of `(lon, lat)` tuples or `geo_types::Point`s in parallel:
//!
//! ```
//! use mgrs_rs::ToMgrs;
//! use geo_types::point;
//!
//! let points = vec![point! { x: 16.3, y: 48.2 }, point! { x: 2.35, y: 48.85 }];
//! for cell in points.to_mgrs_cells().into_iter().flatten() {
//!     println!("{}", cell);
//! }
//! ```
//!
//! The lower-level conversions are also exported:
//!
//! ```
//! use mgrs_rs::{Mgrs, forward, mgrs_to_utm, utm_to_mgrs};
//!
//! # fn main() -> Result<(), mgrs_rs::MgrsError> {
//! let utm = forward(48.2, 16.3)?;
//! let mgrs: Mgrs = utm_to_mgrs(&utm, mgrs_rs::Precision::METER)?;
//! let corner = mgrs_to_utm(&mgrs)?;
//! assert!(utm.easting - corner.easting < 1.0);
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod error;
pub mod util;

pub use api::{MgrsCell, MgrsFormat, MgrsRecord, Separator, ToMgrs, UtmCell, UtmRecord};
pub use crate::core::{
    GridSquareId, GridZone, Hemisphere, LatLon, Mgrs, Precision, TransverseMercator, Utm,
    band_designator, forward, inverse, mgrs_to_utm, utm_to_mgrs, validate, validate_utm,
    zone_number,
};
pub use error::{MgrsError, Result};
pub use util::{Coordinate, parse_mgrs, parse_utm};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_reference_fields() -> Result<()> {
        let cell = MgrsCell::from_position("4QFJ1234567890")?;
        assert_eq!(cell.gzd().as_deref(), Some("4Q"));
        assert_eq!(cell.gsid().as_deref(), Some("FJ"));
        assert_eq!(cell.easting().as_deref(), Some("12345"));
        assert_eq!(cell.northing().as_deref(), Some("67890"));
        Ok(())
    }

    #[test]
    fn test_end_to_end_workflow() -> Result<()> {
        let mut cell = MgrsCell::from_wgs84(&point! { x: -157.916, y: 21.409 })?;
        assert_eq!(cell.gzd().as_deref(), Some("4Q"));

        let utm_cell = cell.to_utm_cell()?;
        let back = utm_cell.to_mgrs_cell(Precision::METER)?;
        assert_eq!(back.position(), cell.position());

        let json = cell.to_json()?;
        cell.set_lat_long(60.0, 4.0)?;
        assert_eq!(cell.zone_number(), Some(32));

        cell.load_json(&json)?;
        assert_eq!(cell.position(), back.position());
        Ok(())
    }

    #[test]
    fn test_mgrs_roundtrip_every_precision() -> Result<()> {
        for text in ["4QFJ1234567890", "4QFJ12346789", "4QFJ123678", "4QFJ1267", "4QFJ16", "4QFJ"] {
            let cell = MgrsCell::from_position(text)?;
            let utm = cell.to_utm_cell()?;
            let precision = cell.precision().ok_or(MgrsError::Empty)?;
            let back = utm.to_mgrs_cell(precision)?;
            assert_eq!(back.position(), Some(text));
        }

        for text in ["33UXP0412345678", "33UXP04123456", "33UXP041234", "33UXP0412", "33UXP04", "33UXP"] {
            let mgrs: Mgrs = text.parse()?;
            let back = utm_to_mgrs(&mgrs_to_utm(&mgrs)?, mgrs.precision)?;
            assert_eq!(back.to_string(), text);
        }
        Ok(())
    }

    #[test]
    fn test_lat_long_roundtrip() -> Result<()> {
        let mut latitude = -79.5;
        while latitude < 84.0 {
            let mut longitude = -179.5;
            while longitude < 180.0 {
                let utm = forward(latitude, longitude)?;
                let back = inverse(&utm);
                assert!((back.latitude - latitude).abs() < 1e-5, "{latitude},{longitude}");
                assert!((back.longitude - longitude).abs() < 1e-5, "{latitude},{longitude}");
                longitude += 7.3;
            }
            latitude += 4.1;
        }
        Ok(())
    }

    #[test]
    fn test_zone_exceptions() -> Result<()> {
        assert_eq!(forward(60.0, 4.0)?.zone.zone_number(), 32);
        assert_eq!(forward(75.0, 10.0)?.zone.zone_number(), 33);
        assert_eq!(forward(75.0, 35.0)?.zone.zone_number(), 36);
        assert_eq!(forward(10.0, 180.0)?.zone.zone_number(), 60);
        Ok(())
    }

    #[test]
    fn test_band_sentinel() {
        assert_eq!(band_designator(85.0), 'Z');
        assert_eq!(band_designator(-85.0), 'Z');
    }

    #[test]
    fn test_invalid_mutation_leaves_cell_unchanged() -> Result<()> {
        let mut cell = MgrsCell::from_position("4QFJ1234567890")?;
        let before = cell.clone();

        assert!(cell.set_position("4QFJ12345").is_err());

        assert_eq!(cell, before);
        assert_eq!(cell.position(), before.position());
        assert_eq!(cell.gzd(), before.gzd());
        assert_eq!(cell.gsid(), before.gsid());
        assert_eq!(cell.easting(), before.easting());
        assert_eq!(cell.northing(), before.northing());
        assert_eq!(cell.latitude(), before.latitude());
        assert_eq!(cell.longitude(), before.longitude());
        Ok(())
    }

    #[test]
    fn test_formats_and_records() -> Result<()> {
        let cell = MgrsCell::from_position("4Q FJ 12345 67890")?;
        let format = MgrsFormat::new(Precision::TEN_METERS).separated();
        assert_eq!(cell.format(&format)?.as_deref(), Some("4Q FJ 1234 6789"));

        let record: MgrsRecord = cell.dump().ok_or(MgrsError::Empty)?;
        assert_eq!(MgrsCell::from_record(&record)?, cell);

        let utm_record: UtmRecord = cell.to_utm_cell()?.dump().ok_or(MgrsError::Empty)?;
        assert_eq!(utm_record.position, "4Q 612345 2367890");
        Ok(())
    }
}
