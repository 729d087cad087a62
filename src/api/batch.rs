use crate::api::mgrs_cell::MgrsCell;
use crate::api::utm_cell::UtmCell;
use crate::core::types::Precision;
use crate::error::Result;
use crate::util::coord::Coordinate;
use rayon::prelude::*;

/// Converts many WGS84 positions at once. Each position succeeds or fails on
/// its own; results come back in input order.
///
/// # Example
/// ```
/// use mgrs_rs::ToMgrs;
///
/// let positions = vec![(-157.916, 21.409), (151.2093, -33.8688), (0.0, 85.0)];
/// let cells = positions.to_mgrs_cells();
///
/// assert_eq!(cells[0].as_ref().ok().and_then(|c| c.gzd()), Some("4Q".to_string()));
/// assert_eq!(cells[1].as_ref().ok().and_then(|c| c.gzd()), Some("56H".to_string()));
/// assert!(cells[2].is_err());
/// ```
pub trait ToMgrs {
    /// MGRS cells at 1 m precision.
    fn to_mgrs_cells(&self) -> Vec<Result<MgrsCell>>;
    fn to_mgrs_cells_with_precision(&self, precision: Precision) -> Vec<Result<MgrsCell>>;
    fn to_utm_cells(&self) -> Vec<Result<UtmCell>>;
}

impl<C: Coordinate + Sync> ToMgrs for [C] {
    fn to_mgrs_cells(&self) -> Vec<Result<MgrsCell>> {
        self.to_mgrs_cells_with_precision(Precision::default())
    }

    fn to_mgrs_cells_with_precision(&self, precision: Precision) -> Vec<Result<MgrsCell>> {
        self.par_iter()
            .map(|c| MgrsCell::from_lat_long_with_precision(c.latitude(), c.longitude(), precision))
            .collect()
    }

    fn to_utm_cells(&self) -> Vec<Result<UtmCell>> {
        self.par_iter().map(UtmCell::from_wgs84).collect()
    }
}
