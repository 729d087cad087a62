pub mod alphabet;
pub mod constants;
pub mod convert;
pub mod grid_square;
pub mod projection;
pub mod types;

pub use alphabet::{Alphabet, LATITUDE_BANDS, SQUARE_COLUMNS, SQUARE_ROWS};
pub use constants::{INVALID_BAND, MAX_LATITUDE, MIN_LATITUDE};
pub use convert::{disambiguate_northing, mgrs_to_utm, utm_to_mgrs, validate, validate_utm};
pub use grid_square::GridSquareId;
pub use projection::{TransverseMercator, band_designator, forward, inverse, zone_number};
pub use types::{GridZone, Hemisphere, LatLon, Mgrs, Precision, Utm};
