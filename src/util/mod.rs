pub mod coord;
pub mod parse;

pub use coord::Coordinate;
pub use parse::{MgrsParts, UtmParts, parse_gsid, parse_gzd, parse_mgrs, parse_utm};
