/// Latitude band letters, south to north (C-X without I and O)
pub const LATITUDE_BAND_LETTERS: [u8; 20] = *b"CDEFGHJKLMNPQRSTUVWX";

/// 100k square column letters (A-Z without I and O)
pub const SQUARE_COLUMN_LETTERS: [u8; 24] = *b"ABCDEFGHJKLMNPQRSTUVWXYZ";

/// 100k square row letters (A-V without I and O)
pub const SQUARE_ROW_LETTERS: [u8; 20] = *b"ABCDEFGHJKLMNPQRSTUV";

/// Band letter returned for latitudes outside the MGRS limits
pub const INVALID_BAND: char = 'Z';

/// Number of periodic 100k letter-origin sets across the 60 UTM zones
pub const ZONE_SETS: u8 = 6;

/// Column alphabet position of the first column letter for zone sets 1-6
/// (A, J, S, A, J, S)
pub const SET_COLUMN_ORIGINS: [i64; 6] = [0, 8, 16, 0, 8, 16];

/// Row alphabet position of the letter at northing 0 for zone sets 1-6
/// (A, F, A, F, A, F)
pub const SET_ROW_ORIGINS: [i64; 6] = [0, 5, 0, 5, 0, 5];

/// Column letters used by each zone set (eastings 100 km - 900 km)
pub const COLUMNS_PER_SET: usize = 8;

/// Side of a grid square in meters
pub const GRID_SQUARE_SIZE: u32 = 100_000;

/// Northing span after which the row letters repeat
pub const ROW_CYCLE_METERS: f64 = 2_000_000.0;

/// Maximum easting/northing digits in an MGRS numeric location
pub const MAX_PRECISION: u8 = 5;

/// Valid UTM zone numbers
pub const MIN_ZONE_NUMBER: u8 = 1;
pub const MAX_ZONE_NUMBER: u8 = 60;

/// Latitude limits covered by the latitude bands
pub const MIN_LATITUDE: f64 = -80.0;
pub const MAX_LATITUDE: f64 = 84.0;

/// WGS84 semi-major axis (m)
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared
pub const WGS84_ECC_SQUARED: f64 = 0.00669438;

/// UTM central meridian scale factor
pub const UTM_K0: f64 = 0.9996;

/// False easting of every UTM zone (m)
pub const FALSE_EASTING: f64 = 500_000.0;

/// False northing applied south of the equator (m)
pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Lowest UTM northing reached inside each latitude band, indexed like
/// [`LATITUDE_BAND_LETTERS`].
pub const BAND_MIN_NORTHING: [f64; 20] = [
    1_100_000.0, // C
    2_000_000.0, // D
    2_800_000.0, // E
    3_700_000.0, // F
    4_600_000.0, // G
    5_500_000.0, // H
    6_400_000.0, // J
    7_300_000.0, // K
    8_200_000.0, // L
    9_100_000.0, // M
    0.0,         // N
    800_000.0,   // P
    1_700_000.0, // Q
    2_600_000.0, // R
    3_500_000.0, // S
    4_400_000.0, // T
    5_300_000.0, // U
    6_200_000.0, // V
    7_000_000.0, // W
    7_900_000.0, // X
];

/// Slack (degrees) when checking a UTM position against its latitude band,
/// enough for whole-meter truncation at a band edge
pub const BAND_EDGE_TOLERANCE: f64 = 1e-4;

/// UTM eastings lie below this (m)
pub const MAX_UTM_EASTING: f64 = 1_000_000.0;

/// UTM northings never exceed this (m)
pub const MAX_UTM_NORTHING: f64 = 10_000_000.0;
