use crate::core::constants::MAX_PRECISION;
use crate::core::convert::validate;
use crate::core::grid_square::GridSquareId;
use crate::core::types::{GridZone, Mgrs, Precision, Utm};
use crate::error::{MgrsError, Result};
use std::str::FromStr;

/// Maximum accepted length of an MGRS or UTM string (exclusive)
const MAX_INPUT_LEN: usize = 20;
/// MGRS strings must be longer than this
const MIN_MGRS_LEN: usize = 3;
/// UTM strings must be at least this long
const MIN_UTM_LEN: usize = 6;

/// An MGRS string split into its fields. Letters have not been checked
/// against the band/square alphabets yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MgrsParts {
    /// Uppercased input with whitespace removed
    pub position: String,
    pub zone_number: u8,
    pub band: char,
    pub column: char,
    pub row: char,
    pub easting: String,
    pub northing: String,
}

impl MgrsParts {
    /// Grid zone designator, e.g. `"4Q"`.
    pub fn gzd(&self) -> String {
        format!("{}{}", self.zone_number, self.band)
    }

    /// Grid square identifier, e.g. `"FJ"`.
    pub fn gsid(&self) -> String {
        format!("{}{}", self.column, self.row)
    }

    /// Checks every field against its alphabet and range and builds the value.
    ///
    /// This does not check consistency; see [`validate`].
    pub fn to_mgrs(&self) -> Result<Mgrs> {
        let zone = GridZone::new(self.zone_number, self.band)?;
        let square = GridSquareId::new(self.column, self.row)?;
        mgrs_from_fields(zone, square, &self.easting, &self.northing)
    }
}

/// A UTM string split into its fields. The band letter has not been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmParts {
    /// Uppercased tokens joined by single spaces
    pub position: String,
    pub zone_number: u8,
    pub band: char,
    pub easting: u32,
    pub northing: u32,
}

impl UtmParts {
    pub fn zone(&self) -> String {
        format!("{}{}", self.zone_number, self.band)
    }

    pub fn to_utm(&self) -> Result<Utm> {
        let zone = GridZone::new(self.zone_number, self.band)?;
        Ok(Utm::new(
            zone,
            f64::from(self.easting),
            f64::from(self.northing),
        ))
    }
}

/// Splits an MGRS string into zone, band, square letters and digit halves.
///
/// Whitespace anywhere in the input is ignored and letters are uppercased.
/// The zone takes two characters when the first two are both digits, one
/// otherwise. Digit halves longer than five characters are cut to five.
///
/// # Example
/// ```
/// use mgrs_rs::parse_mgrs;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let parts = parse_mgrs("4qfj 12345 67890")?;
/// assert_eq!(parts.gzd(), "4Q");
/// assert_eq!(parts.gsid(), "FJ");
/// assert_eq!(parts.easting, "12345");
/// assert_eq!(parts.northing, "67890");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`MgrsError::Format`] - input of 3 characters or fewer, 20 or more, or a
///   numeric tail of odd length
/// - [`MgrsError::Type`] - non-ASCII input, no leading zone digit, or a
///   non-digit in the numeric tail
pub fn parse_mgrs(input: &str) -> Result<MgrsParts> {
    let trimmed = input.trim();
    check_length(trimmed, MIN_MGRS_LEN + 1)?;

    let position: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    let bytes = position.as_bytes();

    if !bytes[0].is_ascii_digit() {
        return Err(MgrsError::Type(format!(
            "'{position}' does not start with a zone number"
        )));
    }
    let zone_width = if bytes.len() > 1 && bytes[1].is_ascii_digit() {
        2
    } else {
        1
    };
    if bytes.len() < zone_width + 3 {
        return Err(MgrsError::Format(format!(
            "'{position}' is too short for zone, band and square letters"
        )));
    }

    let zone_number = parse_zone_digits(&position[..zone_width])?;
    let band = bytes[zone_width] as char;
    let column = bytes[zone_width + 1] as char;
    let row = bytes[zone_width + 2] as char;

    let tail = &position[zone_width + 3..];
    if tail.len() % 2 != 0 {
        return Err(MgrsError::Format(format!(
            "numeric location '{tail}' has unequal halves"
        )));
    }
    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MgrsError::Type(format!(
            "numeric location '{tail}' must contain only digits"
        )));
    }

    let half = tail.len() / 2;
    let keep = half.min(usize::from(MAX_PRECISION));
    let easting = tail[..keep].to_string();
    let northing = tail[half..half + keep].to_string();

    Ok(MgrsParts {
        position,
        zone_number,
        band,
        column,
        row,
        easting,
        northing,
    })
}

/// Splits a UTM string of the form `"<zone><band> <easting> <northing>"`.
///
/// # Errors
///
/// - [`MgrsError::Format`] - fewer than 6 or 20 or more characters, or not
///   exactly three whitespace-separated tokens
/// - [`MgrsError::Type`] - a zone, easting or northing that is not made of digits
/// - [`MgrsError::Range`] - a zone number with more than two digits
pub fn parse_utm(input: &str) -> Result<UtmParts> {
    let trimmed = input.trim();
    check_length(trimmed, MIN_UTM_LEN)?;

    let upper = trimmed.to_ascii_uppercase();
    let tokens: Vec<&str> = upper.split_whitespace().collect();
    let [zone, easting, northing] = tokens.as_slice() else {
        return Err(MgrsError::Format(format!(
            "'{trimmed}' needs exactly three parts: zone, easting, northing"
        )));
    };

    let (zone_number, band) = parse_gzd(zone)?;
    let easting = parse_digits(easting, "easting")?;
    let northing = parse_digits(northing, "northing")?;

    Ok(UtmParts {
        position: tokens.join(" "),
        zone_number,
        band,
        easting,
        northing,
    })
}

/// Splits a grid zone designator such as `"4Q"` or `"31u"` into zone number and band.
pub fn parse_gzd(text: &str) -> Result<(u8, char)> {
    let text = text.trim();
    if !text.is_ascii() {
        return Err(MgrsError::Type(format!("'{text}' is not a grid zone")));
    }
    if text.len() < 2 {
        return Err(MgrsError::Format(format!(
            "grid zone '{text}' needs a zone number and a band letter"
        )));
    }
    let (digits, band) = text.split_at(text.len() - 1);
    let band = band.as_bytes()[0].to_ascii_uppercase() as char;
    Ok((parse_zone_digits(digits)?, band))
}

/// Splits a grid square identifier such as `"FJ"` into column and row letters.
pub fn parse_gsid(text: &str) -> Result<(char, char)> {
    let upper = text.trim().to_ascii_uppercase();
    let mut letters = upper.chars();
    match (letters.next(), letters.next(), letters.next()) {
        (Some(column), Some(row), None) => Ok((column, row)),
        _ => Err(MgrsError::Format(format!(
            "grid square '{text}' must be exactly two letters"
        ))),
    }
}

/// Parses a string of ASCII digits. An empty string is zero.
pub fn parse_digits(text: &str, what: &str) -> Result<u32> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MgrsError::Type(format!(
            "{what} '{text}' must contain only digits"
        )));
    }
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<u32>()
        .map_err(|_| MgrsError::Range(format!("{what} '{text}' is too large")))
}

fn parse_zone_digits(digits: &str) -> Result<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MgrsError::Type(format!(
            "zone number '{digits}' must be digits"
        )));
    }
    if digits.len() > 2 {
        return Err(MgrsError::Range(format!(
            "zone number '{digits}' outside 1-60"
        )));
    }
    digits
        .parse::<u8>()
        .map_err(|_| MgrsError::Type(format!("zone number '{digits}' must be digits")))
}

fn check_length(text: &str, min_len: usize) -> Result<()> {
    if !text.is_ascii() {
        return Err(MgrsError::Type(format!(
            "'{text}' contains non-ASCII characters"
        )));
    }
    if text.len() >= MAX_INPUT_LEN {
        return Err(MgrsError::Format(format!(
            "'{text}' exceeds max length of {} characters",
            MAX_INPUT_LEN - 1
        )));
    }
    if text.len() < min_len {
        return Err(MgrsError::Format(format!("'{text}' is too short")));
    }
    Ok(())
}

/// Builds an MGRS value from a zone, square and equal-length digit strings.
pub fn mgrs_from_fields(
    zone: GridZone,
    square: GridSquareId,
    easting: &str,
    northing: &str,
) -> Result<Mgrs> {
    if easting.len() != northing.len() {
        return Err(MgrsError::Format(format!(
            "easting '{easting}' and northing '{northing}' differ in length"
        )));
    }
    if easting.len() > usize::from(MAX_PRECISION) {
        return Err(MgrsError::Format(format!(
            "easting '{easting}' has more than {MAX_PRECISION} digits"
        )));
    }
    let precision = Precision::new(easting.len() as u8)?;
    Mgrs::new(
        zone,
        square,
        parse_digits(easting, "easting")?,
        parse_digits(northing, "northing")?,
        precision,
    )
}

impl FromStr for Mgrs {
    type Err = MgrsError;

    /// Parses and fully validates an MGRS string.
    fn from_str(s: &str) -> Result<Self> {
        let mgrs = parse_mgrs(s)?.to_mgrs()?;
        validate(&mgrs)?;
        Ok(mgrs)
    }
}

impl FromStr for Utm {
    type Err = MgrsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_utm(s)?.to_utm()
    }
}
