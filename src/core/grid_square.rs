use crate::core::alphabet::{SQUARE_COLUMNS, SQUARE_ROWS};
use crate::core::constants::{
    COLUMNS_PER_SET, GRID_SQUARE_SIZE, SET_COLUMN_ORIGINS, SET_ROW_ORIGINS,
};
use crate::core::types::zone_set;
use crate::error::{MgrsError, Result};
use std::fmt;

/// Two-letter identifier of a 100 km x 100 km square within a UTM zone.
///
/// The column letter counts 100 km easting blocks from the zone set's column
/// origin, the row letter counts 100 km northing blocks from the row origin,
/// both over alphabets without `I` and `O`. Rows repeat every 2,000 km.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSquareId {
    column: char,
    row: char,
}

impl GridSquareId {
    pub fn new(column: char, row: char) -> Result<Self> {
        if !SQUARE_COLUMNS.contains(column) {
            return Err(MgrsError::Range(format!(
                "invalid grid square column letter '{column}'"
            )));
        }
        if !SQUARE_ROWS.contains(row) {
            return Err(MgrsError::Range(format!(
                "invalid grid square row letter '{row}'"
            )));
        }
        Ok(Self { column, row })
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row(&self) -> char {
        self.row
    }

    /// Letters of the square containing a UTM position in `zone_number`.
    ///
    /// # Example
    /// ```
    /// use mgrs_rs::GridSquareId;
    ///
    /// let square = GridSquareId::encode(4, 612345.0, 2367890.0);
    /// assert_eq!(square.to_string(), "FJ");
    /// ```
    pub fn encode(zone_number: u8, easting: f64, northing: f64) -> Self {
        let set = usize::from(zone_set(zone_number)) - 1;
        let size = f64::from(GRID_SQUARE_SIZE);

        let column_index = (easting / size).floor() as i64;
        let row_index = ((northing / size).floor() as i64).rem_euclid(SQUARE_ROWS.len() as i64);

        Self {
            column: SQUARE_COLUMNS.letter_at(SET_COLUMN_ORIGINS[set] + column_index - 1),
            row: SQUARE_ROWS.letter_at(SET_ROW_ORIGINS[set] + row_index),
        }
    }

    /// Lower-left corner of the square as `(easting, northing)` in meters.
    ///
    /// The northing lies in `0..2_000_000`; the caller picks the 2,000 km cycle
    /// that matches the latitude band.
    ///
    /// # Errors
    ///
    /// [`MgrsError::Consistency`] if the column letter is not one of the eight
    /// letters used by the zone's set.
    pub fn decode(&self, zone_number: u8) -> Result<(f64, f64)> {
        let set = usize::from(zone_set(zone_number)) - 1;
        let column_origin = SQUARE_COLUMNS.letter_at(SET_COLUMN_ORIGINS[set]);
        let row_origin = SQUARE_ROWS.letter_at(SET_ROW_ORIGINS[set]);

        let column_steps = SQUARE_COLUMNS
            .steps_between(column_origin, self.column)
            .ok_or_else(|| {
                MgrsError::Range(format!(
                    "invalid grid square column letter '{}'",
                    self.column
                ))
            })?;
        if column_steps >= COLUMNS_PER_SET {
            return Err(MgrsError::Consistency(format!(
                "column letter '{}' is not used in zone {zone_number}",
                self.column
            )));
        }
        let row_steps = SQUARE_ROWS
            .steps_between(row_origin, self.row)
            .ok_or_else(|| {
                MgrsError::Range(format!("invalid grid square row letter '{}'", self.row))
            })?;

        let size = f64::from(GRID_SQUARE_SIZE);
        Ok(((column_steps + 1) as f64 * size, row_steps as f64 * size))
    }
}

impl fmt::Display for GridSquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Letter generation by ASCII arithmetic: advance from the origin letter,
    /// roll over past Z (columns) or V (rows), and bump past I and O.
    fn rollover_letters(column: i64, row: i64, set: usize) -> (char, char) {
        const A: i64 = b'A' as i64;
        const I: i64 = b'I' as i64;
        const O: i64 = b'O' as i64;
        const V: i64 = b'V' as i64;
        const Z: i64 = b'Z' as i64;

        let col_origin = [b'A', b'J', b'S', b'A', b'J', b'S'][set - 1] as i64;
        let row_origin = [b'A', b'F', b'A', b'F', b'A', b'F'][set - 1] as i64;

        let mut col = col_origin + column - 1;
        let mut rollover = false;
        if col > Z {
            col = col - Z + A - 1;
            rollover = true;
        }
        if col == I || (col_origin < I && col > I) || ((col > I || col_origin < I) && rollover) {
            col += 1;
        }
        if col == O || (col_origin < O && col > O) || ((col > O || col_origin < O) && rollover) {
            col += 1;
            if col == I {
                col += 1;
            }
        }
        if col > Z {
            col = col - Z + A - 1;
        }

        let mut r = row_origin + row;
        let rollover = if r > V {
            r = r - V + A - 1;
            true
        } else {
            false
        };
        if r == I || (row_origin < I && r > I) || ((r > I || row_origin < I) && rollover) {
            r += 1;
        }
        if r == O || (row_origin < O && r > O) || ((r > O || row_origin < O) && rollover) {
            r += 1;
            if r == I {
                r += 1;
            }
        }
        if r > V {
            r = r - V + A - 1;
        }

        (col as u8 as char, r as u8 as char)
    }

    #[test]
    fn test_encode_matches_rollover_arithmetic() {
        for zone in 1..=6u8 {
            for column in 1..=8i64 {
                for row in 0..20i64 {
                    let square = GridSquareId::encode(
                        zone,
                        column as f64 * 100_000.0 + 50_000.0,
                        row as f64 * 100_000.0 + 50_000.0,
                    );
                    let expected = rollover_letters(column, row, zone as usize);
                    assert_eq!(
                        (square.column(), square.row()),
                        expected,
                        "zone set {zone}, column {column}, row {row}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_encode_decode_roundtrip_all_zones() -> Result<()> {
        for zone in 1..=60u8 {
            for column_index in 0..8i64 {
                for row_index in 0..20i64 {
                    let easting = (column_index + 1) as f64 * 100_000.0 + 12_345.0;
                    let northing = row_index as f64 * 100_000.0 + 67_890.0;

                    let square = GridSquareId::encode(zone, easting, northing);
                    let (block_e, block_n) = square.decode(zone)?;

                    assert_eq!(block_e, (column_index + 1) as f64 * 100_000.0);
                    assert_eq!(block_n, row_index as f64 * 100_000.0);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_encoded_letters_never_i_or_o() {
        for zone in 1..=60u8 {
            for column in 1..=8 {
                for row in 0..40 {
                    let square =
                        GridSquareId::encode(zone, column as f64 * 100_000.0, row as f64 * 100_000.0);
                    assert!(!matches!(square.column(), 'I' | 'O'));
                    assert!(!matches!(square.row(), 'I' | 'O'));
                }
            }
        }
    }

    #[test]
    fn test_column_sets() {
        let columns = |zone: u8| -> String {
            (1..=8)
                .map(|c| GridSquareId::encode(zone, c as f64 * 100_000.0, 0.0).column())
                .collect()
        };
        assert_eq!(columns(1), "ABCDEFGH");
        assert_eq!(columns(2), "JKLMNPQR");
        assert_eq!(columns(3), "STUVWXYZ");
        assert_eq!(columns(4), "ABCDEFGH");
        assert_eq!(columns(60), "STUVWXYZ");
    }

    #[test]
    fn test_row_sets() {
        let rows = |zone: u8| -> String {
            (0..20)
                .map(|r| GridSquareId::encode(zone, 500_000.0, r as f64 * 100_000.0).row())
                .collect()
        };
        assert_eq!(rows(1), "ABCDEFGHJKLMNPQRSTUV");
        assert_eq!(rows(2), "FGHJKLMNPQRSTUVABCDE");
    }

    #[test]
    fn test_rows_repeat_every_2000km() {
        let a = GridSquareId::encode(31, 500_000.0, 300_000.0);
        let b = GridSquareId::encode(31, 500_000.0, 2_300_000.0);
        let c = GridSquareId::encode(31, 500_000.0, 8_300_000.0);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_known_squares() {
        assert_eq!(GridSquareId::encode(4, 612345.0, 2367890.0).to_string(), "FJ");
        assert_eq!(GridSquareId::encode(33, 600000.0, 5340000.0).to_string(), "XP");
    }

    #[test]
    fn test_decode_known_square() -> Result<()> {
        let square = GridSquareId::new('F', 'J')?;
        assert_eq!(square.decode(4)?, (600_000.0, 300_000.0));
        Ok(())
    }

    #[test]
    fn test_decode_column_outside_zone_set() -> Result<()> {
        let square = GridSquareId::new('J', 'A')?;
        assert!(matches!(square.decode(1), Err(MgrsError::Consistency(_))));
        assert!(square.decode(2).is_ok());
        Ok(())
    }

    #[test]
    fn test_new_rejects_invalid_letters() {
        assert!(matches!(GridSquareId::new('I', 'A'), Err(MgrsError::Range(_))));
        assert!(matches!(GridSquareId::new('A', 'O'), Err(MgrsError::Range(_))));
        assert!(matches!(GridSquareId::new('A', 'W'), Err(MgrsError::Range(_))));
        assert!(matches!(GridSquareId::new('1', 'A'), Err(MgrsError::Range(_))));
    }
}
