use crate::core::constants::{LATITUDE_BAND_LETTERS, SQUARE_COLUMN_LETTERS, SQUARE_ROW_LETTERS};

/// A letter alphabet used as a cyclic numeral system.
///
/// MGRS letters skip `I` and `O`, so "advance this letter by n" is ordinary
/// modular arithmetic on the position within the restricted alphabet rather
/// than on ASCII codes. The band, column and row alphabets share this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    letters: &'static [u8],
}

/// Latitude band letters (base 20).
pub const LATITUDE_BANDS: Alphabet = Alphabet::new(&LATITUDE_BAND_LETTERS);

/// 100k square column letters (base 24).
pub const SQUARE_COLUMNS: Alphabet = Alphabet::new(&SQUARE_COLUMN_LETTERS);

/// 100k square row letters (base 20).
pub const SQUARE_ROWS: Alphabet = Alphabet::new(&SQUARE_ROW_LETTERS);

impl Alphabet {
    /// Crate-internal: every alphabet is one of the fixed, non-empty tables.
    pub(crate) const fn new(letters: &'static [u8]) -> Self {
        assert!(!letters.is_empty(), "alphabet needs at least one letter");
        Self { letters }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Zero-based position of `letter`, or `None` if it is not part of the alphabet.
    pub fn position(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii() {
            return None;
        }
        self.letters.iter().position(|&b| b == letter as u8)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.position(letter).is_some()
    }

    /// Letter at `index`, wrapping around in both directions.
    pub fn letter_at(&self, index: i64) -> char {
        let wrapped = index.rem_euclid(self.letters.len() as i64) as usize;
        self.letters[wrapped] as char
    }

    /// Advances `origin` by `steps` letters, wrapping past the last letter.
    pub fn advance(&self, origin: char, steps: i64) -> Option<char> {
        let start = self.position(origin)? as i64;
        Some(self.letter_at(start + steps))
    }

    /// Number of forward steps from `origin` to `target`, in `0..len`.
    pub fn steps_between(&self, origin: char, target: char) -> Option<usize> {
        let start = self.position(origin)?;
        let end = self.position(target)?;
        Some((end + self.letters.len() - start) % self.letters.len())
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| b as char)
    }
}
