use crate::core::convert::{mgrs_to_utm, utm_to_mgrs};
use crate::core::types::{Mgrs, Precision};
use crate::error::Result;

/// Separator placed between the fields of rendered MGRS text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// `4QFJ1234567890`
    #[default]
    None,
    /// `4Q FJ 12345 67890`
    Space,
}

/// Configuration for rendering MGRS references.
///
/// # Example
/// ```
/// use mgrs_rs::{MgrsFormat, Precision};
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let format = MgrsFormat::new(Precision::HUNDRED_METERS).separated();
/// let mgrs = "4QFJ1234567890".parse()?;
/// assert_eq!(format.render(&mgrs)?, "4Q FJ 123 678");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MgrsFormat {
    pub precision: Precision,
    pub separator: Separator,
}

impl MgrsFormat {
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            separator: Separator::default(),
        }
    }

    /// Put a space between zone, square, easting and northing.
    pub fn separated(mut self) -> Self {
        self.separator = Separator::Space;
        self
    }

    pub fn compact(mut self) -> Self {
        self.separator = Separator::None;
        self
    }

    /// Renders `mgrs` at this format's precision.
    ///
    /// Coarser precisions truncate digits. Finer precisions than the value
    /// carries pad with zeros, since the value names its square's corner.
    pub fn render(&self, mgrs: &Mgrs) -> Result<String> {
        let value = if mgrs.precision == self.precision {
            *mgrs
        } else {
            utm_to_mgrs(&mgrs_to_utm(mgrs)?, self.precision)?
        };
        Ok(match self.separator {
            Separator::None => value.to_string(),
            Separator::Space => value.to_separated_string(),
        })
    }
}
