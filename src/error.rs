use thiserror::Error;

/// Result alias used throughout mgrs-rs.
pub type Result<T> = std::result::Result<T, MgrsError>;

/// Error type for mgrs-rs operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MgrsError {
    /// Input does not have the expected text or numeric shape (e.g. a letter where digits belong).
    #[error("Invalid input type: {0}")]
    Type(String),
    /// Length or character-count violation (too short, too long, odd-length numeric tail).
    #[error("Invalid format: {0}")]
    Format(String),
    /// Zone number, band/column/row letter or latitude/longitude outside its valid range.
    #[error("Out of range: {0}")]
    Range(String),
    /// The structured fields do not survive re-derivation from the equivalent coordinate.
    #[error("Inconsistent coordinate: {0}")]
    Consistency(String),
    /// A latitude or longitude was set on a cell that holds no position.
    #[error("Cell holds no position")]
    Empty,
    /// JSON encoding or decoding of a structured record failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MgrsError {
    fn from(err: serde_json::Error) -> Self {
        MgrsError::Serialization(err.to_string())
    }
}
