//! Roll validation errors.

use thiserror::Error;

/// Why a roll was rejected.
///
/// Both kinds are raised synchronously from roll conversion or
/// [`Frame::bowl`](crate::Frame::bowl) and leave the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    /// The input is not a well-formed integer pin count.
    #[error("the number of pins knocked down must be an integer, got `{0}`")]
    InvalidType(String),

    /// Negative, or more pins than are standing.
    #[error("cannot knock down {pins} pins with {standing} standing")]
    Range {
        /// The rejected count.
        pins: i64,
        /// Pins that were available to this roll.
        standing: u8,
    },
}

impl RollError {
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, RollError::InvalidType(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, RollError::Range { .. })
    }
}
