//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type BillingResult<T> = Result<T, BillingError>;

/// Domain-level error.
///
/// Both variants are fatal to the statement build that raised them: the
/// builder aborts on the first error and returns no partial statement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A performance references a play id absent from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(String),

    /// A play's genre has no registered performance calculator.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),
}

impl BillingError {
    pub fn unknown_play(play_id: impl Into<String>) -> Self {
        Self::UnknownPlay(play_id.into())
    }

    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }
}
