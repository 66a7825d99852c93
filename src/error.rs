//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when converting text or numbers into cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Text does not name one of the four suits.
    #[error("unknown suit")]
    UnknownSuit,
    /// Text does not name one of the thirteen ranks.
    #[error("unknown rank")]
    UnknownRank,
    /// Numeric rank outside 1..=13.
    #[error("rank value out of range (expected 1..=13)")]
    RankOutOfRange,
    /// Card text is not of the form `<rank> of <suit>`.
    #[error("missing \" of \" separator")]
    MissingSeparator,
}
