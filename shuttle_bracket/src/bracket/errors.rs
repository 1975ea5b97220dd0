//! Bracket error types.

use thiserror::Error;

use super::models::MatchId;

/// Bracket errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// No match with this identifier exists in the bracket
    #[error("Match not found: {0}")]
    NotFound(MatchId),
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;
