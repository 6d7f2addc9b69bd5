//! Grade engine error types.
//!
//! Every failure here means the caller handed in invalid input; none of them
//! are transient, so nothing is worth retrying.

use thiserror::Error;

/// Errors raised by the grade computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// Scores and weights are not aligned one-to-one.
    #[error("dimension mismatch: {scores} scores but {weights} weights")]
    DimensionMismatch { scores: usize, weights: usize },

    /// The weight set does not sum to 1.0 within tolerance, or the final
    /// assessment carries no weight.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// Statistics or a report were requested over zero scores.
    #[error("empty dataset: no scores to summarize")]
    EmptyDataset,
}

/// Result alias for grade computations.
pub type GradeResult<T> = Result<T, GradeError>;

impl GradeError {
    /// Returns `true` if the error comes from the weight set rather than the scores.
    pub fn is_weight_error(&self) -> bool {
        matches!(
            self,
            GradeError::DimensionMismatch { .. } | GradeError::InvalidWeights(_)
        )
    }
}
