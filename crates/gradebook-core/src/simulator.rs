//! Required final-assessment score projection.
//!
//! Given the scores so far and their weights, solves
//!
//! ```text
//! desired = current_average * (1 - final_weight) + x * final_weight
//! ```
//!
//! for `x`, the score needed on the final assessment.

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, GradeResult};
use crate::weighted::{check_dimensions, check_weight_sum, dot};

/// Lowest score an assessment can award.
pub const MIN_SCORE: f64 = 0.0;
/// Highest score an assessment can award.
pub const MAX_SCORE: f64 = 100.0;

/// Full outcome of a final-score projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalProjection {
    /// Weighted mean of the current scores, normalized by their weight sum.
    pub current_average: f64,
    /// Unclamped solution of the projection equation.
    pub raw_required: f64,
    /// `raw_required` clamped to the score range.
    pub required: f64,
    /// Whether the desired average can be reached with a score of at most 100.
    pub achievable: bool,
}

/// Score needed on the final assessment to reach `desired_overall`, clamped
/// to `[0, 100]`.
///
/// The current weights need not sum to 1.0 on their own; together with
/// `final_weight` they must.
pub fn required_final_score(
    current_scores: &[f64],
    current_weights: &[f64],
    desired_overall: f64,
    final_weight: f64,
) -> GradeResult<f64> {
    project_final(current_scores, current_weights, desired_overall, final_weight)
        .map(|p| p.required)
}

/// Like [`required_final_score`] but also reports the unclamped solution.
pub fn project_final(
    current_scores: &[f64],
    current_weights: &[f64],
    desired_overall: f64,
    final_weight: f64,
) -> GradeResult<FinalProjection> {
    if final_weight.is_nan() || final_weight <= 0.0 {
        return Err(GradeError::InvalidWeights(format!(
            "final weight must be positive, got {final_weight}"
        )));
    }
    let current_sum: f64 = current_weights.iter().sum();
    check_weight_sum(current_sum + final_weight)?;
    check_dimensions(current_scores, current_weights)?;

    let current_average = if current_sum == 0.0 {
        0.0
    } else {
        dot(current_scores, current_weights) / current_sum
    };
    let raw_required =
        (desired_overall - current_average * (1.0 - final_weight)) / final_weight;
    let required = raw_required.clamp(MIN_SCORE, MAX_SCORE);

    tracing::debug!(
        current_average,
        raw_required,
        final_weight,
        "projected final score"
    );

    Ok(FinalProjection {
        current_average,
        raw_required,
        required,
        achievable: raw_required <= MAX_SCORE,
    })
}
