//! Weighted averages over aligned score and weight lists.

use crate::error::{GradeError, GradeResult};

/// How far a weight set may drift from 1.0 and still count as complete.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Combine scores with positionally aligned weights.
///
/// The weights must sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`]. The result is
/// the plain dot product; it is not renormalized by the weight sum.
pub fn weighted_average(scores: &[f64], weights: &[f64]) -> GradeResult<f64> {
    check_dimensions(scores, weights)?;
    check_weight_sum(weights.iter().sum())?;
    Ok(dot(scores, weights))
}

/// Fail unless `scores` and `weights` pair up one-to-one.
pub(crate) fn check_dimensions(scores: &[f64], weights: &[f64]) -> GradeResult<()> {
    if scores.len() != weights.len() {
        return Err(GradeError::DimensionMismatch {
            scores: scores.len(),
            weights: weights.len(),
        });
    }
    Ok(())
}

/// Fail unless `sum` is within tolerance of 1.0.
pub(crate) fn check_weight_sum(sum: f64) -> GradeResult<()> {
    if !sum.is_finite() || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(GradeError::InvalidWeights(format!(
            "weights sum to {sum:.4}, expected 1.0 (tolerance {WEIGHT_SUM_TOLERANCE})"
        )));
    }
    Ok(())
}

pub(crate) fn dot(scores: &[f64], weights: &[f64]) -> f64 {
    scores.iter().zip(weights).map(|(s, w)| s * w).sum()
}
