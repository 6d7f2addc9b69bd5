//! Score to GPA conversion on the 4.0 scale.
//!
//! | Score (truncated) | GPA |
//! |-------------------|-----|
//! | 90–100            | 4.0 |
//! | 85–89             | 3.7 |
//! | 80–84             | 3.3 |
//! | 75–79             | 3.0 |
//! | 70–74             | 2.7 |
//! | 65–69             | 2.3 |
//! | 60–64             | 2.0 |
//! | 0–59              | 0.0 |

use crate::error::{GradeError, GradeResult};

/// One row of the GPA table. Bounds are inclusive integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaBand {
    pub lower: i64,
    pub upper: i64,
    pub points: f64,
}

impl GpaBand {
    const fn new(lower: i64, upper: i64, points: f64) -> Self {
        Self {
            lower,
            upper,
            points,
        }
    }

    fn contains(&self, score: i64) -> bool {
        (self.lower..=self.upper).contains(&score)
    }
}

/// The fixed band table, highest band first. Covers 0..=100 without gaps.
pub static GPA_BANDS: [GpaBand; 8] = [
    GpaBand::new(90, 100, 4.0),
    GpaBand::new(85, 89, 3.7),
    GpaBand::new(80, 84, 3.3),
    GpaBand::new(75, 79, 3.0),
    GpaBand::new(70, 74, 2.7),
    GpaBand::new(65, 69, 2.3),
    GpaBand::new(60, 64, 2.0),
    GpaBand::new(0, 59, 0.0),
];

/// Find the band a score falls into.
///
/// The score is truncated toward zero before lookup. Anything below the
/// lowest band's lower bound lands in the lowest band. Scores above 100 and
/// non-finite scores match no band.
pub fn band_of(score: f64) -> Option<&'static GpaBand> {
    if !score.is_finite() {
        return None;
    }
    let truncated = score.trunc() as i64;
    let lowest = &GPA_BANDS[GPA_BANDS.len() - 1];
    if truncated < lowest.lower {
        return Some(lowest);
    }
    GPA_BANDS.iter().find(|band| band.contains(truncated))
}

/// Convert a single score to GPA points.
///
/// Scores that match no band (above 100, NaN) convert to 0.0.
pub fn gpa_of(score: f64) -> f64 {
    band_of(score).map(|band| band.points).unwrap_or(0.0)
}

/// Mean GPA over a list of scores. An empty list yields 0.0.
pub fn mean_gpa_of(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&s| gpa_of(s)).sum::<f64>() / scores.len() as f64
}

/// GPA weighted by credit hours.
///
/// With no credit hours given this is the plain mean of `gpas`.
pub fn credit_weighted_gpa(gpas: &[f64], credit_hours: &[u32]) -> GradeResult<f64> {
    if credit_hours.is_empty() {
        if gpas.is_empty() {
            return Ok(0.0);
        }
        return Ok(gpas.iter().sum::<f64>() / gpas.len() as f64);
    }
    if gpas.len() != credit_hours.len() {
        return Err(GradeError::DimensionMismatch {
            scores: gpas.len(),
            weights: credit_hours.len(),
        });
    }
    let total: u64 = credit_hours.iter().map(|&h| u64::from(h)).sum();
    if total == 0 {
        return Err(GradeError::InvalidWeights(
            "credit hours sum to zero".into(),
        ));
    }
    let weighted: f64 = gpas
        .iter()
        .zip(credit_hours)
        .map(|(g, &h)| g * f64::from(h))
        .sum();
    Ok(weighted / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_resolve_upward() {
        assert_eq!(gpa_of(89.0), 3.7);
        assert_eq!(gpa_of(90.0), 4.0);
        assert_eq!(gpa_of(59.0), 0.0);
        assert_eq!(gpa_of(60.0), 2.0);
        assert_eq!(gpa_of(85.0), 3.7);
        assert_eq!(gpa_of(84.0), 3.3);
        assert_eq!(gpa_of(75.0), 3.0);
        assert_eq!(gpa_of(70.0), 2.7);
        assert_eq!(gpa_of(65.0), 2.3);
        assert_eq!(gpa_of(100.0), 4.0);
        assert_eq!(gpa_of(0.0), 0.0);
    }

    #[test]
    fn fractional_scores_truncate() {
        assert_eq!(gpa_of(89.99), 3.7);
        assert_eq!(gpa_of(59.9), 0.0);
        assert_eq!(gpa_of(100.5), 4.0);
    }

    #[test]
    fn out_of_range_scores() {
        assert_eq!(gpa_of(-12.0), 0.0);
        assert_eq!(band_of(-12.0), Some(&GPA_BANDS[7]));
        assert!(band_of(101.0).is_none());
        assert_eq!(gpa_of(150.0), 0.0);
        assert!(band_of(f64::NAN).is_none());
        assert_eq!(gpa_of(f64::INFINITY), 0.0);
    }

    #[test]
    fn bands_cover_every_integer_once() {
        for score in 0..=100i64 {
            let hits = GPA_BANDS.iter().filter(|b| b.contains(score)).count();
            assert_eq!(hits, 1, "score {score} matched {hits} bands");
        }
    }

    #[test]
    fn mean_gpa() {
        assert_eq!(mean_gpa_of(&[]), 0.0);
        let gpa = mean_gpa_of(&[95.0, 87.0, 92.0, 78.0]);
        assert!((gpa - 3.675).abs() < 1e-9, "got {gpa}");
    }

    #[test]
    fn credit_weighting() {
        let gpa = credit_weighted_gpa(&[4.0, 2.0], &[3, 1]).unwrap();
        assert!((gpa - 3.5).abs() < 1e-9);
        assert_eq!(credit_weighted_gpa(&[4.0, 2.0], &[]).unwrap(), 3.0);
        assert!(matches!(
            credit_weighted_gpa(&[4.0], &[1, 2]),
            Err(GradeError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            credit_weighted_gpa(&[4.0], &[0]),
            Err(GradeError::InvalidWeights(_))
        ));
    }
}
