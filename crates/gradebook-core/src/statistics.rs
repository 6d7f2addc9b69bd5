//! Descriptive statistics over semester scores.
//!
//! All statistics are order-independent: courses are flattened into one
//! score list before anything is computed.

use serde::{Deserialize, Serialize};

use crate::gpa::{credit_weighted_gpa, mean_gpa_of};
use crate::model::{flatten_scores, CourseRecord};

/// Summary of a non-empty score list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Arithmetic mean.
    pub average: f64,
    /// Middle value; mean of the two middle values for even counts.
    pub median: f64,
    /// Population standard deviation (divides by N).
    pub std_deviation: f64,
    pub min: f64,
    pub max: f64,
    /// Mean GPA of the individual scores.
    pub gpa: f64,
}

/// Summarize a score list. Returns `None` for an empty list.
pub fn describe(scores: &[f64]) -> Option<ScoreSummary> {
    if scores.is_empty() {
        return None;
    }
    let n = scores.len() as f64;
    let average = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - average).powi(2)).sum::<f64>() / n;

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Some(ScoreSummary {
        average,
        median,
        std_deviation: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        gpa: mean_gpa_of(scores),
    })
}

/// Aggregate statistics for a whole semester.
///
/// A snapshot: recomputed from the courses on demand, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterStatistics {
    /// Number of courses, including courses with no scores.
    pub total_subjects: usize,
    /// Number of scores across all courses.
    pub total_grades: usize,
    /// `None` when there are no scores at all.
    pub summary: Option<ScoreSummary>,
    /// Credit-hour weighted mean of the per-course GPAs. Present only when
    /// every course has credit hours and at least one score.
    #[serde(default)]
    pub credit_weighted_gpa: Option<f64>,
}

impl SemesterStatistics {
    /// Returns `true` if the semester holds no scores.
    pub fn is_empty(&self) -> bool {
        self.total_grades == 0
    }
}

/// Compute semester statistics over every course's scores.
pub fn aggregate(courses: &[CourseRecord]) -> SemesterStatistics {
    let all_scores = flatten_scores(courses);

    let summary = describe(&all_scores);
    let credit_weighted_gpa = if summary.is_some() {
        credit_gpa(courses)
    } else {
        None
    };

    tracing::debug!(
        courses = courses.len(),
        scores = all_scores.len(),
        "aggregated semester statistics"
    );

    SemesterStatistics {
        total_subjects: courses.len(),
        total_grades: all_scores.len(),
        summary,
        credit_weighted_gpa,
    }
}

fn credit_gpa(courses: &[CourseRecord]) -> Option<f64> {
    let mut gpas = Vec::with_capacity(courses.len());
    let mut hours = Vec::with_capacity(courses.len());
    for course in courses {
        if course.scores.is_empty() {
            return None;
        }
        gpas.push(mean_gpa_of(&course.scores));
        hours.push(course.credit_hours?);
    }
    credit_weighted_gpa(&gpas, &hours).ok()
}

/// Per-course figures, computed from that course's own scores only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub name: String,
    /// Mean score; `None` for a course without scores.
    pub average: Option<f64>,
    /// Mean GPA of the course's scores.
    pub gpa: f64,
    pub score_count: usize,
    #[serde(default)]
    pub credit_hours: Option<u32>,
}

impl CourseSummary {
    pub fn of(course: &CourseRecord) -> Self {
        let average = if course.scores.is_empty() {
            None
        } else {
            Some(course.scores.iter().sum::<f64>() / course.scores.len() as f64)
        };
        Self {
            name: course.name.clone(),
            average,
            gpa: mean_gpa_of(&course.scores),
            score_count: course.scores.len(),
            credit_hours: course.credit_hours,
        }
    }
}

/// Summaries for each course, in input order.
pub fn course_breakdown(courses: &[CourseRecord]) -> Vec<CourseSummary> {
    courses.iter().map(CourseSummary::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_courses() -> Vec<CourseRecord> {
        vec![
            CourseRecord::new("A", vec![85.0, 90.0, 78.0]),
            CourseRecord::new("B", vec![92.0, 88.0, 95.0]),
        ]
    }

    #[test]
    fn aggregate_two_courses() {
        let stats = aggregate(&two_courses());
        assert_eq!(stats.total_subjects, 2);
        assert_eq!(stats.total_grades, 6);

        let s = stats.summary.unwrap();
        assert!((s.average - 88.0).abs() < 1e-9);
        assert!((s.median - 89.0).abs() < 1e-9);
        assert!((s.std_deviation - (178.0f64 / 6.0).sqrt()).abs() < 1e-9);
        assert_eq!(s.min, 78.0);
        assert_eq!(s.max, 95.0);
        assert!((s.gpa - 22.4 / 6.0).abs() < 1e-9);
        assert!(stats.credit_weighted_gpa.is_none());
    }

    #[test]
    fn aggregate_nothing() {
        let stats = aggregate(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats.total_subjects, 0);
        assert!(stats.summary.is_none());
    }

    #[test]
    fn aggregate_courses_without_scores() {
        let stats = aggregate(&[CourseRecord::new("Empty", vec![])]);
        assert!(stats.is_empty());
        assert_eq!(stats.total_subjects, 1);
        assert!(stats.summary.is_none());
    }

    #[test]
    fn odd_median() {
        let s = describe(&[70.0, 10.0, 40.0]).unwrap();
        assert_eq!(s.median, 40.0);
    }

    #[test]
    fn single_score_has_zero_spread() {
        let s = describe(&[77.0]).unwrap();
        assert_eq!(s.std_deviation, 0.0);
        assert_eq!(s.min, s.max);
    }

    #[test]
    fn order_does_not_matter() {
        let mut reversed = two_courses();
        reversed.reverse();
        for c in &mut reversed {
            c.scores.reverse();
        }
        let a = aggregate(&two_courses()).summary.unwrap();
        let b = aggregate(&reversed).summary.unwrap();
        assert!((a.average - b.average).abs() < 1e-9);
        assert_eq!(a.median, b.median);
        assert!((a.std_deviation - b.std_deviation).abs() < 1e-9);
    }

    #[test]
    fn credit_weighted_when_all_courses_have_hours() {
        let courses = vec![
            CourseRecord::new("A", vec![95.0]).with_credit_hours(3),
            CourseRecord::new("B", vec![62.0]).with_credit_hours(1),
        ];
        let stats = aggregate(&courses);
        let gpa = stats.credit_weighted_gpa.unwrap();
        assert!((gpa - 3.5).abs() < 1e-9);
    }

    #[test]
    fn breakdown_is_per_course() {
        let mut courses = two_courses();
        courses.push(CourseRecord::new("C", vec![]));
        let rows = course_breakdown(&courses);
        assert_eq!(rows.len(), 3);
        assert!((rows[0].average.unwrap() - 84.333333).abs() < 1e-5);
        assert!((rows[1].gpa - 3.9).abs() < 1e-9);
        assert!(rows[2].average.is_none());
        assert_eq!(rows[2].gpa, 0.0);
    }
}
