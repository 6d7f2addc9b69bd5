//! Core data model types for gradebook.
//!
//! Scores are plain `f64` values on a 0–100 scale. A course groups the scores
//! of one subject; a semester groups the courses of one student.

use serde::{Deserialize, Serialize};

/// The student a semester belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Display name, used verbatim in reports.
    pub name: String,
    /// Registration number.
    #[serde(default)]
    pub id: Option<String>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }
}

/// The scores of one course. All scores in a course count equally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course name, unique within a semester.
    pub name: String,
    /// Assessment results in the order they were recorded.
    #[serde(default)]
    pub scores: Vec<f64>,
    /// Credit hours, used for the credit-weighted GPA.
    #[serde(default)]
    pub credit_hours: Option<u32>,
}

impl CourseRecord {
    pub fn new(name: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            scores,
            credit_hours: None,
        }
    }

    pub fn with_credit_hours(mut self, hours: u32) -> Self {
        self.credit_hours = Some(hours);
        self
    }
}

/// One student's courses for a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub student: Student,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

impl Semester {
    /// Every score of every course, in declaration order.
    pub fn all_scores(&self) -> Vec<f64> {
        flatten_scores(&self.courses)
    }
}

/// Concatenate the scores of `courses`, in declaration order.
pub fn flatten_scores(courses: &[CourseRecord]) -> Vec<f64> {
    courses
        .iter()
        .flat_map(|c| c.scores.iter().copied())
        .collect()
}
