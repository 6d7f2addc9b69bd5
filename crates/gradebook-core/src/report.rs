//! Semester report rendering and JSON persistence.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GradeError, GradeResult};
use crate::model::{CourseRecord, Semester, Student};
use crate::statistics::{aggregate, course_breakdown, CourseSummary, SemesterStatistics};

/// Qualitative reading of a semester average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceCategory {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl PerformanceCategory {
    /// | Average | Category          |
    /// |---------|-------------------|
    /// | >= 90   | Excellent         |
    /// | >= 75   | Good              |
    /// | >= 60   | Needs improvement |
    /// | < 60    | Critical          |
    pub fn from_average(average: f64) -> Self {
        match average {
            a if a >= 90.0 => PerformanceCategory::Excellent,
            a if a >= 75.0 => PerformanceCategory::Good,
            a if a >= 60.0 => PerformanceCategory::NeedsImprovement,
            _ => PerformanceCategory::Critical,
        }
    }

    /// Advice line printed at the end of a report.
    pub fn advice(&self) -> &'static str {
        match self {
            PerformanceCategory::Excellent => "Excellent performance!",
            PerformanceCategory::Good => "Good performance, keep it up!",
            PerformanceCategory::NeedsImprovement => "Needs improvement, consider seeking help.",
            PerformanceCategory::Critical => "Urgent attention required.",
        }
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceCategory::Excellent => write!(f, "excellent"),
            PerformanceCategory::Good => write!(f, "good"),
            PerformanceCategory::NeedsImprovement => write!(f, "needs improvement"),
            PerformanceCategory::Critical => write!(f, "critical"),
        }
    }
}

/// Render a plain-text report.
///
/// Each course line is computed from that course's own scores. Fails with
/// [`GradeError::EmptyDataset`] when `stats` holds no scores.
pub fn render(
    student_name: &str,
    stats: &SemesterStatistics,
    courses: &[CourseRecord],
) -> GradeResult<String> {
    render_summaries(student_name, stats, &course_breakdown(courses))
}

/// Render a plain-text report from precomputed course summaries.
pub fn render_summaries(
    student_name: &str,
    stats: &SemesterStatistics,
    courses: &[CourseSummary],
) -> GradeResult<String> {
    let summary = stats.summary.as_ref().ok_or(GradeError::EmptyDataset)?;
    let category = PerformanceCategory::from_average(summary.average);

    let mut out = String::new();
    out.push_str("=== ACADEMIC PERFORMANCE REPORT ===\n");
    out.push_str(&format!("Student: {student_name}\n\n"));
    out.push_str("OVERALL STATISTICS:\n");
    out.push_str(&format!("- Courses: {}\n", stats.total_subjects));
    out.push_str(&format!("- Assessments: {}\n", stats.total_grades));
    out.push_str(&format!("- Average: {:.2}\n", summary.average));
    out.push_str(&format!("- Median: {:.2}\n", summary.median));
    out.push_str(&format!("- Standard deviation: {:.2}\n", summary.std_deviation));
    out.push_str(&format!("- Lowest score: {:.2}\n", summary.min));
    out.push_str(&format!("- Highest score: {:.2}\n", summary.max));
    out.push_str(&format!("- GPA: {:.2}\n", summary.gpa));
    if let Some(gpa) = stats.credit_weighted_gpa {
        out.push_str(&format!("- Credit-weighted GPA: {gpa:.2}\n"));
    }
    out.push_str("\nCOURSE PERFORMANCE:\n");
    for course in courses {
        match course.average {
            Some(avg) => out.push_str(&format!(
                "{}: Average {:.2} (GPA: {:.2})\n",
                course.name, avg, course.gpa
            )),
            None => out.push_str(&format!(
                "{}: Average n/a (GPA: {:.2})\n",
                course.name, course.gpa
            )),
        }
    }
    out.push_str(&format!(
        "\nASSESSMENT: {} ({category})\n",
        category.advice()
    ));

    Ok(out)
}

/// A complete semester report, ready to be rendered or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub student: Student,
    pub statistics: SemesterStatistics,
    /// Per-course figures in semester order.
    pub courses: Vec<CourseSummary>,
}

impl SemesterReport {
    /// Compute a report for a semester. Fails if the semester has no scores.
    pub fn build(semester: &Semester) -> GradeResult<Self> {
        let statistics = aggregate(&semester.courses);
        if statistics.is_empty() {
            return Err(GradeError::EmptyDataset);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            student: semester.student.clone(),
            statistics,
            courses: course_breakdown(&semester.courses),
        })
    }

    /// Performance category of the semester average.
    pub fn category(&self) -> Option<PerformanceCategory> {
        self.statistics
            .summary
            .as_ref()
            .map(|s| PerformanceCategory::from_average(s.average))
    }

    /// Render the report as plain text.
    pub fn to_text(&self) -> GradeResult<String> {
        render_summaries(&self.student.name, &self.statistics, &self.courses)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SemesterReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semester() -> Semester {
        Semester {
            student: Student::new("João Silva"),
            courses: vec![
                CourseRecord::new("Cálculo I", vec![85.0, 90.0, 78.0]),
                CourseRecord::new("Programação", vec![92.0, 88.0, 95.0]),
            ],
        }
    }

    #[test]
    fn category_thresholds() {
        assert_eq!(
            PerformanceCategory::from_average(90.0),
            PerformanceCategory::Excellent
        );
        assert_eq!(
            PerformanceCategory::from_average(89.99),
            PerformanceCategory::Good
        );
        assert_eq!(
            PerformanceCategory::from_average(75.0),
            PerformanceCategory::Good
        );
        assert_eq!(
            PerformanceCategory::from_average(60.0),
            PerformanceCategory::NeedsImprovement
        );
        assert_eq!(
            PerformanceCategory::from_average(59.9),
            PerformanceCategory::Critical
        );
    }

    #[test]
    fn render_contains_names_and_figures() {
        let s = semester();
        let stats = aggregate(&s.courses);
        let text = render(&s.student.name, &stats, &s.courses).unwrap();

        assert!(text.contains("João Silva"));
        assert!(text.contains("Cálculo I: Average 84.33 (GPA: 3.57)"));
        assert!(text.contains("Programação: Average 91.67 (GPA: 3.90)"));
        assert!(text.contains("- Average: 88.00"));
        assert!(text.contains("- Median: 89.00"));
        assert!(text.contains("- Standard deviation: 5.45"));
        assert!(text.contains("- GPA: 3.73"));
        assert!(text.contains("ASSESSMENT: Good performance"));
    }

    #[test]
    fn render_section_order() {
        let s = semester();
        let text = render(&s.student.name, &aggregate(&s.courses), &s.courses).unwrap();
        let header = text.find("Student:").unwrap();
        let stats = text.find("OVERALL STATISTICS").unwrap();
        let courses = text.find("COURSE PERFORMANCE").unwrap();
        assert!(header < stats && stats < courses);
    }

    #[test]
    fn render_exact_layout() {
        let courses = vec![CourseRecord::new("Logic", vec![80.0, 90.0])];
        let text = render("Ada", &aggregate(&courses), &courses).unwrap();
        let expected = "\
=== ACADEMIC PERFORMANCE REPORT ===
Student: Ada

OVERALL STATISTICS:
- Courses: 1
- Assessments: 2
- Average: 85.00
- Median: 85.00
- Standard deviation: 5.00
- Lowest score: 80.00
- Highest score: 90.00
- GPA: 3.65

COURSE PERFORMANCE:
Logic: Average 85.00 (GPA: 3.65)

ASSESSMENT: Good performance, keep it up! (good)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn render_is_deterministic() {
        let s = semester();
        let stats = aggregate(&s.courses);
        let a = render("x", &stats, &s.courses).unwrap();
        let b = render("x", &stats, &s.courses).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_empty_fails() {
        let stats = aggregate(&[]);
        assert_eq!(render("Nobody", &stats, &[]), Err(GradeError::EmptyDataset));
    }

    #[test]
    fn render_course_without_scores() {
        let courses = vec![
            CourseRecord::new("Physics", vec![70.0]),
            CourseRecord::new("Ethics", vec![]),
        ];
        let text = render("Ada", &aggregate(&courses), &courses).unwrap();
        assert!(text.contains("Ethics: Average n/a (GPA: 0.00)"));
    }

    #[test]
    fn build_rejects_empty_semester() {
        let s = Semester {
            student: Student::new("Nobody"),
            courses: vec![],
        };
        assert!(matches!(
            SemesterReport::build(&s),
            Err(GradeError::EmptyDataset)
        ));
    }

    #[test]
    fn json_roundtrip() {
        let report = SemesterReport::build(&semester()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = SemesterReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.student.name, "João Silva");
        assert_eq!(loaded.statistics.total_grades, 6);
        assert_eq!(loaded.courses.len(), 2);
        assert_eq!(loaded.to_text().unwrap(), report.to_text().unwrap());
        assert_eq!(loaded.category(), Some(PerformanceCategory::Good));
    }
}
