//! TOML semester file parser.
//!
//! Loads semesters from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{CourseRecord, Semester, Student};

/// Intermediate TOML structure for parsing semester files.
#[derive(Debug, Deserialize)]
struct TomlSemesterFile {
    student: TomlStudent,
    #[serde(default)]
    courses: Vec<TomlCourse>,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    name: String,
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlCourse {
    name: String,
    #[serde(default)]
    scores: Vec<f64>,
    #[serde(default)]
    credit_hours: Option<u32>,
}

/// Parse a single TOML file into a `Semester`.
pub fn parse_semester(path: &Path) -> Result<Semester> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read semester file: {}", path.display()))?;

    parse_semester_str(&content, path)
}

/// Parse a TOML string into a `Semester`.
pub fn parse_semester_str(content: &str, source_path: &Path) -> Result<Semester> {
    let parsed: TomlSemesterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let courses = parsed
        .courses
        .into_iter()
        .map(|c| CourseRecord {
            name: c.name,
            scores: c.scores,
            credit_hours: c.credit_hours,
        })
        .collect();

    Ok(Semester {
        student: Student {
            name: parsed.student.name,
            id: parsed.student.id,
        },
        courses,
    })
}

/// Recursively load all `.toml` semester files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_semester_directory(dir: &Path) -> Result<Vec<Semester>> {
    let mut semesters = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            semesters.extend(load_semester_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_semester(&path) {
                Ok(semester) => semesters.push(semester),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(semesters)
}

/// A warning from semester validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The course name (if applicable).
    pub course: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a semester for common data-entry mistakes.
pub fn validate_semester(semester: &Semester) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if semester.student.name.trim().is_empty() {
        warnings.push(ValidationWarning {
            course: None,
            message: "student name is empty".into(),
        });
    }

    if semester.courses.is_empty() {
        warnings.push(ValidationWarning {
            course: None,
            message: "semester has no courses".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for course in &semester.courses {
        if !seen.insert(course.name.as_str()) {
            warnings.push(ValidationWarning {
                course: Some(course.name.clone()),
                message: format!("duplicate course name: {}", course.name),
            });
        }
    }

    for course in &semester.courses {
        if course.scores.is_empty() {
            warnings.push(ValidationWarning {
                course: Some(course.name.clone()),
                message: "course has no scores".into(),
            });
        }
        for score in &course.scores {
            if !score.is_finite() || !(0.0..=100.0).contains(score) {
                warnings.push(ValidationWarning {
                    course: Some(course.name.clone()),
                    message: format!("score {score} is outside 0-100"),
                });
            }
        }
        if course.credit_hours == Some(0) {
            warnings.push(ValidationWarning {
                course: Some(course.name.clone()),
                message: "credit_hours is zero".into(),
            });
        }
    }

    warnings
}
