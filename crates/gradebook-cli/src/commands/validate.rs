//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::parser::{load_semester_directory, parse_semester, validate_semester};

pub fn execute(semester_path: PathBuf) -> Result<()> {
    let semesters = if semester_path.is_dir() {
        load_semester_directory(&semester_path)?
    } else {
        vec![parse_semester(&semester_path)?]
    };

    let mut total_warnings = 0;

    for semester in &semesters {
        println!(
            "Semester: {} ({} courses)",
            semester.student.name,
            semester.courses.len()
        );

        let warnings = validate_semester(semester);
        for w in &warnings {
            let prefix = w
                .course
                .as_ref()
                .map(|name| format!("  [{name}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All semesters valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
