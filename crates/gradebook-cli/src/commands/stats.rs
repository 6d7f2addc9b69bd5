//! The `gradebook stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::parser::parse_semester;
use gradebook_core::statistics::{aggregate, course_breakdown};

pub fn execute(semester_path: PathBuf) -> Result<()> {
    let semester = parse_semester(&semester_path)?;
    let stats = aggregate(&semester.courses);

    let mut courses = Table::new();
    courses.set_header(vec!["Course", "Assessments", "Average", "GPA", "Credits"]);
    for c in course_breakdown(&semester.courses) {
        courses.add_row(vec![
            Cell::new(&c.name),
            Cell::new(c.score_count),
            Cell::new(
                c.average
                    .map(|a| format!("{a:.2}"))
                    .unwrap_or_else(|| "-".into()),
            ),
            Cell::new(format!("{:.2}", c.gpa)),
            Cell::new(
                c.credit_hours
                    .map(|h| h.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
        ]);
    }

    println!("Student: {}", semester.student.name);
    println!("{courses}");

    let Some(summary) = stats.summary else {
        println!("No scores recorded ({} courses).", stats.total_subjects);
        return Ok(());
    };

    let mut totals = Table::new();
    totals.set_header(vec![
        "Courses", "Scores", "Average", "Median", "Std Dev", "Min", "Max", "GPA",
    ]);
    totals.add_row(vec![
        Cell::new(stats.total_subjects),
        Cell::new(stats.total_grades),
        Cell::new(format!("{:.2}", summary.average)),
        Cell::new(format!("{:.2}", summary.median)),
        Cell::new(format!("{:.2}", summary.std_deviation)),
        Cell::new(format!("{:.2}", summary.min)),
        Cell::new(format!("{:.2}", summary.max)),
        Cell::new(format!("{:.2}", summary.gpa)),
    ]);
    println!("{totals}");

    if let Some(gpa) = stats.credit_weighted_gpa {
        println!("Credit-weighted GPA: {gpa:.2}");
    }

    Ok(())
}
