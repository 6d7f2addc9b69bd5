//! The `gradebook report` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gradebook_core::parser::{parse_semester, validate_semester};
use gradebook_core::report::SemesterReport;
use gradebook_report::html::write_html_report;

use crate::config::load_config_from;

pub fn execute(
    semester_path: PathBuf,
    student: Option<String>,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut semester = parse_semester(&semester_path)?;

    for w in validate_semester(&semester) {
        match &w.course {
            Some(course) => tracing::warn!("[{course}] {}", w.message),
            None => tracing::warn!("{}", w.message),
        }
    }

    if let Some(name) = student {
        semester.student.name = name;
    } else if semester.student.name.trim().is_empty() {
        if let Some(name) = &config.student_name {
            semester.student.name = name.clone();
        }
    }

    let report = SemesterReport::build(&semester)
        .with_context(|| format!("cannot report on {}", semester_path.display()))?;

    let format = format.unwrap_or_else(|| config.default_format.clone());
    let formats: Vec<&str> = if format == "all" {
        vec!["text", "json", "html"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    if let Some(bad) = formats
        .iter()
        .find(|f| !matches!(**f, "text" | "json" | "html"))
    {
        anyhow::bail!("unknown format: {bad} (expected text, json, html or all)");
    }
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    for fmt in &formats {
        match *fmt {
            "text" => {
                print!("{}", report.to_text()?);
            }
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => unreachable!("formats are validated above"),
        }
    }

    Ok(())
}
