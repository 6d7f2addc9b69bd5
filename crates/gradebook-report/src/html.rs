//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use gradebook_core::report::SemesterReport;
use gradebook_core::statistics::CourseSummary;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report from a semester report.
pub fn generate_html(report: &SemesterReport) -> String {
    let mut html = String::new();
    let stats = &report.statistics;

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>gradebook report — {}</title>\n",
        html_escape(&report.student.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Academic performance report</h1>\n");
    let student_id = report
        .student
        .id
        .as_deref()
        .map(|id| format!(" ({})", html_escape(id)))
        .unwrap_or_default();
    html.push_str(&format!(
        "<p class=\"meta\">Student: <strong>{}</strong>{} | {} courses | {} assessments | {}</p>\n",
        html_escape(&report.student.name),
        student_id,
        stats.total_subjects,
        stats.total_grades,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    if let Some(summary) = &stats.summary {
        html.push_str("<table class=\"summary\">\n");
        html.push_str("<thead><tr><th>Average</th><th>Median</th><th>Std. deviation</th><th>Min</th><th>Max</th><th>GPA</th></tr></thead>\n");
        html.push_str(&format!(
            "<tbody><tr><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr></tbody>\n",
            summary.average,
            summary.median,
            summary.std_deviation,
            summary.min,
            summary.max,
            summary.gpa,
        ));
        html.push_str("</table>\n");
    }
    if let Some(gpa) = stats.credit_weighted_gpa {
        html.push_str(&format!(
            "<p>Credit-weighted GPA: <strong>{gpa:.2}</strong></p>\n"
        ));
    }
    if let Some(category) = report.category() {
        html.push_str(&format!(
            "<p class=\"assessment\">{} ({})</p>\n",
            category.advice(),
            category
        ));
    }

    if !report.courses.is_empty() {
        html.push_str(&generate_bar_chart(&report.courses));
    }
    html.push_str("</section>\n");

    // Per-course results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Courses</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"courses\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Course</th><th onclick=\"sortTable(1)\">Average</th><th onclick=\"sortTable(2)\">GPA</th><th onclick=\"sortTable(3)\">Assessments</th><th onclick=\"sortTable(4)\">Credits</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for c in &report.courses {
        let row_class = gpa_class(c.gpa);
        let average = c
            .average
            .map(|a| format!("{a:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let credits = c
            .credit_hours
            .map(|h| h.to_string())
            .unwrap_or_else(|| "-".to_string());

        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>\n",
            row_class,
            html_escape(&c.name),
            average,
            c.gpa,
            c.score_count,
            credits
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &SemesterReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn gpa_class(gpa: f64) -> &'static str {
    if gpa >= 3.0 {
        "high"
    } else if gpa >= 2.0 {
        "mid"
    } else {
        "low"
    }
}

fn generate_bar_chart(courses: &[CourseSummary]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let total_height = courses.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, course) in courses.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let average = course.average.unwrap_or(0.0).clamp(0.0, 100.0);
        let width = (average / 100.0 * max_width as f64) as usize;

        let color = match gpa_class(course.gpa) {
            "high" => "#22c55e",
            "mid" => "#eab308",
            _ => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&course.name)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.2}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            average
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --high: #dcfce7; --mid: #fef9c3; --low: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --high: #064e3b; --mid: #713f12; --low: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.assessment { font-weight: bold; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.high { background: var(--high); }
.mid { background: var(--mid); }
.low { background: var(--low); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('courses');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    const na = parseFloat(va), nb = parseFloat(vb);
    const cmp = isNaN(na) || isNaN(nb) ? va.localeCompare(vb) : na - nb;
    return asc ? cmp : -cmp;
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
