//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    std::fs::create_dir_all("semesters")?;
    let example_path = std::path::Path::new("semesters/example.toml");
    if example_path.exists() {
        println!("semesters/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SEMESTER)?;
        println!("Created semesters/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit semesters/example.toml with your courses and scores");
    println!("  2. Run: gradebook validate --semester semesters/example.toml");
    println!("  3. Run: gradebook report --semester semesters/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# student_name = "${USER}"
output_dir = "./gradebook-reports"
default_format = "text"
desired_average = 70.0
"#;

const EXAMPLE_SEMESTER: &str = r#"[student]
name = "Example Student"
id = "2024001"

[[courses]]
name = "Calculus I"
scores = [85, 90, 78]
credit_hours = 4

[[courses]]
name = "Programming"
scores = [92, 88, 95]
credit_hours = 4

[[courses]]
name = "Physics"
scores = [75, 82, 80]
credit_hours = 3
"#;
