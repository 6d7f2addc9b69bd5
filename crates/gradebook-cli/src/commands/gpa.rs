//! The `gradebook gpa` command.

use anyhow::Result;

use gradebook_core::gpa::{band_of, mean_gpa_of};

use super::parse_numbers;

pub fn execute(scores: String) -> Result<()> {
    let scores = parse_numbers(&scores, "score")?;
    anyhow::ensure!(!scores.is_empty(), "at least one score is required");

    for score in &scores {
        match band_of(*score) {
            Some(band) => println!(
                "  {score:>6.2}  band {:>3}-{:<3}  {:.1}",
                band.lower.max(0),
                band.upper,
                band.points
            ),
            None => println!("  {score:>6.2}  out of range  0.0"),
        }
    }
    println!("GPA: {:.2}", mean_gpa_of(&scores));

    Ok(())
}
