//! The `gradebook average` command.

use anyhow::Result;

use gradebook_core::weighted::weighted_average;

use super::{explain_weights, parse_numbers};

pub fn execute(scores: String, weights: String) -> Result<()> {
    let scores = parse_numbers(&scores, "score")?;
    let weights = parse_numbers(&weights, "weight")?;

    let average = weighted_average(&scores, &weights).map_err(explain_weights)?;
    println!("Weighted average: {average:.2}");

    Ok(())
}
