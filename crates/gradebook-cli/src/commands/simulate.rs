//! The `gradebook simulate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::simulator::project_final;

use super::{explain_weights, parse_numbers};
use crate::config::load_config_from;

pub fn execute(
    scores: String,
    weights: String,
    desired: Option<f64>,
    final_weight: f64,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let scores = parse_numbers(&scores, "score")?;
    let weights = parse_numbers(&weights, "weight")?;
    let desired = match desired {
        Some(d) => d,
        None => load_config_from(config_path.as_deref())?.desired_average,
    };
    anyhow::ensure!(
        (0.0..=100.0).contains(&desired),
        "desired average must be between 0 and 100"
    );

    let projection =
        project_final(&scores, &weights, desired, final_weight).map_err(explain_weights)?;

    println!("Current average: {:.2}", projection.current_average);
    println!(
        "Required final score for {desired:.2}: {:.2}",
        projection.required
    );
    if !projection.achievable {
        println!(
            "Not achievable: the final would need {:.2}",
            projection.raw_required
        );
    } else if projection.raw_required <= 0.0 {
        println!("Target already secured regardless of the final.");
    }

    Ok(())
}
