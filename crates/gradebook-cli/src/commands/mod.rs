pub mod average;
pub mod gpa;
pub mod init;
pub mod report;
pub mod simulate;
pub mod stats;
pub mod validate;

use anyhow::Result;

use gradebook_core::GradeError;

/// Attach a usage hint to weight-set errors from the engine.
pub(crate) fn explain_weights(err: GradeError) -> anyhow::Error {
    if err.is_weight_error() {
        anyhow::Error::new(err)
            .context("weights must pair one-to-one with scores and add up to 1.0")
    } else {
        err.into()
    }
}

/// Parse a comma-separated list of numbers. An empty string is an empty list.
pub(crate) fn parse_numbers(input: &str, what: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| -> Result<f64> {
            let value = s
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("invalid {what} value: '{s}'"))?;
            anyhow::ensure!(value.is_finite(), "invalid {what} value: '{s}'");
            Ok(value)
        })
        .collect()
}
