//! gradebook-core — Grade computation engine.
//!
//! This crate converts raw assessment scores into GPA points, weighted
//! averages, required-final-score projections and semester statistics, and
//! renders those results as a plain-text report.

pub mod error;
pub mod gpa;
pub mod model;
pub mod parser;
pub mod report;
pub mod simulator;
pub mod statistics;
pub mod weighted;

pub use error::{GradeError, GradeResult};
