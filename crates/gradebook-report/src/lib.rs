//! gradebook-report — Renders semester reports into shareable formats.
//!
//! Plain text lives in `gradebook-core`; this crate adds a self-contained HTML page.

pub mod html;
