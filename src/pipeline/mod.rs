//! Pipeline driver
//!
//! Runs extraction, scanning and conversion one after the other over
//! explicit paths. The first unrecoverable error stops the run.

mod config;
mod driver;

pub use config::{PipelineConfig, DEFAULT_ARCHIVE, DEFAULT_OUTPUT_DIR, DEFAULT_UNZIPPED_DIR};
pub use driver::{Pipeline, PipelineReport, PipelineStage};
