//! Full pipeline command
//!
//! Extracts the archive, lists the images and converts them to grayscale.

use clap::ArgMatches;
use log::info;

use crate::commands::args::config_from_args;
use crate::commands::command_traits::Command;
use crate::errors::PipelineResult;
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::utils::logger::Logger;

/// Command running every pipeline stage
pub struct PipelineCommand<'a> {
    /// Paths for the run
    config: PipelineConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> PipelineCommand<'a> {
    /// Create a new pipeline command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PipelineResult<Self> {
        Ok(PipelineCommand {
            config: config_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for PipelineCommand<'a> {
    fn execute(&self) -> PipelineResult<()> {
        let mut pipeline = Pipeline::new(self.config.clone());
        info!("Running pipeline: {:?}", pipeline.config());

        let report = pipeline.run()?;

        self.logger.log(&format!(
            "Pipeline finished: {} files extracted, {} images found, {} converted, {} failed",
            report.extraction.files,
            report.scanned.len(),
            report.conversion.converted().len(),
            report.conversion.failures().len()
        ))?;
        Ok(())
    }
}
