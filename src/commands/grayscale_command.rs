//! Grayscale conversion command

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::commands::args::config_from_args;
use crate::commands::command_traits::Command;
use crate::errors::PipelineResult;
use crate::grayscale::GrayscaleConverter;
use crate::utils::logger::Logger;

/// Command that converts already extracted images
pub struct GrayscaleCommand<'a> {
    /// Directory holding the source images
    source_dir: PathBuf,
    /// Directory for the grayscale copies
    dest_dir: PathBuf,
    /// Converter configured with the image extension
    converter: GrayscaleConverter,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> GrayscaleCommand<'a> {
    /// Create a new grayscale command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PipelineResult<Self> {
        let config = config_from_args(args)?;
        Ok(GrayscaleCommand {
            converter: GrayscaleConverter::new(&config.extension),
            source_dir: config.unzipped_dir,
            dest_dir: config.output_dir,
            logger,
        })
    }
}

impl<'a> Command for GrayscaleCommand<'a> {
    fn execute(&self) -> PipelineResult<()> {
        let report = self.converter.convert_all(&self.source_dir, &self.dest_dir)?;
        info!("Images converted to grayscale");

        for outcome in report.outcomes() {
            let status = match &outcome.result {
                Ok(()) => "ok".to_string(),
                Err(e) => format!("failed: {}", e),
            };
            self.logger.log(&format!("{} -> {}: {}",
                                     outcome.source.display(), outcome.destination.display(), status))?;
        }
        Ok(())
    }
}
