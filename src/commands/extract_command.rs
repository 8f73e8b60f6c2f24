//! Archive extraction command

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::archive::ArchiveExtractor;
use crate::commands::args::config_from_args;
use crate::commands::command_traits::Command;
use crate::errors::PipelineResult;
use crate::utils::logger::Logger;

/// Command that only unpacks the archive
pub struct ExtractCommand<'a> {
    /// Archive to unpack
    archive_path: PathBuf,
    /// Destination directory
    output_dir: PathBuf,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PipelineResult<Self> {
        let config = config_from_args(args)?;
        Ok(ExtractCommand {
            archive_path: config.archive_path,
            output_dir: config.unzipped_dir,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> PipelineResult<()> {
        let summary = ArchiveExtractor::extract(&self.archive_path, &self.output_dir)?;
        info!("Zip file decompressed successfully");

        self.logger.log(&format!(
            "Extracted {} into {}: {} files, {} directories, {} skipped",
            self.archive_path.display(),
            summary.output_dir.display(),
            summary.files,
            summary.directories,
            summary.skipped
        ))?;
        Ok(())
    }
}
