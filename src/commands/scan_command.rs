//! Directory listing command

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::commands::args::config_from_args;
use crate::commands::command_traits::Command;
use crate::errors::PipelineResult;
use crate::scanner::DirectoryScanner;
use crate::utils::logger::Logger;

/// Command that lists the images in the extraction directory
pub struct ScanCommand<'a> {
    /// Directory to list
    dir: PathBuf,
    /// Extension to keep
    extension: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PipelineResult<Self> {
        let config = config_from_args(args)?;
        Ok(ScanCommand {
            dir: config.unzipped_dir,
            extension: config.extension,
            logger,
        })
    }
}

impl<'a> Command for ScanCommand<'a> {
    fn execute(&self) -> PipelineResult<()> {
        let files = DirectoryScanner::list_by_extension(&self.dir, &self.extension)?;
        info!("Found {} files in {}", files.len(), self.dir.display());

        for file in &files {
            println!("{}", file.display());
            self.logger.log(&file.display().to_string())?;
        }
        Ok(())
    }
}
