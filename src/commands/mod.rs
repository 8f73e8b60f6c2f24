//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod args;
pub mod pipeline_command;
pub mod extract_command;
pub mod scan_command;
pub mod grayscale_command;

pub use command_traits::{Command, CommandFactory};
pub use args::build_cli;
pub use pipeline_command::PipelineCommand;
pub use extract_command::ExtractCommand;
pub use scan_command::ScanCommand;
pub use grayscale_command::GrayscaleCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::PipelineResult;

/// Factory for creating command instances based on CLI arguments
///
/// Picks a single-stage command when one of the `--*-only` flags is set and
/// the full pipeline otherwise.
pub struct GrayscalerCommandFactory;

impl GrayscalerCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GrayscalerCommandFactory
    }
}

impl Default for GrayscalerCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GrayscalerCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> PipelineResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract-only") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.get_flag("scan-only") {
            Ok(Box::new(ScanCommand::new(args, logger)?))
        } else if args.get_flag("grayscale-only") {
            Ok(Box::new(GrayscaleCommand::new(args, logger)?))
        } else {
            Ok(Box::new(PipelineCommand::new(args, logger)?))
        }
    }
}
