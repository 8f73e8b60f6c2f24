//! Command line definition
//!
//! Builds the clap command and maps parsed arguments onto a
//! [`PipelineConfig`].

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::errors::{PipelineError, PipelineResult};
use crate::grayscale::DEFAULT_EXTENSION;
use crate::pipeline::{DEFAULT_ARCHIVE, DEFAULT_OUTPUT_DIR, DEFAULT_UNZIPPED_DIR};
use crate::pipeline::PipelineConfig;

/// Default log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "grayscaler.log";

/// Build the clap command for the grayscaler binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("grayscaler")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Unzip an archive of images and convert them to grayscale")
        .arg(
            Arg::new("archive")
                .short('a')
                .long("archive")
                .help("ZIP archive holding the images")
                .value_name("FILE")
                .default_value(DEFAULT_ARCHIVE),
        )
        .arg(
            Arg::new("unzipped")
                .short('u')
                .long("unzipped")
                .help("Directory the archive is extracted into")
                .value_name("DIR")
                .default_value(DEFAULT_UNZIPPED_DIR),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory for the grayscale images")
                .value_name("DIR")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .help("Extension of the images to convert")
                .value_name("EXT")
                .default_value(DEFAULT_EXTENSION),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File that receives the log output")
                .value_name("FILE")
                .default_value(DEFAULT_LOG_FILE),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract-only")
                .long("extract-only")
                .help("Only extract the archive")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["scan-only", "grayscale-only"]),
        )
        .arg(
            Arg::new("scan-only")
                .long("scan-only")
                .help("Only list the images in the extraction directory")
                .action(ArgAction::SetTrue)
                .conflicts_with("grayscale-only"),
        )
        .arg(
            Arg::new("grayscale-only")
                .long("grayscale-only")
                .help("Only convert the images in the extraction directory")
                .action(ArgAction::SetTrue),
        )
}

/// Read a string argument that always has a default
fn required_string(args: &ArgMatches, name: &str) -> PipelineResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| PipelineError::GenericError(format!("Missing argument: {}", name)))
}

/// Build the pipeline configuration from parsed arguments
pub fn config_from_args(args: &ArgMatches) -> PipelineResult<PipelineConfig> {
    let extension = required_string(args, "extension")?;
    if extension.trim_start_matches('.').is_empty() {
        return Err(PipelineError::GenericError("Image extension must not be empty".to_string()));
    }

    Ok(PipelineConfig {
        archive_path: PathBuf::from(required_string(args, "archive")?),
        unzipped_dir: PathBuf::from(required_string(args, "unzipped")?),
        output_dir: PathBuf::from(required_string(args, "output")?),
        extension,
    })
}

/// Log file path chosen on the command line
pub fn log_file_from_args(args: &ArgMatches) -> PathBuf {
    args.get_one::<String>("log-file")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}
