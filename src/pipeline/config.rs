//! Paths and options for one pipeline run

use std::path::PathBuf;

use crate::grayscale::DEFAULT_EXTENSION;

/// Default archive to unpack
pub const DEFAULT_ARCHIVE: &str = "myfile.zip";
/// Default extraction directory
pub const DEFAULT_UNZIPPED_DIR: &str = "unzipped";
/// Default directory for grayscale output
pub const DEFAULT_OUTPUT_DIR: &str = "grayscaled";

/// Input and output locations for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// ZIP archive holding the images
    pub archive_path: PathBuf,
    /// Where the archive is unpacked
    pub unzipped_dir: PathBuf,
    /// Where grayscale images are written
    pub output_dir: PathBuf,
    /// Extension of the images to convert
    pub extension: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            archive_path: PathBuf::from(DEFAULT_ARCHIVE),
            unzipped_dir: PathBuf::from(DEFAULT_UNZIPPED_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with the default image extension
    pub fn new(
        archive_path: impl Into<PathBuf>,
        unzipped_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        PipelineConfig {
            archive_path: archive_path.into(),
            unzipped_dir: unzipped_dir.into(),
            output_dir: output_dir.into(),
            ..PipelineConfig::default()
        }
    }

    /// Replace the image extension
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }
}
