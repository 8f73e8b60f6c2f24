pub mod errors;
pub mod utils;
pub mod archive;
pub mod scanner;
pub mod grayscale;
pub mod pipeline;
pub mod commands;
#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{PipelineError, PipelineResult};
pub use archive::{ArchiveExtractor, ExtractionSummary};
pub use scanner::DirectoryScanner;
pub use grayscale::{ConversionOutcome, ConversionReport, GrayscaleConverter};
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport, PipelineStage};
