//! Stage sequencing for the unzip and grayscale pipeline

use std::fmt;
use std::path::PathBuf;

use log::{debug, error, info};

use crate::archive::{ArchiveExtractor, ExtractionSummary};
use crate::errors::PipelineResult;
use crate::grayscale::{ConversionReport, GrayscaleConverter};
use crate::pipeline::config::PipelineConfig;
use crate::scanner::DirectoryScanner;

/// Position of a pipeline run in its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Start,
    Extracting,
    Scanning,
    Converting,
    Done,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Start => "start",
            PipelineStage::Extracting => "extracting",
            PipelineStage::Scanning => "scanning",
            PipelineStage::Converting => "converting",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Everything a successful run produced
#[derive(Debug)]
pub struct PipelineReport {
    /// What the extractor wrote
    pub extraction: ExtractionSummary,
    /// Images found by the informational scan
    pub scanned: Vec<PathBuf>,
    /// Per-file conversion outcomes
    pub conversion: ConversionReport,
}

/// Runs Extractor, Scanner and Converter in sequence
pub struct Pipeline {
    config: PipelineConfig,
    stage: PipelineStage,
}

impl Pipeline {
    /// Create a pipeline in the `Start` stage
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline { config, stage: PipelineStage::Start }
    }

    /// Paths and extension this pipeline runs with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Current stage; `Done` or `Failed` once `run` returns
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Run all stages
    ///
    /// Each stage finishes before the next starts. An archive or directory
    /// error moves the pipeline to `Failed`, is logged, and is returned
    /// without running the remaining stages. Failures of single images do
    /// not stop the run; they are listed in the conversion report.
    pub fn run(&mut self) -> PipelineResult<PipelineReport> {
        match self.run_stages() {
            Ok(report) => {
                self.enter(PipelineStage::Done);
                Ok(report)
            }
            Err(e) => {
                error!("Pipeline failed while {}: {}", self.stage, e);
                self.enter(PipelineStage::Failed);
                Err(e)
            }
        }
    }

    fn run_stages(&mut self) -> PipelineResult<PipelineReport> {
        self.enter(PipelineStage::Extracting);
        let extraction = ArchiveExtractor::extract(&self.config.archive_path, &self.config.unzipped_dir)?;
        info!("Archive extracted successfully");

        self.enter(PipelineStage::Scanning);
        let scanned = DirectoryScanner::list_by_extension(&self.config.unzipped_dir, &self.config.extension)?;
        info!("Found {} image files: {:?}", scanned.len(), scanned);

        self.enter(PipelineStage::Converting);
        let converter = GrayscaleConverter::new(&self.config.extension);
        let conversion = converter.convert_all(&self.config.unzipped_dir, &self.config.output_dir)?;
        for failure in conversion.failures() {
            if let Err(e) = &failure.result {
                error!("  {}: {}", failure.source.display(), e);
            }
        }
        info!("Images converted to grayscale: {} written, {} failed",
              conversion.converted().len(), conversion.failures().len());

        Ok(PipelineReport { extraction, scanned, conversion })
    }

    fn enter(&mut self, stage: PipelineStage) {
        debug!("Pipeline stage: {} -> {}", self.stage, stage);
        self.stage = stage;
    }
}
