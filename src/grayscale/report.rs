//! Per-file conversion results

use std::path::PathBuf;

use crate::errors::PipelineResult;

/// Outcome of converting one image
#[derive(Debug)]
pub struct ConversionOutcome {
    /// Image that was read
    pub source: PathBuf,
    /// Where the grayscale copy goes
    pub destination: PathBuf,
    /// Whether the conversion succeeded
    pub result: PipelineResult<()>,
}

impl ConversionOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch conversion, in processing order
#[derive(Debug, Default)]
pub struct ConversionReport {
    outcomes: Vec<ConversionOutcome>,
}

impl ConversionReport {
    /// Create an empty report
    pub fn new() -> Self {
        ConversionReport { outcomes: Vec::new() }
    }

    /// Record the outcome of one file
    pub fn push(&mut self, outcome: ConversionOutcome) {
        self.outcomes.push(outcome);
    }

    /// All recorded outcomes
    pub fn outcomes(&self) -> &[ConversionOutcome] {
        &self.outcomes
    }

    /// Destinations of the images that were written
    pub fn converted(&self) -> Vec<&PathBuf> {
        self.outcomes.iter()
            .filter(|o| o.is_ok())
            .map(|o| &o.destination)
            .collect()
    }

    /// Outcomes that failed
    pub fn failures(&self) -> Vec<&ConversionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok()).collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
