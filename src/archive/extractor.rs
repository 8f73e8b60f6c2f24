//! Archive extractor implementation

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use zip::ZipArchive;

use crate::errors::{PipelineError, PipelineResult};

/// Counts collected while unpacking an archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Directory the archive was unpacked into
    pub output_dir: PathBuf,
    /// Directory markers created
    pub directories: usize,
    /// Files written
    pub files: usize,
    /// Entries skipped because their name escapes the output directory
    pub skipped: usize,
}

/// Unpacks ZIP archives onto disk
pub struct ArchiveExtractor;

impl ArchiveExtractor {
    /// Extract every entry of `archive_path` below `output_dir`
    ///
    /// Entries are processed in stored order. Names ending with a path
    /// separator are directory markers; everything else is streamed into
    /// `output_dir/<entry name>`. Entries already written stay on disk if a
    /// later entry fails.
    ///
    /// # Arguments
    /// * `archive_path` - Path to the ZIP archive
    /// * `output_dir` - Destination directory, created if absent
    ///
    /// # Returns
    /// A summary of what was written, or the first error encountered
    pub fn extract(archive_path: &Path, output_dir: &Path) -> PipelineResult<ExtractionSummary> {
        info!("Extracting {} into {}", archive_path.display(), output_dir.display());

        let file = File::open(archive_path).map_err(|e| PipelineError::ArchiveOpenError {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut archive = ZipArchive::new(file).map_err(|e| PipelineError::ArchiveOpenError {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Archive contains {} entries", archive.len());

        fs::create_dir_all(output_dir)?;

        let mut summary = ExtractionSummary {
            output_dir: output_dir.to_path_buf(),
            ..ExtractionSummary::default()
        };

        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| PipelineError::ArchiveEntryError { index, reason: e.to_string() })?;

            let relative = match entry.enclosed_name() {
                Some(path) => path,
                None => {
                    warn!("Skipping entry with unsafe name: {}", entry.name());
                    summary.skipped += 1;
                    continue;
                }
            };
            let target = output_dir.join(&relative);

            if entry.is_dir() {
                debug!("Creating directory {}", target.display());
                fs::create_dir_all(&target)?;
                summary.directories += 1;
                continue;
            }

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            let written = io::copy(&mut entry, &mut out)?;
            debug!("Wrote {} ({} bytes)", target.display(), written);
            summary.files += 1;
        }

        info!(
            "Extracted {} files and {} directories ({} skipped)",
            summary.files, summary.directories, summary.skipped
        );
        Ok(summary)
    }
}
