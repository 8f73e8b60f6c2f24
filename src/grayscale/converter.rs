//! Batch grayscale converter

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};
use log::{debug, error, info};

use crate::errors::{PipelineError, PipelineResult};
use crate::grayscale::report::{ConversionOutcome, ConversionReport};
use crate::grayscale::transform::to_grayscale;
use crate::utils::path_utils::{has_suffix, normalize_extension};
use crate::utils::progress::ProgressTracker;

/// Default extension of the images to convert
pub const DEFAULT_EXTENSION: &str = "png";

/// Whether `format` can hold an 8-bit alpha channel
fn stores_alpha(format: ImageFormat) -> bool {
    format != ImageFormat::Jpeg
}

/// Converts every image in a directory to grayscale
pub struct GrayscaleConverter {
    /// Extension of the files to pick up (normalized, no leading dot)
    extension: String,
}

impl Default for GrayscaleConverter {
    fn default() -> Self {
        GrayscaleConverter::new(DEFAULT_EXTENSION)
    }
}

impl GrayscaleConverter {
    /// Create a converter for files ending in `.<extension>`
    pub fn new(extension: &str) -> Self {
        GrayscaleConverter { extension: normalize_extension(extension) }
    }

    /// Extension this converter picks up
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Convert every matching image in `source_dir` into `dest_dir`
    ///
    /// The source directory is listed here rather than taken from an
    /// earlier scan. A file that fails to decode or encode is logged and
    /// recorded in the report; the remaining files are still processed.
    /// Every file has been handled by the time this returns.
    ///
    /// # Arguments
    /// * `source_dir` - Directory holding the original images
    /// * `dest_dir` - Output directory, created if absent
    ///
    /// # Returns
    /// The per-file report, or an I/O error if either directory is unusable
    pub fn convert_all(&self, source_dir: &Path, dest_dir: &Path) -> PipelineResult<ConversionReport> {
        fs::create_dir_all(dest_dir)?;
        let sources = self.list_sources(source_dir)?;
        info!("Converting {} images from {} to {}",
              sources.len(), source_dir.display(), dest_dir.display());

        let progress = ProgressTracker::new(sources.len() as u64, "Converting to grayscale");
        let mut report = ConversionReport::new();

        for source in sources {
            // list_sources only returns entries with a file name
            let destination = match source.file_name() {
                Some(name) => dest_dir.join(name),
                None => continue,
            };
            progress.set_message(&destination.to_string_lossy());

            let result = self.convert_file(&source, &destination);
            if let Err(e) = &result {
                error!("Error processing file {}: {}", source.display(), e);
            }
            report.push(ConversionOutcome { source, destination, result });
            progress.increment(1);
        }
        progress.finish();

        info!("Converted {} of {} images ({} failed)",
              report.converted().len(), report.len(), report.failures().len());
        Ok(report)
    }

    /// Convert a single image file
    ///
    /// The output format follows the extension of `destination`. The alpha
    /// channel is dropped for formats that cannot store it.
    pub fn convert_file(&self, source: &Path, destination: &Path) -> PipelineResult<()> {
        let bytes = fs::read(source)?;

        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()
            .map_err(|e| PipelineError::DecodeError {
                path: source.to_path_buf(),
                reason: e.to_string(),
            })?;
        debug!("Decoded {} ({}x{})", source.display(), image.width(), image.height());

        let encode_error = |reason: String| PipelineError::EncodeError {
            path: destination.to_path_buf(),
            reason,
        };
        let format = ImageFormat::from_path(destination).map_err(|e| encode_error(e.to_string()))?;

        let gray = DynamicImage::ImageRgba8(to_grayscale(&image));
        let encodable = if stores_alpha(format) {
            gray
        } else {
            DynamicImage::ImageRgb8(gray.to_rgb8())
        };
        encodable.save_with_format(destination, format)
            .map_err(|e| encode_error(e.to_string()))?;
        debug!("Wrote {}", destination.display());
        Ok(())
    }

    /// Direct regular files of `dir` whose name ends with the extension
    fn list_sources(&self, dir: &Path) -> PipelineResult<Vec<PathBuf>> {
        let mut sources = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if !has_suffix(&name.to_string_lossy(), &self.extension) {
                continue;
            }
            let path = entry.path();
            if !path.is_file() {
                debug!("Skipping non-file entry {}", path.display());
                continue;
            }
            sources.push(path);
        }
        Ok(sources)
    }
}
