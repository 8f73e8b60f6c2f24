//! ZIP archive extraction
//!
//! This module unpacks a compressed archive into a directory tree,
//! mirroring the relative paths stored in the archive.

mod extractor;

pub use extractor::{ArchiveExtractor, ExtractionSummary};
