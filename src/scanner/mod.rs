//! Directory scanning
//!
//! Lists the direct children of a directory that carry a given file
//! extension. Subdirectories are never descended into.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::PipelineResult;
use crate::utils::path_utils::{has_extension, normalize_extension};


/// Non-recursive directory scanner
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// List regular files in `dir` whose extension matches `ext`
    ///
    /// The comparison ignores case and `ext` may be given with or without
    /// its leading dot. Paths come back joined with `dir`, in the order the
    /// directory listing yields them.
    ///
    /// # Arguments
    /// * `dir` - Directory to scan
    /// * `ext` - Extension to keep, e.g. `"png"` or `".PNG"`
    ///
    /// # Returns
    /// The matching file paths, or an I/O error if `dir` cannot be read
    pub fn list_by_extension(dir: &Path, ext: &str) -> PipelineResult<Vec<PathBuf>> {
        let wanted = normalize_extension(ext);
        let mut matches = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !has_extension(&path, &wanted) {
                continue;
            }
            if !path.is_file() {
                debug!("Ignoring non-file entry {}", path.display());
                continue;
            }
            matches.push(path);
        }

        debug!("Found {} '.{}' files in {}", matches.len(), wanted, dir.display());
        Ok(matches)
    }
}
