//! Path and file name helpers
//!
//! Extension matching used by the scanner and the grayscale converter.

use std::path::Path;

/// Lowercases an extension and strips any leading dots
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

/// Checks whether `path` has the (already normalized) extension `ext`
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase() == ext)
        .unwrap_or(false)
}

/// Checks whether a file name ends with `.<ext>`, ignoring case
///
/// Unlike [`has_extension`] this is a literal suffix test, so a bare
/// `.png` file name matches as well.
pub fn has_suffix(file_name: &str, ext: &str) -> bool {
    let suffix = format!(".{}", normalize_extension(ext));
    file_name.to_lowercase().ends_with(&suffix)
}
