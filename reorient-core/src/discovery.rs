//! File discovery: turns the paths given on the command line into the flat,
//! ordered list of candidate files the pipeline consumes.
//!
//! Directories are scanned one level deep only. Files are kept when their
//! extension is in [`ACCEPTED_EXTENSIONS`] (case-insensitive).

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Extensions accepted for processing.
pub const ACCEPTED_EXTENSIONS: [&str; 7] = ["avi", "mp4", "mp3", "mxf", "mov", "wav", "aif"];

/// Whether `path` has an accepted extension. Does not touch the filesystem.
#[must_use]
pub fn is_accepted_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
}

/// Collects accepted files from a mix of file and directory paths.
///
/// Returns absolute paths, sorted and de-duplicated. Paths that do not
/// exist are skipped with a warning.
///
/// # Errors
///
/// * `CoreError::Io` - if a directory cannot be read
/// * `CoreError::NoFilesFound` - if nothing acceptable was found
pub fn find_processable_files(inputs: &[PathBuf]) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let input = std::path::absolute(input)?;

        if input.is_dir() {
            for entry in std::fs::read_dir(&input)? {
                let path = entry?.path();
                if path.is_file() && is_accepted_file(&path) {
                    files.push(path);
                }
            }
        } else if input.is_file() {
            if is_accepted_file(&input) {
                files.push(input);
            } else {
                log::debug!("Skipping unsupported file: {}", input.display());
            }
        } else {
            log::warn!("Input path does not exist: {}", input.display());
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
