//! Scratch file management.
//!
//! Each run gets its own scratch directory (a `TempDir`, removed when the
//! run ends), and every intermediate file inside it carries a random token,
//! so two sources sharing a base filename never map to the same path.
//! Intermediates are held by [`ScratchFile`], which deletes the file when
//! dropped unless explicitly kept.

use crate::config::{CoreConfig, SCRATCH_DIR_PREFIX};
use crate::error::CoreResult;
use crate::utils::cleanup_file;

use std::path::{Path, PathBuf};
use tempfile::{Builder as TempFileBuilder, TempDir};

/// Creates the per-run scratch directory. Auto-cleaned when dropped.
pub fn create_scratch_dir(config: &CoreConfig) -> CoreResult<TempDir> {
    let parent = config.scratch_parent();
    std::fs::create_dir_all(&parent)?;

    Ok(TempFileBuilder::new()
        .prefix(SCRATCH_DIR_PREFIX)
        .tempdir_in(parent)?)
}

/// Returns a temporary file path with random suffix. Does not create the file.
pub fn create_temp_file_path(dir: &Path, prefix: &str, extension: Option<&str>) -> PathBuf {
    use rand::distributions::Alphanumeric;
    use rand::{Rng, thread_rng};

    let random_suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    let filename = match extension {
        Some(ext) => format!("{prefix}_{random_suffix}.{ext}"),
        None => format!("{prefix}_{random_suffix}"),
    };
    dir.join(filename)
}

/// Owned handle to a scratch file; the file is removed on drop.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    keep: bool,
}

impl ScratchFile {
    /// Takes ownership of `path`. The file need not exist yet.
    pub fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Disarms the guard and returns the path; the file stays on disk.
    pub fn keep(mut self) -> PathBuf {
        self.keep = true;
        std::mem::take(&mut self.path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.keep {
            cleanup_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_paths_are_unique() {
        let dir = Path::new("/tmp/scratch");
        let a = create_temp_file_path(dir, "clip", Some("mov"));
        let b = create_temp_file_path(dir, "clip", Some("mov"));
        assert_ne!(a, b);
        assert_eq!(a.parent(), Some(dir));
        let name = a.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("clip_"));
        assert!(name.ends_with(".mov"));
    }

    #[test]
    fn test_scratch_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intermediate.mov");
        std::fs::write(&path, b"data").unwrap();

        drop(ScratchFile::new(path.clone()));
        assert!(!path.exists());
    }

    #[test]
    fn test_scratch_file_drop_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        drop(ScratchFile::new(dir.path().join("never_written.mov")));
    }

    #[test]
    fn test_kept_scratch_file_survives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intermediate.mov");
        std::fs::write(&path, b"data").unwrap();

        let kept = ScratchFile::new(path.clone()).keep();
        assert_eq!(kept, path);
        assert!(path.exists());
    }

    #[test]
    fn test_scratch_dir_created_under_configured_parent() {
        let parent = tempfile::tempdir().unwrap();
        let config = CoreConfig {
            temp_dir: Some(parent.path().join("nested")),
            ..CoreConfig::default()
        };
        let scratch = create_scratch_dir(&config).unwrap();
        assert!(scratch.path().starts_with(parent.path().join("nested")));
        let name = scratch.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(SCRATCH_DIR_PREFIX));
    }
}
