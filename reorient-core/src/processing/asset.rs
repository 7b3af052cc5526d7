//! Per-file naming: where a source lives and where its corrected copy goes.

use crate::config::OUTPUT_EXTENSION;
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// A source video and the paths derived from it. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    source: PathBuf,
    file_name: String,
    stem: String,
    extension: Option<String>,
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl VideoAsset {
    /// Builds the asset for `path`, placing output in `<source dir>/<output_subdir>`.
    ///
    /// Relative paths are made absolute against the current directory.
    pub fn new(path: &Path, output_subdir: &str) -> CoreResult<Self> {
        let source = std::path::absolute(path).map_err(|e| {
            CoreError::PathError(format!("Failed to resolve {}: {}", path.display(), e))
        })?;

        let file_name = source
            .file_name()
            .ok_or_else(|| {
                CoreError::PathError(format!("Failed to get filename for {}", source.display()))
            })?
            .to_string_lossy()
            .to_string();

        let stem = source
            .file_stem()
            .ok_or_else(|| {
                CoreError::PathError(format!(
                    "Failed to get filename stem for {}",
                    source.display()
                ))
            })?
            .to_string_lossy()
            .to_string();

        let extension = source
            .extension()
            .map(|ext| ext.to_string_lossy().to_string());

        let source_dir = source
            .parent()
            .ok_or_else(|| {
                CoreError::PathError(format!(
                    "Could not determine parent directory for file '{}'",
                    source.display()
                ))
            })?
            .to_path_buf();

        let output_dir = source_dir.join(output_subdir);

        Ok(Self {
            source,
            file_name,
            stem,
            extension,
            source_dir,
            output_dir,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output dir>/<stem>.mp4`, whatever the source container.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.{}", self.stem, OUTPUT_EXTENSION))
    }
}
