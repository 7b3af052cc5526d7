//! Configuration structures and constants for the reorient-core library.
//!
//! The filter chain and output container are fixed. Configuration covers
//! where scratch and output files live, the quality target, and the
//! rotation sign convention.

mod builder;

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::processing::rotation::RotationConvention;

pub use builder::CoreConfigBuilder;

// Default constants

/// Constant rate factor passed to the re-encode stage.
pub const DEFAULT_CRF: u8 = 23;

/// Highest CRF accepted by the default x264 encoder.
pub const MAX_CRF: u8 = 51;

/// Subdirectory created beside each source file for corrected output.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "corrected";

/// Container extension of every corrected file, whatever the source container.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Prefix of the per-run scratch directory.
pub const SCRATCH_DIR_PREFIX: &str = "reorient_";

/// Main configuration structure for the reorient-core library.
///
/// Created by the consumer (the CLI) and passed to
/// [`correct_videos`](crate::processing::correct_videos).
///
/// # Examples
///
/// ```rust
/// use reorient_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .crf(20)
///     .keep_intermediate(true)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Parent directory for the per-run scratch directory (system temp dir if unset)
    pub temp_dir: Option<PathBuf>,

    /// Name of the output directory created beside each source file
    pub output_subdir: String,

    /// Constant rate factor for the re-encode stage
    pub crf: u8,

    /// How the sign of a stored rotation angle is interpreted
    pub rotation_convention: RotationConvention,

    /// Keep the rotation-stripped intermediate files after a successful run
    pub keep_intermediate: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
            crf: DEFAULT_CRF,
            rotation_convention: RotationConvention::default(),
            keep_intermediate: false,
        }
    }
}

impl CoreConfig {
    /// Checks value ranges before a run starts.
    pub fn validate(&self) -> CoreResult<()> {
        if self.crf > MAX_CRF {
            return Err(CoreError::Config(format!(
                "crf must be between 0 and {MAX_CRF}, got {}",
                self.crf
            )));
        }

        let mut components = Path::new(&self.output_subdir).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(CoreError::Config(format!(
                    "output subdirectory must be a single directory name, got '{}'",
                    self.output_subdir
                )));
            }
        }

        if let Some(temp_dir) = &self.temp_dir {
            if temp_dir.exists() && !temp_dir.is_dir() {
                return Err(CoreError::Config(format!(
                    "temp dir '{}' is not a directory",
                    temp_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Directory under which the per-run scratch directory is created.
    pub fn scratch_parent(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
