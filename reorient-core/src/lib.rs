//! Core library for batch correction of rotated video files.
//!
//! Phone cameras record orientation as a rotation tag rather than rotating
//! the pixels. This crate reads that tag with mediainfo, plans the
//! equivalent `transpose` operations, strips the tag with an ffmpeg stream
//! copy, and re-encodes with the transform and a tone-mapping chain baked
//! in, writing `<source dir>/corrected/<stem>.mp4` beside each source.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use reorient_core::{CoreConfig, correct_videos};
//! use reorient_core::external::{MediaInfoSource, SidecarSpawner};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::default();
//! let files = reorient_core::find_processable_files(&[PathBuf::from("/path/to/videos")]).unwrap();
//!
//! let report = correct_videos(&SidecarSpawner, &MediaInfoSource::new(), &config, &files).unwrap();
//! println!("{} corrected, {} failed", report.corrected.len(), report.failed.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod processing;
pub mod temp_files;
pub mod terminal;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::{ACCEPTED_EXTENSIONS, find_processable_files, is_accepted_file};
pub use error::{CoreError, CoreResult};
pub use processing::{
    Rotation, RotationConvention, Stage, TransformPlan, Transpose, VideoAsset, correct_video,
    correct_videos, plan,
};
pub use utils::{format_bytes, format_duration};

use std::path::PathBuf;
use std::time::Duration;

/// Result of correcting one file.
#[derive(Debug, Clone)]
pub struct CorrectionResult {
    pub filename: String,
    pub output_path: PathBuf,
    pub rotation: Rotation,
    /// Number of 90° transposes baked into the output.
    pub transposes: usize,
    pub duration: Duration,
    pub input_size: u64,
    pub output_size: u64,
}

/// A file whose correction failed, and where.
#[derive(Debug, Clone)]
pub struct CorrectionFailure {
    pub filename: String,
    pub path: PathBuf,
    pub stage: Stage,
    pub message: String,
}

/// Outcome of a whole run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub corrected: Vec<CorrectionResult>,
    pub failed: Vec<CorrectionFailure>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
