//! Orientation correction: metadata extraction, transform planning and the
//! two ffmpeg stages, tied together by the pipeline orchestrator.

/// Source and output naming for a single file
pub mod asset;

/// Filtered re-encode stage
pub mod encode;

/// Rotation extraction from MediaInfo documents
pub mod metadata;

/// Per-file and batch orchestration
pub mod pipeline;

/// Rotation angles and transform planning
pub mod rotation;

/// Rotation-strip stage
pub mod strip;

pub use asset::VideoAsset;
pub use pipeline::{Stage, correct_video, correct_videos};
pub use rotation::{Rotation, RotationConvention, TransformPlan, Transpose, plan};
