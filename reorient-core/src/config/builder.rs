// ============================================================================
// reorient-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every field starts at its default, so
// callers only set what they override.

use std::path::PathBuf;

use super::CoreConfig;
use crate::processing::rotation::RotationConvention;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use reorient_core::config::CoreConfigBuilder;
/// use reorient_core::processing::rotation::RotationConvention;
///
/// let config = CoreConfigBuilder::new()
///     .output_subdir("fixed")
///     .rotation_convention(RotationConvention::Signed)
///     .build();
/// assert_eq!(config.output_subdir, "fixed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parent directory for scratch files.
    pub fn temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.config.temp_dir = Some(temp_dir);
        self
    }

    pub fn output_subdir(mut self, output_subdir: impl Into<String>) -> Self {
        self.config.output_subdir = output_subdir.into();
        self
    }

    pub fn crf(mut self, crf: u8) -> Self {
        self.config.crf = crf;
        self
    }

    pub fn rotation_convention(mut self, convention: RotationConvention) -> Self {
        self.config.rotation_convention = convention;
        self
    }

    pub fn keep_intermediate(mut self, keep: bool) -> Self {
        self.config.keep_intermediate = keep;
        self
    }

    /// Builds the CoreConfig. Call [`CoreConfig::validate`] before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
