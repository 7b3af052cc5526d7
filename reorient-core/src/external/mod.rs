// ============================================================================
// reorient-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and mediainfo
//
// Both external programs sit behind traits (FfmpegSpawner, MetadataSource)
// so the pipeline can be driven by fakes in tests. The default
// implementations run the real binaries: ffmpeg through ffmpeg-sidecar,
// mediainfo through std::process with JSON output.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

/// Traits and the ffmpeg-sidecar implementation for running ffmpeg
pub mod ffmpeg_executor;

/// MediaInfo JSON model and the metadata source trait
pub mod mediainfo_executor;

pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegRun, FfmpegSpawner, SidecarProcess, SidecarSpawner, run_ffmpeg,
};
pub use mediainfo_executor::{
    MediaInfoDocument, MediaInfoMedia, MediaInfoSource, MediaInfoTrack, MetadataSource,
};

/// Checks that an external command can be started.
///
/// Runs `cmd_name version_arg` with output discarded. Only the ability to
/// spawn matters; the exit status of the version query is ignored.
pub fn check_dependency(cmd_name: &str, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
