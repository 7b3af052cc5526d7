//! Rotation-strip stage: stream-copy the source into scratch storage with
//! the video rotation tag overwritten to 0. No re-encode happens here.

use crate::error::CoreResult;
use crate::external::{FfmpegSpawner, run_ffmpeg};
use crate::processing::asset::VideoAsset;
use crate::temp_files::{ScratchFile, create_temp_file_path};

use ffmpeg_sidecar::command::FfmpegCommand;
use log::{debug, info};

use std::path::Path;

/// Builds `ffmpeg -i <source> -c copy -metadata:s:v:0 rotate=0 <intermediate>`.
pub fn build_strip_command(source: &Path, intermediate: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.hide_banner();
    cmd.input(source.to_string_lossy().as_ref());
    cmd.args(["-c", "copy"]);
    cmd.args(["-metadata:s:v:0", "rotate=0"]);
    cmd.output(intermediate.to_string_lossy().as_ref());
    cmd
}

/// Writes the rotation-stripped intermediate for `asset` into `scratch_dir`.
///
/// The returned guard owns the intermediate. On failure the guard is
/// dropped before the error propagates, removing any partial file.
pub fn strip_rotation<S: FfmpegSpawner>(
    spawner: &S,
    asset: &VideoAsset,
    scratch_dir: &Path,
) -> CoreResult<ScratchFile> {
    let intermediate = ScratchFile::new(create_temp_file_path(
        scratch_dir,
        asset.stem(),
        asset.extension(),
    ));

    info!("Removing rotation tag: {}", asset.file_name());
    debug!("Intermediate file: {}", intermediate.path().display());

    let cmd = build_strip_command(asset.source(), intermediate.path());
    run_ffmpeg(spawner, cmd, "strip rotation")?;

    Ok(intermediate)
}
