//! Filtered re-encode stage: tone-map and colour-normalise the intermediate,
//! bake in the planned transposes, and write the corrected file.

use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegSpawner, run_ffmpeg};
use crate::processing::asset::VideoAsset;
use crate::processing::rotation::TransformPlan;
use crate::utils::{cleanup_file, remove_file_if_exists};

use ffmpeg_sidecar::command::FfmpegCommand;
use log::{debug, info};

use std::path::{Path, PathBuf};

/// Linear-light rescale, float planar RGB, BT.709 primaries, mobius
/// tone-mapping, BT.709 tv-range, 8-bit 4:2:0 output.
pub const TONEMAP_FILTER_CHAIN: &str = "zscale=t=linear:npl=200,format=gbrpf32le,\
zscale=p=bt709,tonemap=tonemap=mobius:desat=2,\
zscale=t=bt709:m=bt709:r=tv,format=yuv420p";

/// The fixed chain, followed by the plan's transposes if any.
pub fn build_filter_chain(plan: &TransformPlan) -> String {
    match plan.filter_segment() {
        Some(transposes) => format!("{TONEMAP_FILTER_CHAIN},{transposes}"),
        None => TONEMAP_FILTER_CHAIN.to_string(),
    }
}

/// Builds `ffmpeg -i <input> -vf <chain> -crf <crf> -c:a copy <output>`.
pub fn build_encode_command(
    input: &Path,
    filter_chain: &str,
    crf: u8,
    output: &Path,
) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.hide_banner();
    cmd.input(input.to_string_lossy().as_ref());
    cmd.args(["-vf", filter_chain]);
    cmd.args(["-crf", &crf.to_string()]);
    cmd.args(["-c:a", "copy"]);
    cmd.output(output.to_string_lossy().as_ref());
    cmd
}

/// Creates the output directory and clears any previous output file.
pub fn prepare_output(asset: &VideoAsset) -> CoreResult<PathBuf> {
    let output_dir = asset.output_dir();
    std::fs::create_dir_all(output_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    let output_path = asset.output_path();
    if remove_file_if_exists(&output_path).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to remove existing output '{}': {}",
            output_path.display(),
            e
        ))
    })? {
        info!("Replaced previous output: {}", output_path.display());
    }

    Ok(output_path)
}

/// Re-encodes `intermediate` into the asset's corrected output path.
///
/// A failed encode leaves no output file behind.
pub fn encode_corrected<S: FfmpegSpawner>(
    spawner: &S,
    intermediate: &Path,
    plan: &TransformPlan,
    asset: &VideoAsset,
    crf: u8,
) -> CoreResult<PathBuf> {
    let output_path = prepare_output(asset)?;
    let filter_chain = build_filter_chain(plan);

    info!("Re-encoding: {} -> {}", asset.file_name(), output_path.display());
    debug!("Video filters: {filter_chain}");

    let cmd = build_encode_command(intermediate, &filter_chain, crf, &output_path);
    if let Err(e) = run_ffmpeg(spawner, cmd, "re-encode") {
        cleanup_file(&output_path);
        return Err(e);
    }

    Ok(output_path)
}
