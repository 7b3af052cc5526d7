// ============================================================================
// reorient-core/src/processing/pipeline.rs
// ============================================================================
//
// PIPELINE: Per-file Orientation Correction Orchestration
//
// WORKFLOW:
// 1. Check for required external tools (ffmpeg, mediainfo) once per run
// 2. Create the per-run scratch directory
// 3. For each file, strictly in order:
//    a. Fetch metadata and extract the rotation
//    b. Plan the transform
//    c. Strip the rotation tag into a scratch intermediate
//    d. Re-encode into <source dir>/corrected/<stem>.mp4
//    e. Release the intermediate; on failure remove partial output
// 4. Collect successes and failures into a BatchReport
//
// A failure in any step ends that file only; the batch continues.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{FfmpegSpawner, MetadataSource};
use crate::processing::asset::VideoAsset;
use crate::processing::encode::encode_corrected;
use crate::processing::metadata::read_rotation;
use crate::processing::rotation::plan;
use crate::processing::strip::strip_rotation;
use crate::temp_files::create_scratch_dir;
use crate::utils::get_file_size;
use crate::{BatchReport, CorrectionFailure, CorrectionResult};

use log::{debug, error, info};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Pipeline steps for a single file, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ExtractMetadata,
    PlanTransform,
    StripRotation,
    ReEncode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::ExtractMetadata => "metadata extraction",
            Stage::PlanTransform => "transform planning",
            Stage::StripRotation => "rotation strip",
            Stage::ReEncode => "re-encode",
        };
        f.write_str(name)
    }
}

/// Corrects every file in `files_to_process`, one after another.
///
/// Returns `Err` only when a required tool is missing or the scratch
/// directory cannot be created; both are checked before any file is
/// touched. Per-file failures are reported in the returned [`BatchReport`].
pub fn correct_videos<S: FfmpegSpawner, M: MetadataSource>(
    spawner: &S,
    metadata_source: &M,
    config: &CoreConfig,
    files_to_process: &[PathBuf],
) -> CoreResult<BatchReport> {
    info!("Checking for required external commands...");
    spawner.ensure_available()?;
    metadata_source.ensure_available()?;
    info!("External dependency check passed.");

    config.validate()?;

    let scratch = create_scratch_dir(config)?;
    debug!("Scratch directory: {}", scratch.path().display());

    let mut report = BatchReport::default();
    for (index, input_path) in files_to_process.iter().enumerate() {
        info!(
            "[{}/{}] Processing: {}",
            index + 1,
            files_to_process.len(),
            input_path.display()
        );

        let outcome = correct_video(
            spawner,
            metadata_source,
            config,
            scratch.path(),
            input_path,
        );
        match outcome {
            Ok(result) => {
                info!("Done: {}", result.output_path.display());
                report.corrected.push(result);
            }
            Err(failure) => {
                error!(
                    "Failed to correct {} during {}: {}",
                    failure.filename, failure.stage, failure.message
                );
                report.failed.push(failure);
            }
        }
        info!("----------------------------------------");
    }

    if config.keep_intermediate {
        let kept = scratch.keep();
        info!("Intermediate files kept in {}", kept.display());
    }

    Ok(report)
}

/// Runs the full pipeline for one file.
///
/// Any intermediate or partial output produced for the file is removed
/// before a failure is returned.
pub fn correct_video<S: FfmpegSpawner, M: MetadataSource>(
    spawner: &S,
    metadata_source: &M,
    config: &CoreConfig,
    scratch_dir: &Path,
    input_path: &Path,
) -> Result<CorrectionResult, CorrectionFailure> {
    let start_time = Instant::now();
    let mut stage = Stage::Start;

    let outcome = run_stages(
        spawner,
        metadata_source,
        config,
        scratch_dir,
        input_path,
        &mut stage,
    );

    outcome
        .map(|(asset, rotation, transposes, output_path)| CorrectionResult {
            filename: asset.file_name().to_string(),
            input_size: get_file_size(asset.source()),
            output_size: get_file_size(&output_path),
            output_path,
            rotation,
            transposes,
            duration: start_time.elapsed(),
        })
        .map_err(|e| CorrectionFailure {
            filename: input_path.file_name().map_or_else(
                || input_path.display().to_string(),
                |n| n.to_string_lossy().to_string(),
            ),
            path: input_path.to_path_buf(),
            stage,
            message: e.to_string(),
        })
}

type StageOutput = (VideoAsset, crate::Rotation, usize, PathBuf);

fn run_stages<S: FfmpegSpawner, M: MetadataSource>(
    spawner: &S,
    metadata_source: &M,
    config: &CoreConfig,
    scratch_dir: &Path,
    input_path: &Path,
    stage: &mut Stage,
) -> CoreResult<StageOutput> {
    let asset = VideoAsset::new(input_path, &config.output_subdir)?;

    *stage = Stage::ExtractMetadata;
    let rotation = read_rotation(metadata_source, asset.source())?;
    info!("Rotation: {rotation}");

    *stage = Stage::PlanTransform;
    let transform = plan(rotation, config.rotation_convention);
    match transform.filter_segment() {
        Some(segment) => info!("Transform: {segment}"),
        None => info!("Transform: none (tone-mapping only)"),
    }

    *stage = Stage::StripRotation;
    let intermediate = strip_rotation(spawner, &asset, scratch_dir)?;

    *stage = Stage::ReEncode;
    let output_path = encode_corrected(
        spawner,
        intermediate.path(),
        &transform,
        &asset,
        config.crf,
    )?;

    if config.keep_intermediate {
        let kept = intermediate.keep();
        debug!("Kept intermediate: {}", kept.display());
    }

    Ok((asset, rotation, transform.transposes().len(), output_path))
}
