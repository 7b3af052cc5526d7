//! Implementation of the correction run.
//!
//! Discovers input files, builds the core configuration from the command
//! line, hands everything to reorient-core and prints the summary.

use crate::cli::CorrectArgs;
use crate::error::CliResult;

use reorient_core::external::{MediaInfoSource, SidecarSpawner};
use reorient_core::{
    BatchReport, CoreConfig, CoreConfigBuilder, CoreError, RotationConvention, format_bytes,
    format_duration, terminal,
};

use log::{debug, warn};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Resolves the `--files` arguments. An empty list means nothing to do.
pub fn discover_files(args: &CorrectArgs) -> CliResult<Vec<PathBuf>> {
    match reorient_core::find_processable_files(&args.files) {
        Ok(files) => Ok(files),
        Err(CoreError::NoFilesFound) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Creates and validates the CoreConfig for this run.
pub fn create_core_config(args: &CorrectArgs) -> CliResult<CoreConfig> {
    let convention = if args.signed_rotation {
        RotationConvention::Signed
    } else {
        RotationConvention::MagnitudeOnly
    };

    let mut builder = CoreConfigBuilder::new()
        .rotation_convention(convention)
        .keep_intermediate(args.keep_intermediate);

    if let Some(temp_dir) = &args.temp_dir {
        builder = builder.temp_dir(temp_dir.clone());
    }
    if let Some(crf) = args.crf {
        builder = builder.crf(crf);
    }
    if let Some(subdir) = &args.output_subdir {
        builder = builder.output_subdir(subdir.as_str());
    }

    let config = builder.build();
    config.validate()?;
    Ok(config)
}

fn display_initialization_info(config: &CoreConfig, files: &[PathBuf], log_path: Option<&Path>) {
    terminal::print_section("INITIALIZATION");
    terminal::print_status("Files", &files.len().to_string(), true);
    terminal::print_status("CRF", &config.crf.to_string(), false);
    terminal::print_status("Output folder", &config.output_subdir, false);
    terminal::print_status(
        "Rotation sign",
        match config.rotation_convention {
            RotationConvention::MagnitudeOnly => "ignored (clockwise)",
            RotationConvention::Signed => "honoured",
        },
        false,
    );
    if let Some(log_path) = log_path {
        terminal::print_status("Log file", &log_path.display().to_string(), false);
    }

    terminal::print_subsection("Queued");
    for file in files {
        terminal::print_sub_item(&file.display().to_string());
    }
}

fn display_results(report: &BatchReport, total_start_time: Instant) {
    terminal::print_section("Summary");

    if !report.corrected.is_empty() {
        terminal::print_success(&format!("Corrected {} file(s)", report.corrected.len()));
        for result in &report.corrected {
            terminal::print_subsection(&result.filename);
            terminal::print_status("Rotation", &result.rotation.to_string(), false);
            terminal::print_status("Transposes", &result.transposes.to_string(), false);
            let elapsed = format_duration(result.duration.as_secs_f64());
            terminal::print_status("Time", &elapsed, false);
            terminal::print_status("Input", &format_bytes(result.input_size), false);
            terminal::print_status("Output", &format_bytes(result.output_size), false);
            let written_to = result.output_path.display().to_string();
            terminal::print_status("Written to", &written_to, true);
        }
    }

    if report.has_failures() {
        terminal::print_warning(&format!("{} file(s) failed", report.failed.len()));
        for failure in &report.failed {
            terminal::print_error(
                &failure.filename,
                &format!("{} failed: {}", failure.stage, failure.message),
                None,
            );
        }
    }

    terminal::print_status(
        "Total time",
        &format_duration(total_start_time.elapsed().as_secs_f64()),
        true,
    );
}

/// Runs the correction over every discovered file and reports the results.
///
/// Finding no accepted files is not an error: a warning is printed and an
/// empty report returned. Errors from the pre-flight checks propagate.
pub fn run_correct(args: &CorrectArgs, log_path: Option<&Path>) -> CliResult<BatchReport> {
    let total_start_time = Instant::now();

    let files = discover_files(args)?;
    if files.is_empty() {
        warn!("No accepted video files found in the given paths.");
        return Ok(BatchReport::default());
    }

    let config = create_core_config(args)?;
    display_initialization_info(&config, &files, log_path);
    debug!("Run started: {}", chrono::Local::now());

    terminal::print_section("CORRECTION");
    let metadata_source = MediaInfoSource::new();
    let report =
        reorient_core::correct_videos(&SidecarSpawner, &metadata_source, &config, &files)?;

    display_results(&report, total_start_time);
    debug!("Finished at: {}", chrono::Local::now());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CorrectArgs {
        Cli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_defaults() {
        let config = create_core_config(&parse(&["reorient", "-f", "a.mov"])).unwrap();
        assert_eq!(config.crf, 23);
        assert_eq!(config.output_subdir, "corrected");
        assert_eq!(config.rotation_convention, RotationConvention::MagnitudeOnly);
        assert!(!config.keep_intermediate);
        assert!(config.temp_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "reorient",
            "--crf",
            "18",
            "--signed-rotation",
            "--keep-intermediate",
            "--output-subdir",
            "upright",
            "--temp-dir",
            "/scratch",
            "-f",
            "a.mov",
            "b.mp4",
        ]);
        assert_eq!(args.files.len(), 2);

        let config = create_core_config(&args).unwrap();
        assert_eq!(config.crf, 18);
        assert_eq!(config.output_subdir, "upright");
        assert_eq!(config.rotation_convention, RotationConvention::Signed);
        assert!(config.keep_intermediate);
        assert_eq!(config.temp_dir, Some(PathBuf::from("/scratch")));
    }

    #[test]
    fn test_nested_output_subdir_rejected() {
        let args = parse(&["reorient", "--output-subdir", "a/b", "-f", "a.mov"]);
        assert!(matches!(create_core_config(&args), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_crf_out_of_range_rejected_by_parser() {
        assert!(Cli::try_parse_from(["reorient", "--crf", "60", "-f", "a.mov"]).is_err());
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["reorient"]).is_err());
    }
}
