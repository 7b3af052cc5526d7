// ============================================================================
// reorient-cli/src/main.rs
// ============================================================================
//
// REORIENT CLI: entry point
//
// Parses arguments, installs log4rs (console plus an optional run log file),
// runs the correction and maps the outcome to an exit code:
// 0 when every file was corrected or nothing was found, 1 when any file
// failed or the run could not start, 127 when ffmpeg or mediainfo is missing.

use clap::Parser;
use log::LevelFilter;

use reorient_cli::error::{EXIT_FAILURE, exit_code_for, suggestion_for};
use reorient_cli::logging::run_log_path;
use reorient_cli::{Cli, run_correct};
use reorient_core::file_logging::setup_logging;
use reorient_core::terminal;

use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();
    let args = cli.args;

    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_path = if args.no_log {
        None
    } else {
        let log_dir = args.log_dir.clone().unwrap_or_else(|| PathBuf::from("logs"));
        Some(run_log_path(&log_dir))
    };

    if let Err(e) = setup_logging(log_path.as_deref(), log_level) {
        eprintln!("Failed to initialize logging: {e:#}");
        process::exit(EXIT_FAILURE);
    }

    match run_correct(&args, log_path.as_deref()) {
        Ok(report) if report.has_failures() => process::exit(EXIT_FAILURE),
        Ok(_) => {}
        Err(e) => {
            terminal::print_error("Run aborted", &e.to_string(), suggestion_for(&e));
            process::exit(exit_code_for(&e));
        }
    }
}
