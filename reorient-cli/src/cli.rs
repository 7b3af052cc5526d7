// reorient-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Reorient: bake phone rotation tags into video pixels",
    long_about = "Reads each video's rotation tag with mediainfo, strips it with an ffmpeg \
                  stream copy, then re-encodes with the matching transpose and a tone-mapping \
                  chain into <source dir>/corrected/<stem>.mp4."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: CorrectArgs,
}

#[derive(Parser, Debug)]
pub struct CorrectArgs {
    /// Video files or directories to correct (directories are not searched recursively)
    #[arg(short = 'f', long = "files", required = true, num_args = 1.., value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Enable verbose output (debug logging and ffmpeg command lines)
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not write a run log file
    #[arg(long)]
    pub no_log: bool,

    /// Directory for run log files (defaults to ./logs)
    #[arg(long, value_name = "DIR", env = "REORIENT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Parent directory for the per-run scratch directory (defaults to the system temp dir)
    #[arg(long, value_name = "DIR", env = "REORIENT_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// CRF quality for the re-encode (0-51, lower is better quality)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=51))]
    pub crf: Option<u8>,

    /// Keep the rotation-stripped intermediates in the scratch directory
    #[arg(long)]
    pub keep_intermediate: bool,

    /// Treat negative rotation tags as counter-clockwise instead of using the magnitude
    #[arg(long)]
    pub signed_rotation: bool,

    /// Name of the output subdirectory created beside each source
    #[arg(long, value_name = "NAME")]
    pub output_subdir: Option<String>,
}
