// ============================================================================
// reorient-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: result alias and exit codes
//
// The CLI reuses the core error type; this module only maps errors to
// process exit codes.

use reorient_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit code when a required external tool is missing (shell convention).
pub const EXIT_DEPENDENCY_MISSING: i32 = 127;

/// Exit code for any other failure, including a batch with failed files.
pub const EXIT_FAILURE: i32 = 1;

/// Maps a run-level error to the process exit code.
pub fn exit_code_for(error: &CoreError) -> i32 {
    match error {
        CoreError::DependencyNotFound(_) => EXIT_DEPENDENCY_MISSING,
        _ => EXIT_FAILURE,
    }
}

/// A one-line hint shown under the error, when there is one.
pub fn suggestion_for(error: &CoreError) -> Option<&'static str> {
    match error {
        CoreError::DependencyNotFound(tool) if tool == "ffmpeg" => {
            Some("Install ffmpeg (with the zscale filter) and make sure it is on PATH")
        }
        CoreError::DependencyNotFound(tool) if tool == "mediainfo" => {
            Some("Install the mediainfo command-line tool and make sure it is on PATH")
        }
        CoreError::Config(_) => Some("Check the --crf and --output-subdir values"),
        _ => None,
    }
}
