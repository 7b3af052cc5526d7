// ============================================================================
// reorient-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: run log naming
//
// The logger itself is log4rs, installed by reorient_core::file_logging.

use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Path of the log file for a run started now: `<log_dir>/reorient_run_<timestamp>.log`.
pub fn run_log_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("reorient_run_{}.log", get_timestamp()))
}
