//! Error types for the reorient-core library.
//!
//! Every fallible operation in the crate returns [`CoreResult`]. Errors raised
//! while correcting a single file are caught at the file boundary by the
//! pipeline and recorded in the batch report; only [`CoreError::DependencyNotFound`]
//! returned from the pre-flight check stops a whole run.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Required external tool '{0}' was not found. Please install it and ensure it is on PATH.")]
    DependencyNotFound(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed waiting for '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("'{command}' exited with {status}: {diagnostics}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        diagnostics: String,
    },

    #[error("Failed to read metadata for {0}: {1}")]
    MetadataExtraction(String, String),

    #[error("Invalid rotation value '{value}' for {path}: must be a whole multiple of 90 degrees")]
    InvalidRotation { path: String, value: String },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("No accepted video files were found")]
    NoFilesFound,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Maps a spawn error to [`CoreError`], distinguishing a missing binary.
pub fn command_start_error(command: &str, err: io::Error) -> CoreError {
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(command.to_string())
    } else {
        CoreError::CommandStart(command.to_string(), err)
    }
}

pub fn command_wait_error(command: &str, err: io::Error) -> CoreError {
    CoreError::CommandWait(command.to_string(), err)
}

pub fn command_failed_error(
    command: &str,
    status: ExitStatus,
    diagnostics: impl Into<String>,
) -> CoreError {
    let diagnostics = diagnostics.into();
    CoreError::CommandFailed {
        command: command.to_string(),
        status,
        diagnostics: if diagnostics.trim().is_empty() {
            "no diagnostic output".to_string()
        } else {
            diagnostics
        },
    }
}
