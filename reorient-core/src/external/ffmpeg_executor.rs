// ============================================================================
// reorient-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - run_ffmpeg: spawn, drain events, wait, judge by exit status

use crate::error::{
    CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error,
};

use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::{FfmpegCommand, ffmpeg_is_installed};
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

use std::process::ExitStatus;

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    /// Confirms the ffmpeg binary can be located before any work starts.
    fn ensure_available(&self) -> CoreResult<()>;

    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(FfmpegChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {e}");
            CoreError::OperationFailed(format!("ffmpeg event stream unavailable: {e}"))
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0.wait().map_err(|e| command_wait_error("ffmpeg", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn ensure_available(&self) -> CoreResult<()> {
        if ffmpeg_is_installed() {
            log::debug!("Found dependency: ffmpeg");
            Ok(())
        } else {
            log::warn!("Dependency 'ffmpeg' not found.");
            Err(CoreError::DependencyNotFound("ffmpeg".to_string()))
        }
    }

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg", e))
    }
}

/// Outcome of a successful ffmpeg invocation.
#[derive(Debug, Clone)]
pub struct FfmpegRun {
    pub status: ExitStatus,
    /// Warning and error lines ffmpeg printed while running.
    pub diagnostics: Vec<String>,
}

/// Runs an ffmpeg command to completion.
///
/// The exit status is the only success signal. Diagnostic lines are
/// collected and logged; on failure they are carried in
/// [`CoreError::CommandFailed`].
pub fn run_ffmpeg<S: FfmpegSpawner>(
    spawner: &S,
    cmd: FfmpegCommand,
    label: &str,
) -> CoreResult<FfmpegRun> {
    log::debug!("Running ffmpeg ({label}): {cmd:?}");

    let mut process = spawner.spawn(cmd)?;
    let mut diagnostics = Vec::new();
    process.handle_events(|event| {
        match event {
            FfmpegEvent::Error(line) => {
                log::debug!("ffmpeg ({label}) error: {line}");
                diagnostics.push(line);
            }
            // sidecar runs ffmpeg at `level+info`; anything above info is a diagnostic.
            FfmpegEvent::Log(LogLevel::Info, _) => {}
            FfmpegEvent::Log(_, line) => {
                log::debug!("ffmpeg ({label}): {line}");
                diagnostics.push(line);
            }
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if !status.success() {
        log::error!("ffmpeg ({label}) failed: {status}");
        return Err(command_failed_error(
            &format!("ffmpeg ({label})"),
            status,
            diagnostics.join("\n"),
        ));
    }

    if !diagnostics.is_empty() {
        log::warn!(
            "ffmpeg ({label}) succeeded with {} diagnostic line(s): {}",
            diagnostics.len(),
            diagnostics.join(" | ")
        );
    }

    Ok(FfmpegRun {
        status,
        diagnostics,
    })
}
