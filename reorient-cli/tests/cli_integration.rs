use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn reorient_cmd() -> Command {
    Command::cargo_bin("reorient").expect("Failed to find reorient binary")
}

#[test]
fn test_help_lists_options() -> Result<(), Box<dyn Error>> {
    reorient_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--files"))
        .stdout(contains("--crf"))
        .stdout(contains("--signed-rotation"));
    Ok(())
}

#[test]
fn test_files_argument_required() -> Result<(), Box<dyn Error>> {
    reorient_cmd()
        .assert()
        .failure()
        .stderr(contains("--files"));
    Ok(())
}

#[test]
fn test_crf_out_of_range_rejected() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    reorient_cmd()
        .arg("--no-log")
        .arg("--crf")
        .arg("99")
        .arg("-f")
        .arg(input_dir.path())
        .assert()
        .failure()
        .stderr(contains("99"));
    Ok(())
}

#[test]
fn test_empty_directory_is_not_an_error() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    std::fs::write(input_dir.path().join("notes.txt"), "not a video")?;

    reorient_cmd()
        .arg("--no-log")
        .arg("-f")
        .arg(input_dir.path())
        .assert()
        .success()
        .stdout(contains("No accepted video files found"));

    assert!(!input_dir.path().join("corrected").exists());
    Ok(())
}

#[test]
fn test_non_existent_input_is_skipped() -> Result<(), Box<dyn Error>> {
    reorient_cmd()
        .arg("--no-log")
        .arg("-f")
        .arg("surely/this/does/not/exist/clip.mov")
        .assert()
        .success()
        .stdout(contains("does not exist"))
        .stdout(contains("No accepted video files found"));
    Ok(())
}

#[test]
fn test_run_log_written_to_log_dir() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let log_dir = tempdir()?;

    reorient_cmd()
        .arg("--log-dir")
        .arg(log_dir.path())
        .arg("-f")
        .arg(input_dir.path())
        .assert()
        .success();

    let logs: Vec<_> = std::fs::read_dir(log_dir.path())?
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("reorient_run_"));

    let contents = std::fs::read_to_string(log_dir.path().join(&logs[0]))?;
    assert!(contents.contains("No accepted video files found"));
    Ok(())
}
