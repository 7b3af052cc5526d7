//! log4rs setup: bare messages on the console, timestamped lines in the
//! optional run log file.

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;

const CONSOLE_PATTERN: &str = "{m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Installs the global logger. Call once, before any output.
pub fn setup_logging(log_file: Option<&Path>, log_level: LevelFilter) -> Result<()> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let mut config =
        Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");

    if let Some(log_file) = log_file {
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file_appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(log_file)?;

        config = config.appender(Appender::builder().build("file", Box::new(file_appender)));
        root = root.appender("file");
    }

    log4rs::init_config(config.build(root.build(log_level))?)?;

    Ok(())
}
