//! Terminal presentation helpers.
//!
//! Everything is emitted through `log::info!`/`warn!`/`error!` so the same
//! lines land in the run log file. Colour is applied with `console` and
//! suppressed when `NO_COLOR` is set.

use console::style;
use log::{error, info, warn};

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", style(title.to_uppercase()).cyan().bold());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    if should_use_color() {
        info!("  {}", style(title).bold());
    } else {
        info!("  {title}");
    }
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let prefix = status_prefix(label);

    if should_use_color() && highlight {
        info!("{prefix}{}", style(value).green().bold());
    } else {
        info!("{prefix}{value}");
    }
}

/// Indented `label:` padded so values line up; always at least one space.
fn status_prefix(label: &str) -> String {
    let label_width: usize = 15;
    let padding = label_width.saturating_sub(label.chars().count()).max(1);
    format!("      {label}:{}", " ".repeat(padding))
}

/// Print an indented list item
pub fn print_sub_item(message: &str) {
    info!("    {message}");
}

/// Print a success message
pub fn print_success(message: &str) {
    info!("");
    if should_use_color() {
        info!("  ✓ {}", style(message).green());
    } else {
        info!("  ✓ {message}");
    }
}

pub fn print_warning(message: &str) {
    if should_use_color() {
        warn!("  ⚠ {}", style(message).yellow());
    } else {
        warn!("  ⚠ {message}");
    }
}

/// Print an error with an optional hint on how to fix it
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    if should_use_color() {
        error!("  ✗ {}", style(title).red().bold());
    } else {
        error!("  ✗ {title}");
    }
    error!("      {message}");
    if let Some(suggestion) = suggestion {
        info!("      {suggestion}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_values_align() {
        assert_eq!(status_prefix("CRF"), format!("      CRF:{}", " ".repeat(12)));
        assert_eq!(status_prefix("Rotation").len(), status_prefix("Time").len());
    }

    #[test]
    fn test_long_label_keeps_one_space() {
        assert_eq!(
            status_prefix("A label longer than fifteen"),
            "      A label longer than fifteen: "
        );
    }
}
