//! MediaInfo integration for container and stream metadata.
//!
//! `mediainfo --Output=JSON` produces one document per file: a `media`
//! object holding a `track` list, each entry tagged with its `@type`
//! ("General", "Video", "Audio", ...). Only the fields the pipeline reads
//! are modelled; everything else is ignored by serde.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::check_dependency;

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::process::Command;

/// One stream track as reported by MediaInfo.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoTrack {
    #[serde(rename = "@type")]
    pub track_type: String,
    #[serde(rename = "Format", default)]
    pub format: Option<String>,
    #[serde(rename = "Width", default, deserialize_with = "string_or_number")]
    pub width: Option<String>,
    #[serde(rename = "Height", default, deserialize_with = "string_or_number")]
    pub height: Option<String>,
    #[serde(rename = "Duration", default, deserialize_with = "string_or_number")]
    pub duration: Option<String>,
    /// Display rotation in degrees, e.g. "90.000". Absent when the stream
    /// carries no rotation tag.
    #[serde(rename = "Rotation", default, deserialize_with = "string_or_number")]
    pub rotation: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoMedia {
    #[serde(rename = "@ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub track: Vec<MediaInfoTrack>,
}

/// Root MediaInfo response. `media` is `null` when MediaInfo could not open the file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoDocument {
    #[serde(default)]
    pub media: Option<MediaInfoMedia>,
}

impl MediaInfoDocument {
    /// The first track of kind "Video", if any.
    pub fn first_video_track(&self) -> Option<&MediaInfoTrack> {
        self.media
            .as_ref()?
            .track
            .iter()
            .find(|track| track.track_type == "Video")
    }
}

/// MediaInfo emits numbers as strings, but accept bare numbers as well.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Source of structured metadata for a media file.
pub trait MetadataSource {
    /// Confirms the backing tool can be located before any work starts.
    fn ensure_available(&self) -> CoreResult<()>;

    /// Fetches the metadata document for `path`. Called once per file.
    fn fetch(&self, path: &Path) -> CoreResult<MediaInfoDocument>;
}

/// `MetadataSource` backed by the `mediainfo` command-line tool.
#[derive(Debug, Clone)]
pub struct MediaInfoSource {
    binary: String,
}

impl Default for MediaInfoSource {
    fn default() -> Self {
        Self {
            binary: "mediainfo".to_string(),
        }
    }
}

impl MediaInfoSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataSource for MediaInfoSource {
    fn ensure_available(&self) -> CoreResult<()> {
        check_dependency(&self.binary, "--Version")
    }

    fn fetch(&self, path: &Path) -> CoreResult<MediaInfoDocument> {
        log::debug!("Running mediainfo on: {}", path.display());

        let output = Command::new(&self.binary)
            .arg("--Output=JSON")
            .arg(path)
            .output()
            .map_err(|e| command_start_error(&self.binary, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(command_failed_error(&self.binary, output.status, stderr.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_media_info(&stdout, path)
    }
}

/// Parses MediaInfo JSON output for `path`.
///
/// Empty output or a `null` media object means MediaInfo could not open
/// the file, which is reported as [`CoreError::MetadataExtraction`].
pub fn parse_media_info(json: &str, path: &Path) -> CoreResult<MediaInfoDocument> {
    if json.trim().is_empty() {
        return Err(CoreError::MetadataExtraction(
            path.display().to_string(),
            "mediainfo produced no output".to_string(),
        ));
    }

    let document: MediaInfoDocument = serde_json::from_str(json).map_err(|e| {
        CoreError::JsonParse(format!(
            "Failed to parse mediainfo JSON output for {}: {}",
            path.display(),
            e
        ))
    })?;

    if document.media.is_none() {
        return Err(CoreError::MetadataExtraction(
            path.display().to_string(),
            "mediainfo could not open the file".to_string(),
        ));
    }

    Ok(document)
}
