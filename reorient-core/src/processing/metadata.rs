//! Rotation extraction from a fetched metadata document.
//!
//! The document is fetched once per file by the pipeline and handed here;
//! nothing in this module performs I/O.

use crate::error::{CoreError, CoreResult};
use crate::external::{MediaInfoDocument, MetadataSource};
use crate::processing::rotation::Rotation;

use std::path::Path;

/// Fetches the metadata document for `path` and extracts its rotation.
pub fn read_rotation<M: MetadataSource>(source: &M, path: &Path) -> CoreResult<Rotation> {
    let document = source.fetch(path)?;
    extract_rotation(&document, path)
}

/// Rotation of the first video track.
///
/// Returns `Rotation::NotFound` when there is no video track or the track
/// carries no rotation tag. A tag that is not a whole multiple of 90
/// degrees is an error.
pub fn extract_rotation(document: &MediaInfoDocument, path: &Path) -> CoreResult<Rotation> {
    let Some(track) = document.first_video_track() else {
        log::debug!("No video track found for {}", path.display());
        return Ok(Rotation::NotFound);
    };

    let Some(raw) = track.rotation.as_deref() else {
        log::debug!("Video track of {} has no rotation tag", path.display());
        return Ok(Rotation::NotFound);
    };

    parse_rotation(raw).ok_or_else(|| CoreError::InvalidRotation {
        path: path.display().to_string(),
        value: raw.to_string(),
    })
}

/// Parses MediaInfo's decimal rotation string ("90.000", "-180", "0").
fn parse_rotation(raw: &str) -> Option<Rotation> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > f64::from(i32::MAX) {
        return None;
    }
    Rotation::from_degrees(value as i32)
}
