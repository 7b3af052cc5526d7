//! Rotation angles and the transforms that undo them.
//!
//! [`plan`] is the single place where a stored rotation angle becomes a
//! sequence of ffmpeg `transpose` operations. The default convention takes
//! only the magnitude of the angle into account and always turns clockwise,
//! which matches how corrected files have been produced so far; `Signed`
//! turns counter-clockwise for negative angles.

use std::fmt;

/// Rotation recorded on the primary video stream.
///
/// `NotFound` (no video track, or no rotation tag) is distinct from an
/// explicit `Degrees(0)`; both plan to the identity transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Degrees(i32),
    NotFound,
}

impl Rotation {
    /// Builds a rotation from whole degrees; `None` unless a multiple of 90.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        (degrees % 90 == 0).then_some(Self::Degrees(degrees))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees(d) => write!(f, "{d}°"),
            Self::NotFound => write!(f, "none recorded"),
        }
    }
}

/// How the sign of a stored angle affects the transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationConvention {
    /// Ignore the sign: `|angle| / 90` clockwise quarter turns.
    #[default]
    MagnitudeOnly,
    /// Negative angles turn counter-clockwise.
    Signed,
}

/// One 90° turn, rendered as an ffmpeg `transpose` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    Clockwise,
    CounterClockwise,
}

impl Transpose {
    pub fn filter(&self) -> &'static str {
        match self {
            Self::Clockwise => "transpose=1",
            Self::CounterClockwise => "transpose=2",
        }
    }
}

/// Spatial transform applied during the re-encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformPlan {
    Identity,
    /// Always non-empty.
    Transpose(Vec<Transpose>),
}

impl TransformPlan {
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn transposes(&self) -> &[Transpose] {
        match self {
            Self::Identity => &[],
            Self::Transpose(ops) => ops,
        }
    }

    /// Comma-joined filter segment, `None` for the identity plan.
    pub fn filter_segment(&self) -> Option<String> {
        match self {
            Self::Identity => None,
            Self::Transpose(ops) => Some(
                ops.iter()
                    .map(Transpose::filter)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

/// Converts a rotation into the transform that bakes it into the pixels.
pub fn plan(rotation: Rotation, convention: RotationConvention) -> TransformPlan {
    let degrees = match rotation {
        Rotation::NotFound | Rotation::Degrees(0) => return TransformPlan::Identity,
        Rotation::Degrees(d) => d,
    };

    let quarter_turns = ((degrees.unsigned_abs() / 90) % 4) as usize;
    if quarter_turns == 0 {
        return TransformPlan::Identity;
    }

    let direction = match convention {
        RotationConvention::Signed if degrees < 0 => Transpose::CounterClockwise,
        _ => Transpose::Clockwise,
    };

    TransformPlan::Transpose(vec![direction; quarter_turns])
}
