//! Open-curve corner cutting
//!
//! Each edge `(p, q)` of the input polyline is replaced by the two points at
//! one quarter and three quarters of its length. Unlike the closed variant of
//! Chaikin's scheme, the first and last input points are copied through
//! unchanged, so the refined curve keeps its endpoints pinned.

use serde::{Deserialize, Serialize};

use super::Vec2;
use crate::error::{SubdivisionError, MIN_POINTS};

/// How generated coordinates are mapped onto the display grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Truncate every generated coordinate toward zero (integer pixels).
    /// Applied at each level, so the error compounds across levels exactly
    /// like an integer-pixel implementation would.
    #[default]
    Truncate,
    /// Keep real coordinates; the renderer draws them with sub-pixel precision.
    Exact,
}

impl Rounding {
    pub fn apply(self, point: Vec2) -> Vec2 {
        match self {
            Rounding::Truncate => point.trunc(),
            Rounding::Exact => point,
        }
    }
}

/// Refine `points` once.
///
/// The result holds `2 * points.len()` points: the pinned first point, two
/// cut points per edge, and the pinned last point.
pub fn cut_corners(points: &[Vec2], rounding: Rounding) -> Result<Vec<Vec2>, SubdivisionError> {
    let mut out = Vec::with_capacity(points.len() * 2);
    cut_corners_into(points, rounding, &mut out)?;
    Ok(out)
}

/// Same as [`cut_corners`], appending into `out` instead of allocating.
///
/// Nothing is written to `out` when the input is rejected.
pub fn cut_corners_into(
    points: &[Vec2],
    rounding: Rounding,
    out: &mut Vec<Vec2>,
) -> Result<(), SubdivisionError> {
    let (first, last) = match points {
        [first, .., last] if points.len() >= MIN_POINTS => (*first, *last),
        _ => return Err(SubdivisionError::InsufficientPoints { count: points.len() }),
    };

    out.reserve(points.len() * 2);
    out.push(first);
    for edge in points.windows(2) {
        let (p, q) = (edge[0], edge[1]);
        out.push(rounding.apply(p.blend(0.75, &q, 0.25)));
        out.push(rounding.apply(p.blend(0.25, &q, 0.75)));
    }
    out.push(last);

    Ok(())
}
