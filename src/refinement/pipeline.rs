use crate::error::{SubdivisionError, MIN_POINTS};
use crate::math::{cut_corners_into, Rounding, Vec2};

/// Number of levels precomputed when nothing else is configured
pub const DEFAULT_LEVEL_COUNT: usize = 7;

/// Upper bound on the level count; level `i` holds `n * 2^(i + 1)` points
pub const MAX_LEVEL_COUNT: usize = 12;

/// Parameters controlling how a polygon is refined
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinementParams {
    /// How many times corner cutting is applied (K)
    pub level_count: usize,
    /// Mapping of generated points onto the display grid
    pub rounding: Rounding,
}

impl Default for RefinementParams {
    fn default() -> Self {
        Self {
            level_count: DEFAULT_LEVEL_COUNT,
            rounding: Rounding::default(),
        }
    }
}

/// All refinement levels of one animation run.
///
/// Levels are stored back to back in a single buffer and addressed by index,
/// so cycling through them never allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinementLevels {
    points: Vec<Vec2>,
    /// Exclusive end offset of each level inside `points`
    ends: Vec<usize>,
}

impl RefinementLevels {
    /// Number of levels (K)
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Points of level `index`, where level 0 is the first refinement
    pub fn level(&self, index: usize) -> Option<&[Vec2]> {
        let end = *self.ends.get(index)?;
        let start = if index == 0 { 0 } else { self.ends[index - 1] };
        Some(&self.points[start..end])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Vec2]> {
        (0..self.len()).filter_map(move |i| self.level(i))
    }

    /// Total number of points held across all levels
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// Runs corner cutting K times over a control polygon
#[derive(Debug, Clone, Copy, Default)]
pub struct Refiner {
    params: RefinementParams,
}

impl Refiner {
    pub fn new(params: RefinementParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RefinementParams {
        &self.params
    }

    /// Refine `polygon` into `level_count` levels.
    ///
    /// The input itself is not part of the result. Fails without producing
    /// anything if the polygon has fewer than three points.
    pub fn refine(&self, polygon: &[Vec2]) -> Result<RefinementLevels, SubdivisionError> {
        if polygon.len() < MIN_POINTS {
            return Err(SubdivisionError::InsufficientPoints { count: polygon.len() });
        }

        let count = self.params.level_count;
        // n * (2 + 4 + ... + 2^count)
        let growth = 1usize
            .checked_shl(count as u32 + 1)
            .map_or(usize::MAX, |g| g.saturating_sub(2));
        let total = polygon.len().saturating_mul(growth).min(1 << 24);
        let mut points = Vec::with_capacity(total);
        let mut ends = Vec::with_capacity(count);

        let mut current = polygon.to_vec();
        let mut next = Vec::with_capacity(polygon.len() * 2);
        for _ in 0..count {
            next.clear();
            cut_corners_into(&current, self.params.rounding, &mut next)?;
            points.extend_from_slice(&next);
            ends.push(points.len());
            std::mem::swap(&mut current, &mut next);
        }

        log::debug!(
            "refined {} control points into {} levels ({} points)",
            polygon.len(),
            count,
            points.len()
        );

        Ok(RefinementLevels { points, ends })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_default_params() {
        let params = RefinementParams::default();
        assert_eq!(params.level_count, 7);
        assert_eq!(params.rounding, Rounding::Truncate);
    }

    #[test]
    fn test_level_sizes_double() {
        let levels = Refiner::default().refine(&triangle()).unwrap();
        assert_eq!(levels.len(), DEFAULT_LEVEL_COUNT);

        let mut expected = 6;
        for level in levels.iter() {
            assert_eq!(level.len(), expected);
            expected *= 2;
        }
        assert_eq!(levels.point_count(), 3 * ((1 << 8) - 2));
    }

    #[test]
    fn test_first_level_matches_single_cut() {
        let params = RefinementParams {
            level_count: 3,
            rounding: Rounding::Exact,
        };
        let levels = Refiner::new(params).refine(&triangle()).unwrap();
        let first = levels.level(0).unwrap();
        assert_eq!(first[0], Vec2::new(0.0, 0.0));
        assert_eq!(first[1], Vec2::new(2.5, 0.0));
        assert_eq!(first[2], Vec2::new(7.5, 0.0));
        assert_eq!(first[3], Vec2::new(10.0, 2.5));
        assert_eq!(first[4], Vec2::new(10.0, 7.5));
        assert_eq!(first[5], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_levels_chain() {
        let params = RefinementParams {
            level_count: 4,
            rounding: Rounding::Truncate,
        };
        let levels = Refiner::new(params).refine(&triangle()).unwrap();
        for i in 1..levels.len() {
            let previous = levels.level(i - 1).unwrap();
            let expected = crate::math::cut_corners(previous, Rounding::Truncate).unwrap();
            assert_eq!(levels.level(i).unwrap(), expected.as_slice());
        }
    }

    #[test]
    fn test_every_level_keeps_endpoints() {
        let levels = Refiner::default().refine(&triangle()).unwrap();
        for level in levels.iter() {
            assert_eq!(level[0], Vec2::new(0.0, 0.0));
            assert_eq!(level[level.len() - 1], Vec2::new(10.0, 10.0));
        }
    }

    #[test]
    fn test_deterministic() {
        let polygon = vec![
            Vec2::new(120.0, 400.0),
            Vec2::new(250.0, 90.0),
            Vec2::new(433.0, 501.0),
            Vec2::new(610.0, 130.0),
        ];
        let refiner = Refiner::default();
        assert_eq!(refiner.refine(&polygon).unwrap(), refiner.refine(&polygon).unwrap());
    }

    #[test]
    fn test_rejects_degenerate_polygon() {
        let refiner = Refiner::default();
        let points = triangle();
        for n in 0..3 {
            let polygon = &points[..n];
            assert_eq!(
                refiner.refine(polygon),
                Err(SubdivisionError::InsufficientPoints { count: n })
            );
        }
    }

    #[test]
    fn test_level_out_of_range() {
        let levels = Refiner::default().refine(&triangle()).unwrap();
        assert!(levels.level(DEFAULT_LEVEL_COUNT).is_none());
    }
}
