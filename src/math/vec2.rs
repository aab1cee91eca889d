use serde::{Serialize, Deserialize};

/// 2D point in display space (pixels, y pointing down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Weighted sum `a * self + b * other`, evaluated per component
    pub fn blend(&self, a: f64, other: &Self, b: f64) -> Self {
        Self {
            x: a * self.x + b * other.x,
            y: a * self.y + b * other.y,
        }
    }

    /// Drop the fractional part of both coordinates (rounds toward zero)
    pub fn trunc(&self) -> Self {
        Self {
            x: self.x.trunc(),
            y: self.y.trunc(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Flatten points into `[x0, y0, x1, y1, ...]` for hand-off to JavaScript
pub fn flatten(points: &[Vec2]) -> Vec<f64> {
    points.iter().flat_map(|p| p.to_array()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_blend() {
        let a = Vec2::new(1.0, -3.0);
        let b = Vec2::new(9.0, 5.0);
        let quarter = a.blend(0.75, &b, 0.25);
        assert!((quarter.x - 3.0).abs() < 1e-12);
        assert!((quarter.y - -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_vec2_trunc_rounds_toward_zero() {
        let v = Vec2::new(7.9, -2.5).trunc();
        assert_eq!(v, Vec2::new(7.0, -2.0));
    }

    #[test]
    fn test_vec2_is_finite() {
        assert!(Vec2::new(1.0, 2.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 2.0).is_finite());
        assert!(!Vec2::new(1.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_flatten() {
        let points = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
        assert_eq!(flatten(&points), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(flatten(&[]).is_empty());
    }
}
