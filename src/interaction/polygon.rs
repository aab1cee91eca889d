use crate::error::MIN_POINTS;
use crate::math::Vec2;

/// User-placed control points, in click order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPolygon {
    points: Vec<Vec2>,
}

impl ControlPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Copy of the current points, used to seed a refinement run
    pub fn snapshot(&self) -> Vec<Vec2> {
        self.points.clone()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether there are enough points to refine
    pub fn is_refinable(&self) -> bool {
        self.points.len() >= MIN_POINTS
    }
}
