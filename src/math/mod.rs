pub mod vec2;
pub mod corner_cut;

pub use vec2::{Vec2, flatten};
pub use corner_cut::{Rounding, cut_corners, cut_corners_into};
