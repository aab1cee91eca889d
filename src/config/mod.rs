pub mod style;
pub mod animator;

pub use style::RenderStyle;
pub use animator::AnimatorConfig;
