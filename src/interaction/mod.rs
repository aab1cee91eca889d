mod polygon;
mod state;

pub use polygon::ControlPolygon;
pub use state::{Drawable, Input, Interaction, Mode, Outcome};
