//! Refinement pipeline
//!
//! Repeatedly applies corner cutting to a control polygon snapshot and keeps
//! every intermediate level for the animation to cycle through.

mod pipeline;

pub use pipeline::{Refiner, RefinementParams, RefinementLevels, DEFAULT_LEVEL_COUNT, MAX_LEVEL_COUNT};
