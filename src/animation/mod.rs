//! Animation of refinement levels
//!
//! A fixed-period clock drives a cyclic cursor over the precomputed levels.

mod clock;
mod sequencer;

pub use clock::{TickClock, DEFAULT_TICK_INTERVAL};
pub use sequencer::Sequencer;
