//! Editing/animating state machine
//!
//! All mutation of the control polygon and of the animation goes through
//! [`Interaction::handle`] and [`Interaction::update`], which the host calls
//! from a single event loop.

use crate::animation::Sequencer;
use crate::config::AnimatorConfig;
use crate::error::SubdivisionError;
use crate::math::Vec2;
use crate::refinement::Refiner;

use super::polygon::ControlPolygon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks add control points
    #[default]
    Editing,
    /// The control polygon is frozen and refinement levels cycle
    Animating,
}

/// Signals delivered by the host shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Pointer click in display coordinates
    Click(Vec2),
    /// Refine the control polygon and start animating
    Start,
    /// Advance the animation by one step
    Tick,
    /// Stop animating and return to editing, keeping the control points
    Reset,
    /// Drop all control points
    Clear,
}

/// What handling an [`Input`] did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PointAdded { count: usize },
    Started { levels: usize },
    /// Start was requested without enough control points
    Rejected(SubdivisionError),
    Stepped { level: usize },
    Reset,
    Cleared,
    /// The input has no effect in the current mode
    Ignored,
}

impl Outcome {
    /// Whether the shell should redraw after this outcome
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Outcome::Rejected(_) | Outcome::Ignored)
    }
}

/// What the shell should draw right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable<'a> {
    /// Control points, drawn as small markers
    pub markers: &'a [Vec2],
    /// Polyline drawn as connected straight segments
    pub segments: &'a [Vec2],
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    mode: Mode,
    polygon: ControlPolygon,
    sequencer: Sequencer,
    refiner: Refiner,
}

impl Interaction {
    pub fn new(config: &AnimatorConfig) -> Self {
        Self {
            mode: Mode::Editing,
            polygon: ControlPolygon::new(),
            sequencer: Sequencer::new(config.tick_interval()),
            refiner: Refiner::new(config.refinement_params()),
        }
    }

    /// Apply a new configuration. A running animation keeps its levels;
    /// the new level count and rounding apply from the next start.
    pub fn reconfigure(&mut self, config: &AnimatorConfig) {
        self.refiner = Refiner::new(config.refinement_params());
        self.sequencer.set_tick_interval(config.tick_interval());
    }

    pub fn handle(&mut self, input: Input) -> Outcome {
        let mode = self.mode;
        let outcome = match (mode, input) {
            (Mode::Editing, Input::Click(point)) if point.is_finite() => {
                // Control points live on the same grid as the generated points
                self.polygon.push(self.refiner.params().rounding.apply(point));
                Outcome::PointAdded { count: self.polygon.len() }
            }
            (Mode::Editing, Input::Start) => self.start(),
            (Mode::Editing, Input::Clear) => {
                self.polygon.clear();
                Outcome::Cleared
            }
            (Mode::Animating, Input::Tick) => {
                self.sequencer.tick();
                Outcome::Stepped { level: self.sequencer.cursor() }
            }
            (Mode::Animating, Input::Reset) => {
                self.sequencer.stop();
                self.mode = Mode::Editing;
                log::info!("back to editing with {} control points", self.polygon.len());
                Outcome::Reset
            }
            _ => Outcome::Ignored,
        };

        log::debug!("{:?} in {:?} -> {:?}", input, mode, outcome);
        outcome
    }

    fn start(&mut self) -> Outcome {
        if !self.polygon.is_refinable() {
            log::warn!(
                "not starting animation: {} control points, need at least 3",
                self.polygon.len()
            );
            return Outcome::Rejected(SubdivisionError::InsufficientPoints {
                count: self.polygon.len(),
            });
        }

        match self.refiner.refine(&self.polygon.snapshot()) {
            Ok(levels) => {
                let count = levels.len();
                self.sequencer.start(levels);
                self.mode = Mode::Animating;
                Outcome::Started { levels: count }
            }
            Err(err) => Outcome::Rejected(err),
        }
    }

    /// Advance the animation clock by `dt` seconds.
    ///
    /// Returns whether the displayed level changed.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.mode != Mode::Animating {
            return false;
        }
        self.sequencer.update(dt) > 0
    }

    pub fn drawable(&self) -> Drawable<'_> {
        let markers = self.polygon.points();
        let segments: &[Vec2] = match self.mode {
            Mode::Editing if markers.len() >= 2 => markers,
            Mode::Editing => &[],
            Mode::Animating => self.sequencer.current_level(),
        };
        Drawable { markers, segments }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }
}
