//! Cycles through precomputed refinement levels
//!
//! The sequencer owns the levels of the current run, a cyclic cursor into
//! them and the clock that advances the cursor. The cycle never ends: after
//! the last level it wraps back to level 0.

use super::clock::TickClock;
use crate::math::Vec2;
use crate::refinement::RefinementLevels;

#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    levels: Option<RefinementLevels>,
    /// Index of the level on screen, always `< levels.len()`
    cursor: usize,
    clock: TickClock,
}

impl Sequencer {
    /// Create an idle sequencer stepping every `tick_interval` seconds
    pub fn new(tick_interval: f32) -> Self {
        Self {
            levels: None,
            cursor: 0,
            clock: TickClock::new(tick_interval),
        }
    }

    /// Install a new run and restart the clock from level 0.
    ///
    /// Any previous run is replaced together with its tick stream.
    pub fn start(&mut self, levels: RefinementLevels) {
        log::info!(
            "animating {} refinement levels ({} points)",
            levels.len(),
            levels.point_count()
        );
        self.levels = Some(levels);
        self.cursor = 0;
        self.clock.start();
    }

    /// Cancel the clock and drop the current run
    pub fn stop(&mut self) {
        if self.levels.take().is_some() {
            log::info!("animation stopped");
        }
        self.cursor = 0;
        self.clock.stop();
    }

    /// Step to the next level, wrapping after the last one.
    ///
    /// Does nothing while no levels are installed.
    pub fn tick(&mut self) {
        let Some(levels) = &self.levels else {
            return;
        };
        if levels.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % levels.len();
        log::debug!("tick -> level {}", self.cursor);
    }

    /// Feed elapsed frame time to the clock and apply the resulting ticks.
    ///
    /// Any number of ticks is applied in one step, so a long stall costs no
    /// more than a single frame. Returns the number of ticks applied.
    pub fn update(&mut self, dt: f32) -> u32 {
        let ticks = self.clock.advance(dt);
        let Some(levels) = &self.levels else {
            return ticks;
        };
        let len = levels.len();
        if ticks > 0 && len > 0 {
            self.cursor = (self.cursor + ticks as usize % len) % len;
            log::debug!("{} ticks -> level {}", ticks, self.cursor);
        }
        ticks
    }

    /// Level under the cursor; empty while nothing is installed
    pub fn current_level(&self) -> &[Vec2] {
        self.levels
            .as_ref()
            .and_then(|levels| levels.level(self.cursor))
            .unwrap_or(&[])
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn level_count(&self) -> usize {
        self.levels.as_ref().map_or(0, RefinementLevels::len)
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn tick_interval(&self) -> f32 {
        self.clock.period()
    }

    pub fn set_tick_interval(&mut self, seconds: f32) {
        self.clock.set_period(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rounding;
    use crate::refinement::{Refiner, RefinementParams};

    fn levels(count: usize) -> RefinementLevels {
        let polygon = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        Refiner::new(RefinementParams {
            level_count: count,
            rounding: Rounding::Exact,
        })
        .refine(&polygon)
        .unwrap()
    }

    #[test]
    fn test_idle_sequencer() {
        let mut seq = Sequencer::default();
        assert!(seq.current_level().is_empty());
        assert!(!seq.is_running());

        seq.tick();
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.update(5.0), 0);
    }

    #[test]
    fn test_start_resets_cursor() {
        let mut seq = Sequencer::new(0.5);
        seq.start(levels(7));
        seq.tick();
        seq.tick();
        assert_eq!(seq.cursor(), 2);

        seq.start(levels(7));
        assert_eq!(seq.cursor(), 0);
        assert!(seq.is_running());
        assert_eq!(seq.current_level().len(), 6);
    }

    #[test]
    fn test_cursor_wraps_modulo_level_count() {
        for k in 1..=8 {
            let mut seq = Sequencer::new(0.5);
            seq.start(levels(k));
            for m in 0..30 {
                assert_eq!(seq.cursor(), m % k, "k = {}, m = {}", k, m);
                seq.tick();
            }
        }
    }

    #[test]
    fn test_ten_ticks_over_seven_levels() {
        let mut seq = Sequencer::new(0.5);
        seq.start(levels(7));
        for _ in 0..10 {
            seq.tick();
        }
        assert_eq!(seq.cursor(), 3);
        assert_eq!(seq.current_level().len(), 3 * 2usize.pow(4));
    }

    #[test]
    fn test_update_drives_ticks() {
        let mut seq = Sequencer::new(0.5);
        seq.start(levels(7));

        assert_eq!(seq.update(0.25), 0);
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.update(0.25), 1);
        assert_eq!(seq.cursor(), 1);
        assert_eq!(seq.update(3.0), 6);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn test_long_stall_wraps_in_one_step() {
        let mut seq = Sequencer::new(0.5);
        seq.start(levels(7));
        seq.update(1.5);
        assert_eq!(seq.cursor(), 3);

        // 2e9 ticks; 2e9 % 7 == 5
        assert_eq!(seq.update(1.0e9), 2_000_000_000);
        assert_eq!(seq.cursor(), 1);
        assert!(seq.cursor() < seq.level_count());
    }

    #[test]
    fn test_update_matches_single_ticks() {
        let mut stepped = Sequencer::new(0.5);
        let mut batched = Sequencer::new(0.5);
        stepped.start(levels(5));
        batched.start(levels(5));

        for _ in 0..23 {
            stepped.tick();
        }
        assert_eq!(batched.update(11.5), 23);
        assert_eq!(batched.cursor(), stepped.cursor());
    }

    #[test]
    fn test_stop_cancels_tick_stream() {
        let mut seq = Sequencer::new(0.5);
        seq.start(levels(7));
        seq.update(1.0);
        seq.stop();

        assert!(!seq.is_running());
        assert_eq!(seq.level_count(), 0);
        assert_eq!(seq.update(10.0), 0);
        assert!(seq.current_level().is_empty());
    }
}
