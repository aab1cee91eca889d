//! Fixed-period tick source
//!
//! The host drives the clock from its frame loop with the elapsed time since
//! the previous frame; the clock turns that into whole ticks and carries the
//! remainder over to the next frame.

/// Default interval between two animation steps
pub const DEFAULT_TICK_INTERVAL: f32 = 0.5;

/// Cancellable fixed-period timer
#[derive(Debug, Clone, PartialEq)]
pub struct TickClock {
    /// Seconds between two ticks
    period: f32,
    /// Time accumulated since the last emitted tick
    accumulated: f32,
    running: bool,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl TickClock {
    /// Create a stopped clock. `period` must be positive.
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulated: 0.0,
            running: false,
        }
    }

    /// Start (or restart) from a fresh period
    pub fn start(&mut self) {
        self.accumulated = 0.0;
        self.running = true;
    }

    /// Cancel the clock; pending partial periods are discarded
    pub fn stop(&mut self) {
        self.accumulated = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Change the period; takes effect from the next period on
    pub fn set_period(&mut self, period: f32) {
        self.period = period;
        self.accumulated = self.accumulated.min(period);
    }

    /// Advance by `dt` seconds and return how many ticks elapsed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || !(dt > 0.0) || !(self.period > 0.0) {
            return 0;
        }

        self.accumulated += dt;
        let ticks = (self.accumulated / self.period).floor();
        if ticks < 1.0 {
            return 0;
        }

        self.accumulated -= ticks * self.period;
        // Guard against float drift leaving a tiny negative remainder
        self.accumulated = self.accumulated.max(0.0);
        ticks.min(u32::MAX as f32) as u32
    }
}
