//! Game timing configuration

use std::time::Duration;

/// Shortest simulated thinking time before a computer move
pub const DEFAULT_THINK_DELAY_MIN: Duration = Duration::from_millis(500);
/// Longest simulated thinking time before a computer move
pub const DEFAULT_THINK_DELAY_MAX: Duration = Duration::from_millis(1500);
/// How long a rejected-move notification stays visible
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Timing knobs for the turn controller and its UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Thinking delay is drawn uniformly from `think_delay_min..=think_delay_max`
    pub think_delay_min: Duration,
    pub think_delay_max: Duration,
    pub toast_duration: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_min: DEFAULT_THINK_DELAY_MIN,
            think_delay_max: DEFAULT_THINK_DELAY_MAX,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl GameConfig {
    /// Set the thinking delay range. Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn with_think_delay(mut self, min: Duration, max: Duration) -> Self {
        self.think_delay_min = min.min(max);
        self.think_delay_max = min.max(max);
        self
    }

    /// Computer replies on the next poll
    #[must_use]
    pub fn instant() -> Self {
        Self::default().with_think_delay(Duration::ZERO, Duration::ZERO)
    }

    #[must_use]
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }
}
