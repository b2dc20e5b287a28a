use embassy_time::Duration;

use crate::{DEFAULT_BOUNCE_GUARD, DEFAULT_CYCLE_PERIOD, DEFAULT_LONG_THRESHOLD, DEFAULT_POLL_INTERVAL};

/// Timing configuration of a debounced button.
///
/// All durations are interpreted against the monotonic `embassy-time`
/// clock. Fields can be set directly, or indirectly through the
/// registration setters on
/// [`DebouncedButton`](crate::button::DebouncedButton), which accept
/// per-callback overrides.
#[derive(Clone, Copy, Debug)]
pub struct ButtonConfig {
    /// Period of the `Cycle` event while the button is held.
    pub cycle_period: Duration,
    /// Held duration above which (strictly) a release classifies as a
    /// long press. A release held for exactly this duration is short.
    pub long_threshold: Duration,
    /// Minimum quiet interval after a release before the next falling
    /// edge is accepted as a genuine press. Edges arriving earlier are
    /// treated as contact bounce and ignored.
    pub bounce_guard: Duration,
    /// Tick period while the button is held. Bounds the release
    /// detection latency; has no influence on correctness beyond that.
    pub poll_interval: Duration,
    /// Force-end a press episode after this held duration.
    ///
    /// `None` means an episode only ends on physical release, so a
    /// permanently shorted button keeps its episode open forever. With
    /// `Some(t)` the episode is classified and closed after `t` as if
    /// the button had been released.
    pub hold_timeout: Option<Duration>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            cycle_period: DEFAULT_CYCLE_PERIOD,
            long_threshold: DEFAULT_LONG_THRESHOLD,
            bounce_guard: DEFAULT_BOUNCE_GUARD,
            poll_interval: DEFAULT_POLL_INTERVAL,
            hold_timeout: None,
        }
    }
}
