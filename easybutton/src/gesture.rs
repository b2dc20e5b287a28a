use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::config::ButtonConfig;
use crate::debounce::{BounceFilter, EdgeVerdict, IntervalGuard};
use crate::event::ButtonEvent;

/// Outcome of feeding a falling edge to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeDecision {
    /// A new press episode started; a `Down` event is due.
    Started,
    /// Contact bounce, ignored without any state change.
    Bounce,
    /// An episode is already active; re-entrant edges are coalesced.
    AlreadyHeld,
}

/// Tracks the press state of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Idle,
    /// An episode is active. `cycles` counts from 1 and is bumped each
    /// time a `Cycle` event fires.
    Held { started: Instant, cycles: u32 },
}

/// The press-episode state machine.
///
/// The tracker does no I/O and never reads the clock itself: the caller
/// feeds it falling edges via [`on_falling_edge`](Self::on_falling_edge)
/// and periodic level samples via [`tick`](Self::tick), each stamped with
/// a monotonic `Instant`. Events come back as a bounded batch, in the
/// order they must be dispatched.
///
/// At most one episode is active at a time; edges arriving while one is
/// active are reported as [`EdgeDecision::AlreadyHeld`] and change
/// nothing.
pub struct GestureTracker<F: BounceFilter = IntervalGuard> {
    config: ButtonConfig,
    filter: F,
    phase: Phase,
}

impl GestureTracker<IntervalGuard> {
    pub fn new(config: ButtonConfig) -> Self {
        Self::with_filter(config, IntervalGuard::new())
    }
}

impl<F: BounceFilter> GestureTracker<F> {
    pub fn with_filter(config: ButtonConfig, filter: F) -> Self {
        GestureTracker {
            config,
            filter,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ButtonConfig {
        &mut self.config
    }

    /// Whether a press episode is currently active.
    pub fn is_held(&self) -> bool {
        matches!(self.phase, Phase::Held { .. })
    }

    /// The current cycle counter. Rests at 1 between episodes.
    pub fn cycle_count(&self) -> u32 {
        match self.phase {
            Phase::Held { cycles, .. } => cycles,
            Phase::Idle => 1,
        }
    }

    /// Feed a falling edge observed at `now`.
    ///
    /// Returns [`EdgeDecision::Started`] when the edge passes the bounce
    /// filter and opens a new episode; the caller dispatches `Down` and
    /// begins ticking. `Bounce` and `AlreadyHeld` edges are ignored
    /// without firing anything.
    pub fn on_falling_edge(&mut self, now: Instant) -> EdgeDecision {
        if self.is_held() {
            debug!("edge while episode active, coalesced");
            return EdgeDecision::AlreadyHeld;
        }
        match self.filter.qualify(now, self.config.bounce_guard) {
            EdgeVerdict::Bounce => {
                debug!("contact bounce ignored");
                EdgeDecision::Bounce
            }
            EdgeVerdict::Genuine => {
                self.phase = Phase::Held {
                    started: now,
                    cycles: 1,
                };
                EdgeDecision::Started
            }
        }
    }

    /// Advance the episode with a level sample taken at `now`.
    ///
    /// While `pressed`, fires at most one `Cycle` per tick, once the held
    /// duration strictly exceeds `cycle_period * cycles`; a tick cadence
    /// slower than the cycle period makes the counter catch up on
    /// following ticks. On release (or `hold_timeout` expiry) the episode
    /// is classified and closed: `held > long_threshold` (strictly) is a
    /// long press, anything else short, followed by `Up`.
    ///
    /// Idle ticks return an empty batch.
    pub fn tick(&mut self, now: Instant, pressed: bool) -> Vec<ButtonEvent, 2> {
        let mut out = Vec::new();
        let Phase::Held { started, cycles } = self.phase else {
            return out;
        };
        let held = now.saturating_duration_since(started);

        if !pressed {
            self.finish(now, held, &mut out);
            return out;
        }

        if let Some(timeout) = self.config.hold_timeout {
            if held >= timeout {
                warn!("press timed out after {:?}, forcing release", held);
                self.finish(now, held, &mut out);
                return out;
            }
        }

        if held.as_millis() > self.config.cycle_period.as_millis() * cycles as u64 {
            self.phase = Phase::Held {
                started,
                cycles: cycles + 1,
            };
            _ = out.push(ButtonEvent::Cycle { count: cycles });
        }
        out
    }

    /// Abandon any active episode without firing callbacks.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    fn finish(&mut self, now: Instant, held: Duration, out: &mut Vec<ButtonEvent, 2>) {
        let classified = if held > self.config.long_threshold {
            ButtonEvent::LongPress { held }
        } else {
            ButtonEvent::ShortPress { held }
        };
        info!("released, {:?}", classified);
        _ = out.push(classified);
        _ = out.push(ButtonEvent::Up { held });
        self.filter.record_release(now);
        self.phase = Phase::Idle;
    }
}
