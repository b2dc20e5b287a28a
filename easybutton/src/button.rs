use embassy_futures::select::select;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::callbacks::Callbacks;
use crate::config::ButtonConfig;
use crate::debounce::{BounceFilter, IntervalGuard};
use crate::event::{ButtonEvent, EventKind};
use crate::gesture::{EdgeDecision, GestureTracker};

/// A debounced button bound to an active-low input pin.
///
/// The pin must expose both a level read (`InputPin`) and asynchronous
/// edge waits (`Wait`); on most HALs an interrupt-capable input provides
/// both. A pressed button pulls the line low.
///
/// Callbacks are zero-argument closures, registered per event kind and
/// borrowed for the lifetime of the button. Every kind additionally has
/// an enable flag, so an application can mute an event without dropping
/// its registration. All setters take `&mut self`: reconfiguring while
/// [`run`](Self::run) holds the button is rejected at compile time, which
/// is exactly the single-flow-of-control discipline the state machine
/// requires.
///
/// ```ignore
/// let mut on_down = || info!("down");
/// let mut on_long = || info!("held long");
/// let mut button = DebouncedButton::new(pin, ButtonConfig::default());
/// button.set_down(&mut on_down);
/// button.set_long(&mut on_long, Some(Duration::from_millis(1500)));
/// button.run().await;
/// ```
pub struct DebouncedButton<'a, In, F = IntervalGuard>
where
    In: InputPin + Wait,
    F: BounceFilter,
{
    pin: In,
    tracker: GestureTracker<F>,
    callbacks: Callbacks<'a>,
}

impl<'a, In: InputPin + Wait> DebouncedButton<'a, In> {
    pub fn new(pin: In, config: ButtonConfig) -> Self {
        DebouncedButton {
            pin,
            tracker: GestureTracker::new(config),
            callbacks: Callbacks::default(),
        }
    }
}

impl<'a, In: InputPin + Wait, F: BounceFilter> DebouncedButton<'a, In, F> {
    /// Build a button with a custom bounce filter, e.g.
    /// [`NoGuard`](crate::debounce::NoGuard) for hardware-conditioned
    /// inputs.
    pub fn with_filter(pin: In, config: ButtonConfig, filter: F) -> Self {
        DebouncedButton {
            pin,
            tracker: GestureTracker::with_filter(config, filter),
            callbacks: Callbacks::default(),
        }
    }

    /// Callback fired when a genuine press starts.
    pub fn set_down(&mut self, callback: &'a mut dyn FnMut()) {
        self.callbacks.set(EventKind::Down, callback);
    }

    /// Callback fired after every release, following the classification
    /// event.
    pub fn set_up(&mut self, callback: &'a mut dyn FnMut()) {
        self.callbacks.set(EventKind::Up, callback);
    }

    /// Callback fired each elapsed cycle period while the button is
    /// held. `period` overrides the configured cycle period.
    pub fn set_cycle(&mut self, callback: &'a mut dyn FnMut(), period: Option<Duration>) {
        if let Some(period) = period {
            self.tracker.config_mut().cycle_period = period;
        }
        self.callbacks.set(EventKind::Cycle, callback);
    }

    /// Callback fired on release when the button was held strictly
    /// longer than the classification threshold. `threshold` overrides
    /// the configured one.
    pub fn set_long(&mut self, callback: &'a mut dyn FnMut(), threshold: Option<Duration>) {
        if let Some(threshold) = threshold {
            self.tracker.config_mut().long_threshold = threshold;
        }
        self.callbacks.set(EventKind::LongPress, callback);
    }

    /// Callback fired on release when the button was not held longer
    /// than the classification threshold. The threshold is shared with
    /// [`set_long`](Self::set_long); `threshold` overrides it here too.
    pub fn set_short(&mut self, callback: &'a mut dyn FnMut(), threshold: Option<Duration>) {
        if let Some(threshold) = threshold {
            self.tracker.config_mut().long_threshold = threshold;
        }
        self.callbacks.set(EventKind::ShortPress, callback);
    }

    /// Remove the callback registered for `kind`.
    pub fn clear_callback(&mut self, kind: EventKind) {
        self.callbacks.clear(kind);
    }

    /// Enable or disable dispatch of `kind` without dropping its
    /// callback.
    pub fn set_event_enabled(&mut self, kind: EventKind, enabled: bool) {
        self.callbacks.set_enabled(kind, enabled);
    }

    pub fn config(&self) -> &ButtonConfig {
        self.tracker.config()
    }

    pub fn set_config(&mut self, config: ButtonConfig) {
        *self.tracker.config_mut() = config;
    }

    /// Raw debounced-state view: whether an episode is currently active.
    pub fn is_held(&self) -> bool {
        self.tracker.is_held()
    }

    /// Drive the button forever.
    ///
    /// Waits for a falling edge, filters bounce, then ticks the episode
    /// at the configured poll interval until release. Per episode the
    /// callbacks fire in the fixed order down, cycle (zero or more
    /// times), long or short, up; a new episode cannot start before the
    /// previous one's up callback has returned.
    pub async fn run(&mut self) -> ! {
        loop {
            self.pin.wait_for_falling_edge().await.ok();
            let now = Instant::now();
            if let EdgeDecision::Started = self.tracker.on_falling_edge(now) {
                debug!("press started");
                self.callbacks.dispatch(&ButtonEvent::Down);
                self.drive_episode().await;
            }
        }
    }

    /// Tick the active episode until the tracker returns to idle.
    ///
    /// Each iteration wakes on the rising edge or the poll timer,
    /// whichever comes first, so release detection latency stays below
    /// one poll interval. The level is re-read after the wake: the edge
    /// wait is only an accelerator, the sampled level is authoritative.
    async fn drive_episode(&mut self) {
        while self.tracker.is_held() {
            let poll = Timer::after(self.tracker.config().poll_interval);
            select(self.pin.wait_for_rising_edge(), poll).await;
            let pressed = self.pin.is_low().unwrap_or(false);
            for event in self.tracker.tick(Instant::now(), pressed) {
                self.callbacks.dispatch(&event);
            }
        }
    }
}
