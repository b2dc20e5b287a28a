pub mod test_block_on;

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use easybutton::event::EventKind;
use embassy_time::{Instant, Timer};
use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_async::digital::Wait;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A scriptable input line. `true` is the released (high) level; a
/// pressed button pulls it low.
pub struct SimLine {
    level: Cell<bool>,
}

impl SimLine {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        SimLine {
            level: Cell::new(true),
        }
    }

    pub fn pin(&self) -> SimPin<'_> {
        SimPin { line: self }
    }

    pub fn set_low(&self) {
        self.level.set(false);
    }

    pub fn set_high(&self) {
        self.level.set(true);
    }

    /// Press, hold for `ms` of virtual time, release.
    pub async fn hold_for_ms(&self, ms: u64) {
        self.set_low();
        Timer::after_millis(ms).await;
        self.set_high();
    }
}

/// The pin view of a [`SimLine`]. Edge waits sample the line every
/// millisecond of virtual time and complete on an actual transition.
pub struct SimPin<'a> {
    line: &'a SimLine,
}

impl ErrorType for SimPin<'_> {
    type Error = Infallible;
}

impl InputPin for SimPin<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.line.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.line.level.get())
    }
}

impl Wait for SimPin<'_> {
    async fn wait_for_high(&mut self) -> Result<(), Infallible> {
        while !self.line.level.get() {
            Timer::after_millis(1).await;
        }
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Infallible> {
        while self.line.level.get() {
            Timer::after_millis(1).await;
        }
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Infallible> {
        self.wait_for_low().await?;
        self.wait_for_high().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Infallible> {
        self.wait_for_high().await?;
        self.wait_for_low().await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Infallible> {
        let initial = self.line.level.get();
        while self.line.level.get() == initial {
            Timer::after_millis(1).await;
        }
        Ok(())
    }
}

/// Records dispatched events with their virtual timestamps.
#[derive(Default)]
pub struct Recorder {
    events: RefCell<Vec<(EventKind, u64)>>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn record(&self, kind: EventKind) {
        self.events
            .borrow_mut()
            .push((kind, Instant::now().as_millis()));
    }

    /// The recorded event kinds, in dispatch order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(|(kind, _)| *kind).collect()
    }

    /// The recorded events with their timestamps, in dispatch order.
    pub fn timeline(&self) -> Vec<(EventKind, u64)> {
        self.events.borrow().clone()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|(k, _)| *k == kind).count()
    }
}

/// Assert `actual` lies in `[after, after + window]`, the slack being
/// detection latency of the polled line.
#[allow(dead_code)]
pub fn assert_within(actual: u64, after: u64, window: u64) {
    assert!(
        actual >= after && actual <= after + window,
        "expected a timestamp in [{after}, {}], got {actual}",
        after + window
    );
}
