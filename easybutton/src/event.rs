use embassy_time::Duration;

/// A debounced button event.
///
/// For a single press episode the emitted sequence is always
/// `Down`, zero or more `Cycle`s, exactly one of `ShortPress`/`LongPress`,
/// then `Up`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// A genuine press started.
    Down,
    /// The button has been held for another cycle period.
    /// `count` is the number of completed periods so far, starting at 1.
    Cycle { count: u32 },
    /// Released after at most the long-press threshold.
    ShortPress { held: Duration },
    /// Released after more than the long-press threshold.
    LongPress { held: Duration },
    /// The button was released. Always the last event of an episode.
    Up { held: Duration },
}

impl ButtonEvent {
    /// The callback slot this event is dispatched to.
    pub fn kind(&self) -> EventKind {
        match self {
            ButtonEvent::Down => EventKind::Down,
            ButtonEvent::Cycle { .. } => EventKind::Cycle,
            ButtonEvent::ShortPress { .. } => EventKind::ShortPress,
            ButtonEvent::LongPress { .. } => EventKind::LongPress,
            ButtonEvent::Up { .. } => EventKind::Up,
        }
    }
}

/// Fieldless mirror of [`ButtonEvent`], used to address callback slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    Down,
    Cycle,
    ShortPress,
    LongPress,
    Up,
}
