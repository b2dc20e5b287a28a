use crate::event::{ButtonEvent, EventKind};

/// One registration slot: an optional zero-argument callback plus its
/// enable flag. A slot with no callback and a disabled slot both stay
/// silent, but through different paths.
pub struct Slot<'a> {
    callback: Option<&'a mut dyn FnMut()>,
    enabled: bool,
}

impl Default for Slot<'_> {
    fn default() -> Self {
        Slot {
            callback: None,
            enabled: true,
        }
    }
}

/// The five callback slots of a button, one per [`EventKind`].
#[derive(Default)]
pub struct Callbacks<'a> {
    down: Slot<'a>,
    cycle: Slot<'a>,
    short: Slot<'a>,
    long: Slot<'a>,
    up: Slot<'a>,
}

impl<'a> Callbacks<'a> {
    /// Register `callback` for `kind`, replacing any previous one.
    pub fn set(&mut self, kind: EventKind, callback: &'a mut dyn FnMut()) {
        self.slot_mut(kind).callback = Some(callback);
    }

    /// Remove the callback for `kind`. Its enable flag is untouched.
    pub fn clear(&mut self, kind: EventKind) {
        self.slot_mut(kind).callback = None;
    }

    /// Enable or disable dispatch for `kind` without touching the
    /// registered callback.
    pub fn set_enabled(&mut self, kind: EventKind, enabled: bool) {
        self.slot_mut(kind).enabled = enabled;
    }

    /// Invoke the callback registered for the event's kind, if there is
    /// one and its slot is enabled.
    pub fn dispatch(&mut self, event: &ButtonEvent) {
        let kind = event.kind();
        let slot = self.slot_mut(kind);
        if !slot.enabled {
            trace!("{:?} suppressed, slot disabled", kind);
            return;
        }
        match slot.callback.as_mut() {
            Some(callback) => callback(),
            None => trace!("{:?} skipped, no callback registered", kind),
        }
    }

    fn slot_mut(&mut self, kind: EventKind) -> &mut Slot<'a> {
        match kind {
            EventKind::Down => &mut self.down,
            EventKind::Cycle => &mut self.cycle,
            EventKind::ShortPress => &mut self.short,
            EventKind::LongPress => &mut self.long,
            EventKind::Up => &mut self.up,
        }
    }
}
