//! Debounced button input with press gesture classification.
//!
//! This crate turns the raw, noisy signal of a single push button into a
//! small set of debounced, semantically meaningful events:
//!
//! - `Down` when a genuine press starts
//! - `Cycle` periodically while the button stays held
//! - `ShortPress` or `LongPress` when the button is released, classified
//!   by the total held duration
//! - `Up` after the classification of every release
//!
//! The core is [`gesture::GestureTracker`], a tick-driven state machine
//! with no I/O of its own. [`button::DebouncedButton`] wires it to an
//! interrupt-capable input pin (`embedded-hal-async`'s `Wait`) and a set
//! of registered callbacks, one optional zero-argument callback per event
//! kind, each with its own enable flag.
//!
//! Mechanical contact bounce is filtered with a quiet-interval rule: a
//! falling edge is only accepted as a new press if at least
//! [`ButtonConfig::bounce_guard`](config::ButtonConfig) has elapsed since
//! the previous press ended. See [`debounce`] for the seam that rule
//! lives behind.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod button;
pub mod callbacks;
pub mod config;
pub mod debounce;
pub mod event;
pub mod gesture;

use embassy_time::Duration;

/// Default period of the `Cycle` event while a button is held.
pub const DEFAULT_CYCLE_PERIOD: Duration = Duration::from_millis(350);

/// Default held duration above which a release classifies as a long press.
pub const DEFAULT_LONG_THRESHOLD: Duration = Duration::from_millis(1000);

/// Default quiet interval required after a release before the next
/// falling edge is accepted as a genuine press.
pub const DEFAULT_BOUNCE_GUARD: Duration = Duration::from_millis(30);

/// Default tick period while a button is held.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);
