//! A `block_on` for the manually-advanced mock clock.
//!
//! With `embassy-time/mock-driver` nothing moves the clock, so a plain
//! executor would hang on the first timer. This one steps virtual time
//! by 1 ms every time the future reports pending, which makes every
//! timeline in the test suite fully deterministic.

use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};

use embassy_time::{Duration, MockDriver};

/// Upper bound on virtual time, to turn a hung test into a failure
/// instead of an endless loop.
const MAX_VIRTUAL_MS: u64 = 600_000;

pub fn test_block_on<F: Future>(fut: F) -> F::Output {
    let mut cx = Context::from_waker(Waker::noop());
    let mut fut = pin!(fut);
    for _ in 0..MAX_VIRTUAL_MS {
        if let Poll::Ready(output) = fut.as_mut().poll(&mut cx) {
            return output;
        }
        MockDriver::get().advance(Duration::from_millis(1));
    }
    panic!("test did not finish within {MAX_VIRTUAL_MS} ms of virtual time");
}
