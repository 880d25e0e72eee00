//! Addition behind a fixed blocking delay.

use std::time::{Duration, Instant};

use super::delay::block_for;
use super::sum::plain_sum;

/// How long `sum_long_running` holds its calling thread.
pub const LONG_RUNNING_DELAY: Duration = Duration::from_millis(5000);

/// Blocks the calling thread for [`LONG_RUNNING_DELAY`], then returns `a + b`
/// (wrapping, no build-variant offset).
///
/// Callers that must stay responsive run this on a worker thread. It cannot
/// be cancelled once started.
pub fn sum_long_running(a: isize, b: isize) -> isize {
    sum_after(a, b, LONG_RUNNING_DELAY)
}

/// Same as [`sum_long_running`] with an explicit delay.
pub(crate) fn sum_after(a: isize, b: isize, delay: Duration) -> isize {
    tracing::debug!(delay_ms = delay.as_millis() as u64, "long-running sum started");
    let start = Instant::now();

    block_for(delay);

    let result = plain_sum(a, b);
    tracing::debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "long-running sum finished"
    );
    result
}
