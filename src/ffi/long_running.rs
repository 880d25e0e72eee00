//! Blocking addition that simulates a slow native call.

use crate::compute;

/// Sleeps for 5 seconds on the calling thread, then returns `a + b`
/// (wrapping on overflow).
///
/// # Blocking
/// The calling thread is occupied for the full delay and the call cannot be
/// cancelled. Hosts must invoke this from a worker thread, never from a UI
/// or event-loop thread. A host that needs a timeout abandons the worker and
/// ignores the late result.
#[no_mangle]
pub extern "C" fn sum_long_running(a: isize, b: isize) -> isize {
    compute::sum_long_running(a, b)
}
