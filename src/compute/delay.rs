//! Blocking delay used to simulate slow native work.
//!
//! One implementation per target family. Both occupy the calling thread for
//! the whole delay; nothing here yields to a scheduler.

use std::time::Duration;

/// Blocks the calling thread for `duration`.
///
/// If the platform wakes the thread early (a signal interrupting the sleep),
/// the delay counts as satisfied and is not resumed.
pub fn block_for(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    sleep_once(duration);
}

#[cfg(unix)]
fn sleep_once(duration: Duration) {
    let request = libc::timespec {
        tv_sec: duration.as_secs().min(libc::time_t::MAX as u64) as _,
        tv_nsec: duration.subsec_nanos() as _,
    };

    // SAFETY: `request` is a valid timespec on our stack and the remainder
    // pointer may be null.
    let rc = unsafe { libc::nanosleep(&request, std::ptr::null_mut()) };
    if rc != 0 {
        tracing::trace!(
            error = %std::io::Error::last_os_error(),
            "blocking delay interrupted, not resuming"
        );
    }
}

#[cfg(not(unix))]
fn sleep_once(duration: Duration) {
    std::thread::sleep(duration);
}
