//! Non-blocking addition.

use crate::compute;

/// Adds two pointer-sized integers, wrapping on overflow.
///
/// Never blocks; safe to call from any thread, including a host's UI or
/// event-loop thread.
#[no_mangle]
pub extern "C" fn sum(a: isize, b: isize) -> isize {
    compute::sum(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        let offset = compute::DEBUG_OFFSET;
        assert_eq!(sum(2, 3), 5 + offset);
        assert_eq!(sum(-1, 1), offset);
        assert_eq!(sum(0, 0), offset);
    }

    #[test]
    fn test_sum_overflow_does_not_trap() {
        assert_eq!(
            sum(isize::MAX, 1),
            isize::MIN.wrapping_add(compute::DEBUG_OFFSET)
        );
    }

    #[test]
    fn test_sum_is_extern_c() {
        let f: extern "C" fn(isize, isize) -> isize = sum;
        assert_eq!(f(40, 2), 42 + compute::DEBUG_OFFSET);
    }
}
