//! Pointer-width addition with the build-variant offset.

/// Added to every `sum` result in builds with debug assertions. Zero in
/// release builds.
pub(crate) const DEBUG_OFFSET: isize = if cfg!(debug_assertions) { 1000 } else { 0 };

/// Adds `a` and `b` with two's-complement wraparound.
#[inline]
pub fn plain_sum(a: isize, b: isize) -> isize {
    a.wrapping_add(b)
}

/// Adds `a` and `b`, then applies [`DEBUG_OFFSET`].
///
/// Overflow wraps before the offset is applied. Wrapping addition is
/// associative, so the order does not change the result.
#[inline]
pub fn sum(a: isize, b: isize) -> isize {
    plain_sum(a, b).wrapping_add(DEBUG_OFFSET)
}
