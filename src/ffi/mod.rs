//! C FFI layer for host runtimes.
//!
//! This module exports C ABI functions taking and returning `intptr_t`.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `compute` module. These functions are thin
//! wrappers with no pointer arguments, so none of them is `unsafe` to call.

pub mod long_running;
pub mod simple;

pub use long_running::sum_long_running;
pub use simple::sum;
