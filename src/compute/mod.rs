//! Core arithmetic logic.
//!
//! Plain safe Rust. The FFI layer in `ffi/` calls these functions.

pub mod delay;
pub mod long_running;
pub mod sum;

pub use delay::block_for;
pub use long_running::{sum_long_running, LONG_RUNNING_DELAY};
pub use sum::{plain_sum, sum};

pub(crate) use sum::DEBUG_OFFSET;
