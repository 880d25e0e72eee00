//! Elon FFI - native arithmetic plugin
//!
//! This library provides a C ABI for host runtimes that load it as a shared
//! library and call it through their own FFI:
//!
//! ```c
//! intptr_t sum(intptr_t a, intptr_t b);
//! intptr_t sum_long_running(intptr_t a, intptr_t b);
//! ```
//!
//! `sum` returns immediately. `sum_long_running` blocks its calling thread
//! for 5 seconds and must be called from a worker.
//!
//! Logging goes through `tracing`; no subscriber is installed here.

pub mod compute;
pub mod ffi;

pub use ffi::{sum, sum_long_running};
