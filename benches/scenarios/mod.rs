//! Real-world scenario benchmarks.
//!
//! These drive the engine and the host module from two free-running clocks,
//! the way a patch with two clock sources would.

mod engine;
mod module;

pub use engine::bench_engine;
pub use module::bench_module;
