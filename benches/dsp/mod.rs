//! Benchmarks for low-level clock primitives.

mod clock;
mod trigger;

pub use clock::bench_clock;
pub use trigger::bench_trigger;
