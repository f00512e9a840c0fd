//! Low-level primitives used by the sequencer engine.
//!
//! These components are allocation-free and realtime-safe, so playheads can
//! embed them directly. They stay focused on signal conditioning; stepping and
//! output mapping live in `sequencer`.

/// Clock edge detection and an internal pulse generator.
pub mod clock;
/// Hysteresis edge detector.
pub mod trigger;
/// Voltage ranges and clamped linear rescaling.
pub mod voltage;

pub use clock::{ClockDetector, PulseClock};
pub use trigger::SchmittTrigger;
pub use voltage::rescale;
