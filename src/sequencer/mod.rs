//! The sequencer core: two playheads stepping through one shared bank.
//!
//! Everything in here runs on the host's realtime thread. State is fixed-size
//! and allocated up front; processing never blocks or allocates.

/// The per-sample engine driving both playheads.
pub mod engine;
/// Step position lights.
pub mod indicator;
/// A clocked cursor over the step bank.
pub mod playhead;
/// Validated step numbers and the shared knob bank.
pub mod step;

pub use engine::{EngineOutput, SequencerEngine};
pub use indicator::StepIndicator;
pub use playhead::Playhead;
pub use step::{StepBank, StepError, StepIndex};
