pub mod dsp; // Clock conditioning primitives
pub mod host; // Host adapter: params, ports, message handling
pub mod io;
pub mod sequencer; // Playheads, step bank and the per-sample engine

pub use sequencer::{
    EngineOutput, Playhead, SequencerEngine, StepBank, StepError, StepIndex, StepIndicator,
};

/// Number of steps in the shared step bank.
pub const NUM_STEPS: usize = 16;
/// Number of independent playheads (and clock inputs / CV outputs).
pub const NUM_PLAYHEADS: usize = 2;

pub const MAX_BLOCK_SIZE: usize = 2048;
