//! Shared state types for UI communication
//!
//! Designed for real-time safety: static data is handed over once at init,
//! snapshots from the audio thread are `Copy` and allocation-free.

use multihead_seq::{
    host::{MessageReceiver, SequencerModule},
    io::Frame,
    StepIndex, StepIndicator, NUM_PLAYHEADS,
};

/// Static state handed to the UI once at startup (can allocate)
#[derive(Clone, Debug)]
pub struct UiInit {
    /// Tempo of each internal clock in BPM
    pub bpms: [f64; NUM_PLAYHEADS],
    /// Audio sample rate in Hz
    pub sample_rate: f64,
    /// Output device channel count
    pub channels: usize,
    /// Labels of the CV outputs
    pub output_labels: [String; NUM_PLAYHEADS],
}

/// Dynamic state pushed from the audio thread after every callback
#[derive(Clone, Copy, Debug)]
pub struct UiSnapshot {
    /// Step each playhead is on
    pub steps: [StepIndex; NUM_PLAYHEADS],
    /// Last output voltage per playhead
    pub cv: Frame,
    /// Step lights, following the first playhead
    pub lights: StepIndicator,
    /// Whether each clock input is latched high
    pub clock_high: [bool; NUM_PLAYHEADS],
}

impl UiSnapshot {
    /// Capture the module's current state. Allocation-free.
    pub fn capture<R: MessageReceiver>(module: &SequencerModule<R>) -> Self {
        Self {
            steps: module.current_steps(),
            cv: module.outputs(),
            lights: *module.lights(),
            clock_high: module.engine().playheads().map(|p| p.is_clock_high()),
        }
    }

    /// State before the audio thread has reported anything
    pub fn initial() -> Self {
        Self {
            steps: [StepIndex::FIRST; NUM_PLAYHEADS],
            cv: [0.0; NUM_PLAYHEADS],
            lights: StepIndicator::default(),
            clock_high: [false; NUM_PLAYHEADS],
        }
    }
}
