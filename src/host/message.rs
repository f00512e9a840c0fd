use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::sequencer::step::{StepBank, StepIndex};

/// Knob changes sent from a UI thread to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParamMessage {
    SetStep { step: StepIndex, value: f32 },
    LoadBank(StepBank),
    /// Put every knob back to its configured default. Playheads keep their
    /// positions.
    ResetToDefaults,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ParamMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ParamMessage> {
    fn pop(&mut self) -> Option<ParamMessage> {
        Consumer::pop(self).ok()
    }
}

/// Queue for offline hosts and tests, where nothing runs concurrently.
impl MessageReceiver for VecDeque<ParamMessage> {
    fn pop(&mut self) -> Option<ParamMessage> {
        self.pop_front()
    }
}
