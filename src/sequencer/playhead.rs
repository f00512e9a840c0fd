use crate::{dsp::clock::ClockDetector, sequencer::step::StepIndex};

/// A cursor over the step bank, advanced by its own clock input.
///
/// Starts at step 0 with the clock latch low. Each rising clock edge moves it
/// exactly one step forward, wrapping after the last step. There is no reset
/// input; sixteen edges bring it back to where it started.
#[derive(Debug, Clone, Copy, Default)]
pub struct Playhead {
    step: StepIndex,
    clock: ClockDetector,
}

impl Playhead {
    pub const fn new() -> Self {
        Self {
            step: StepIndex::FIRST,
            clock: ClockDetector::new(),
        }
    }

    /// Feed one clock sample in volts. Returns true if the playhead stepped.
    #[inline]
    pub fn process(&mut self, clock_volts: f32) -> bool {
        let fired = self.clock.process(clock_volts);
        if fired {
            self.step = self.step.next();
        }
        fired
    }

    #[inline]
    pub fn step(&self) -> StepIndex {
        self.step
    }

    /// Whether the clock input is latched high (between an edge and re-arm).
    pub fn is_clock_high(&self) -> bool {
        self.clock.is_high()
    }
}
