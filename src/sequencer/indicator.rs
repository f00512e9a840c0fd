use crate::{sequencer::step::StepIndex, NUM_STEPS};

/// Brightness of the 16 step lights.
///
/// Always exactly one light at 1.0, every other at 0.0. The engine points it
/// at playhead 0; playhead 1 has no lights of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepIndicator {
    lit: StepIndex,
    brightness: [f32; NUM_STEPS],
}

impl StepIndicator {
    pub fn at(step: StepIndex) -> Self {
        let mut brightness = [0.0; NUM_STEPS];
        brightness[step.get()] = 1.0;
        Self {
            lit: step,
            brightness,
        }
    }

    /// The one step whose light is on.
    pub fn lit_step(&self) -> StepIndex {
        self.lit
    }

    #[inline]
    pub fn brightness(&self, step: StepIndex) -> f32 {
        self.brightness[step.get()]
    }

    pub fn is_lit(&self, step: StepIndex) -> bool {
        step == self.lit
    }

    pub fn values(&self) -> &[f32; NUM_STEPS] {
        &self.brightness
    }
}

impl Default for StepIndicator {
    fn default() -> Self {
        Self::at(StepIndex::FIRST)
    }
}
