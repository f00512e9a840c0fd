use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::voltage::knob_to_cv, NUM_STEPS};

/// Lowest value a step knob can hold.
pub const STEP_MIN: f32 = 0.0;
/// Highest value a step knob can hold.
pub const STEP_MAX: f32 = 1.0;

/// A step number in `0..NUM_STEPS`.
///
/// Only constructible through validation or wrapping arithmetic, so indexing
/// a `StepBank` or `StepIndicator` with it can never go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StepIndex(u8);

impl StepIndex {
    pub const FIRST: StepIndex = StepIndex(0);
    pub const LAST: StepIndex = StepIndex((NUM_STEPS - 1) as u8);

    pub fn new(index: usize) -> Result<Self, StepError> {
        if index < NUM_STEPS {
            Ok(Self(index as u8))
        } else {
            Err(StepError::OutOfRange { index })
        }
    }

    /// Zero-based position in the bank.
    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// The following step, wrapping from the last back to the first.
    #[inline]
    pub const fn next(self) -> Self {
        Self(((self.0 as usize + 1) % NUM_STEPS) as u8)
    }

    /// The preceding step, wrapping from the first to the last.
    #[inline]
    pub const fn prev(self) -> Self {
        Self(((self.0 as usize + NUM_STEPS - 1) % NUM_STEPS) as u8)
    }

    /// All steps in bank order.
    pub fn all() -> impl Iterator<Item = StepIndex> {
        (0..NUM_STEPS as u8).map(StepIndex)
    }
}

impl TryFrom<usize> for StepIndex {
    type Error = StepError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<StepIndex> for usize {
    fn from(step: StepIndex) -> usize {
        step.get()
    }
}

/// Errors that can occur when addressing a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// Step number is not below `NUM_STEPS`
    OutOfRange { index: usize },
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::OutOfRange { index } => {
                write!(
                    f,
                    "Step {} is out of range: the bank has {} steps (0..{})",
                    index, NUM_STEPS, NUM_STEPS
                )
            }
        }
    }
}

impl std::error::Error for StepError {}

/// The 16 manually set step levels, normalized to [0.0, 1.0].
///
/// Both playheads read the same bank. The engine never writes to it; the host
/// owns the knob values and hands a snapshot to every process call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "[f32; NUM_STEPS]", into = "[f32; NUM_STEPS]")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBank {
    values: [f32; NUM_STEPS],
}

impl StepBank {
    /// A bank with every step at 0.0.
    pub const fn new() -> Self {
        Self {
            values: [STEP_MIN; NUM_STEPS],
        }
    }

    /// Build a bank from raw knob values, clamping each to [0.0, 1.0].
    pub fn from_values(values: [f32; NUM_STEPS]) -> Self {
        let mut bank = Self::new();
        for (slot, value) in bank.values.iter_mut().zip(values) {
            *slot = clamp_step(value);
        }
        bank
    }

    #[inline]
    pub fn get(&self, step: StepIndex) -> f32 {
        self.values[step.get()]
    }

    /// Set one step, clamping to [0.0, 1.0]. NaN is stored as 0.0.
    pub fn set(&mut self, step: StepIndex, value: f32) {
        self.values[step.get()] = clamp_step(value);
    }

    /// Output voltage for a step (0 V to 10 V).
    #[inline]
    pub fn cv(&self, step: StepIndex) -> f32 {
        knob_to_cv(self.get(step))
    }

    pub fn values(&self) -> &[f32; NUM_STEPS] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (StepIndex, f32)> + '_ {
        StepIndex::all().zip(self.values.iter().copied())
    }
}

impl Default for StepBank {
    fn default() -> Self {
        Self::new()
    }
}

// Deserialized banks go through the same clamp as knob writes.
impl From<[f32; NUM_STEPS]> for StepBank {
    fn from(values: [f32; NUM_STEPS]) -> Self {
        Self::from_values(values)
    }
}

impl From<StepBank> for [f32; NUM_STEPS] {
    fn from(bank: StepBank) -> Self {
        bank.values
    }
}

impl Index<StepIndex> for StepBank {
    type Output = f32;

    fn index(&self, step: StepIndex) -> &f32 {
        &self.values[step.get()]
    }
}

#[inline]
fn clamp_step(value: f32) -> f32 {
    if value.is_nan() {
        STEP_MIN
    } else {
        value.clamp(STEP_MIN, STEP_MAX)
    }
}
