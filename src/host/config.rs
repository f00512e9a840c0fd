#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    sequencer::step::{StepBank, StepIndex, STEP_MAX, STEP_MIN},
    NUM_PLAYHEADS, NUM_STEPS,
};

/// Default capacity of the UI -> audio parameter queue.
pub const DEFAULT_MESSAGE_CAPACITY: usize = 64;

/// Range, default and label of one step knob.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParamConfig {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub label: String,
}

impl ParamConfig {
    /// Knob for a step: 0.0 to 1.0, defaulting to 0.0.
    pub fn step(step: StepIndex) -> Self {
        Self {
            min: STEP_MIN,
            max: STEP_MAX,
            default: STEP_MIN,
            label: format!("Step {}", step.get() + 1),
        }
    }

    /// Clamp an incoming knob value to this parameter's range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // False for NaN bounds
        let increasing = self.min < self.max;
        if !increasing || self.min < STEP_MIN || self.max > STEP_MAX {
            return Err(ConfigError::InvalidRange {
                label: self.label.clone(),
                min: self.min,
                max: self.max,
            });
        }

        if !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::DefaultOutOfRange {
                label: self.label.clone(),
                default: self.default,
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }
}

/// Display label of a jack.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortConfig {
    pub label: String,
}

impl PortConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Everything a host needs to instantiate a `SequencerModule`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleConfig {
    pub params: [ParamConfig; NUM_STEPS],
    pub clock_inputs: [PortConfig; NUM_PLAYHEADS],
    pub cv_outputs: [PortConfig; NUM_PLAYHEADS],
    /// Capacity of the parameter message queue.
    pub message_capacity: usize,
}

impl ModuleConfig {
    pub fn new() -> Self {
        Self {
            params: std::array::from_fn(|i| ParamConfig::step(StepIndex::new(i).unwrap_or_default())),
            clock_inputs: std::array::from_fn(|i| PortConfig::new(format!("Clock {}", i + 1))),
            cv_outputs: std::array::from_fn(|i| PortConfig::new(format!("Playhead {}", i + 1))),
            message_capacity: DEFAULT_MESSAGE_CAPACITY,
        }
    }

    /// Set the default value of one step knob.
    pub fn step_default(mut self, step: StepIndex, value: f32) -> Self {
        self.params[step.get()].default = value;
        self
    }

    /// Set the default value of every step knob at once.
    pub fn defaults(mut self, bank: &StepBank) -> Self {
        for (param, (_, value)) in self.params.iter_mut().zip(bank.iter()) {
            param.default = value;
        }
        self
    }

    /// Set the range of one step knob.
    pub fn step_range(mut self, step: StepIndex, min: f32, max: f32) -> Self {
        let param = &mut self.params[step.get()];
        param.min = min;
        param.max = max;
        self
    }

    pub fn message_capacity(mut self, capacity: usize) -> Self {
        self.message_capacity = capacity;
        self
    }

    pub fn param(&self, step: StepIndex) -> &ParamConfig {
        &self.params[step.get()]
    }

    /// Knob values a freshly initialized module starts with.
    pub fn initial_bank(&self) -> StepBank {
        let mut bank = StepBank::new();
        for (step, param) in StepIndex::all().zip(&self.params) {
            bank.set(step, param.default);
        }
        bank
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for param in &self.params {
            param.validate()?;
        }

        if self.message_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        Ok(())
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when validating a module configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Knob range is empty, inverted, or outside [0.0, 1.0]
    InvalidRange { label: String, min: f32, max: f32 },
    /// Knob default lies outside its range
    DefaultOutOfRange {
        label: String,
        default: f32,
        min: f32,
        max: f32,
    },
    /// Parameter message queue cannot hold anything
    ZeroCapacity,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidRange { label, min, max } => {
                write!(
                    f,
                    "{}: invalid range {}..={} (must be increasing and within {}..={})",
                    label, min, max, STEP_MIN, STEP_MAX
                )
            }
            ConfigError::DefaultOutOfRange {
                label,
                default,
                min,
                max,
            } => {
                write!(
                    f,
                    "{}: default {} lies outside {}..={}",
                    label, default, min, max
                )
            }
            ConfigError::ZeroCapacity => {
                write!(f, "Parameter message capacity must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
