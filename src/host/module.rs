use crate::{
    host::{
        config::{ConfigError, ModuleConfig, ParamConfig},
        message::{MessageReceiver, ParamMessage},
    },
    io::{Frame, InputPort},
    sequencer::{SequencerEngine, StepBank, StepIndex, StepIndicator},
    NUM_PLAYHEADS, NUM_STEPS,
};

/// One sequencer instance as a host sees it: 16 knobs, 2 clock jacks,
/// 2 CV jacks and 16 lights around a `SequencerEngine`.
///
/// The host constructs one per module on the rack and owns its lifetime.
/// Knob changes from other threads arrive through `R` and are applied at the
/// start of each `process` / `process_block` call.
///
/// Sample-at-a-time hosts set jack voltages on the `InputPort`s and call
/// `process`; block hosts pass clock frames to `process_block`, which uses
/// the ports only for their patched state and ignores their stored voltage.
pub struct SequencerModule<R: MessageReceiver> {
    engine: SequencerEngine,
    params: [ParamConfig; NUM_STEPS],
    knobs: StepBank,
    defaults: StepBank,
    inputs: [InputPort; NUM_PLAYHEADS],
    outputs: Frame,
    lights: StepIndicator,
    rx: R,
}

impl<R: MessageReceiver> SequencerModule<R> {
    pub fn new(config: &ModuleConfig, rx: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let defaults = config.initial_bank();
        log::debug!(
            target: "host",
            "sequencer module created: inputs [{}, {}], outputs [{}, {}]",
            config.clock_inputs[0].label,
            config.clock_inputs[1].label,
            config.cv_outputs[0].label,
            config.cv_outputs[1].label,
        );

        Ok(Self {
            engine: SequencerEngine::new(),
            params: config.params.clone(),
            knobs: defaults,
            defaults,
            inputs: [InputPort::default(); NUM_PLAYHEADS],
            outputs: [0.0; NUM_PLAYHEADS],
            lights: StepIndicator::default(),
            rx,
        })
    }

    /// Run one sample from the current jack voltages.
    pub fn process(&mut self) {
        self.apply_messages();

        let clocks = self.inputs.map(|port| port.voltage());
        let out = self.engine.process_sample(clocks, &self.knobs);
        self.outputs = out.cv;
        self.lights = out.indicator;
    }

    /// Run a block of clock frames, writing CV frames to `out`.
    ///
    /// Unpatched inputs read 0 V regardless of what `clocks` holds.
    pub fn process_block(&mut self, clocks: &[Frame], out: &mut [Frame]) {
        self.apply_messages();

        for (frame, clock) in out.iter_mut().zip(clocks) {
            let masked: Frame = std::array::from_fn(|i| self.inputs[i].read(clock[i]));
            *frame = self.engine.advance(masked, &self.knobs);
        }

        let written = clocks.len().min(out.len());
        if let Some(last) = out[..written].last() {
            self.outputs = *last;
        }
        self.lights = self.engine.indicator();
    }

    fn apply_messages(&mut self) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                ParamMessage::SetStep { step, value } => self.set_knob(step, value),
                ParamMessage::LoadBank(bank) => {
                    for (step, value) in bank.iter() {
                        self.set_knob(step, value);
                    }
                }
                ParamMessage::ResetToDefaults => self.knobs = self.defaults,
            }
        }
    }

    /// Set a knob directly, clamped to its configured range.
    pub fn set_knob(&mut self, step: StepIndex, value: f32) {
        let value = self.params[step.get()].clamp(value);
        self.knobs.set(step, value);
    }

    /// Current knob values, for the host's parameter save.
    pub fn params(&self) -> &StepBank {
        &self.knobs
    }

    /// Restore saved knob values. Playhead positions are not part of the
    /// saved state and stay where they are.
    pub fn restore_params(&mut self, bank: StepBank) {
        for (step, value) in bank.iter() {
            self.set_knob(step, value);
        }
        log::info!(target: "host", "restored {} step values", NUM_STEPS);
    }

    pub fn input(&self, index: usize) -> Option<&InputPort> {
        self.inputs.get(index)
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut InputPort> {
        self.inputs.get_mut(index)
    }

    /// Output voltages as of the last processed sample.
    pub fn outputs(&self) -> Frame {
        self.outputs
    }

    pub fn output(&self, index: usize) -> Option<f32> {
        self.outputs.get(index).copied()
    }

    pub fn lights(&self) -> &StepIndicator {
        &self.lights
    }

    pub fn current_steps(&self) -> [StepIndex; NUM_PLAYHEADS] {
        self.engine.current_steps()
    }

    pub fn engine(&self) -> &SequencerEngine {
        &self.engine
    }
}
