use crate::{
    io::Frame,
    sequencer::{
        indicator::StepIndicator,
        playhead::Playhead,
        step::{StepBank, StepIndex},
    },
    NUM_PLAYHEADS,
};

/*
Sequencer Engine
================

Two playheads walk the same 16-step bank, each on its own clock.

    clock 0 ──→ rescale ──→ schmitt ──→ step 0 ──┐
                                                 ├──→ bank[step] * 10 V ──→ cv 0
    clock 1 ──→ rescale ──→ schmitt ──→ step 1 ──┘                     ──→ cv 1

                                         step 0 ──→ lights

Per sample, for each playhead independently:

  1. rescale the clock voltage from [0.1 V, 2.0 V] onto [0.0, 1.0], clamped
  2. feed it to the playhead's Schmitt trigger (fires at 1.0, re-arms at 0.0)
  3. on a rising edge, step = (step + 1) mod 16
  4. output = bank[step] * 10 V

The output is looked up AFTER stepping, so the sample that carries a clock
edge already plays the new step.


Sharing the Bank
----------------

The playheads share nothing but the bank. They can sit on different steps,
run at different rates, or one can be unpatched (0 V, never steps) while the
other runs.


Lights
------

The 16 lights follow playhead 0 only. Playhead 1's position is available
through `current_steps()` but is not shown on the lights.
*/

/// Everything the engine produces for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOutput {
    /// Output voltage per playhead, 0 V to 10 V.
    pub cv: Frame,
    /// Step lights, following playhead 0.
    pub indicator: StepIndicator,
}

#[derive(Debug, Clone, Default)]
pub struct SequencerEngine {
    playheads: [Playhead; NUM_PLAYHEADS],
}

impl SequencerEngine {
    /// Both playheads on step 0 with their clock latches low.
    pub fn new() -> Self {
        Self {
            playheads: [Playhead::new(); NUM_PLAYHEADS],
        }
    }

    /// Advance one sample.
    ///
    /// `clocks` holds one clock voltage per playhead; `steps` is the host's
    /// current knob snapshot.
    #[inline]
    pub fn process_sample(&mut self, clocks: Frame, steps: &StepBank) -> EngineOutput {
        let cv = self.advance(clocks, steps);
        EngineOutput {
            cv,
            indicator: self.indicator(),
        }
    }

    /// Advance a block of samples.
    ///
    /// Processes `min(clocks.len(), out.len())` frames and returns the lights
    /// as of the last one. Frames of `out` past that point are left untouched.
    pub fn render_block(
        &mut self,
        clocks: &[Frame],
        steps: &StepBank,
        out: &mut [Frame],
    ) -> StepIndicator {
        for (frame, clock) in out.iter_mut().zip(clocks) {
            *frame = self.advance(*clock, steps);
        }

        self.indicator()
    }

    /// Advance one sample, returning only the output voltages.
    #[inline]
    pub fn advance(&mut self, clocks: Frame, steps: &StepBank) -> Frame {
        let mut cv = [0.0; NUM_PLAYHEADS];
        for ((playhead, &volts), out) in self.playheads.iter_mut().zip(&clocks).zip(&mut cv) {
            playhead.process(volts);
            *out = steps.cv(playhead.step());
        }
        cv
    }

    /// Lights for playhead 0's current step.
    pub fn indicator(&self) -> StepIndicator {
        StepIndicator::at(self.playheads[0].step())
    }

    pub fn current_steps(&self) -> [StepIndex; NUM_PLAYHEADS] {
        self.playheads.map(|p| p.step())
    }

    pub fn playheads(&self) -> &[Playhead; NUM_PLAYHEADS] {
        &self.playheads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dsp::clock::PulseClock, NUM_STEPS};

    fn step(index: usize) -> StepIndex {
        StepIndex::new(index).unwrap()
    }

    fn ramp_bank() -> StepBank {
        let mut values = [0.0; NUM_STEPS];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f32 / (NUM_STEPS - 1) as f32;
        }
        StepBank::from_values(values)
    }

    /// One clean 0 V -> 5 V -> 0 V pulse on the chosen playhead.
    fn pulse(engine: &mut SequencerEngine, which: usize, bank: &StepBank) -> EngineOutput {
        let mut high = [0.0; NUM_PLAYHEADS];
        high[which] = 5.0;
        let out = engine.process_sample(high, bank);
        engine.process_sample([0.0; NUM_PLAYHEADS], bank);
        out
    }

    #[test]
    fn starts_on_first_step() {
        let mut engine = SequencerEngine::new();
        let bank = ramp_bank();
        let out = engine.process_sample([0.0, 0.0], &bank);

        assert_eq!(engine.current_steps(), [StepIndex::FIRST; 2]);
        assert_eq!(out.cv, [0.0, 0.0]);
        assert_eq!(out.indicator.lit_step(), StepIndex::FIRST);
    }

    #[test]
    fn edge_sample_plays_new_step() {
        let mut engine = SequencerEngine::new();
        let bank = ramp_bank();

        let out = engine.process_sample([5.0, 0.0], &bank);
        assert_eq!(engine.current_steps()[0], step(1));
        assert_eq!(out.cv[0], bank.get(step(1)) * 10.0);
        assert_eq!(out.indicator.lit_step(), step(1));
    }

    #[test]
    fn output_is_bank_value_times_ten() {
        let mut engine = SequencerEngine::new();
        let bank = StepBank::from_values([
            0.13, 0.29, 0.31, 0.47, 0.53, 0.61, 0.73, 0.89, 0.97, 0.01, 0.11, 0.23, 0.37, 0.41,
            0.59, 0.67,
        ]);

        for k in 0..NUM_STEPS * 2 {
            let current = engine.current_steps()[0];
            assert_eq!(current.get(), k % NUM_STEPS);
            let out = engine.process_sample([0.0, 0.0], &bank);
            assert_eq!(out.cv[0], bank.values()[current.get()] * 10.0);
            pulse(&mut engine, 0, &bank);
        }
    }

    #[test]
    fn playheads_are_independent() {
        let mut engine = SequencerEngine::new();
        let bank = ramp_bank();

        for _ in 0..3 {
            pulse(&mut engine, 0, &bank);
        }
        for _ in 0..7 {
            pulse(&mut engine, 1, &bank);
        }

        assert_eq!(engine.current_steps(), [step(3), step(7)]);
        let out = engine.process_sample([0.0, 0.0], &bank);
        assert_eq!(out.cv, [bank.cv(step(3)), bank.cv(step(7))]);
    }

    #[test]
    fn lights_follow_playhead_zero_only() {
        let mut engine = SequencerEngine::new();
        let bank = ramp_bank();

        for _ in 0..5 {
            let out = pulse(&mut engine, 1, &bank);
            assert_eq!(out.indicator.lit_step(), StepIndex::FIRST);
        }

        let out = pulse(&mut engine, 0, &bank);
        assert_eq!(out.indicator.lit_step(), step(1));
        assert_eq!(engine.indicator().brightness(step(5)), 0.0);
    }

    #[test]
    fn sixteen_edges_wrap_around() {
        let mut engine = SequencerEngine::new();
        let bank = ramp_bank();

        for _ in 0..NUM_STEPS {
            pulse(&mut engine, 0, &bank);
            pulse(&mut engine, 1, &bank);
        }

        assert_eq!(engine.current_steps(), [StepIndex::FIRST; 2]);
    }

    #[test]
    fn bank_changes_apply_immediately() {
        let mut engine = SequencerEngine::new();
        let mut bank = StepBank::new();

        assert_eq!(engine.process_sample([0.0, 0.0], &bank).cv, [0.0, 0.0]);
        bank.set(StepIndex::FIRST, 0.5);
        assert_eq!(engine.process_sample([0.0, 0.0], &bank).cv, [5.0, 5.0]);
    }

    #[test]
    fn block_matches_per_sample() {
        let bank = ramp_bank();
        let mut clock_a = PulseClock::from_bpm(600.0, 1_000.0);
        let mut clock_b = PulseClock::from_bpm(450.0, 1_000.0);
        let clocks: Vec<Frame> = (0..2_000)
            .map(|_| [clock_a.next_sample(), clock_b.next_sample()])
            .collect();

        let mut per_sample = SequencerEngine::new();
        let expected: Vec<Frame> = clocks
            .iter()
            .map(|&c| per_sample.process_sample(c, &bank).cv)
            .collect();

        let mut block = SequencerEngine::new();
        let mut out = vec![[0.0; NUM_PLAYHEADS]; clocks.len()];
        let lights = block.render_block(&clocks, &bank, &mut out);

        assert_eq!(out, expected);
        assert_eq!(block.current_steps(), per_sample.current_steps());
        assert_eq!(lights, per_sample.indicator());
    }

    #[test]
    fn block_stops_at_shorter_slice() {
        let bank = ramp_bank();
        let clocks = [[5.0, 0.0], [0.0, 0.0], [5.0, 0.0], [0.0, 0.0]];

        let mut engine = SequencerEngine::new();
        let mut out = [[0.0; NUM_PLAYHEADS]; 2];
        let lights = engine.render_block(&clocks, &bank, &mut out);
        assert_eq!(engine.current_steps()[0], step(1));
        assert_eq!(out, [[bank.cv(step(1)), 0.0]; 2]);
        assert_eq!(lights.lit_step(), step(1));

        let mut engine = SequencerEngine::new();
        let mut out = [[-1.0; NUM_PLAYHEADS]; 6];
        engine.render_block(&clocks, &bank, &mut out);
        assert_eq!(engine.current_steps()[0], step(2));
        assert_eq!(out[3], [bank.cv(step(2)), 0.0]);
        assert_eq!(out[4], [-1.0; NUM_PLAYHEADS]);
    }

    #[test]
    fn step_stays_in_range_under_noise() {
        let mut engine = SequencerEngine::new();
        let bank = ramp_bank();

        // Deterministic pseudo-noise spanning -1 V .. 11 V
        let mut seed: u32 = 0x1234_5678;
        let mut edges = [0usize; NUM_PLAYHEADS];
        for _ in 0..10_000 {
            let mut clocks = [0.0; NUM_PLAYHEADS];
            for c in clocks.iter_mut() {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                *c = (seed >> 8) as f32 / (1u32 << 24) as f32 * 12.0 - 1.0;
            }

            let before = engine.current_steps();
            engine.process_sample(clocks, &bank);
            let after = engine.current_steps();

            for i in 0..NUM_PLAYHEADS {
                assert!(after[i].get() < NUM_STEPS);
                if after[i] != before[i] {
                    assert_eq!(after[i], before[i].next(), "stepped more than once");
                    edges[i] += 1;
                }
            }
        }

        for i in 0..NUM_PLAYHEADS {
            assert_eq!(engine.current_steps()[i].get(), edges[i] % NUM_STEPS);
        }
    }
}
