/*
Schmitt Trigger
===============

A comparator with two thresholds instead of one. It turns a continuous signal
into clean, single-shot edge events.

Vocabulary
----------

  high threshold   Level the signal must reach (>=) to fire while low.

  low threshold    Level the signal must return to (<=) before it can fire
                   again.

  latch            The trigger's one bit of memory: Low (armed) or High
                   (fired, waiting to re-arm).

  rising edge      The single sample on which the latch flips Low -> High.
                   This is the only sample that returns `true`.


Why Two Thresholds
------------------

A plain comparator at 0.5 chatters when a slow or noisy edge hovers around
0.5: every wiggle across the line is a new "edge".

    signal  ───╱╲╱╲╱‾‾‾‾‾‾╲╱╲╱╲___
    one     ___┌┐┌┐┌──────┐┌┐┌┐___   <- 3 edges on the way up
    two     ___┌───────────────┐___  <- 1 edge

With a gap between the thresholds, the wiggles never reach back down to the
low threshold, so the latch stays High and nothing fires twice.


State Machine
-------------

    ┌─────┐   x >= high (fires)   ┌──────┐
    │ Low │ ────────────────────→ │ High │
    └─────┘ ←──────────────────── └──────┘
                 x <= low

Both comparisons are inclusive. The sequencer feeds a clamped [0.0, 1.0]
signal with thresholds at exactly 0.0 and 1.0, so the inclusive low check is
what lets the latch re-arm at all.

NaN compares false against both thresholds, so it leaves the latch untouched.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Low,  // Armed, waiting for the high threshold
    High, // Fired, waiting for the low threshold
}

#[derive(Debug, Clone, Copy)]
pub struct SchmittTrigger {
    low: f32,
    high: f32,
    state: TriggerState,
}

impl SchmittTrigger {
    pub const DEFAULT_LOW: f32 = 0.0;
    pub const DEFAULT_HIGH: f32 = 1.0;

    /// Trigger with thresholds at 0.0 and 1.0, starting low.
    pub const fn new() -> Self {
        Self::with_thresholds(Self::DEFAULT_LOW, Self::DEFAULT_HIGH)
    }

    pub const fn with_thresholds(low: f32, high: f32) -> Self {
        Self {
            low,
            high,
            state: TriggerState::Low,
        }
    }

    /// Feed one sample. Returns true only on the sample where the latch goes
    /// from Low to High.
    #[inline]
    pub fn process(&mut self, input: f32) -> bool {
        match self.state {
            TriggerState::Low => {
                if input >= self.high {
                    self.state = TriggerState::High;
                    return true;
                }
            }
            TriggerState::High => {
                if input <= self.low {
                    self.state = TriggerState::Low;
                }
            }
        }
        false
    }

    pub fn is_high(&self) -> bool {
        matches!(self.state, TriggerState::High)
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Return to the armed (low) state.
    pub fn reset(&mut self) {
        self.state = TriggerState::Low;
    }
}

impl Default for SchmittTrigger {
    fn default() -> Self {
        Self::new()
    }
}
