use crate::dsp::{trigger::SchmittTrigger, voltage::normalize_clock};

/// Clock input conditioner: clamps the incoming voltage onto [0.0, 1.0] and
/// runs it through a Schmitt trigger.
///
/// Fires on the sample where the clock reaches 2.0 V, and re-arms once it has
/// fallen back to 0.1 V or below. A disconnected input (0 V) never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockDetector {
    trigger: SchmittTrigger,
}

impl ClockDetector {
    pub const fn new() -> Self {
        Self {
            trigger: SchmittTrigger::new(),
        }
    }

    /// Feed one clock sample in volts. Returns true on a rising edge.
    #[inline]
    pub fn process(&mut self, volts: f32) -> bool {
        self.trigger.process(normalize_clock(volts))
    }

    /// Whether the clock is currently latched high.
    pub fn is_high(&self) -> bool {
        self.trigger.is_high()
    }

    pub fn reset(&mut self) {
        self.trigger.reset();
    }
}

/// Gate voltage emitted by `PulseClock` while high.
pub const PULSE_HIGH_VOLTS: f32 = 10.0;

const MIN_BPM: f64 = 1.0;

/// Free-running square clock, one pulse per beat.
///
/// The gate is high (10 V) for the first half of each period and 0 V for the
/// rest, so the very first sample after construction or `reset()` is a
/// rising edge.
#[derive(Debug, Clone, Copy)]
pub struct PulseClock {
    bpm: f64,
    sample_rate: f64,
    samples_per_pulse: f64,
    position: f64, // Samples elapsed in the current period
}

impl PulseClock {
    pub fn from_bpm(bpm: f64, sample_rate: f64) -> Self {
        let bpm = bpm.max(MIN_BPM);
        Self {
            bpm,
            sample_rate,
            samples_per_pulse: Self::compute_samples_per_pulse(bpm, sample_rate),
            position: 0.0,
        }
    }

    fn compute_samples_per_pulse(bpm: f64, sample_rate: f64) -> f64 {
        // pulses per second = bpm / 60
        // At least two samples so the gate has a high and a low half
        (sample_rate * 60.0 / bpm).max(2.0)
    }

    /// Change tempo without restarting the current period.
    pub fn set_bpm(&mut self, bpm: f64) {
        self.bpm = bpm.max(MIN_BPM);
        self.samples_per_pulse = Self::compute_samples_per_pulse(self.bpm, self.sample_rate);
        if self.position >= self.samples_per_pulse {
            self.position = 0.0;
        }
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    pub fn samples_per_pulse(&self) -> f64 {
        self.samples_per_pulse
    }

    /// Produce one gate sample in volts.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let out = if self.position < self.samples_per_pulse * 0.5 {
            PULSE_HIGH_VOLTS
        } else {
            0.0
        };

        self.position += 1.0;
        if self.position >= self.samples_per_pulse {
            self.position -= self.samples_per_pulse;
        }

        out
    }

    /// Render a block of gate samples into the buffer.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Restart at the top of a pulse.
    pub fn reset(&mut self) {
        self.position = 0.0;
    }
}
