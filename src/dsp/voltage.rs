//! Voltage conventions and range mapping.

/*
Voltages in a Modular Host
==========================

Every cable in the host carries a plain `f32` voltage. The sequencer deals
with three ranges:

  clock in     Gates and triggers, nominally 0 V (low) to 10 V (high). Real
               clocks are noisy, slow to rise, or only reach a few volts, so
               the input is conditioned before edge detection.

  knob         Each step knob is a normalized parameter in [0.0, 1.0].

  cv out       Unipolar control voltage, 0 V to 10 V. A knob at 0.5 plays
               5 V.


Clock Conditioning
------------------

The clock is squeezed from its useful band [0.1 V, 2.0 V] onto [0.0, 1.0]:

    normalized
    1.0 ┤            ┌────────────────  >= 2.0 V
        │           ╱
        │          ╱
        │         ╱
    0.0 ┼────────┘                      <= 0.1 V
        └────────┬──┬───────────────→ volts
                0.1 2.0

Anything at or below 0.1 V reads as fully low, anything at or above 2.0 V as
fully high. The Schmitt trigger downstream fires at 1.0 and re-arms at 0.0,
so the two knees of this curve ARE the hysteresis band in volts.

Clamping (rather than extrapolating) keeps every input finite and in range:
10 V reads the same as 2 V, and a disconnected input (0 V) the same as 0.1 V.
*/

/// Full-scale output voltage for a knob at 1.0.
pub const CV_FULL_SCALE: f32 = 10.0;

/// Clock voltage at or below which the input reads fully low.
pub const CLOCK_LOW_VOLTS: f32 = 0.1;

/// Clock voltage at or above which the input reads fully high.
pub const CLOCK_HIGH_VOLTS: f32 = 2.0;

/// Linearly map `x` from `[in_min, in_max]` onto `[out_min, out_max]`,
/// clamping outside the input range.
///
/// NaN maps to `out_min`, the same reading as a disconnected line.
///
/// # Example
/// ```
/// use multihead_seq::dsp::voltage::rescale;
/// assert_eq!(rescale(0.1, 0.1, 2.0, 0.0, 1.0), 0.0);
/// assert_eq!(rescale(2.0, 0.1, 2.0, 0.0, 1.0), 1.0);
/// assert_eq!(rescale(7.5, 0.1, 2.0, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn rescale(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    debug_assert!(in_min < in_max);

    // Endpoints are returned exactly rather than through the division
    if x.is_nan() || x <= in_min {
        return out_min;
    }
    if x >= in_max {
        return out_max;
    }

    out_min + (x - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Normalize a clock voltage onto the trigger's [0.0, 1.0] band.
#[inline]
pub fn normalize_clock(volts: f32) -> f32 {
    rescale(volts, CLOCK_LOW_VOLTS, CLOCK_HIGH_VOLTS, 0.0, 1.0)
}

/// Convert a normalized knob value to output volts.
#[inline]
pub fn knob_to_cv(value: f32) -> f32 {
    value * CV_FULL_SCALE
}
