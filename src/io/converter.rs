use crate::{dsp::voltage::CV_FULL_SCALE, io::Frame, NUM_PLAYHEADS};

/// Scale a CV in volts to a device sample, 10 V = full scale.
///
/// Meant for DC-coupled interfaces that turn digital full scale back into
/// a known voltage.
#[inline]
pub fn cv_to_sample(volts: f32) -> f32 {
    (volts / CV_FULL_SCALE).clamp(-1.0, 1.0)
}

/// Write CV frames into an interleaved device buffer.
///
/// Playhead `i` goes to channel `i`; channels beyond the playheads are
/// silenced. A mono device gets playhead 0 only. Writes
/// `min(frames.len(), data.len() / channels)` frames.
pub fn write_interleaved(frames: &[Frame], data: &mut [f32], channels: usize) {
    if channels == 0 {
        return;
    }

    for (frame, slot) in frames.iter().zip(data.chunks_exact_mut(channels)) {
        for (ch, sample) in slot.iter_mut().enumerate() {
            *sample = if ch < NUM_PLAYHEADS {
                cv_to_sample(frame[ch])
            } else {
                0.0
            };
        }
    }
}
