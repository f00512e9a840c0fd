//! Benchmarks for the bare sequencer engine.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multihead_seq::{dsp::PulseClock, SequencerEngine, StepBank, NUM_PLAYHEADS, NUM_STEPS};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn ramp_bank() -> StepBank {
    let mut values = [0.0; NUM_STEPS];
    for (i, v) in values.iter_mut().enumerate() {
        *v = i as f32 / (NUM_STEPS - 1) as f32;
    }
    StepBank::from_values(values)
}

/// Pre-render clock frames so only the engine is measured.
fn clock_frames(size: usize, bpm_a: f64, bpm_b: f64) -> Vec<[f32; NUM_PLAYHEADS]> {
    let mut a = PulseClock::from_bpm(bpm_a, SAMPLE_RATE);
    let mut b = PulseClock::from_bpm(bpm_b, SAMPLE_RATE);
    (0..size).map(|_| [a.next_sample(), b.next_sample()]).collect()
}

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");
    let bank = ramp_bank();

    for &size in BLOCK_SIZES {
        let mut out = vec![[0.0f32; NUM_PLAYHEADS]; size];

        // Typical tempo: almost every sample is a non-edge
        let clocks = clock_frames(size, 120.0, 90.0);
        let mut engine = SequencerEngine::new();
        group.bench_with_input(BenchmarkId::new("block_tempo", size), &size, |b, _| {
            b.iter(|| engine.render_block(black_box(&clocks), black_box(&bank), &mut out))
        });

        // Audio-rate clocks: edges every few samples on both playheads
        let clocks = clock_frames(size, 480_000.0, 360_000.0);
        let mut engine = SequencerEngine::new();
        group.bench_with_input(BenchmarkId::new("block_audio_rate", size), &size, |b, _| {
            b.iter(|| engine.render_block(black_box(&clocks), black_box(&bank), &mut out))
        });

        // Per-sample calls including the light projection
        let clocks = clock_frames(size, 120.0, 90.0);
        let mut engine = SequencerEngine::new();
        group.bench_with_input(BenchmarkId::new("per_sample", size), &size, |b, _| {
            b.iter(|| {
                for &frame in black_box(&clocks) {
                    black_box(engine.process_sample(frame, &bank));
                }
            })
        });
    }

    group.finish();
}
