//! Benchmarks for the internal pulse clock.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multihead_seq::dsp::PulseClock;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/clock");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut clock = PulseClock::from_bpm(120.0, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("pulse_120bpm", size), &size, |b, _| {
            b.iter(|| clock.render(black_box(&mut buffer)))
        });

        // Audio-rate clock: an edge every few samples
        let mut clock = PulseClock::from_bpm(480_000.0, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("pulse_audio_rate", size), &size, |b, _| {
            b.iter(|| clock.render(black_box(&mut buffer)))
        });
    }

    group.finish();
}
