//! Benchmarks for rescaling and edge detection.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multihead_seq::dsp::{voltage::normalize_clock, ClockDetector, SchmittTrigger};

use crate::BLOCK_SIZES;

pub fn bench_trigger(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/trigger");

    for &size in BLOCK_SIZES {
        // Sawtooth from -1 V to 11 V, so every branch of the clamp is hit
        let volts: Vec<f32> = (0..size)
            .map(|i| (i % 32) as f32 / 32.0 * 12.0 - 1.0)
            .collect();
        let normalized: Vec<f32> = volts.iter().map(|&v| normalize_clock(v)).collect();

        group.bench_with_input(BenchmarkId::new("rescale", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &v in black_box(&volts) {
                    acc += normalize_clock(v);
                }
                acc
            })
        });

        let mut trigger = SchmittTrigger::new();
        group.bench_with_input(BenchmarkId::new("schmitt", size), &size, |b, _| {
            b.iter(|| {
                let mut edges = 0usize;
                for &x in black_box(&normalized) {
                    edges += trigger.process(x) as usize;
                }
                edges
            })
        });

        let mut detector = ClockDetector::new();
        group.bench_with_input(BenchmarkId::new("detector", size), &size, |b, _| {
            b.iter(|| {
                let mut edges = 0usize;
                for &v in black_box(&volts) {
                    edges += detector.process(v) as usize;
                }
                edges
            })
        });
    }

    group.finish();
}
