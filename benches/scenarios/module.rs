//! Benchmarks for the host-facing module, including message draining.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multihead_seq::{
    dsp::PulseClock,
    host::{ModuleConfig, ParamMessage, SequencerModule},
    StepIndex, NUM_PLAYHEADS,
};
use rtrb::RingBuffer;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/module");
    let config = ModuleConfig::default();

    for &size in BLOCK_SIZES {
        let mut a = PulseClock::from_bpm(120.0, SAMPLE_RATE);
        let mut b = PulseClock::from_bpm(90.0, SAMPLE_RATE);
        let clocks: Vec<[f32; NUM_PLAYHEADS]> =
            (0..size).map(|_| [a.next_sample(), b.next_sample()]).collect();
        let mut out = vec![[0.0f32; NUM_PLAYHEADS]; size];

        // Knob sweep arriving through the ring every block
        let (mut tx, rx) = RingBuffer::<ParamMessage>::new(config.message_capacity);
        let mut module = match SequencerModule::new(&config, rx) {
            Ok(module) => module,
            Err(err) => panic!("default config rejected: {err}"),
        };
        for i in 0..NUM_PLAYHEADS {
            if let Some(port) = module.input_mut(i) {
                port.connect();
            }
        }

        let mut value = 0.0f32;
        group.bench_with_input(BenchmarkId::new("block_with_knob_sweep", size), &size, |bench, _| {
            bench.iter(|| {
                value = (value + 0.01) % 1.0;
                let _ = tx.push(ParamMessage::SetStep {
                    step: StepIndex::FIRST,
                    value,
                });
                module.process_block(black_box(&clocks), &mut out);
            })
        });
    }

    group.finish();
}
