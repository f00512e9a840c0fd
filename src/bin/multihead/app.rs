//! Multihead - application builder and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use super::ui::{UiApp, UiInit, UiSnapshot};

use multihead_seq::{
    dsp::PulseClock,
    host::{ModuleConfig, ParamMessage, SequencerModule},
    io::{converter::write_interleaved, Frame},
    MAX_BLOCK_SIZE, NUM_PLAYHEADS,
};

/// Capacity of the audio -> UI snapshot ring, in audio callbacks
const SNAPSHOT_RING_LEN: usize = 64;

/// Main application builder
pub struct Multihead {
    bpms: [f64; NUM_PLAYHEADS],
    config: ModuleConfig,
}

impl Multihead {
    /// Create a new instance with two clocks at 120 and 90 BPM
    pub fn new() -> Self {
        Self {
            bpms: [120.0, 90.0],
            config: ModuleConfig::default(),
        }
    }

    /// Set the tempo of one internal clock
    pub fn clock_bpm(mut self, index: usize, bpm: f64) -> Self {
        if let Some(slot) = self.bpms.get_mut(index) {
            *slot = bpm;
        }
        self
    }

    /// Run the application (takes over the terminal, plays CV)
    pub fn run(self) -> EyreResult<()> {
        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f64;
        let channels = (config.channels() as usize).max(1);

        log::info!(
            target: "audio",
            "output device: {} Hz, {} channel(s)",
            sample_rate,
            channels
        );
        if channels < NUM_PLAYHEADS {
            log::warn!(
                target: "audio",
                "device has {} channel(s); only playhead 1 is audible",
                channels
            );
        }

        // Cross-thread rings
        let (param_tx, param_rx) = RingBuffer::<ParamMessage>::new(self.config.message_capacity);
        let (state_tx, state_rx) = RingBuffer::<UiSnapshot>::new(SNAPSHOT_RING_LEN);

        let mut module =
            SequencerModule::new(&self.config, param_rx).wrap_err("invalid module configuration")?;
        for i in 0..NUM_PLAYHEADS {
            if let Some(port) = module.input_mut(i) {
                port.connect();
            }
        }

        let mut clocks = self.bpms.map(|bpm| PulseClock::from_bpm(bpm, sample_rate));

        // Buffers reused by audio callback
        let mut clock_buf: Vec<Frame> = vec![[0.0; NUM_PLAYHEADS]; MAX_BLOCK_SIZE];
        let mut cv_buf: Vec<Frame> = vec![[0.0; NUM_PLAYHEADS]; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                {
                    let mut state_tx = state_tx;
                    move |data: &mut [f32], _| {
                        let total_frames = data.len() / channels;
                        let mut frames_written = 0;

                        while frames_written < total_frames {
                            let frames_remaining = total_frames - frames_written;
                            let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                            // Internal clocks feed the two clock jacks
                            let clock_block = &mut clock_buf[..frames_to_render];
                            for frame in clock_block.iter_mut() {
                                for (volts, clock) in frame.iter_mut().zip(clocks.iter_mut()) {
                                    *volts = clock.next_sample();
                                }
                            }

                            let cv_block = &mut cv_buf[..frames_to_render];
                            module.process_block(clock_block, cv_block);

                            let out_off = frames_written * channels;
                            let out_len = frames_to_render * channels;
                            write_interleaved(
                                cv_block,
                                &mut data[out_off..out_off + out_len],
                                channels,
                            );

                            frames_written += frames_to_render;
                        }

                        // Non-blocking; the UI only needs the latest one
                        let _ = state_tx.push(UiSnapshot::capture(&module));
                    }
                },
                |err| log::error!(target: "audio", "stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let init = UiInit {
            bpms: self.bpms,
            sample_rate,
            channels,
            output_labels: self.config.cv_outputs.clone().map(|port| port.label),
        };
        let mut ui = UiApp::new(param_tx, state_rx, self.config.initial_bank(), init);

        let mut terminal = ratatui::init();
        let res = ui.run(&mut terminal);
        ratatui::restore();

        drop(stream);
        log::info!("multihead stopped");
        res
    }
}

impl Default for Multihead {
    fn default() -> Self {
        Self::new()
    }
}
