//! TUI module for multihead
//!
//! Shows the step panel and lets the user turn the 16 knobs from the keyboard.

pub mod state;
mod steps;
mod transport;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use multihead_seq::{host::ParamMessage, StepBank, StepIndex};

pub use state::{UiInit, UiSnapshot};

use steps::render_steps;
use transport::render_transport;

/// Knob change per Up/Down press
const FINE_STEP: f32 = 0.05;
/// Knob change per PageUp/PageDown press
const COARSE_STEP: f32 = 0.25;

/// UI application state
pub struct UiApp {
    /// Ring buffer sender for knob changes
    param_tx: Producer<ParamMessage>,
    /// Ring buffer receiver for audio thread snapshots
    state_rx: Consumer<UiSnapshot>,
    /// Knob values as edited here
    knobs: StepBank,
    /// Knob values restored by reset
    defaults: StepBank,
    /// Step the arrow keys edit
    selected: StepIndex,
    init: UiInit,
    /// Latest snapshot from the audio thread
    snapshot: UiSnapshot,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Create a new UI application
    pub fn new(
        param_tx: Producer<ParamMessage>,
        state_rx: Consumer<UiSnapshot>,
        defaults: StepBank,
        init: UiInit,
    ) -> Self {
        Self {
            param_tx,
            state_rx,
            knobs: defaults,
            defaults,
            selected: StepIndex::FIRST,
            init,
            snapshot: UiSnapshot::initial(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep only the latest snapshot
    fn poll_state(&mut self) {
        while let Ok(snapshot) = self.state_rx.pop() {
            self.snapshot = snapshot;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.selected = self.selected.prev(),
            KeyCode::Right => self.selected = self.selected.next(),
            KeyCode::Up => self.nudge(FINE_STEP),
            KeyCode::Down => self.nudge(-FINE_STEP),
            KeyCode::PageUp => self.nudge(COARSE_STEP),
            KeyCode::PageDown => self.nudge(-COARSE_STEP),
            KeyCode::Char('0') => self.set_selected(0.0),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.knobs = self.defaults;
                self.send(ParamMessage::ResetToDefaults);
            }
            _ => {}
        }
    }

    fn nudge(&mut self, delta: f32) {
        let value = self.knobs.get(self.selected) + delta;
        self.set_selected(value);
    }

    fn set_selected(&mut self, value: f32) {
        self.knobs.set(self.selected, value);
        self.send(ParamMessage::SetStep {
            step: self.selected,
            value: self.knobs.get(self.selected),
        });
    }

    fn send(&mut self, msg: ParamMessage) {
        if self.param_tx.push(msg).is_err() {
            log::warn!(target: "ui", "parameter queue full, dropped {:?}", msg);
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: transport, steps, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Min(7),    // Step panel
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_transport(frame, chunks[0], &self.init, &self.snapshot);
        render_steps(frame, chunks[1], &self.knobs, &self.snapshot, self.selected);

        let help = Paragraph::new(
            " [←/→] Select  [↑/↓] ±0.05  [PgUp/PgDn] ±0.25  [0] Zero  [R] Reset  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
