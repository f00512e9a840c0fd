//! Step panel widget - lights, knob values and playhead markers

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use multihead_seq::{StepBank, StepIndex};

use super::UiSnapshot;

/// Width of one step column in characters
const CELL_WIDTH: usize = 6;

const LEVELS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

fn cell(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!("{:^width$}", text, width = CELL_WIDTH), style)
}

fn level_glyph(value: f32) -> &'static str {
    let index = (value * (LEVELS.len() - 1) as f32).round() as usize;
    LEVELS[index.min(LEVELS.len() - 1)]
}

fn playhead_marker(snapshot: &UiSnapshot, step: StepIndex) -> &'static str {
    match (snapshot.steps[0] == step, snapshot.steps[1] == step) {
        (true, true) => "▲12",
        (true, false) => "▲1",
        (false, true) => "▲2",
        (false, false) => "",
    }
}

/// Render the 16 step columns
pub fn render_steps(
    frame: &mut Frame,
    area: Rect,
    knobs: &StepBank,
    snapshot: &UiSnapshot,
    selected: StepIndex,
) {
    let block = Block::default().title(" Steps ").borders(Borders::ALL);

    let dim = Style::default().fg(Color::DarkGray);
    let mut numbers = Vec::new();
    let mut lights = Vec::new();
    let mut levels = Vec::new();
    let mut values = Vec::new();
    let mut markers = Vec::new();

    for (step, value) in knobs.iter() {
        let value_style = if step == selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };

        numbers.push(cell(&(step.get() + 1).to_string(), dim));

        if snapshot.lights.is_lit(step) {
            lights.push(cell("●", Style::default().fg(Color::Red)));
        } else {
            lights.push(cell("○", dim));
        }

        levels.push(cell(level_glyph(value), Style::default().fg(Color::Green)));
        values.push(cell(&format!("{:.2}", value), value_style));
        markers.push(cell(
            playhead_marker(snapshot, step),
            Style::default().fg(Color::Cyan),
        ));
    }

    let lines = vec![
        Line::from(numbers),
        Line::from(lights),
        Line::from(levels),
        Line::from(values),
        Line::from(markers),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
