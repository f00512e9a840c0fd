//! Transport bar widget - shows clock tempos, gate states and CV outputs

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{UiInit, UiSnapshot};

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, init: &UiInit, snapshot: &UiSnapshot) {
    let block = Block::default().title(" multihead ").borders(Borders::ALL);

    let mut spans = Vec::new();
    for (i, label) in init.output_labels.iter().enumerate() {
        let gate = if snapshot.clock_high[i] { "●" } else { "○" };
        spans.push(Span::styled(
            format!(" {} {:.0} BPM ", gate, init.bpms[i]),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("{}: step {:>2} ", label, snapshot.steps[i].get() + 1),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            format!("{:5.2} V   ", snapshot.cv[i]),
            Style::default().fg(Color::Magenta),
        ));
    }

    // Format sample rate nicely (e.g., 48000 -> "48.0kHz")
    spans.push(Span::styled(
        format!("{:.1}kHz  {}ch", init.sample_rate / 1000.0, init.channels),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
