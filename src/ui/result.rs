use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{format_elapsed, AppState};

pub fn draw_result(f: &mut Frame, area: Rect, state: &AppState) {
    let pct = state.session.final_percentage().unwrap_or(0);
    let (headline, color) = match pct {
        90..=100 => ("Outstanding!", Color::Green),
        70..=89 => ("Great job!", Color::LightGreen),
        50..=69 => ("Not bad", Color::Yellow),
        _ => ("Keep exploring", Color::Red),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", pct),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "You got {} of {} right",
            state.session.score(),
            state.session.len()
        )),
        Line::from(format!("Time taken: {}", format_elapsed(state.elapsed_seconds()))),
        Line::from(""),
    ];

    if state.new_best {
        lines.push(Line::from(Span::styled(
            format!("★ New best score: {}% ★", state.best),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Best score: {}%", state.best),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Play again    [v] Review answers    [q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
