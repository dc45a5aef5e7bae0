use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let answered = state.session.answers().len();
    let wrong = answered - state.session.score();

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("Score {}", state.session.score()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("✓ {} right", state.session.score()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(format!("✗ {} wrong", wrong), Style::default().fg(Color::Red)),
        Span::raw("   "),
        Span::styled(
            format!("★ best {}%", state.best),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled("[?] help", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
