use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = if state.show_review {
        vec![("↑/↓", "scroll"), ("PgUp/PgDn", "page"), ("v/Esc", "close review")]
    } else {
        match state.screen {
            Screen::Playing if state.session.is_answered() => vec![
                ("Enter/n", "next"),
                ("v", "review"),
                ("r", "restart"),
                ("s", "shuffle"),
                ("q", "quit"),
            ],
            Screen::Playing => vec![
                ("1-9/a-h", "answer"),
                ("↑/↓", "move"),
                ("Enter", "choose"),
                ("v", "review"),
                ("r", "restart"),
                ("s", "shuffle"),
                ("q", "quit"),
            ],
            Screen::Finished => vec![
                ("Enter/p", "play again"),
                ("v", "review"),
                ("q", "quit"),
            ],
        }
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
