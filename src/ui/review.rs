use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::question::wrap_text;

/// Right-hand drawer listing every answered question.
pub fn draw_review(f: &mut Frame, area: Rect, state: &AppState) {
    let width = (area.width * 2 / 3).max(30).min(area.width);
    let rect = Rect::new(area.x + area.width - width, area.y, width, area.height);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Review ")
        .border_style(Style::default().fg(Color::Cyan));

    let entries = state.session.review();
    if entries.is_empty() {
        let widget = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No answers yet.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        f.render_widget(widget, rect);
        return;
    }

    let text_width = (width as usize).saturating_sub(8);
    let mut lines: Vec<Line> = Vec::new();
    let mut entry_starts: Vec<usize> = Vec::new();

    for entry in &entries {
        entry_starts.push(lines.len());
        let (icon, color) = if entry.is_correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        for (li, wline) in wrap_text(&entry.question.prompt, text_width)
            .into_iter()
            .enumerate()
        {
            let head = if li == 0 {
                format!(" {} {:>2}. ", icon, entry.number)
            } else {
                "       ".to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    head,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(wline, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::raw("       Your answer: "),
            Span::styled(entry.chosen.to_string(), Style::default().fg(color)),
        ]));
        if !entry.is_correct {
            lines.push(Line::from(vec![
                Span::raw("       Correct:     "),
                Span::styled(entry.correct.to_string(), Style::default().fg(Color::Green)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let scroll = entry_starts
        .get(state.review_scroll)
        .copied()
        .unwrap_or(0);

    let widget = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    f.render_widget(widget, rect);

    let mut scrollbar_state = ScrollbarState::new(entries.len()).position(state.review_scroll);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
    f.render_stateful_widget(scrollbar, rect, &mut scrollbar_state);
}
