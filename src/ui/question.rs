use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::tui::choice_label;

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let scene = state.current_scene();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scene.accent))
        .style(Style::default().bg(scene.background));

    let Ok(current) = state.session.current_question() else {
        let p = Paragraph::new("No question").block(block);
        f.render_widget(p, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    let wrap_width = (area.width as usize).saturating_sub(6);

    lines.push(Line::from(""));
    for wline in wrap_text(&current.question.prompt, wrap_width) {
        lines.push(Line::from(Span::styled(
            format!("  {}", wline),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    let answered = state.session.is_answered();
    let correct_pos = current.correct_position();

    for (i, text) in current.choices().enumerate() {
        let is_cursor = !answered && i == state.choice_cursor;
        let chosen = state.feedback.map(|fb| fb.presented == i).unwrap_or(false);
        let is_correct = answered && correct_pos == Some(i);

        let (marker, style) = if is_correct {
            ("✓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else if chosen {
            ("✗", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        } else if is_cursor {
            ("›", Style::default().fg(scene.accent).add_modifier(Modifier::BOLD))
        } else if answered {
            (" ", Style::default().fg(Color::DarkGray))
        } else {
            (" ", Style::default())
        };

        // Prefix: "  › A. " = 7 chars
        let prefix = format!("  {} {}. ", marker, choice_label(i));
        let prefix_len = prefix.chars().count();
        let text_width = (area.width as usize).saturating_sub(prefix_len + 2);
        for (li, wline) in wrap_text(text, text_width).into_iter().enumerate() {
            if li == 0 {
                lines.push(Line::from(vec![
                    Span::styled(prefix.clone(), style),
                    Span::styled(wline, style),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(prefix_len)),
                    Span::styled(wline, style),
                ]));
            }
        }
    }

    if let Some(fb) = state.feedback {
        lines.push(Line::from(""));
        let verdict = if fb.correct {
            Span::styled(
                "  Correct!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!(
                    "  Not quite. The answer is {}.",
                    current.question.correct_choice().unwrap_or("?")
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(verdict));
        lines.push(Line::from(Span::styled(
            "  [Enter] Next question",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}

/// Greedy word wrap at `width` columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}
