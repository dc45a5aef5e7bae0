use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let scene = state.current_scene();

    let counter = match state.screen {
        Screen::Playing => format!(
            " Question {}/{} ",
            state.session.position() + 1,
            state.session.len()
        ),
        Screen::Finished => " Finished ".to_string(),
    };
    let scene_text = format!(" {} ", scene.name);

    let title_text = format!("[ {} ]", state.bank.title());
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Counter on the left, title centered, scene name on the right
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let counter_len = counter.chars().count();
    let scene_len = scene_text.chars().count();
    let center_pad = if available > title_len {
        ((available - title_len) / 2).saturating_sub(counter_len)
    } else {
        0
    };
    let right_pad =
        available.saturating_sub(counter_len + center_pad + title_len + scene_len);

    let line = Line::from(vec![
        Span::styled(counter, Style::default().fg(Color::Rgb(200, 200, 120))),
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        Span::styled(scene_text, Style::default().fg(scene.accent)),
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
