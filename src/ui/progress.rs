use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Gauge;
use ratatui::Frame;

use crate::session::QuizSession;
use crate::state::AppState;

pub fn draw_progress(f: &mut Frame, area: Rect, state: &AppState) {
    let scene = state.current_scene();

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(scene.accent).bg(Color::Rgb(30, 30, 30)))
        .ratio(state.session.progress_fraction())
        .label(progress_label(&state.session));
    f.render_widget(gauge, area);
}

/// Gauge caption; counts the same completed positions the fill is based on.
pub fn progress_label(session: &QuizSession) -> String {
    format!("{}/{} completed", session.position(), session.len())
}
