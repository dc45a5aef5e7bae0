pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod progress;
pub mod question;
pub mod result;
pub mod review;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    progress::draw_progress(f, layout.progress, state);
    match state.screen {
        Screen::Playing => question::draw_question(f, layout.main, state),
        Screen::Finished => result::draw_result(f, layout.main, state),
    }
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    if state.show_review {
        review::draw_review(f, layout.main, state);
    }

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
