use std::io;
use std::time::Duration;

use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::state::*;

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, state);
                }
            }
        }
    }

    Ok(())
}

/// Applies one key press to the state. Never fails: rejected actions are logged by the state.
pub fn handle_key(key: KeyEvent, state: &mut AppState) {
    debug!("Key {:?}", key.code);

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    if state.has_dialog() {
        handle_dialog_key(key, state);
        return;
    }

    if state.show_review {
        handle_review_key(key, state);
        return;
    }

    match state.screen {
        Screen::Playing => handle_playing_key(key, state),
        Screen::Finished => handle_finished_key(key, state),
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    match state.top_dialog() {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                state.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}

fn handle_review_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('v') => state.toggle_review(),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_review(-1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_review(1),
        KeyCode::PageUp => state.scroll_review(-5),
        KeyCode::PageDown => state.scroll_review(5),
        _ => {}
    }
}

fn handle_playing_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.push_dialog(Dialog::ConfirmQuit),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Char('r') | KeyCode::Char('s') => state.restart(),
        KeyCode::Char('v') => state.toggle_review(),
        KeyCode::Char('n') | KeyCode::Right => state.next(),
        KeyCode::Up => state.cursor_up(),
        KeyCode::Down => state.cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => state.confirm(),
        KeyCode::Char(c) => {
            if let Some(idx) = choice_index_for_key(c) {
                if idx < state.choice_count() {
                    state.choose(idx);
                }
            }
        }
        _ => {}
    }
}

fn handle_finished_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('r') => state.restart(),
        KeyCode::Char('v') => state.toggle_review(),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        _ => {}
    }
}

/// `1`-`9` and `a`-`h` map to presented choice positions.
pub fn choice_index_for_key(c: char) -> Option<usize> {
    match c {
        '1'..='9' => Some(c as usize - '1' as usize),
        'a'..='h' => Some(c as usize - 'a' as usize),
        _ => None,
    }
}

pub fn choice_label(idx: usize) -> char {
    (b'A' + (idx as u8 % 26)) as char
}
