use std::sync::Arc;

use chrono::{DateTime, Local};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bank::QuestionBank;
use crate::scenery::{Scene, Scenery};
use crate::session::{Phase, QuizSession};
use crate::store::ScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Help,
    ConfirmQuit,
}

/// Outcome of the last answer, kept for highlighting until the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub presented: usize,
    pub correct: bool,
}

/// Everything the terminal front end needs: the session, the score store and
/// the bits of UI state around them.
pub struct AppState {
    pub screen: Screen,
    pub bank: Arc<QuestionBank>,
    pub session: QuizSession,
    pub store: Box<dyn ScoreStore>,
    pub best: u32,
    pub new_best: bool,
    pub scenery: Scenery,
    scenery_rng: StdRng,
    pub choice_cursor: usize,
    pub feedback: Option<Feedback>,
    pub show_review: bool,
    pub review_scroll: usize,
    pub dialog_stack: Vec<Dialog>,
    pub started_at: DateTime<Local>,
    pub finished_at: Option<DateTime<Local>>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(
        bank: Arc<QuestionBank>,
        mut session: QuizSession,
        store: Box<dyn ScoreStore>,
        seed: Option<u64>,
    ) -> Result<Self, String> {
        session
            .start(bank.clone())
            .map_err(|e| format!("Cannot start quiz: {}", e))?;

        let mut scenery_rng = match seed {
            Some(s) => StdRng::seed_from_u64(s.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        let scenery = Scenery::shuffled(&mut scenery_rng);
        let best = store.load_best();
        info!(
            "Starting \"{}\" with {} questions, best so far {}%",
            bank.title(),
            bank.len(),
            best
        );

        Ok(Self {
            screen: Screen::Playing,
            bank,
            session,
            store,
            best,
            new_best: false,
            scenery,
            scenery_rng,
            choice_cursor: 0,
            feedback: None,
            show_review: false,
            review_scroll: 0,
            dialog_stack: Vec::new(),
            started_at: Local::now(),
            finished_at: None,
            should_quit: false,
        })
    }

    pub fn current_scene(&self) -> Scene {
        self.scenery.scene_for(self.session.position())
    }

    pub fn choice_count(&self) -> usize {
        self.session
            .current_question()
            .map(|c| c.presented.len())
            .unwrap_or(0)
    }

    /// Answers with the choice shown at `presented`. Rejected answers are logged and dropped.
    pub fn choose(&mut self, presented: usize) -> Option<bool> {
        match self.session.submit_answer(presented) {
            Ok(correct) => {
                self.choice_cursor = presented;
                self.feedback = Some(Feedback { presented, correct });
                info!(
                    "Question {} answered {}",
                    self.session.position() + 1,
                    if correct { "correctly" } else { "incorrectly" }
                );
                Some(correct)
            }
            Err(e) => {
                warn!("Ignoring answer: {}", e);
                None
            }
        }
    }

    pub fn choose_cursor(&mut self) -> Option<bool> {
        self.choose(self.choice_cursor)
    }

    pub fn next(&mut self) {
        match self.session.advance() {
            Ok(Phase::Completed) => self.finish(),
            Ok(_) => {
                self.choice_cursor = 0;
                self.feedback = None;
            }
            Err(e) => warn!("Ignoring advance: {}", e),
        }
    }

    /// Enter: answer with the highlighted choice, or move on once answered.
    pub fn confirm(&mut self) {
        if self.session.is_answered() {
            self.next();
        } else {
            self.choose_cursor();
        }
    }

    /// Saves the final percentage when it beats the stored best.
    fn finish(&mut self) {
        self.finished_at = Some(Local::now());
        self.screen = Screen::Finished;
        self.feedback = None;

        let pct = match self.session.final_percentage() {
            Ok(p) => p,
            Err(e) => {
                warn!("Cannot compute final score: {}", e);
                return;
            }
        };
        info!(
            "Finished with {}/{} ({}%)",
            self.session.score(),
            self.session.len(),
            pct
        );

        if pct > self.best {
            if let Err(e) = self.store.save_best(pct) {
                warn!("Cannot save best score: {}", e);
            }
            info!("New best score {}% (was {}%)", pct, self.best);
            self.best = pct;
            self.new_best = true;
        }
    }

    pub fn restart(&mut self) {
        if let Err(e) = self.session.restart(self.bank.clone()) {
            warn!("Cannot restart: {}", e);
            return;
        }
        self.scenery = Scenery::shuffled(&mut self.scenery_rng);
        self.screen = Screen::Playing;
        self.new_best = false;
        self.choice_cursor = 0;
        self.feedback = None;
        self.show_review = false;
        self.review_scroll = 0;
        self.started_at = Local::now();
        self.finished_at = None;
        info!("Restarted with a new question order");
    }

    pub fn cursor_up(&mut self) {
        if self.session.is_answered() {
            return;
        }
        self.choice_cursor = self.choice_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.session.is_answered() {
            return;
        }
        let count = self.choice_count();
        if self.choice_cursor + 1 < count {
            self.choice_cursor += 1;
        }
    }

    pub fn toggle_review(&mut self) {
        self.show_review = !self.show_review;
        self.review_scroll = 0;
    }

    pub fn scroll_review(&mut self, delta: isize) {
        let max = self.session.answers().len().saturating_sub(1);
        let next = self.review_scroll as isize + delta;
        self.review_scroll = next.clamp(0, max as isize) as usize;
    }

    pub fn elapsed_seconds(&self) -> i64 {
        let end = self.finished_at.unwrap_or_else(Local::now);
        end.signed_duration_since(self.started_at).num_seconds()
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}

pub fn format_elapsed(total_secs: i64) -> String {
    if total_secs <= 0 {
        return "0s".to_string();
    }
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
