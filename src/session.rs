use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bank::QuestionBank;
use crate::error::QuizError;
use crate::model::{AnswerRecord, Question};
use crate::shuffle::shuffled_indices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

/// The question on screen plus the order its choices are displayed in.
#[derive(Debug, Clone, Copy)]
pub struct CurrentQuestion<'a> {
    pub bank_index: usize,
    pub question: &'a Question,
    /// Original choice indices in display order.
    pub presented: &'a [usize],
}

impl<'a> CurrentQuestion<'a> {
    /// Choice texts in display order.
    pub fn choices(self) -> impl Iterator<Item = &'a str> + 'a {
        self.presented.iter().map(move |&i| self.question.choices[i].as_str())
    }

    pub fn presented_position_of(&self, original: usize) -> Option<usize> {
        self.presented.iter().position(|&i| i == original)
    }

    pub fn correct_position(&self) -> Option<usize> {
        self.presented_position_of(self.question.correct_index)
    }
}

/// One line of the post-game review.
#[derive(Debug, Clone)]
pub struct ReviewEntry<'a> {
    pub number: usize,
    pub question: &'a Question,
    pub chosen: &'a str,
    pub correct: &'a str,
    pub is_correct: bool,
}

/// A single play-through of a question bank.
///
/// Questions are visited in a shuffled order. Each question's choices are
/// shuffled once when the question is entered and kept until `advance`.
#[derive(Debug)]
pub struct QuizSession {
    bank: Option<Arc<QuestionBank>>,
    order: Vec<usize>,
    position: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
    presented: Vec<usize>,
    answered: bool,
    phase: Phase,
    rng: StdRng,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible shuffles for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            bank: None,
            order: Vec::new(),
            position: 0,
            score: 0,
            answers: Vec::new(),
            presented: Vec::new(),
            answered: false,
            phase: Phase::NotStarted,
            rng,
        }
    }

    pub fn start(&mut self, bank: Arc<QuestionBank>) -> Result<(), QuizError> {
        if self.phase == Phase::InProgress {
            return Err(QuizError::InvalidState(
                "session already in progress".to_string(),
            ));
        }
        self.begin(bank)
    }

    /// Abandons whatever is running and starts over with a fresh order.
    pub fn restart(&mut self, bank: Arc<QuestionBank>) -> Result<(), QuizError> {
        self.begin(bank)
    }

    fn begin(&mut self, bank: Arc<QuestionBank>) -> Result<(), QuizError> {
        if bank.is_empty() {
            return Err(QuizError::InvalidState("question bank is empty".to_string()));
        }
        self.order = shuffled_indices(bank.len(), &mut self.rng);
        self.position = 0;
        self.score = 0;
        self.answers.clear();
        self.answered = false;
        self.bank = Some(bank);
        self.phase = Phase::InProgress;
        self.enter_question();
        Ok(())
    }

    fn enter_question(&mut self) {
        let choice_count = self
            .bank
            .as_ref()
            .and_then(|b| b.get(self.order[self.position]))
            .map(|q| q.choices.len())
            .unwrap_or(0);
        self.presented = shuffled_indices(choice_count, &mut self.rng);
        self.answered = false;
    }

    fn require_in_progress(&self) -> Result<&Arc<QuestionBank>, QuizError> {
        match (self.phase, self.bank.as_ref()) {
            (Phase::InProgress, Some(bank)) => Ok(bank),
            (Phase::NotStarted, _) => Err(QuizError::InvalidState(
                "session not started".to_string(),
            )),
            _ => Err(QuizError::InvalidState("session completed".to_string())),
        }
    }

    pub fn current_question(&self) -> Result<CurrentQuestion<'_>, QuizError> {
        let bank = self.require_in_progress()?;
        let bank_index = self.order[self.position];
        Ok(CurrentQuestion {
            bank_index,
            question: &bank[bank_index],
            presented: &self.presented,
        })
    }

    /// Records the answer for the choice shown at `presented_index`.
    /// Returns whether it was correct.
    pub fn submit_answer(&mut self, presented_index: usize) -> Result<bool, QuizError> {
        let bank = self.require_in_progress()?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        let original = *self
            .presented
            .get(presented_index)
            .ok_or(QuizError::ChoiceOutOfRange {
                index: presented_index,
                len: self.presented.len(),
            })?;

        let question_index = self.order[self.position];
        let is_correct = original == bank[question_index].correct_index;
        if is_correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            question_index,
            chosen_choice_index: original,
            is_correct,
        });
        self.answered = true;
        Ok(is_correct)
    }

    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        self.require_in_progress()?;
        if !self.answered {
            return Err(QuizError::NotYetAnswered);
        }
        self.position += 1;
        if self.position == self.order.len() {
            self.phase = Phase::Completed;
            self.presented.clear();
        } else {
            self.enter_question();
        }
        Ok(self.phase)
    }

    pub fn progress_fraction(&self) -> f64 {
        if self.order.is_empty() {
            return 0.0;
        }
        (self.position as f64 / self.order.len() as f64).clamp(0.0, 1.0)
    }

    pub fn final_percentage(&self) -> Result<u32, QuizError> {
        if self.phase != Phase::Completed {
            return Err(QuizError::InvalidState("session not completed".to_string()));
        }
        Ok(percentage(self.score, self.order.len()))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn bank(&self) -> Option<&QuestionBank> {
        self.bank.as_deref()
    }

    pub fn review(&self) -> Vec<ReviewEntry<'_>> {
        let Some(bank) = self.bank.as_deref() else {
            return Vec::new();
        };
        self.answers
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let question = &bank[record.question_index];
                ReviewEntry {
                    number: i + 1,
                    question,
                    chosen: question.choices[record.chosen_choice_index].as_str(),
                    correct: question.correct_choice().unwrap_or(""),
                    is_correct: record.is_correct,
                }
            })
            .collect()
    }
}

/// `round(100 * score / total)`, 0 for an empty total.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * score as f64 / total as f64).round() as u32
}
