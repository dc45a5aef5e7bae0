use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_index: usize,
}

impl Question {
    pub fn new(prompt: &str, choices: &[&str], correct_index: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_index,
        }
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.correct_index).map(String::as_str)
    }

    /// Checks that there are at least two choices and the correct index points at one of them.
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt is empty".to_string());
        }
        if self.choices.len() < 2 {
            return Err(format!(
                "needs at least 2 choices, found {}",
                self.choices.len()
            ));
        }
        if self.correct_index >= self.choices.len() {
            return Err(format!(
                "answer index {} is out of range for {} choices",
                self.correct_index,
                self.choices.len()
            ));
        }
        Ok(())
    }
}

/// One answered question. Created once, in presentation order, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub chosen_choice_index: usize,
    pub is_correct: bool,
}
