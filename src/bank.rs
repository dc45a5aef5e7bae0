use std::fs;
use std::ops::Index;
use std::path::Path;

use serde::Deserialize;

use crate::error::BankError;
use crate::model::Question;

pub const DEFAULT_TITLE: &str = "Nature Quiz";

/// Immutable, ordered set of questions shared by every session.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    title: String,
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct BankFile {
    title: Option<String>,
    #[serde(default)]
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validates every question. An empty list is accepted here; loaders reject it.
    pub fn new(title: &str, questions: Vec<Question>) -> Result<Self, BankError> {
        for (index, q) in questions.iter().enumerate() {
            q.validate()
                .map_err(|reason| BankError::InvalidQuestion { index, reason })?;
        }
        Ok(Self {
            title: title.to_string(),
            questions,
        })
    }

    pub fn builtin() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            questions: builtin_questions(),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, BankError> {
        let file: BankFile = serde_yaml::from_str(content)?;
        if file.questions.is_empty() {
            return Err(BankError::Empty);
        }
        let title = file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self::new(&title, file.questions)
    }

    pub fn load(path: &Path) -> Result<Self, BankError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl Index<usize> for QuestionBank {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which data structure uses First-In-First-Out (FIFO) order?",
            &["Stack", "Queue", "Tree", "Graph"],
            1,
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            &["Venus", "Mars", "Jupiter", "Mercury"],
            1,
        ),
        Question::new(
            "In HTML, which tag is used to create a hyperlink?",
            &["<link>", "<a>", "<href>", "<url>"],
            1,
        ),
        Question::new(
            "Time complexity of binary search on a sorted array?",
            &["O(n)", "O(log n)", "O(n log n)", "O(1)"],
            1,
        ),
        Question::new(
            "Which one is NOT an operating system?",
            &["Linux", "Windows", "Oracle", "macOS"],
            2,
        ),
        Question::new(
            "The chemical symbol for Gold is:",
            &["Ag", "Au", "Gd", "Go"],
            1,
        ),
        Question::new(
            "Who proposed the theory of relativity?",
            &["Isaac Newton", "Albert Einstein", "Niels Bohr", "Galileo Galilei"],
            1,
        ),
        Question::new(
            "CSS stands for:",
            &[
                "Cascading Style Sheets",
                "Creative Style System",
                "Computer Styled Sections",
                "Colorful Style Sheets",
            ],
            0,
        ),
        Question::new(
            "Which device is used to convert AC to DC?",
            &["Rectifier", "Transformer", "Amplifier", "Oscillator"],
            0,
        ),
        Question::new(
            "Which of the following sorting algorithms is stable?",
            &["Selection Sort", "Quick Sort", "Merge Sort", "Heap Sort"],
            2,
        ),
        Question::new(
            "Which protocol is used to send web pages?",
            &["FTP", "SMTP", "HTTP", "SSH"],
            2,
        ),
        Question::new(
            "Which data structure is best for implementing recursion?",
            &["Queue", "Deque", "Stack", "Hash Table"],
            2,
        ),
    ]
}
