use std::fmt;

/// Precondition violations raised by [`crate::session::QuizSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Operation not allowed in the current phase, or the bank is empty.
    InvalidState(String),
    /// The current question already has an answer.
    AlreadyAnswered,
    /// `advance` was called before the current question was answered.
    NotYetAnswered,
    /// The presented choice index does not exist on the current question.
    ChoiceOutOfRange { index: usize, len: usize },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InvalidState(reason) => write!(f, "Invalid state: {}", reason),
            QuizError::AlreadyAnswered => write!(f, "Question already answered"),
            QuizError::NotYetAnswered => write!(f, "Question not answered yet"),
            QuizError::ChoiceOutOfRange { index, len } => {
                write!(f, "Choice {} out of range ({} choices)", index, len)
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// Errors raised while building or loading a question bank.
#[derive(Debug)]
pub enum BankError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Empty,
    InvalidQuestion { index: usize, reason: String },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Io(e) => write!(f, "Cannot read question bank: {}", e),
            BankError::Parse(e) => write!(f, "Invalid question bank: {}", e),
            BankError::Empty => write!(f, "Question bank has no questions"),
            BankError::InvalidQuestion { index, reason } => {
                write!(f, "Question {}: {}", index + 1, reason)
            }
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BankError::Io(e) => Some(e),
            BankError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        BankError::Io(err)
    }
}

impl From<serde_yaml::Error> for BankError {
    fn from(err: serde_yaml::Error) -> Self {
        BankError::Parse(err)
    }
}
