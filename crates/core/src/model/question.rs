use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("a question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("answer {answer:?} is not one of the options")]
    AnswerNotListed { answer: String },
}

/// A single multiple-choice question.
///
/// Immutable once built; the constructor guarantees the recorded answer is
/// one of the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    /// Build a question, checking that the answer appears among the options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` for fewer than two options and
    /// `QuestionError::AnswerNotListed` if the answer is not an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let answer = answer.into();
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if !options.iter().any(|opt| *opt == answer) {
            return Err(QuestionError::AnswerNotListed { answer });
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            answer,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Exact string comparison against the recorded answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(opts: &[&str]) -> Vec<String> {
        opts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn builds_when_answer_is_an_option() {
        let q = Question::new("2+2?", options(&["3", "4"]), "4").unwrap();
        assert_eq!(q.prompt(), "2+2?");
        assert_eq!(q.options().len(), 2);
        assert!(q.is_correct("4"));
        assert!(!q.is_correct("3"));
    }

    #[test]
    fn rejects_answer_missing_from_options() {
        let err = Question::new("2+2?", options(&["3", "5"]), "4").unwrap_err();
        assert!(matches!(err, QuestionError::AnswerNotListed { .. }));
    }

    #[test]
    fn rejects_single_option() {
        let err = Question::new("2+2?", options(&["4"]), "4").unwrap_err();
        assert!(matches!(err, QuestionError::TooFewOptions { len: 1 }));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let q = Question::new("lib?", options(&["pandas", "Flask"]), "pandas").unwrap();
        assert!(!q.is_correct("Pandas"));
    }
}
