use std::collections::HashMap;

use super::builder::Quiz;

/// Points awarded per correctly answered question.
pub const POINTS_PER_QUESTION: u32 = 5;

/// The student's chosen options, keyed by question index.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    choices: HashMap<usize, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or change) the choice for a question.
    pub fn select(&mut self, question: usize, choice: impl Into<String>) {
        self.choices.insert(question, choice.into());
    }

    #[must_use]
    pub fn choice(&self, question: usize) -> Option<&str> {
        self.choices.get(&question).map(String::as_str)
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.choices.len()
    }
}

/// Result of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub points: u32,
    pub correct: usize,
    pub total: usize,
    pub max_points: u32,
}

impl QuizOutcome {
    /// True when every question was answered correctly; the caller grants
    /// the platinum badge on this signal.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.points == self.max_points
    }
}

/// Grade a submission: each correct choice is worth [`POINTS_PER_QUESTION`],
/// wrong or unanswered questions are worth nothing.
#[must_use]
pub fn grade(quiz: &Quiz, answers: &AnswerSheet) -> QuizOutcome {
    let correct = quiz
        .questions()
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .choice(*index)
                .is_some_and(|choice| question.is_correct(choice))
        })
        .count();

    let points = u32::try_from(correct)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_QUESTION);

    QuizOutcome {
        points,
        correct,
        total: quiz.len(),
        max_points: quiz.max_points(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use studyhub_core::model::Program;

    fn quiz() -> Quiz {
        QuizBuilder::new(Program::Ai).build_with_rng(&mut StdRng::seed_from_u64(11))
    }

    fn all_correct(quiz: &Quiz) -> AnswerSheet {
        let mut answers = AnswerSheet::new();
        for (index, question) in quiz.questions().iter().enumerate() {
            answers.select(index, question.answer().to_string());
        }
        answers
    }

    #[test]
    fn full_marks_hit_the_maximum_and_the_badge() {
        let quiz = quiz();
        let outcome = grade(&quiz, &all_correct(&quiz));

        assert_eq!(outcome.points, 100);
        assert_eq!(outcome.correct, 20);
        assert_eq!(outcome.max_points, 100);
        assert!(outcome.is_perfect());
    }

    #[test]
    fn blank_sheet_scores_zero() {
        let quiz = quiz();
        let outcome = grade(&quiz, &AnswerSheet::new());

        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.correct, 0);
        assert!(!outcome.is_perfect());
    }

    #[test]
    fn wrong_choices_score_like_unanswered_ones() {
        let quiz = quiz();
        let mut answers = AnswerSheet::new();
        for (index, question) in quiz.questions().iter().enumerate() {
            let wrong = question
                .options()
                .iter()
                .find(|opt| !question.is_correct(opt))
                .expect("every question has a wrong option");
            answers.select(index, wrong.to_string());
        }

        assert_eq!(grade(&quiz, &answers).points, 0);
    }

    #[test]
    fn score_grows_with_each_correct_answer() {
        let quiz = quiz();
        let mut answers = AnswerSheet::new();
        let mut previous = 0;

        for (index, question) in quiz.questions().iter().enumerate() {
            answers.select(index, question.answer().to_string());
            let outcome = grade(&quiz, &answers);
            assert_eq!(outcome.points, previous + POINTS_PER_QUESTION);
            previous = outcome.points;
        }
    }

    #[test]
    fn changing_a_choice_overwrites_the_old_one() {
        let mut answers = AnswerSheet::new();
        answers.select(0, "first");
        answers.select(0, "second");
        assert_eq!(answers.choice(0), Some("second"));
        assert_eq!(answers.answered(), 1);
    }

    #[test]
    fn out_of_range_answers_are_ignored() {
        let quiz = quiz();
        let mut answers = AnswerSheet::new();
        answers.select(999, "pandas");
        assert_eq!(grade(&quiz, &answers).points, 0);
    }
}
