pub mod bank;
mod builder;
mod score;
mod store;

// Public API of the quiz subsystem.
pub use builder::{QUIZ_LEN, Quiz, QuizBuilder};
pub use score::{AnswerSheet, POINTS_PER_QUESTION, QuizOutcome, grade};
pub use store::QuizStore;
