#![forbid(unsafe_code)]

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod leaderboard;
pub mod quiz;
pub mod tutor;

pub use studyhub_core::Clock;

pub use chat::{ChatMessage, ChatRelay};
pub use dashboard::DashboardService;
pub use error::ChatError;
pub use leaderboard::LeaderboardEntry;
pub use quiz::{AnswerSheet, POINTS_PER_QUESTION, QUIZ_LEN, Quiz, QuizBuilder, QuizOutcome, QuizStore};
pub use tutor::{StudentLevel, TutorService, offline_hint};
