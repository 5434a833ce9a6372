use rand::rng;
use rand::seq::IndexedRandom;

use studyhub_core::Clock;
use studyhub_core::catalog;
use studyhub_core::model::{Profile, Program, ScoreEntry, Session};

use crate::auth;
use crate::error::ChatError;
use crate::leaderboard::{self, LeaderboardEntry};
use crate::quiz::{AnswerSheet, Quiz, QuizOutcome, QuizStore, grade};
use crate::tutor::{StudentLevel, TutorService};

/// One-stop service behind the dashboard views.
///
/// Owns the clock, the per-day quiz cache and the tutor relay. The session
/// belongs to the caller and is passed into each action; actions run one at
/// a time to completion, like the button handlers they back.
pub struct DashboardService {
    clock: Clock,
    quizzes: QuizStore,
    tutor: TutorService,
}

impl DashboardService {
    #[must_use]
    pub fn new(tutor: TutorService) -> Self {
        Self {
            clock: Clock::default(),
            quizzes: QuizStore::new(),
            tutor,
        }
    }

    /// Pin time for this service and its tutor.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.tutor = self.tutor.with_clock(clock);
        self
    }

    /// Verify demo credentials and mark the session logged in.
    ///
    /// Returns false (leaving the session untouched) on a bad pair.
    pub fn login(&self, session: &mut Session, username: &str, password: &str) -> bool {
        if !auth::verify(username, password) {
            return false;
        }
        session.log_in(auth::normalize(username));
        true
    }

    pub fn logout(&self, session: &mut Session) {
        session.log_out();
    }

    /// Replace the session profile wholesale.
    pub fn save_profile(&self, session: &mut Session, profile: Profile) {
        session.save_profile(profile);
    }

    /// Today's quiz for the program, generated once per (program, day).
    pub fn daily_quiz(&mut self, program: Program) -> &Quiz {
        self.quizzes.get_or_create(program, self.clock.today())
    }

    /// Grade a submission against today's quiz and append the score.
    ///
    /// The outcome's perfect flag is the badge signal; granting the badge
    /// is the caller's concern.
    pub fn submit_quiz(
        &mut self,
        session: &mut Session,
        program: Program,
        answers: &AnswerSheet,
    ) -> QuizOutcome {
        let today = self.clock.today();
        let quiz = self.quizzes.get_or_create(program, today);
        let outcome = grade(quiz, answers);

        session.record_score(ScoreEntry {
            date: today,
            program,
            total_points: outcome.points,
        });
        tracing::debug!(%program, points = outcome.points, "quiz submitted");

        outcome
    }

    /// Relay a study question to the tutor, recording the exchange.
    ///
    /// # Errors
    ///
    /// Propagates `ChatError`; pair it with [`crate::tutor::offline_hint`]
    /// for the user-visible fallback.
    pub async fn ask_tutor(
        &self,
        session: &mut Session,
        program: Program,
        level: StudentLevel,
        question: &str,
    ) -> Result<String, ChatError> {
        self.tutor.ask(session, program, level, question).await
    }

    /// Relay a practice answer for feedback.
    ///
    /// # Errors
    ///
    /// Propagates `ChatError` from the relay.
    pub async fn review_practice(
        &self,
        exercise: &str,
        answer: &str,
    ) -> Result<String, ChatError> {
        self.tutor.review_practice(exercise, answer).await
    }

    /// The demo leaderboard including this session's accumulated points.
    #[must_use]
    pub fn leaderboard(&self, session: &Session) -> Vec<LeaderboardEntry> {
        leaderboard::standings(session)
    }

    /// A motivation quote for the home view.
    #[must_use]
    pub fn motivation(&self) -> &'static str {
        catalog::MOTIVATION
            .choose(&mut rng())
            .copied()
            .unwrap_or(catalog::MOTIVATION[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatRelay;
    use studyhub_core::model::{ApiSettings, ProfileDraft};
    use studyhub_core::time::fixed_clock;

    fn offline_dashboard() -> DashboardService {
        let tutor = TutorService::new(ChatRelay::new(ApiSettings::default()));
        DashboardService::new(tutor).with_clock(fixed_clock())
    }

    #[test]
    fn login_rejects_bad_credentials_without_touching_the_session() {
        let dashboard = offline_dashboard();
        let mut session = Session::new();

        assert!(!dashboard.login(&mut session, "neel", "wrong"));
        assert!(!session.is_logged_in());

        assert!(dashboard.login(&mut session, " NEEL ", "1234"));
        assert_eq!(session.username(), Some("neel"));
    }

    #[test]
    fn daily_quiz_is_stable_within_a_day() {
        let mut dashboard = offline_dashboard();
        let first = dashboard.daily_quiz(Program::Ai).clone();
        let second = dashboard.daily_quiz(Program::Ai).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn submission_appends_a_score_entry() {
        let mut dashboard = offline_dashboard();
        let mut session = Session::new();
        dashboard.login(&mut session, "soumy", "1111");

        let quiz = dashboard.daily_quiz(Program::Ml).clone();
        let mut answers = AnswerSheet::new();
        for (index, question) in quiz.questions().iter().enumerate() {
            answers.select(index, question.answer().to_string());
        }

        let outcome = dashboard.submit_quiz(&mut session, Program::Ml, &answers);

        assert!(outcome.is_perfect());
        assert_eq!(session.scores().len(), 1);
        assert_eq!(session.scores()[0].program, Program::Ml);
        assert_eq!(session.total_points(), 100);
    }

    #[test]
    fn profile_save_replaces_the_previous_profile() {
        let dashboard = offline_dashboard();
        let mut session = Session::new();

        dashboard.save_profile(
            &mut session,
            ProfileDraft {
                name: Some("Neel".to_string()),
                ..ProfileDraft::new()
            }
            .normalized(),
        );
        dashboard.save_profile(&mut session, ProfileDraft::new().normalized());

        assert_eq!(session.profile().name(), None);
    }

    #[test]
    fn motivation_always_returns_a_catalog_quote() {
        let dashboard = offline_dashboard();
        for _ in 0..16 {
            assert!(catalog::MOTIVATION.contains(&dashboard.motivation()));
        }
    }

    #[tokio::test]
    async fn tutor_errors_do_not_end_the_session() {
        let dashboard = offline_dashboard();
        let mut session = Session::new();
        dashboard.login(&mut session, "vivek", "2222");

        let err = dashboard
            .ask_tutor(&mut session, Program::Ai, StudentLevel::Beginner, "what is AI?")
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::MissingApiKey));
        assert!(session.is_logged_in());
        assert!(session.chat_history().is_empty());
    }
}
