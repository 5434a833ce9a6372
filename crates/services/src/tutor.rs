use studyhub_core::Clock;
use studyhub_core::model::{ChatEntry, Program, Session};

use crate::chat::{ChatMessage, ChatRelay};
use crate::error::ChatError;

/// Self-reported level used to tailor tutor answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl StudentLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentLevel::Beginner => "Beginner",
            StudentLevel::Intermediate => "Intermediate",
            StudentLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for StudentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Study-question answering over the chat relay.
///
/// Builds the tutor prompts, relays the exchange, and appends successful
/// answers to the session transcript.
#[derive(Clone, Debug)]
pub struct TutorService {
    relay: ChatRelay,
    clock: Clock,
}

impl TutorService {
    #[must_use]
    pub fn new(relay: ChatRelay) -> Self {
        Self {
            relay,
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// True when live answers are possible (an API key is configured).
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.relay.enabled()
    }

    /// Ask a study question tailored to the program and level.
    ///
    /// On success the exchange is appended to the session transcript.
    /// Failures leave the transcript untouched.
    ///
    /// # Errors
    ///
    /// Propagates `ChatError` from the relay; see [`offline_hint`] for the
    /// recovery message shown next to the error.
    pub async fn ask(
        &self,
        session: &mut Session,
        program: Program,
        level: StudentLevel,
        question: &str,
    ) -> Result<String, ChatError> {
        let question = question.trim();
        let system_prompt = format!(
            "You are an expert tutor in {program}. Answer for a {level} student. \
             Give: 1) short explanation, 2) one example, 3) small code snippet if helpful, \
             4) two study resources. Keep it concise."
        );
        let messages = [
            ChatMessage::system(system_prompt),
            ChatMessage::user(question),
        ];

        let answer = self.relay.ask(&messages).await?;
        session.record_chat(ChatEntry {
            question: question.to_string(),
            answer: answer.clone(),
            asked_at: self.clock.now(),
        });
        Ok(answer)
    }

    /// Ask for feedback on a written practice answer (graded 0-10 with two
    /// suggested improvements). Not recorded in the transcript.
    ///
    /// # Errors
    ///
    /// Propagates `ChatError` from the relay.
    pub async fn review_practice(
        &self,
        exercise: &str,
        answer: &str,
    ) -> Result<String, ChatError> {
        let messages = [
            ChatMessage::system(
                "You are a friendly tutor who grades short answers 0-10 and gives 2 improvements.",
            ),
            ChatMessage::user(format!("Question: {exercise}\nAnswer: {answer}")),
        ];
        self.relay.ask(&messages).await
    }
}

/// The offline fallback line shown alongside a relay failure.
///
/// Every `ChatError` is recovered at this layer; none of them end the
/// session.
#[must_use]
pub fn offline_hint(error: &ChatError) -> &'static str {
    match error {
        ChatError::MissingApiKey => {
            "No API key. AI offline mode: quick tips -> Keep it concise, include examples."
        }
        ChatError::Remote { .. } | ChatError::Transport(_) => {
            "Offline tip: Break the topic into definitions, steps, and one example."
        }
    }
}
