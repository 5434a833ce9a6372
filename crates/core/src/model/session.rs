use std::fmt;

use crate::model::{ChatEntry, Profile, ScoreEntry};

/// In-memory state for one user's continuous use of the dashboard.
///
/// Created at session start and discarded (dropped) at session end; nothing
/// here outlives the process. Scores and the chat transcript are append-only.
#[derive(Clone, Default)]
pub struct Session {
    username: Option<String>,
    profile: Profile,
    scores: Vec<ScoreEntry>,
    chat_history: Vec<ChatEntry>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Mark the session as logged in under the given (already verified) name.
    pub fn log_in(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    /// Clear the login identity.
    ///
    /// The owner usually drops the whole `Session` afterwards; this only
    /// resets the logged-in flag and name, mirroring the dashboard's logout
    /// button.
    pub fn log_out(&mut self) {
        self.username = None;
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replace the stored profile wholesale.
    pub fn save_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    /// Append a quiz score. Entries are never mutated or removed.
    pub fn record_score(&mut self, entry: ScoreEntry) {
        self.scores.push(entry);
    }

    #[must_use]
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    /// Sum of every recorded quiz score.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.scores.iter().map(|entry| entry.total_points).sum()
    }

    /// Append a tutor exchange to the transcript.
    pub fn record_chat(&mut self, entry: ChatEntry) {
        self.chat_history.push(entry);
    }

    #[must_use]
    pub fn chat_history(&self) -> &[ChatEntry] {
        &self.chat_history
    }

    /// The most recent `limit` transcript entries, oldest first.
    #[must_use]
    pub fn recent_chat(&self, limit: usize) -> &[ChatEntry] {
        let start = self.chat_history.len().saturating_sub(limit);
        &self.chat_history[start..]
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("scores_len", &self.scores.len())
            .field("chat_len", &self.chat_history.len())
            .finish_non_exhaustive()
    }
}
