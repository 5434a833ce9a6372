use chrono::{DateTime, Utc};

/// One tutor exchange kept in the session transcript. Append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}
