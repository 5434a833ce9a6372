use chrono::NaiveDate;

use crate::model::Program;

/// One completed quiz, appended when the student submits.
///
/// Entries are never mutated or removed for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub date: NaiveDate,
    pub program: Program,
    pub total_points: u32,
}
