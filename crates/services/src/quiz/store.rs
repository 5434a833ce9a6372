use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;
use rand::rng;

use studyhub_core::model::Program;

use super::builder::{Quiz, QuizBuilder};

/// Per-day quiz cache.
///
/// The first request for a (program, day) pair generates the quiz; repeated
/// requests return the stored value unchanged until the day rolls over.
/// There is no eviction: entries accumulate for the session's lifetime,
/// which is bounded by one interactive sitting.
#[derive(Debug, Default)]
pub struct QuizStore {
    quizzes: HashMap<(Program, NaiveDate), Quiz>,
}

impl QuizStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The quiz for (program, day), generating it on first access.
    pub fn get_or_create(&mut self, program: Program, day: NaiveDate) -> &Quiz {
        self.get_or_create_with_rng(program, day, &mut rng())
    }

    /// Like [`get_or_create`](Self::get_or_create) with a caller-supplied
    /// RNG for deterministic tests. The RNG is only consulted when the
    /// entry is first generated.
    pub fn get_or_create_with_rng<R: Rng + ?Sized>(
        &mut self,
        program: Program,
        day: NaiveDate,
        rng: &mut R,
    ) -> &Quiz {
        self.quizzes
            .entry((program, day))
            .or_insert_with(|| QuizBuilder::new(program).build_with_rng(rng))
    }

    /// The stored quiz, if one was already generated for this key.
    #[must_use]
    pub fn get(&self, program: Program, day: NaiveDate) -> Option<&Quiz> {
        self.quizzes.get(&(program, day))
    }

    /// Number of distinct (program, day) quizzes generated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}
