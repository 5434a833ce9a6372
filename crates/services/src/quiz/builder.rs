use rand::Rng;
use rand::rng;
use rand::seq::{IndexedRandom, SliceRandom};

use studyhub_core::model::{Program, Question};

use super::bank;
use super::score::POINTS_PER_QUESTION;

/// Every generated quiz has exactly this many questions.
pub const QUIZ_LEN: usize = 20;

/// One day's quiz for a program.
///
/// Always exactly [`QUIZ_LEN`] questions; program seeds (if any) come first,
/// unmodified and in their defined order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    program: Program,
    questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn program(&self) -> Program {
        self.program
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Points awarded when every answer is correct.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        u32::try_from(self.questions.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(POINTS_PER_QUESTION)
    }
}

/// Builds a quiz from the static bank: seeds first, then a shuffled copy of
/// the base pool, then uniformly random picks (duplicates permitted) until
/// the quiz holds exactly [`QUIZ_LEN`] questions.
pub struct QuizBuilder {
    program: Program,
}

impl QuizBuilder {
    #[must_use]
    pub fn new(program: Program) -> Self {
        Self { program }
    }

    /// Build with the thread-local RNG.
    #[must_use]
    pub fn build(self) -> Quiz {
        self.build_with_rng(&mut rng())
    }

    /// Build with a caller-supplied RNG, for deterministic tests.
    #[must_use]
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Quiz {
        let mut questions = bank::seed_questions(self.program);

        let mut shuffled = bank::base_pool();
        shuffled.shuffle(rng);
        for question in shuffled {
            if questions.len() >= QUIZ_LEN {
                break;
            }
            questions.push(question);
        }

        // The pool is smaller than a full quiz, so pad with random repeats.
        let pool = bank::base_pool();
        while questions.len() < QUIZ_LEN {
            let Some(question) = pool.choose(rng) else {
                break;
            };
            questions.push(question.clone());
        }

        questions.truncate(QUIZ_LEN);
        Quiz {
            program: self.program,
            questions,
        }
    }
}
