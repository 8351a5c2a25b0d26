//! Question building and round bookkeeping.

mod choices;
mod scoring;

pub use choices::{CHOICE_COUNT, RELATED_PICKS, generate_choices};
pub use scoring::{Advance, CheckOutcome, Session, points_for};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::{self, FallacyKind, Passage};
use crate::error::QuizError;

/// A passage together with its shuffled multiple-choice options.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub passage: Passage,
    pub choices: Vec<&'static FallacyKind>,
}

impl Question {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, passage: Passage) -> Result<Self, QuizError> {
        let choices = generate_choices(rng, content::kinds(), passage.kind)?;
        Ok(Self { passage, choices })
    }

    /// Correct when the chosen kind matches and the clicked phrases are exactly
    /// the answer set.
    pub fn is_correct(&self, choice: Option<&str>, selected: &[usize]) -> bool {
        if choice != Some(self.passage.kind) {
            return false;
        }
        selected.len() == self.passage.answer.len()
            && selected.iter().all(|i| self.passage.is_answer(*i))
    }
}

/// Draws passages for a round. Without repeats the pool is dealt from a
/// shuffled deck and reshuffled once exhausted.
#[derive(Clone, Debug)]
pub struct QuestionDeck {
    pool: &'static [Passage],
    order: Vec<usize>,
    allow_repeats: bool,
}

impl QuestionDeck {
    pub fn new(pool: &'static [Passage], allow_repeats: bool) -> Self {
        Self {
            pool,
            order: Vec::new(),
            allow_repeats,
        }
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Passage, QuizError> {
        if self.pool.is_empty() {
            return Err(QuizError::NoPassages);
        }
        if self.allow_repeats {
            return Ok(self.pool[rng.gen_range(0..self.pool.len())]);
        }
        if self.order.is_empty() {
            self.order = (0..self.pool.len()).collect();
            self.order.shuffle(rng);
        }
        let idx = self.order.pop().ok_or(QuizError::NoPassages)?;
        Ok(self.pool[idx])
    }

    pub fn remaining(&self) -> usize {
        self.order.len()
    }
}
