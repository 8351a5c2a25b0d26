//! Static quiz content: fallacy kinds, passages and the tutorial script.
//!
//! Content lives in child modules the same way board levels used to, so new
//! passages can be added without touching gameplay code.

mod kinds;
mod passages;
mod tutorial;

pub use kinds::FALLACY_KINDS;
pub use passages::PASSAGES;
pub use tutorial::{TUTORIAL_INTRO, TUTORIAL_PASSAGE, TUTORIAL_STEPS, glossary_captions};

/// A category of flawed argument the player has to recognise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallacyKind {
    pub key: &'static str,
    pub full_name: &'static str,
    /// Number of phrases the player must click.
    pub arg_count: usize,
    /// Keys of confusable kinds used as distractors.
    pub related: &'static [&'static str],
    /// What the clickable elements are; shown in the tutorial glossary.
    pub elements: &'static str,
}

impl FallacyKind {
    /// Radio button label, e.g. `"Straw Man (2)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.full_name, self.arg_count)
    }
}

/// One quiz question: a passage split into clickable phrases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Passage {
    pub kind: &'static str,
    /// Ordered phrases; a leading '\n' forces a line break before the phrase.
    pub phrases: &'static [&'static str],
    /// Indices of the phrases forming the fallacious elements.
    pub answer: &'static [usize],
}

impl Passage {
    pub fn is_answer(&self, index: usize) -> bool {
        self.answer.contains(&index)
    }
}

pub fn kinds() -> &'static [FallacyKind] {
    FALLACY_KINDS
}

pub fn passages() -> &'static [Passage] {
    PASSAGES
}

pub fn find_kind(key: &str) -> Option<&'static FallacyKind> {
    FALLACY_KINDS.iter().find(|k| k.key == key)
}
