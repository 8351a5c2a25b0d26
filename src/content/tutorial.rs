//! Tutorial round: one fixed passage and the caption script shown above it.

use std::sync::LazyLock;

use super::{FALLACY_KINDS, FallacyKind, Passage};

pub static TUTORIAL_PASSAGE: Passage = Passage {
    kind: "analogy",
    phrases: &["Mice", "are afraid", "of cats", "therefore", "humans", "are afraid", "of cats."],
    answer: &[0, 4],
};

/// Walkthrough captions shown before the glossary.
pub static TUTORIAL_INTRO: &[&str] = &[
    "Welcome to Fallacy Quest!",
    "This is a fallacy, but which one?",
    "First, find the correct answer",
    "In this case, that's \"Weak Analogy\"",
    "So now, click the circle next to the answer",
    "The number in parentheses next to the answer...",
    "...tells you how many \"choices\" it takes",
    "The choices determine what the fallacy actually is",
    "So for a Weak Analogy, that would be...",
    "...the two things being analogized",
    "For an Accident it would be...",
    "...the generalization and the exceptional case",
    "Pretty easy right?",
    "Well, once you've figured out the \"choices\"...",
    "...you can go ahead and click on them to select them",
    "In this case, the choices would be \"Mice\" and \"humans\"...",
    "...since those are the things being analogized weakly",
    "So go on and click the words \"Mice\" and \"humans\" in the text below",
    "Once you've bubbled in your answer above...",
    "...and selected your choices below...",
    "...you can check your answer by clicking on the green \"Check\" button",
    "If your answer is correct, you'll win some points and move on",
    "If not, don't worry!",
    "You'll be given as many chances as you need to retry the question",
    "But if you're stuck, you can always skip the question",
    "Have fun!",
    "The following is a description of fallacies and their \"choices\"",
];

/// Glossary captions longer than this are split over two "Next ->" presses.
const GLOSSARY_WRAP: usize = 72;

/// One `"Name (n): elements"` caption per kind, in table order.
pub fn glossary_captions(kinds: &[FallacyKind]) -> Vec<String> {
    let mut out = Vec::with_capacity(kinds.len() + 2);
    for k in kinds {
        let label = k.label();
        if label.len() + 2 + k.elements.len() > GLOSSARY_WRAP {
            out.push(format!("{label}: ..."));
            out.push(format!("...{}", k.elements));
        } else {
            out.push(format!("{label}: {}", k.elements));
        }
    }
    out
}

/// Captions, one per "Next ->" press: the intro, then the glossary.
pub static TUTORIAL_STEPS: LazyLock<Vec<String>> = LazyLock::new(|| {
    TUTORIAL_INTRO
        .iter()
        .map(|s| s.to_string())
        .chain(glossary_captions(FALLACY_KINDS))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glossary_follows_the_kind_table() {
        let glossary = glossary_captions(FALLACY_KINDS);
        assert_eq!(glossary[0], "Argumentum ad Hominem (1): The insult or attack");
        assert_eq!(
            glossary.last().map(String::as_str),
            Some("Division (3): The original, and the two resultants")
        );
    }

    #[test]
    fn long_glossary_entries_split_in_two() {
        let glossary = glossary_captions(FALLACY_KINDS);
        let i = glossary
            .iter()
            .position(|c| c == "Affirming the Consequent (2): ...")
            .unwrap();
        assert_eq!(glossary[i + 1], "...The affirmed consequent, and the concluded antecedent");
        assert!(glossary.contains(&"Denying the Antecedent (2): ...".to_string()));
        // affirming and denying are the only two long enough to split
        assert_eq!(glossary.len(), FALLACY_KINDS.len() + 2);
    }

    #[test]
    fn script_is_intro_then_glossary() {
        assert_eq!(TUTORIAL_STEPS.len(), 46);
        assert_eq!(TUTORIAL_STEPS[0], "Welcome to Fallacy Quest!");
        assert_eq!(
            TUTORIAL_STEPS[TUTORIAL_INTRO.len()],
            "Argumentum ad Hominem (1): The insult or attack"
        );
    }
}
