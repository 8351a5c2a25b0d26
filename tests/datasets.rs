// Content table invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use fallacy_quest::content::{
    FALLACY_KINDS, PASSAGES, TUTORIAL_INTRO, TUTORIAL_PASSAGE, TUTORIAL_STEPS, find_kind,
};

#[test]
fn fallacy_keys_are_unique() {
    let mut seen = HashSet::new();
    for k in FALLACY_KINDS {
        assert!(seen.insert(k.key), "duplicate fallacy key '{}'", k.key);
        assert!(!k.full_name.is_empty(), "empty name for '{}'", k.key);
        assert!(k.arg_count >= 1, "'{}' needs at least one clickable element", k.key);
    }
    assert_eq!(FALLACY_KINDS.len(), 17);
}

#[test]
fn related_kinds_exist_and_are_enough_for_choices() {
    for k in FALLACY_KINDS {
        assert!(k.related.len() >= 2, "'{}' has fewer than two related kinds", k.key);
        let unique: HashSet<&str> = k.related.iter().copied().collect();
        assert_eq!(unique.len(), k.related.len(), "'{}' repeats a related kind", k.key);
        for r in k.related {
            assert_ne!(*r, k.key, "'{}' lists itself as related", k.key);
            assert!(find_kind(r).is_some(), "'{}' relates to unknown '{}'", k.key, r);
        }
    }
}

#[test]
fn passages_match_their_kind() {
    assert_eq!(PASSAGES.len(), 40);
    for p in PASSAGES.iter().chain(std::iter::once(&TUTORIAL_PASSAGE)) {
        let kind = find_kind(p.kind).unwrap_or_else(|| panic!("unknown kind '{}'", p.kind));
        assert_eq!(
            p.answer.len(),
            kind.arg_count,
            "passage starting '{}' has {} answers, {} expects {}",
            p.phrases[0],
            p.answer.len(),
            kind.key,
            kind.arg_count
        );
        let unique: HashSet<usize> = p.answer.iter().copied().collect();
        assert_eq!(unique.len(), p.answer.len(), "repeated answer in '{}'", p.phrases[0]);
        for &i in p.answer {
            assert!(i < p.phrases.len(), "answer {} out of range in '{}'", i, p.phrases[0]);
        }
        assert!(p.phrases.iter().all(|ph| !ph.trim().is_empty()));
    }
}

#[test]
fn glossary_captions_name_real_fallacies() {
    let names: HashSet<&str> = FALLACY_KINDS.iter().map(|k| k.full_name).collect();
    for caption in TUTORIAL_STEPS.iter().skip(TUTORIAL_INTRO.len()) {
        if caption.starts_with("...") {
            continue;
        }
        let name = caption.split(" (").next().unwrap();
        assert!(names.contains(name), "caption '{}' names no fallacy", caption);
    }
    assert_eq!(TUTORIAL_STEPS.len(), 46);
}

#[test]
fn every_kind_has_a_glossary_entry_describing_its_elements() {
    let glossary: Vec<&String> = TUTORIAL_STEPS.iter().skip(TUTORIAL_INTRO.len()).collect();
    for k in FALLACY_KINDS {
        assert!(!k.elements.is_empty(), "'{}' has no element description", k.key);
        let entry = glossary
            .iter()
            .position(|c| c.starts_with(&k.label()))
            .unwrap_or_else(|| panic!("no glossary entry for '{}'", k.key));
        // a long entry continues on the following caption
        let text = if glossary[entry].ends_with("...") {
            glossary[entry + 1].as_str()
        } else {
            glossary[entry].as_str()
        };
        assert!(text.ends_with(k.elements), "glossary for '{}' reads '{}'", k.key, text);
    }
}
