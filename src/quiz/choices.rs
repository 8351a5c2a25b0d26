//! Multiple-choice generation: the correct kind, two confusable kinds and one
//! more drawn from the whole table, in random order.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::FallacyKind;
use crate::error::QuizError;

pub const RELATED_PICKS: usize = 2;
pub const CHOICE_COUNT: usize = RELATED_PICKS + 2;

pub fn generate_choices<R: Rng + ?Sized>(
    rng: &mut R,
    kinds: &'static [FallacyKind],
    correct_key: &str,
) -> Result<Vec<&'static FallacyKind>, QuizError> {
    let find = |key: &str| {
        kinds
            .iter()
            .find(|k| k.key == key)
            .ok_or_else(|| QuizError::UnknownFallacy(key.to_string()))
    };

    let correct = find(correct_key)?;
    if correct.related.len() < RELATED_PICKS {
        return Err(QuizError::TooFewRelated {
            key: correct.key.to_string(),
            found: correct.related.len(),
            needed: RELATED_PICKS,
        });
    }

    let mut chosen = Vec::with_capacity(CHOICE_COUNT);
    chosen.push(correct);
    for &key in correct.related.choose_multiple(rng, RELATED_PICKS) {
        chosen.push(find(key)?);
    }

    let rest: Vec<&'static FallacyKind> = kinds
        .iter()
        .filter(|k| !chosen.iter().any(|c| c.key == k.key))
        .collect();
    let extra = rest
        .choose(rng)
        .copied()
        .ok_or(QuizError::TooFewKinds {
            needed: CHOICE_COUNT,
        })?;
    chosen.push(extra);

    chosen.shuffle(rng);
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FALLACY_KINDS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn four_distinct_choices_with_correct_and_two_related() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in FALLACY_KINDS {
            for _ in 0..20 {
                let choices = generate_choices(&mut rng, FALLACY_KINDS, kind.key).unwrap();
                assert_eq!(choices.len(), CHOICE_COUNT);
                let keys: HashSet<&str> = choices.iter().map(|c| c.key).collect();
                assert_eq!(keys.len(), CHOICE_COUNT, "duplicate choice for {}", kind.key);
                assert!(keys.contains(kind.key));
                let related = choices
                    .iter()
                    .filter(|c| kind.related.contains(&c.key))
                    .count();
                assert!(related >= RELATED_PICKS, "{} got {} related", kind.key, related);
            }
        }
    }

    #[test]
    fn correct_answer_position_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let positions: HashSet<usize> = (0..64)
            .map(|_| {
                generate_choices(&mut rng, FALLACY_KINDS, "straw")
                    .unwrap()
                    .iter()
                    .position(|c| c.key == "straw")
                    .unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }

    #[test]
    fn extra_choice_can_be_unrelated() {
        // hominem relates to exactly two kinds, so the fourth choice is always
        // outside its related list.
        let mut rng = StdRng::seed_from_u64(3);
        let choices = generate_choices(&mut rng, FALLACY_KINDS, "hominem").unwrap();
        let outside = choices
            .iter()
            .filter(|c| c.key != "hominem" && !["straw", "emotion"].contains(&c.key))
            .count();
        assert_eq!(outside, 1);
    }

    #[test]
    fn unknown_key_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_choices(&mut rng, FALLACY_KINDS, "red-herring").unwrap_err(),
            QuizError::UnknownFallacy("red-herring".into())
        );
    }

    #[test]
    fn too_few_related_errors() {
        static LONELY: &[FallacyKind] = &[FallacyKind {
            key: "solo",
            full_name: "Solo",
            arg_count: 1,
            related: &["other"],
            elements: "",
        }];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_choices(&mut rng, LONELY, "solo"),
            Err(QuizError::TooFewRelated { found: 1, .. })
        ));
    }
}
