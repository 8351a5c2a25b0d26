// Fallacy kind table.
// Related keys feed the multiple-choice generator with plausible distractors.
use super::FallacyKind;

pub static FALLACY_KINDS: &[FallacyKind] = &[
    FallacyKind {
        key: "hominem",
        full_name: "Argumentum ad Hominem",
        arg_count: 1,
        related: &["straw", "emotion"],
        elements: "The insult or attack",
    },
    FallacyKind {
        key: "straw",
        full_name: "Straw Man",
        arg_count: 2,
        related: &["hominem", "emotion"],
        elements: "The actual argument and the strawman argument",
    },
    FallacyKind {
        key: "emotion",
        full_name: "Appeal to Emotion",
        arg_count: 1,
        related: &["hominem", "straw"],
        elements: "The appeal to emotion",
    },
    FallacyKind {
        key: "analogy",
        full_name: "Weak Analogy",
        arg_count: 2,
        related: &["slippery", "accident", "authority", "popularity", "hasty"],
        elements: "The statements being analogized",
    },
    FallacyKind {
        key: "hasty",
        full_name: "Hasty Generalization",
        arg_count: 2,
        related: &["accident", "analogy", "authority", "popularity"],
        elements: "The actual event and the generalization",
    },
    FallacyKind {
        key: "accident",
        full_name: "Accident",
        arg_count: 2,
        related: &["hasty", "analogy", "authority", "popularity"],
        elements: "The generalization and the exceptional case",
    },
    FallacyKind {
        key: "post",
        full_name: "Post Hoc Ergo Propter Hoc",
        arg_count: 2,
        related: &["cum", "slippery", "popularity", "authority"],
        elements: "The two events being compared",
    },
    FallacyKind {
        key: "cum",
        full_name: "Cum Hoc Ergo Propter Hoc",
        arg_count: 2,
        related: &["post", "slippery", "popularity", "authority"],
        elements: "The two events being compared",
    },
    FallacyKind {
        key: "slippery",
        full_name: "Slippery Slope",
        arg_count: 2,
        related: &["cum", "post", "accident", "authority", "popularity"],
        elements: "The initial event, and the slippery slope",
    },
    FallacyKind {
        key: "authority",
        full_name: "Fallacious Appeal to Authority",
        arg_count: 1,
        related: &["popularity", "cum", "post", "accident"],
        elements: "The false authority",
    },
    FallacyKind {
        key: "popularity",
        full_name: "Fallacious Appeal to Popularity",
        arg_count: 1,
        related: &["authority", "cum", "post", "accident"],
        elements: "The populace",
    },
    FallacyKind {
        key: "affirming",
        full_name: "Affirming the Consequent",
        arg_count: 2,
        related: &["denying", "undistributed", "composition", "division"],
        elements: "The affirmed consequent, and the concluded antecedent",
    },
    FallacyKind {
        key: "denying",
        full_name: "Denying the Antecedent",
        arg_count: 2,
        related: &["affirming", "undistributed", "composition", "division"],
        elements: "The denied antecedent, and the concluded consequent",
    },
    FallacyKind {
        key: "undistributed",
        full_name: "Undistributed Middle",
        arg_count: 2,
        related: &["denying", "affirming", "composition", "division"],
        elements: "The fallacious elements",
    },
    FallacyKind {
        key: "equivocation",
        full_name: "Equivocation",
        arg_count: 1,
        related: &["composition", "division"],
        elements: "The ambiguous phrase",
    },
    FallacyKind {
        key: "composition",
        full_name: "Composition",
        arg_count: 3,
        related: &["division", "equivocation"],
        elements: "The two addends, and the resultant",
    },
    FallacyKind {
        key: "division",
        full_name: "Division",
        arg_count: 3,
        related: &["composition", "equivocation"],
        elements: "The original, and the two resultants",
    },
];
