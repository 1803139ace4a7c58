//! Static keyword lists for the safety filter.
//!
//! All matching is done on case-folded text. The lists favor false
//! positives over false negatives given the severity of the categories.

/// Per-category keyword lists: (category name, keywords).
///
/// Category order is fixed; [`super::Verdict`] fields mirror it.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("violent_content", &["kill", "murder", "violence", "torture"]),
    ("sexual_content", &["rape", "sexual", "abuse"]),
    ("hate_speech", &["supremacy", "racist", "discrimination"]),
    ("self_harm", &["suicide", "self-harm", "die"]),
    (
        "illegal_activities",
        &["drugs", "weapon", "explosive", "trafficking"],
    ),
];

/// Cross-cutting keywords that force an unsafe verdict even when no
/// per-category list matched.
pub const HARMFUL_KEYWORDS: &[&str] = &[
    // Severe violent content
    "kill",
    "murder",
    "decapitate",
    "torture",
    "genocide",
    "terrorism",
    // Explicit sexual content
    "rape",
    "sexual abuse",
    "pedophilia",
    // Extreme hate speech
    "supremacy",
    "ethnic cleansing",
    // Severe self-harm
    "suicide methods",
    "ways to die",
    // Serious illegal activities
    "create explosives",
    "manufacture drugs",
    "human trafficking",
];

/// Dangerous theme phrases matched against the topic alone.
///
/// Note the test direction: the topic must be contained in the phrase,
/// not the phrase in the topic.
pub const DANGEROUS_THEMES: &[&str] = &[
    "bomb making",
    "weapon manufacturing",
    "detailed suicide instructions",
    "child exploitation",
];
