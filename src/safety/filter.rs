//! Safety verdict computation over topic and generated content.

use super::keywords::{CATEGORY_KEYWORDS, DANGEROUS_THEMES, HARMFUL_KEYWORDS};

/// The structured result of a safety check.
///
/// Derived and stateless; recomputed per check, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    /// True only if no category, harmful keyword or dangerous theme triggered.
    pub is_safe: bool,
    pub violent_content: bool,
    pub sexual_content: bool,
    pub hate_speech: bool,
    pub self_harm: bool,
    pub illegal_activities: bool,
}

impl Verdict {
    fn set_category(&mut self, name: &str) {
        match name {
            "violent_content" => self.violent_content = true,
            "sexual_content" => self.sexual_content = true,
            "hate_speech" => self.hate_speech = true,
            "self_harm" => self.self_harm = true,
            "illegal_activities" => self.illegal_activities = true,
            _ => {}
        }
    }

    /// Human-readable labels for every triggered category.
    pub fn triggered_categories(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.violent_content {
            labels.push("Violent content");
        }
        if self.sexual_content {
            labels.push("Inappropriate sexual content");
        }
        if self.hate_speech {
            labels.push("Hate speech");
        }
        if self.self_harm {
            labels.push("Self-harm content");
        }
        if self.illegal_activities {
            labels.push("Illegal activities");
        }
        labels
    }
}

/// Classifies `topic` and `content` into safety categories.
///
/// Matching is substring-based over the case-folded concatenation of both
/// inputs. The dangerous-theme check runs over the topic alone and in the
/// reverse direction (topic contained in phrase); it is skipped for an
/// empty topic, which would otherwise trivially match every phrase.
///
/// Never fails for any string input, including empty strings.
pub fn validate_content(topic: &str, content: &str) -> Verdict {
    let mut verdict = Verdict {
        is_safe: true,
        ..Verdict::default()
    };

    let check_text = format!("{topic} {content}").to_lowercase();

    for (category, words) in CATEGORY_KEYWORDS {
        if words.iter().any(|w| check_text.contains(w)) {
            verdict.set_category(category);
            verdict.is_safe = false;
        }
    }

    if HARMFUL_KEYWORDS.iter().any(|w| check_text.contains(w)) {
        verdict.is_safe = false;
    }

    let topic_lower = topic.to_lowercase();
    if !topic_lower.is_empty() && DANGEROUS_THEMES.iter().any(|t| t.contains(&*topic_lower)) {
        verdict.is_safe = false;
    }

    verdict
}

/// A verdict paired with a displayable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyReport {
    pub is_safe: bool,
    /// Present only for unsafe verdicts; lists every triggered category.
    pub message: Option<String>,
}

/// Runs [`validate_content`] and composes a user-facing message when the
/// verdict is unsafe.
pub fn safety_check(topic: &str, content: &str) -> SafetyReport {
    let verdict = validate_content(topic, content);

    if verdict.is_safe {
        return SafetyReport {
            is_safe: true,
            message: None,
        };
    }

    let mut message = String::from("Potentially dangerous content detected:\n");
    for label in verdict.triggered_categories() {
        message.push_str("- ");
        message.push_str(label);
        message.push('\n');
    }
    message.push_str("\nPlease modify your request to ensure safe and ethical content.");

    SafetyReport {
        is_safe: false,
        message: Some(message),
    }
}
