//! Tone management for content generation.
//!
//! Preset tones cover the common cases; users can define custom tones in
//! the config file, and any other string passes through as a free-form
//! tone description.

use std::collections::HashMap;

use crate::config::CustomTone;

/// A preset tone (hardcoded, not modifiable by users).
#[derive(Debug, Clone)]
pub struct PresetTone {
    /// The tone key (e.g. "casual", "professional").
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// The phrase substituted for the `{tone}` placeholder.
    pub phrase: &'static str,
}

/// All available preset tones.
pub const PRESETS: &[PresetTone] = &[
    PresetTone {
        key: "professional",
        description: "Polished, business-appropriate",
        phrase: "professional and authoritative",
    },
    PresetTone {
        key: "casual",
        description: "Relaxed, conversational",
        phrase: "casual and conversational",
    },
    PresetTone {
        key: "educational",
        description: "Clear, instructive",
        phrase: "educational and informative",
    },
    PresetTone {
        key: "inspirational",
        description: "Uplifting, motivating",
        phrase: "inspirational and motivating",
    },
    PresetTone {
        key: "humorous",
        description: "Witty, playful",
        phrase: "humorous and witty",
    },
];

/// A resolved tone ready for template substitution.
#[derive(Debug, Clone)]
pub enum ResolvedTone {
    /// A preset tone.
    Preset(&'static PresetTone),
    /// A custom user-defined tone from the config file.
    Custom { key: String, phrase: String },
    /// A free-form tone string used as-is.
    FreeForm(String),
}

impl ResolvedTone {
    /// Returns the phrase substituted for the `{tone}` placeholder.
    pub fn phrase(&self) -> &str {
        match self {
            Self::Preset(preset) => preset.phrase,
            Self::Custom { phrase, .. } => phrase,
            Self::FreeForm(text) => text,
        }
    }
}

/// Looks up a preset tone by key.
pub fn get_preset(key: &str) -> Option<&'static PresetTone> {
    PRESETS.iter().find(|p| p.key == key)
}

/// Resolves a tone string to a [`ResolvedTone`].
///
/// Presets win over custom tones; anything else passes through as
/// free-form text, so `--tone "dry and sarcastic"` works without setup.
#[allow(clippy::implicit_hasher)]
pub fn resolve_tone(key: &str, custom_tones: &HashMap<String, CustomTone>) -> ResolvedTone {
    if let Some(preset) = get_preset(key) {
        return ResolvedTone::Preset(preset);
    }

    if let Some(custom) = custom_tones.get(key) {
        return ResolvedTone::Custom {
            key: key.to_string(),
            phrase: custom.phrase.clone(),
        };
    }

    ResolvedTone::FreeForm(key.to_string())
}

/// Returns custom tone keys sorted alphabetically.
#[allow(clippy::implicit_hasher)]
pub fn sorted_custom_keys(tones: &HashMap<String, CustomTone>) -> Vec<&String> {
    let mut keys: Vec<_> = tones.keys().collect();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_tones() -> HashMap<String, CustomTone> {
        let mut tones = HashMap::new();
        tones.insert(
            "playful".to_string(),
            CustomTone {
                description: "Light and playful".to_string(),
                phrase: "playful and light-hearted".to_string(),
            },
        );
        tones
    }

    #[test]
    fn test_preset_count() {
        assert_eq!(PRESETS.len(), 5);
    }

    #[test]
    fn test_get_preset_exists() {
        assert!(get_preset("professional").is_some());
        assert!(get_preset("humorous").is_some());
    }

    #[test]
    fn test_get_preset_not_exists() {
        assert!(get_preset("nonexistent").is_none());
    }

    #[test]
    fn test_resolve_preset() {
        let resolved = resolve_tone("casual", &HashMap::new());
        assert_eq!(resolved.phrase(), "casual and conversational");
    }

    #[test]
    fn test_resolve_custom() {
        let resolved = resolve_tone("playful", &custom_tones());
        assert_eq!(resolved.phrase(), "playful and light-hearted");
    }

    #[test]
    fn test_preset_wins_over_custom() {
        let mut tones = custom_tones();
        tones.insert(
            "casual".to_string(),
            CustomTone {
                description: "Shadowing a preset".to_string(),
                phrase: "should not be used".to_string(),
            },
        );

        let resolved = resolve_tone("casual", &tones);
        assert_eq!(resolved.phrase(), "casual and conversational");
    }

    #[test]
    fn test_resolve_free_form_passthrough() {
        let resolved = resolve_tone("dry and sarcastic", &HashMap::new());
        assert_eq!(resolved.phrase(), "dry and sarcastic");
    }

    #[test]
    fn test_sorted_custom_keys() {
        let mut tones = custom_tones();
        tones.insert(
            "academic".to_string(),
            CustomTone {
                description: "a".to_string(),
                phrase: "a".to_string(),
            },
        );

        let keys = sorted_custom_keys(&tones);
        assert_eq!(keys, vec!["academic", "playful"]);
    }
}
