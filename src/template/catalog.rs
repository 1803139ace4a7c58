//! The static catalog of platform templates.

// The {topic}/{audience}/{tone} markers are placeholders for string
// replacement, not format arguments.
#![allow(clippy::literal_string_with_formatting_args)]

/// A prompt template for one content platform.
///
/// Templates are immutable and looked up by exact name. Every name in
/// `required_params` has a matching `{name}` placeholder in `body`.
#[derive(Debug, Clone, Copy)]
pub struct PlatformTemplate {
    /// Unique platform name (e.g. "Blog").
    pub name: &'static str,
    /// Template body with `{name}` placeholders.
    pub body: &'static str,
    /// Placeholder names that must be supplied before rendering.
    pub required_params: &'static [&'static str],
}

/// All registered platform templates, in registration order.
pub const PLATFORMS: &[PlatformTemplate] = &[
    PlatformTemplate {
        name: "Blog",
        body: "Write a professional blog article about {topic}.\n\
               Audience: {audience}\n\
               Tone: {tone}\n\
               \n\
               Required structure:\n\
               1. Catchy, SEO-friendly title\n\
               2. Engaging introduction (2-3 paragraphs)\n\
               3. Main content (3-4 major sections)\n\
               4. Strong conclusion\n\
               5. Call to action\n\
               \n\
               Additional requirements:\n\
               - Adapt the language to the specified audience\n\
               - Include relevant subheadings\n\
               - Approximate length: 800-1000 words\n\
               - Include 2-3 bullet points where relevant",
        required_params: &["topic", "audience", "tone"],
    },
    PlatformTemplate {
        name: "Twitter",
        body: "Write an effective Twitter thread about {topic}.\n\
               Audience: {audience}\n\
               Tone: {tone}\n\
               \n\
               Structure:\n\
               1. Engaging lead tweet\n\
               2. 4-5 tweets developing the idea\n\
               3. Final tweet with a call to action\n\
               \n\
               Requirements:\n\
               - Maximum 280 characters per tweet\n\
               - Use relevant hashtags (at most 2-3 per tweet)\n\
               - Include appropriate emojis\n\
               - Keep the thread coherent and progressive",
        required_params: &["topic", "audience", "tone"],
    },
    PlatformTemplate {
        name: "LinkedIn",
        body: "Write a professional LinkedIn post about {topic}.\n\
               Audience: {audience}\n\
               Tone: {tone}\n\
               \n\
               Structure:\n\
               1. Striking first paragraph\n\
               2. Development of the main idea\n\
               3. Personal experience or case study\n\
               4. Conclusion with a call to action\n\
               \n\
               Requirements:\n\
               - Keep the tone professional but approachable\n\
               - Use spacing for readability\n\
               - Use professional emojis strategically\n\
               - Add 3-5 relevant hashtags at the end",
        required_params: &["topic", "audience", "tone"],
    },
    PlatformTemplate {
        name: "Instagram",
        body: "Write an Instagram post about {topic}.\n\
               Audience: {audience}\n\
               Tone: {tone}\n\
               \n\
               Structure:\n\
               1. Attention-grabbing first paragraph\n\
               2. Concise development of the main message\n\
               3. Engagement-focused call to action\n\
               4. Relevant hashtags\n\
               \n\
               Requirements:\n\
               - Concise, visually spaced text\n\
               - Relevant emojis\n\
               - 8-10 strategic hashtags\n\
               - Conversational, authentic tone",
        required_params: &["topic", "audience", "tone"],
    },
];

/// Returns all registered platform names in registration order.
pub fn list_platforms() -> Vec<&'static str> {
    PLATFORMS.iter().map(|t| t.name).collect()
}

/// Looks up a platform template by exact (case-sensitive) name.
///
/// Returns `None` for unregistered names; there is no fallback template.
pub fn get_template(name: &str) -> Option<&'static PlatformTemplate> {
    PLATFORMS.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_platforms_registered() {
        assert_eq!(
            list_platforms(),
            vec!["Blog", "Twitter", "LinkedIn", "Instagram"]
        );
    }

    #[test]
    fn test_get_template_exists() {
        for name in list_platforms() {
            assert!(get_template(name).is_some());
        }
    }

    #[test]
    fn test_get_template_not_exists() {
        assert!(get_template("NonexistentPlatform").is_none());
    }

    #[test]
    fn test_get_template_case_sensitive() {
        assert!(get_template("blog").is_none());
        assert!(get_template("TWITTER").is_none());
    }

    #[test]
    fn test_required_params_have_placeholders() {
        for template in PLATFORMS {
            assert!(!template.required_params.is_empty());
            for param in template.required_params {
                assert!(
                    template.body.contains(&format!("{{{param}}}")),
                    "template '{}' is missing placeholder for '{param}'",
                    template.name
                );
            }
        }
    }
}
