//! Output language validation for generated content.

use anyhow::Result;

use crate::ui::Style;

/// Supported output language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("it", "Italian"),
];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported output languages"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:4} {}", Style::code(code), Style::secondary(name));
    }
}

/// Returns the language name for a supported code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if language_name(lang).is_some() {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes: en, es, fr, it\n\
             Run 'cgen languages' to see all supported codes."
        )
    }
}
