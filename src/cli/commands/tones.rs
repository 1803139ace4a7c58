//! Tone listing command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::tone::{PRESETS, sorted_custom_keys};
use crate::ui::Style;

/// Lists all available tones (presets and custom).
///
/// Free-form tone strings are always accepted by `--tone`; this list is
/// the set with curated phrasing.
pub fn list_tones() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    println!("{}", Style::header("Preset tones"));
    for preset in PRESETS {
        println!(
            "  {}  {}",
            Style::value(format!("{:14}", preset.key)),
            Style::secondary(preset.description)
        );
    }

    if !config.tones.is_empty() {
        println!();
        println!("{}", Style::header("Custom tones"));
        for key in sorted_custom_keys(&config.tones) {
            let description = config.tones.get(key).map_or("", |t| t.description.as_str());
            println!(
                "  {}  {}",
                Style::value(format!("{key:14}")),
                Style::secondary(description)
            );
        }
    }

    println!();
    println!(
        "{}",
        Style::hint("Any other string passed to --tone is used as-is.")
    );

    Ok(())
}
