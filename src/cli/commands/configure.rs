//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{CgenConfig, ConfigFile, ConfigManager};
use crate::template::list_platforms;
use crate::tone::{PRESETS, sorted_custom_keys};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Interactively sets the default provider, model, platform and tone.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default();

    if config.providers.is_empty() {
        bail!(
            "No providers configured.\n\n\
             Add a provider to ~/.config/cgen/config.toml first, e.g.:\n  \
             [providers.ollama]\n  \
             endpoint = \"http://localhost:11434\"\n  \
             models = [\"mistral\"]"
        );
    }

    print_current_defaults(&config);

    let provider_names: Vec<String> = config.providers.keys().cloned().collect();
    let provider = select_with_default(
        "Default provider:",
        provider_names,
        config.cgen.provider.as_deref(),
    )?;

    let available_models = config
        .providers
        .get(&provider)
        .map(|p| p.models.clone())
        .unwrap_or_default();
    let model = if available_models.is_empty() {
        let current = config.cgen.model.clone().unwrap_or_default();
        Text::new("Default model:")
            .with_initial_value(&current)
            .prompt()?
    } else {
        select_with_default("Default model:", available_models, config.cgen.model.as_deref())?
    };

    let platform = select_with_default(
        "Default platform:",
        list_platforms().iter().map(ToString::to_string).collect(),
        config.cgen.platform.as_deref(),
    )?;

    let mut tone_keys: Vec<String> = PRESETS.iter().map(|p| p.key.to_string()).collect();
    tone_keys.extend(sorted_custom_keys(&config.tones).into_iter().cloned());
    let tone = select_with_default("Default tone:", tone_keys, config.cgen.tone.as_deref())?;

    config.cgen = CgenConfig {
        provider: Some(provider),
        model: Some(model),
        platform: Some(platform),
        tone: Some(tone),
        lang: config.cgen.lang,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    print_default("provider", config.cgen.provider.as_deref());
    print_default("model   ", config.cgen.model.as_deref());
    print_default("platform", config.cgen.platform.as_deref());
    print_default("tone    ", config.cgen.tone.as_deref());
    println!();
}

fn print_default(label: &str, value: Option<&str>) {
    println!(
        "  {}  {}",
        Style::label(label),
        value.map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
}

fn select_with_default(
    prompt: &str,
    options: Vec<String>,
    current: Option<&str>,
) -> Result<String> {
    let starting_cursor = current
        .and_then(|c| options.iter().position(|o| o == c))
        .unwrap_or(0);

    let selected = Select::new(prompt, options)
        .with_starting_cursor(starting_cursor)
        .prompt()?;

    Ok(selected)
}
