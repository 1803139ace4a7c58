//! Profile management command handler.

use anyhow::{Result, bail};
use inquire::Text;

use crate::profile::{CompanyProfile, ProfileManager};
use crate::ui::{Style, handle_prompt_cancellation};

/// Lists stored profile names.
pub fn list_profiles() -> Result<()> {
    let manager = ProfileManager::new()?;
    let names = manager.list()?;

    if names.is_empty() {
        println!("No profiles stored.");
        println!("Run 'cgen profiles add' to create one.");
        return Ok(());
    }

    println!("{}", Style::header("Stored profiles"));
    for name in names {
        println!("  {}", Style::value(name));
    }

    Ok(())
}

/// Shows a profile and the prompt context it contributes.
pub fn show_profile(name: &str) -> Result<()> {
    let manager = ProfileManager::new()?;
    let profile = manager
        .load(name)?
        .ok_or_else(|| anyhow::anyhow!("Profile '{name}' not found"))?;

    println!("{}", Style::header(format!("Profile: {}", profile.name)));
    println!();
    println!("  {}    {}", Style::label("industry"), profile.industry);
    println!("  {}       {}", Style::label("voice"), profile.tone_of_voice);
    if let Some(website) = &profile.website {
        println!("  {}     {}", Style::label("website"), website);
    }
    println!();
    println!("{}", Style::label("Prompt context:"));
    println!("{}", profile.prompt_context());

    Ok(())
}

/// Creates a profile interactively.
pub fn add_profile() -> Result<()> {
    handle_prompt_cancellation(add_profile_inner)
}

fn add_profile_inner() -> Result<()> {
    let manager = ProfileManager::new()?;

    let name = required_text("Company name:")?;
    if manager.load(&name)?.is_some() {
        bail!("Profile '{name}' already exists");
    }

    let description = required_text("Description:")?;
    let industry = required_text("Industry:")?;
    let tone_of_voice = required_text("Tone of voice:")?;
    let target_audience = comma_list("Target audience (comma-separated):")?;
    let key_values = comma_list("Key values (comma-separated):")?;
    let hashtags = comma_list("Hashtags (comma-separated):")?;
    let website = Text::new("Website (optional):").prompt()?;

    let profile = CompanyProfile {
        name,
        description,
        industry,
        tone_of_voice,
        target_audience,
        key_values,
        hashtags,
        website: if website.trim().is_empty() {
            None
        } else {
            Some(website.trim().to_string())
        },
    };

    manager.save(&profile)?;

    println!();
    println!(
        "{} Profile '{}' saved",
        Style::success("✓"),
        Style::value(&profile.name)
    );

    Ok(())
}

/// Removes a stored profile.
pub fn remove_profile(name: &str) -> Result<()> {
    let manager = ProfileManager::new()?;

    if manager.remove(name)? {
        println!("{} Profile '{name}' removed", Style::success("✓"));
        Ok(())
    } else {
        bail!("Profile '{name}' not found")
    }
}

fn required_text(prompt: &str) -> Result<String> {
    let value = Text::new(prompt).prompt()?;
    let value = value.trim().to_string();
    if value.is_empty() {
        bail!("This field is required");
    }
    Ok(value)
}

fn comma_list(prompt: &str) -> Result<Vec<String>> {
    let value = required_text(prompt)?;
    Ok(value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect())
}
