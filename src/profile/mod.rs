//! Company profile persistence and prompt context.
//!
//! Profiles are stored as one JSON file per profile under
//! `<config>/cgen/profiles/` and can be attached to a generation to append
//! brand context to the rendered prompt.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// A company profile used to brand generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub tone_of_voice: String,
    pub target_audience: Vec<String>,
    pub key_values: Vec<String>,
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl CompanyProfile {
    /// Renders the brand-context block appended to a generation prompt.
    pub fn prompt_context(&self) -> String {
        format!(
            "Company Context:\n\
             - Company Name: {}\n\
             - Description: {}\n\
             - Industry: {}\n\
             - Brand Voice: {}\n\
             - Target Audience: {}\n\
             - Key Values: {}\n\
             - Preferred Hashtags: {}",
            self.name,
            self.description,
            self.industry,
            self.tone_of_voice,
            self.target_audience.join(", "),
            self.key_values.join(", "),
            self.hashtags.join(" "),
        )
    }
}

/// Manages company profiles on disk.
pub struct ProfileManager {
    profiles_dir: PathBuf,
}

impl ProfileManager {
    /// Creates a manager over the default profiles directory.
    pub fn new() -> Result<Self> {
        Self::with_dir(paths::config_dir().join("profiles"))
    }

    /// Creates a manager over an explicit directory.
    pub fn with_dir(profiles_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&profiles_dir).with_context(|| {
            format!(
                "Failed to create profiles directory: {}",
                profiles_dir.display()
            )
        })?;
        Ok(Self { profiles_dir })
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir.join(format!("{name}.json"))
    }

    pub fn save(&self, profile: &CompanyProfile) -> Result<()> {
        let path = self.profile_path(&profile.name);
        let contents =
            serde_json::to_string_pretty(profile).context("Failed to serialize profile")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write profile: {}", path.display()))?;
        Ok(())
    }

    /// Loads a profile by name; `None` if no such profile exists.
    pub fn load(&self, name: &str) -> Result<Option<CompanyProfile>> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let profile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))?;
        Ok(Some(profile))
    }

    pub fn remove(&self, name: &str) -> Result<bool> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove profile: {}", path.display()))?;
        Ok(true)
    }

    /// Returns all stored profile names, sorted alphabetically.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.profiles_dir).with_context(|| {
            format!(
                "Failed to read profiles directory: {}",
                self.profiles_dir.display()
            )
        })? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_profile() -> CompanyProfile {
        CompanyProfile {
            name: "Acme".to_string(),
            description: "Rocket-powered gadgets".to_string(),
            industry: "Hardware".to_string(),
            tone_of_voice: "Bold".to_string(),
            target_audience: vec!["engineers".to_string(), "makers".to_string()],
            key_values: vec!["speed".to_string(), "reliability".to_string()],
            hashtags: vec!["#acme".to_string(), "#rockets".to_string()],
            website: Some("https://acme.example".to_string()),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::with_dir(temp_dir.path().join("profiles")).unwrap();

        let profile = test_profile();
        manager.save(&profile).unwrap();

        let loaded = manager.load("Acme").unwrap();
        assert_eq!(loaded, Some(profile));
    }

    #[test]
    fn test_load_missing_profile() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::with_dir(temp_dir.path().join("profiles")).unwrap();

        assert_eq!(manager.load("Nobody").unwrap(), None);
    }

    #[test]
    fn test_list_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::with_dir(temp_dir.path().join("profiles")).unwrap();

        let mut profile = test_profile();
        profile.name = "Zeta".to_string();
        manager.save(&profile).unwrap();
        profile.name = "Alpha".to_string();
        manager.save(&profile).unwrap();

        assert_eq!(manager.list().unwrap(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::with_dir(temp_dir.path().join("profiles")).unwrap();

        manager.save(&test_profile()).unwrap();
        assert!(manager.remove("Acme").unwrap());
        assert!(!manager.remove("Acme").unwrap());
        assert_eq!(manager.load("Acme").unwrap(), None);
    }

    #[test]
    fn test_prompt_context_format() {
        let context = test_profile().prompt_context();
        assert!(context.contains("Company Context:"));
        assert!(context.contains("- Company Name: Acme"));
        assert!(context.contains("- Target Audience: engineers, makers"));
        assert!(context.contains("- Preferred Hashtags: #acme #rockets"));
    }
}
