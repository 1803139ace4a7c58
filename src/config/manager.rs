use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::ui::Style;

/// Default settings in the `[cgen]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CgenConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Default platform name (e.g. "Blog").
    pub platform: Option<String>,
    /// Default tone key or free-form tone.
    pub tone: Option<String>,
    /// Default output language code.
    pub lang: Option<String>,
}

/// Configuration for a generation provider.
///
/// Any OpenAI-compatible endpoint works: a local model server or a hosted
/// completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// A user-defined tone stored in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTone {
    /// Human-readable description.
    pub description: String,
    /// The phrase substituted for the `{tone}` placeholder.
    pub phrase: String,
}

/// Settings for the text-to-image backend in the `[image]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Base URL of the Stability-compatible API host.
    pub endpoint: String,
    /// Engine identifier (e.g. "stable-diffusion-v1-6").
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
}

fn default_engine() -> String {
    "stable-diffusion-v1-6".to_string()
}

impl ImageConfig {
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/cgen/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub cgen: CgenConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Custom tones keyed by name.
    #[serde(default)]
    pub tones: HashMap<String, CustomTone>,
    /// Text-to-image backend settings.
    #[serde(default)]
    pub image: Option<ImageConfig>,
}

/// Resolved provider configuration after merging CLI arguments and file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for generation.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves provider configuration by merging CLI options with the file.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if required configuration (provider, model) is missing
/// or if the specified provider is not found.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.cgen.provider.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'provider'\n\n\
                 Please provide it via:\n  \
                 - CLI option: cgen --provider <name>\n  \
                 - Config file: ~/.config/cgen/config.toml"
            )
        })?;

    let provider_config = config_file.providers.get(&provider_name).ok_or_else(|| {
        let available: Vec<_> = config_file.providers.keys().collect();
        if available.is_empty() {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 No providers configured. Add providers to ~/.config/cgen/config.toml"
            )
        } else {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 Available providers:\n  \
                 - {}\n\n\
                 Add providers to ~/.config/cgen/config.toml",
                available
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join("\n  - ")
            )
        }
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.cgen.model.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'model'\n\n\
                 Please provide it via:\n  \
                 - CLI option: cgen --model <name>\n  \
                 - Config file: ~/.config/cgen/config.toml"
            )
        })?;

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        eprintln!(
            "{} Model '{}' is not in the configured models list for '{}'\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/cgen/config.toml"
        );
    }

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider_config.endpoint.clone(),
        model,
        api_key,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/cgen/config.toml`
    /// or `~/.config/cgen/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn create_test_config() -> ConfigFile {
        let mut providers = HashMap::new();
        providers.insert(
            "ollama".to_string(),
            ProviderConfig {
                endpoint: "http://localhost:11434".to_string(),
                api_key: None,
                api_key_env: None,
                models: vec!["mistral".to_string(), "llama2".to_string()],
            },
        );
        providers.insert(
            "hosted".to_string(),
            ProviderConfig {
                endpoint: "https://api.example.com".to_string(),
                api_key: None,
                api_key_env: Some("CGEN_TEST_NONEXISTENT_API_KEY".to_string()),
                models: vec!["gpt-4o".to_string()],
            },
        );

        ConfigFile {
            cgen: CgenConfig {
                provider: Some("ollama".to_string()),
                model: Some("mistral".to_string()),
                platform: Some("Blog".to_string()),
                tone: Some("professional".to_string()),
                lang: None,
            },
            providers,
            tones: HashMap::new(),
            image: None,
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let config = create_test_config();

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.cgen.provider, Some("ollama".to_string()));
        assert_eq!(loaded.cgen.model, Some("mistral".to_string()));
        assert_eq!(loaded.cgen.platform, Some("Blog".to_string()));
        assert!(loaded.providers.contains_key("ollama"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
    }

    #[test]
    fn test_save_and_load_custom_tones_and_image() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut config = create_test_config();
        config.tones.insert(
            "playful".to_string(),
            CustomTone {
                description: "Light and playful".to_string(),
                phrase: "playful and light-hearted".to_string(),
            },
        );
        config.image = Some(ImageConfig {
            endpoint: "https://api.stability.ai".to_string(),
            engine: "stable-diffusion-v1-6".to_string(),
            api_key: None,
            api_key_env: Some("STABILITY_API_KEY".to_string()),
        });

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert!(loaded.tones.contains_key("playful"));
        assert_eq!(
            loaded.image.map(|i| i.engine),
            Some("stable-diffusion-v1-6".to_string())
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_provider_get_api_key_from_env() {
        // SAFETY: test-specific env var, serialized with other env tests
        unsafe {
            std::env::set_var("CGEN_TEST_API_KEY", "test-key-value");
        }

        let provider = ProviderConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("CGEN_TEST_API_KEY".to_string()),
            models: vec![],
        };

        assert_eq!(provider.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: cleanup test env var
        unsafe {
            std::env::remove_var("CGEN_TEST_API_KEY");
        }
    }

    #[test]
    fn test_provider_get_api_key_fallback() {
        let provider = ProviderConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("CGEN_TEST_UNSET_KEY".to_string()),
            models: vec![],
        };

        assert_eq!(provider.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_provider_requires_api_key() {
        let local = ProviderConfig {
            endpoint: "http://localhost:11434".to_string(),
            api_key: None,
            api_key_env: None,
            models: vec![],
        };
        assert!(!local.requires_api_key());

        let hosted = ProviderConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: None,
            api_key_env: Some("API_KEY".to_string()),
            models: vec![],
        };
        assert!(hosted.requires_api_key());
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let config = create_test_config();
        let options = ResolveOptions {
            provider: None,
            model: Some("llama2".to_string()),
        };

        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.provider_name, "ollama");
        assert_eq!(resolved.model, "llama2");
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let config = create_test_config();
        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

        assert_eq!(resolved.provider_name, "ollama");
        assert_eq!(resolved.endpoint, "http://localhost:11434");
        assert_eq!(resolved.model, "mistral");
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_resolve_config_missing_provider() {
        let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("provider"));
    }

    #[test]
    fn test_resolve_config_provider_not_found() {
        let config = create_test_config();
        let options = ResolveOptions {
            provider: Some("nonexistent".to_string()),
            model: None,
        };

        let result = resolve_config(&options, &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_resolve_config_missing_model() {
        let mut config = create_test_config();
        config.cgen.model = None;

        let result = resolve_config(&ResolveOptions::default(), &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("model"));
    }

    #[test]
    fn test_resolve_config_api_key_required_but_missing() {
        let config = create_test_config();
        let options = ResolveOptions {
            provider: Some("hosted".to_string()),
            model: Some("gpt-4o".to_string()),
        };

        let result = resolve_config(&options, &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }
}
