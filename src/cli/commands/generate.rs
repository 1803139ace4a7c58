use anyhow::{Result, bail};
use futures_util::StreamExt;
use std::collections::HashMap;
use std::io::{self, Write};

use crate::cache::CacheManager;
use crate::config::{ConfigFile, ConfigManager, ResolveOptions, resolve_config};
use crate::generation::{DEFAULT_TEMPERATURE, GenerationClient, GenerationRequest};
use crate::profile::ProfileManager;
use crate::safety::safety_check;
use crate::template::{get_template, list_platforms, render, validate_params};
use crate::ui::Spinner;
use crate::{fs, info, language, tone, warn};

pub struct GenerateOptions {
    pub platform: Option<String>,
    pub topic: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub lang: Option<String>,
    pub profile: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub no_cache: bool,
    pub write: Option<String>,
}

pub async fn run_generate(options: GenerateOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();

    let prompt = build_prompt(&options, &config_file)?;

    let resolve_options = ResolveOptions {
        provider: options.provider.clone(),
        model: options.model.clone(),
    };
    let resolved = resolve_config(&resolve_options, &config_file)?;

    let request = GenerationRequest {
        prompt,
        model: resolved.model,
        endpoint: resolved.endpoint.clone(),
        temperature: DEFAULT_TEMPERATURE,
    };

    let cache_manager = CacheManager::new()?;

    if !options.no_cache
        && let Some(cached) = cache_manager.get(&request)?
    {
        info!("Using cached generation");
        print!("{cached}");
        io::stdout().flush()?;
        if let Some(path) = &options.write {
            fs::atomic_write(path, cached.as_bytes())?;
        }
        return Ok(());
    }

    let client = GenerationClient::new(resolved.endpoint, resolved.api_key);

    let spinner = Spinner::new("Generating...");

    let mut stream = client.generate_stream(&request).await?;
    let mut full_response = String::new();
    let mut first_chunk = true;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;

        if first_chunk {
            spinner.stop();
            first_chunk = false;
        }

        print!("{chunk}");
        io::stdout().flush()?;
        full_response.push_str(&chunk);
    }

    if first_chunk {
        spinner.stop();
    }

    if !full_response.is_empty() {
        println!();
    }

    // Post-generation check: the topic passed the pre-flight filter, but the
    // model may still have produced something the keyword lists catch.
    let topic = options.topic.as_deref().unwrap_or_default();
    let report = safety_check(topic, &full_response);
    if !report.is_safe {
        warn!("\n{}", report.message.unwrap_or_default());
        return Ok(());
    }

    if !options.no_cache && !full_response.is_empty() {
        cache_manager.put(&request, &full_response)?;
    }

    if let Some(path) = &options.write {
        fs::atomic_write(path, full_response.as_bytes())?;
    }

    Ok(())
}

/// Resolves the platform template, validates parameters, runs the
/// pre-flight safety check and renders the final prompt.
fn build_prompt(options: &GenerateOptions, config_file: &ConfigFile) -> Result<String> {
    let platform = options
        .platform
        .as_ref()
        .or(config_file.cgen.platform.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required option: '--platform'\n\n\
                 Available platforms: {}",
                list_platforms().join(", ")
            )
        })?;

    let template = get_template(platform).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown platform: '{platform}'\n\n\
             Available platforms: {}",
            list_platforms().join(", ")
        )
    })?;

    let topic = options.topic.as_deref().unwrap_or_default();
    if topic.trim().is_empty() {
        bail!("Missing required option: '--topic'");
    }

    let audience = options.audience.as_deref().unwrap_or_default();
    if audience.trim().is_empty() {
        bail!("Missing required option: '--audience'");
    }

    let tone_key = options
        .tone
        .as_ref()
        .or(config_file.cgen.tone.as_ref())
        .cloned()
        .unwrap_or_else(|| "professional".to_string());
    let resolved_tone = tone::resolve_tone(&tone_key, &config_file.tones);

    let mut params = HashMap::new();
    params.insert("topic".to_string(), topic.to_string());
    params.insert("audience".to_string(), audience.to_string());
    params.insert("tone".to_string(), resolved_tone.phrase().to_string());

    if !validate_params(template.required_params, &params) {
        let missing: Vec<_> = template
            .required_params
            .iter()
            .filter(|name| !params.contains_key(**name))
            .copied()
            .collect();
        bail!(
            "Template '{platform}' is missing required parameters: {}",
            missing.join(", ")
        );
    }

    let report = safety_check(topic, "");
    if !report.is_safe {
        bail!("{}", report.message.unwrap_or_default());
    }

    let mut prompt = render(template.body, &params)?;

    if let Some(profile_name) = &options.profile {
        let profiles = ProfileManager::new()?;
        let profile = profiles.load(profile_name)?.ok_or_else(|| {
            anyhow::anyhow!(
                "Profile '{profile_name}' not found\n\n\
                 Run 'cgen profiles list' to see stored profiles."
            )
        })?;
        prompt.push_str("\n\n");
        prompt.push_str(&profile.prompt_context());
    }

    if let Some(lang) = options.lang.as_ref().or(config_file.cgen.lang.as_ref()) {
        language::validate_language(lang)?;
        if let Some(name) = language::language_name(lang) {
            prompt.push_str(&format!("\n\nWrite the content in {name}."));
        }
    }

    Ok(prompt)
}
