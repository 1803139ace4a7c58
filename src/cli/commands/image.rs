//! Image generation command handler.

use anyhow::{Result, bail};

use crate::config::ConfigManager;
use crate::image::{ImageClient, ImageRequest};
use crate::safety::safety_check;
use crate::ui::{Spinner, Style};
use crate::{fs, status};

pub struct ImageOptions {
    pub prompt: String,
    pub negative: Option<String>,
    pub width: u32,
    pub height: u32,
    pub out: String,
}

pub async fn run_image(options: ImageOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    let Some(image_config) = config.image else {
        bail!(
            "No image backend configured\n\n\
             Add an [image] section to ~/.config/cgen/config.toml:\n  \
             [image]\n  \
             endpoint = \"https://api.stability.ai\"\n  \
             api_key_env = \"STABILITY_API_KEY\""
        );
    };

    let report = safety_check(&options.prompt, "");
    if !report.is_safe {
        bail!("{}", report.message.unwrap_or_default());
    }

    let request = ImageRequest {
        prompt: options.prompt,
        negative_prompt: options.negative,
        width: options.width,
        height: options.height,
    };

    let api_key = image_config.get_api_key();
    let client = ImageClient::new(image_config.endpoint, image_config.engine, api_key);

    let spinner = Spinner::new("Generating image...");
    let image_bytes = client.generate(&request).await?;
    spinner.stop();

    fs::atomic_write(&options.out, &image_bytes)?;

    status!(
        "{} Image written to {}",
        Style::success("✓"),
        Style::value(&options.out)
    );

    Ok(())
}
