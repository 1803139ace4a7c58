use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cgen")]
#[command(about = "AI-powered marketing content generation CLI")]
#[command(version)]
pub struct Args {
    /// Platform to generate for (Blog, Twitter, LinkedIn, Instagram)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Topic to generate content about
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Target audience description
    #[arg(short, long)]
    pub audience: Option<String>,

    /// Tone key (preset/custom) or free-form tone description
    #[arg(long)]
    pub tone: Option<String>,

    /// Output language code (en, es, fr, it)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Company profile to append as brand context
    #[arg(long)]
    pub profile: Option<String>,

    /// Provider name
    #[arg(long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Disable the generation cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Write the generated content to a file as well as stdout
    #[arg(short, long)]
    pub write: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered platforms, or show one template in detail
    Platforms {
        /// Platform name to show in detail
        name: Option<String>,
    },
    /// List available tones (presets and custom)
    Tones,
    /// List supported output languages
    Languages,
    /// Run the content safety filter over a topic and/or text
    Check {
        /// File to check (reads from stdin if neither file nor topic given)
        file: Option<String>,

        /// Topic to check
        #[arg(short, long)]
        topic: Option<String>,
    },
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Manage company profiles
    Profiles {
        #[command(subcommand)]
        command: ProfilesCommand,
    },
    /// Generate an image via the configured text-to-image backend
    Image {
        /// Image description
        prompt: String,

        /// Negative prompt (weighted against)
        #[arg(long)]
        negative: Option<String>,

        /// Image width in pixels
        #[arg(long, default_value_t = 512)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 512)]
        height: u32,

        /// Output file path
        #[arg(short, long, default_value = "image.png")]
        out: String,
    },
    /// Configure cgen default settings
    Configure,
}

#[derive(Subcommand, Debug)]
pub enum ProfilesCommand {
    /// List stored profiles
    List,
    /// Show a profile and its prompt context
    Show { name: String },
    /// Create a profile interactively
    Add,
    /// Remove a stored profile
    Remove { name: String },
}
