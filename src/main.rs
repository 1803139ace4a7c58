use anyhow::Result;
use clap::Parser;

use cgen_cli::cli::commands::{
    check, configure, generate, image, platforms, profiles, providers, tones,
};
use cgen_cli::cli::{Args, Command, ProfilesCommand};
use cgen_cli::language::print_languages;
use cgen_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match args.command {
        Some(Command::Platforms { name }) => {
            platforms::print_platforms(name.as_deref())?;
        }
        Some(Command::Tones) => {
            tones::list_tones()?;
        }
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Check { file, topic }) => {
            let options = check::CheckOptions { topic, file };
            check::run_check(&options)?;
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Profiles { command }) => match command {
            ProfilesCommand::List => profiles::list_profiles()?,
            ProfilesCommand::Show { name } => profiles::show_profile(&name)?,
            ProfilesCommand::Add => profiles::add_profile()?,
            ProfilesCommand::Remove { name } => profiles::remove_profile(&name)?,
        },
        Some(Command::Image {
            prompt,
            negative,
            width,
            height,
            out,
        }) => {
            let options = image::ImageOptions {
                prompt,
                negative,
                width,
                height,
                out,
            };
            image::run_image(options).await?;
        }
        Some(Command::Configure) => {
            configure::run_configure()?;
        }
        None => {
            let options = generate::GenerateOptions {
                platform: args.platform,
                topic: args.topic,
                audience: args.audience,
                tone: args.tone,
                lang: args.lang,
                profile: args.profile,
                provider: args.provider,
                model: args.model,
                no_cache: args.no_cache,
                write: args.write,
            };
            generate::run_generate(options).await?;
        }
    }

    Ok(())
}
