//! Safety check command handler.

use anyhow::Result;

use crate::input::InputReader;
use crate::safety::{safety_check, validate_content};
use crate::ui::Style;

pub struct CheckOptions {
    pub topic: Option<String>,
    pub file: Option<String>,
}

/// Runs the content safety filter and prints the verdict.
///
/// Content comes from the file if given, otherwise from stdin when no
/// topic was supplied. Exits nonzero on an unsafe verdict so the command
/// can gate scripts.
pub fn run_check(options: &CheckOptions) -> Result<()> {
    let content = match (&options.file, &options.topic) {
        (Some(file), _) => InputReader::read(Some(file))?,
        (None, Some(_)) => String::new(),
        (None, None) => InputReader::read(None)?,
    };
    let topic = options.topic.as_deref().unwrap_or_default();

    let verdict = validate_content(topic, &content);

    println!("{}", Style::header("Safety verdict"));
    print_category("violent content", verdict.violent_content);
    print_category("sexual content", verdict.sexual_content);
    print_category("hate speech", verdict.hate_speech);
    print_category("self-harm", verdict.self_harm);
    print_category("illegal activities", verdict.illegal_activities);
    println!();

    if verdict.is_safe {
        println!("{}", Style::success("Content is safe."));
        return Ok(());
    }

    let report = safety_check(topic, &content);
    eprintln!("{}", Style::error(report.message.unwrap_or_default()));
    std::process::exit(1);
}

fn print_category(label: &str, triggered: bool) {
    let marker = if triggered {
        Style::error("flagged")
    } else {
        Style::secondary("clear")
    };
    println!("  {}  {marker}", Style::label(format!("{label:18}")));
}
