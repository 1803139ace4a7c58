//! Platform listing command handler.

use anyhow::Result;

use crate::template::{PLATFORMS, get_template};
use crate::ui::Style;

/// Prints registered platforms to stdout.
///
/// With a name, shows that platform's template body and required
/// parameters; otherwise lists all platforms.
pub fn print_platforms(specific_platform: Option<&str>) -> Result<()> {
    if let Some(name) = specific_platform {
        let template = get_template(name)
            .ok_or_else(|| anyhow::anyhow!("Platform '{name}' not found"))?;

        println!("{}", Style::header(format!("Platform: {}", template.name)));
        println!();
        println!(
            "  {}  {}",
            Style::label("required params:"),
            Style::value(template.required_params.join(", "))
        );
        println!();
        println!("{}", Style::label("Template:"));
        println!("{}", template.body);
        return Ok(());
    }

    println!("{}", Style::header("Registered platforms"));
    for template in PLATFORMS {
        println!(
            "  {}  {}",
            Style::value(format!("{:10}", template.name)),
            Style::secondary(format!(
                "params: {}",
                template.required_params.join(", ")
            ))
        );
    }

    Ok(())
}
