//! Placeholder substitution and parameter validation.

use std::collections::HashMap;

/// Errors produced while rendering a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The body references a placeholder absent from the parameter map.
    MissingParameter { name: String },
    /// A `{` was opened but never closed.
    UnclosedPlaceholder,
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParameter { name } => {
                write!(f, "Missing value for template parameter '{name}'")
            }
            Self::UnclosedPlaceholder => {
                write!(f, "Template contains an unclosed '{{' placeholder")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Returns `true` only if every required name is present as a key.
///
/// Key presence only; empty values are allowed here. Callers that want
/// non-empty enforcement check separately.
#[allow(clippy::implicit_hasher)]
pub fn validate_params(required: &[&str], provided: &HashMap<String, String>) -> bool {
    required.iter().all(|name| provided.contains_key(*name))
}

/// Substitutes every `{name}` placeholder in `body` with the matching value.
///
/// `{{` and `}}` escape to literal braces. A placeholder without a value
/// fails with [`RenderError::MissingParameter`] rather than passing through
/// half-filled output.
#[allow(clippy::implicit_hasher)]
pub fn render(body: &str, provided: &HashMap<String, String>) -> Result<String, RenderError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(RenderError::UnclosedPlaceholder),
                    }
                }

                let value = provided
                    .get(&name)
                    .ok_or(RenderError::MissingParameter { name })?;
                out.push_str(value);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            c => out.push(c),
        }
    }

    Ok(out)
}
