//! # cgen - Marketing Content Generation CLI
//!
//! `cgen` generates short marketing content (blog posts, tweets, LinkedIn
//! and Instagram posts) by filling platform-specific prompt templates and
//! streaming the completion from an OpenAI-compatible API endpoint.
//! Every request passes through a keyword-based content safety filter
//! before and after generation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate a blog post
//! cgen --platform Blog --topic "sustainable fashion" \
//!      --audience "young professionals" --tone inspirational
//!
//! # Check a text against the safety filter
//! cat draft.md | cgen check
//!
//! # Generate a matching image
//! cgen image "a minimalist fashion studio"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/cgen/config.toml`:
//!
//! ```toml
//! [cgen]
//! provider = "ollama"
//! model = "mistral"
//! platform = "Blog"
//! tone = "professional"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["mistral", "llama2"]
//! ```

/// Generation cache management using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Generation client for OpenAI-compatible APIs.
pub mod generation;

/// Text-to-image client for Stability-compatible APIs.
pub mod image;

/// Input reading from files and stdin.
pub mod input;

/// Output language validation.
pub mod language;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Company profile persistence and prompt context.
pub mod profile;

/// Keyword-based content safety filter.
pub mod safety;

/// Platform prompt templates and placeholder rendering.
pub mod template;

/// Tone presets and custom tones.
pub mod tone;

/// Terminal UI components (spinner, colors).
pub mod ui;
