//! Subcommand implementations.

/// Safety check command handler.
pub mod check;

/// Configure command handler.
pub mod configure;

/// Content generation command handler.
pub mod generate;

/// Image generation command handler.
pub mod image;

/// Platform listing command handler.
pub mod platforms;

/// Profile management command handler.
pub mod profiles;

/// Provider listing command handler.
pub mod providers;

/// Tone listing command handler.
pub mod tones;
