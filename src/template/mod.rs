//! Platform prompt templates and placeholder rendering.
//!
//! The catalog of platform templates is fixed at compile time. Rendering
//! and validation are pure functions over that catalog, so they can be
//! called from any number of concurrent tasks without coordination.

mod catalog;
mod render;

pub use catalog::{PLATFORMS, PlatformTemplate, get_template, list_platforms};
pub use render::{RenderError, render, validate_params};
