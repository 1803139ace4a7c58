mod client;
mod sse;

pub use client::{DEFAULT_TEMPERATURE, GenerationClient, GenerationRequest};
