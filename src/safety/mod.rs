//! Keyword-based content safety filter.
//!
//! A deliberately crude, zero-latency pre- and post-filter for generation
//! requests. It matches static keyword lists by substring and is
//! over-inclusive on purpose; it is not a moderation model and never fails
//! for any string input.

mod filter;
mod keywords;

pub use filter::{SafetyReport, Verdict, safety_check, validate_content};
pub use keywords::{CATEGORY_KEYWORDS, DANGEROUS_THEMES, HARMFUL_KEYWORDS};
