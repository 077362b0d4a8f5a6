//! Word lists and puzzle catalog
//!
//! Embedded lists compiled into the binary, plus loaders for plain-text files.

pub mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{THEMES, Theme, theme_by_id};
pub use embedded::{ANSWERS, FALLBACK_WORDS};
