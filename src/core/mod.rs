//! Core types shared by every module: rule configuration and errors.

pub mod config;
pub mod error;

pub use config::{DeckRules, DEFAULT_NON_CHAMPION_TAGS};
pub use error::{CatalogError, SaveError};
