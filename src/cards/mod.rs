//! Card records and the classifier that reads them.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier
//! - `Card`: Immutable catalog record (raw type/faction strings, tags, stats)
//! - `classify`: Pure functions deriving type tokens, domains, champion tag
//!   and the signature flag

pub mod classify;
pub mod definition;

pub use classify::{
    champion_tag, champion_tag_with, domain_tokens, has_type, is_champion_unit, is_in_domain,
    is_signature, type_tokens, Tokens, SIGNATURE_TAG,
};
pub use definition::{Card, CardArt, CardId, CardStats};
