//! Card catalog boundary.
//!
//! - `CardFilters`: filter descriptor (name/tag query, category, factions,
//!   rarity, type, stat ranges, sort)
//! - `CardCatalog`: collaborator trait the builder queries
//! - `InMemoryCatalog`: reference implementation

pub mod filter;
pub mod memory;

pub use filter::{parse_search_query, CardFilters, Category, SearchQuery, SortKey, SortOrder};
pub use memory::{CardCatalog, InMemoryCatalog};
