//! Builder session and its outer collaborators.
//!
//! - `BuilderSession`: owns the deck and drag state for one user session
//! - `Identity`: signed-in user gating the save action
//! - `DeckStore`: persistence collaborator returning a generated `DeckId`

pub mod builder;
pub mod store;

pub use builder::BuilderSession;
pub use store::{DeckId, DeckStore, Identity, MemoryDeckStore};
