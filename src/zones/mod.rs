//! Deck zones: the four containers a card can be routed into.
//!
//! ## Key Types
//!
//! - `Zone`: Closed set {Legend, Main, Rune, Battlefield}
//! - `route`: Zone Router (card type tokens -> zone)
//! - `ZoneEntry`: `(Card, count)` pair
//! - `ZoneList`: Ordered entries unique by card id

pub mod entries;
pub mod zone;

pub use entries::{ZoneEntry, ZoneList};
pub use zone::{route, Zone};
