//! Card records as supplied by the catalog.
//!
//! A `Card` is immutable catalog data. The raw `card_type` and `faction`
//! strings are kept verbatim; `cards::classify` derives the semantic facts
//! (type tokens, domains, champion tag) from them.
//!
//! Every field defaults when missing so that a partial record still loads.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a catalog card (e.g. `"OGN-001"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Numeric card stats. Absent stats are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStats {
    pub cost: Option<i64>,
    pub might: Option<i64>,
    pub power: Option<i64>,
    pub energy: Option<i64>,
}

/// Art references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardArt {
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "fullURL")]
    pub full_url: String,
    pub artist: String,
}

/// Static card record.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, CardId};
///
/// let jinx = Card::new("OGN-001", "Jinx, Loose Cannon", "Legend")
///     .with_faction("Fury Chaos")
///     .with_tags(["Jinx", "Zaun"]);
///
/// assert_eq!(jinx.id, CardId::new("OGN-001"));
/// assert_eq!(jinx.faction, "Fury Chaos");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub id: CardId,

    pub name: String,

    /// Space separated type tokens ("Champion Unit", "Legend", ...).
    #[serde(rename = "type")]
    pub card_type: String,

    /// Space separated domain tokens ("Fury Chaos").
    pub faction: String,

    pub rarity: String,

    /// Free-form labels: champion names, regions, "Signature".
    pub tags: SmallVec<[String; 4]>,

    pub stats: CardStats,

    pub art: CardArt,
}

impl Card {
    /// Create a card with an id, name and raw type string.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            card_type: card_type.into(),
            ..Self::default()
        }
    }

    /// Set the raw faction string (builder pattern).
    #[must_use]
    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = faction.into();
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Replace the tags (builder pattern).
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the energy cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.stats.cost = Some(cost);
        self
    }

    /// Set might (builder pattern).
    #[must_use]
    pub fn with_might(mut self, might: i64) -> Self {
        self.stats.might = Some(might);
        self
    }

    /// Check whether the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check whether this card shares at least one tag with `other`.
    #[must_use]
    pub fn shares_tag_with(&self, other: &Card) -> bool {
        self.tags.iter().any(|t| other.has_tag(t))
    }
}
