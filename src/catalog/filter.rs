//! Catalog filter descriptor.
//!
//! `CardFilters` is what the builder hands the catalog collaborator. The
//! `Category` taxonomy is defined through `zones::route`, so filtering the
//! browser by category shows exactly the cards `add_card` would put in that
//! zone.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{classify, Card};
use crate::zones::{route, Zone};

/// Browser category tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Legend,
    Battlefield,
    MainDeck,
    Rune,
}

impl Category {
    /// The zone cards of this category are routed to. `None` for `All`.
    #[must_use]
    pub const fn zone(self) -> Option<Zone> {
        match self {
            Category::All => None,
            Category::Legend => Some(Zone::Legend),
            Category::Battlefield => Some(Zone::Battlefield),
            Category::MainDeck => Some(Zone::Main),
            Category::Rune => Some(Zone::Rune),
        }
    }

    /// Check whether `card` belongs to this category.
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        self.zone().map_or(true, |z| route(card) == z)
    }
}

/// Sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Cost,
    Might,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter descriptor for a catalog query.
///
/// Empty fields do not filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardFilters {
    /// Case-insensitive name substring.
    pub name: Option<String>,
    /// Every tag must be present on the card.
    pub tags: Vec<String>,
    /// Card must have at least one of these domains.
    pub factions: Vec<String>,
    pub rarity: Option<String>,
    /// One of the card's type tokens.
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub category: Category,
    pub min_cost: Option<i64>,
    pub max_cost: Option<i64>,
    pub min_might: Option<i64>,
    pub max_might: Option<i64>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl CardFilters {
    /// Filters from a free-text search box (`Jinx "Signature"`).
    #[must_use]
    pub fn from_query(input: &str) -> Self {
        let query = parse_search_query(input);
        Self {
            name: (!query.name.is_empty()).then_some(query.name),
            tags: query.tags,
            ..Self::default()
        }
    }

    /// Restrict to a category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Restrict to cards touching any of `factions` (builder pattern).
    #[must_use]
    pub fn with_factions<I, S>(mut self, factions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.factions = factions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort (builder pattern).
    #[must_use]
    pub fn sorted_by(mut self, sort: SortKey, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    /// Check whether a card passes every filter.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        fn in_range(value: Option<i64>, min: Option<i64>, max: Option<i64>) -> bool {
            if min.is_none() && max.is_none() {
                return true;
            }
            value.is_some_and(|v| min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m))
        }

        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !card.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        let has_all_tags = self
            .tags
            .iter()
            .all(|wanted| card.tags.iter().any(|t| t.eq_ignore_ascii_case(wanted)));
        if !has_all_tags {
            return false;
        }

        if !self.factions.is_empty() {
            let domains = classify::domain_tokens(card);
            if !domains.iter().any(|d| self.factions.iter().any(|f| f == d)) {
                return false;
            }
        }

        if let Some(rarity) = &self.rarity {
            if &card.rarity != rarity {
                return false;
            }
        }

        if let Some(card_type) = &self.card_type {
            if !classify::has_type(card, card_type) {
                return false;
            }
        }

        self.category.matches(card)
            && in_range(card.stats.cost, self.min_cost, self.max_cost)
            && in_range(card.stats.might, self.min_might, self.max_might)
    }

    /// Order two cards by this descriptor's sort.
    ///
    /// `order` applies to the sort key only. Cards missing the sorted stat go
    /// last in either direction, and ties are broken by ascending name, then
    /// id.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        let by_name = || a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id));
        let stat = |c: &Card| match self.sort {
            SortKey::Name => None,
            SortKey::Cost => c.stats.cost,
            SortKey::Might => c.stats.might,
        };

        let primary = match self.sort {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Cost | SortKey::Might => match (stat(a), stat(b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (None, Some(_)) => return Ordering::Greater,
                (Some(_), None) => return Ordering::Less,
                (None, None) => Ordering::Equal,
            },
        };

        let primary = match self.order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        primary.then_with(by_name)
    }
}

/// Result of splitting a search box entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: String,
    pub tags: Vec<String>,
}

/// Split a search string into a name query and quoted tags.
///
/// Double-quoted segments become tags; the rest, with whitespace collapsed,
/// is the name. An unmatched or empty quote stays in the name.
///
/// ```
/// use deckforge::catalog::parse_search_query;
///
/// let q = parse_search_query(r#"  jinx  "Signature"   cannon "Zaun" "#);
/// assert_eq!(q.name, "jinx cannon");
/// assert_eq!(q.tags, vec!["Signature", "Zaun"]);
/// ```
#[must_use]
pub fn parse_search_query(input: &str) -> SearchQuery {
    let mut rest = String::with_capacity(input.len());
    let mut tags = Vec::new();
    let mut remaining = input;

    while let Some(open) = remaining.find('"') {
        let after = &remaining[open + 1..];
        match after.find('"') {
            Some(0) => {
                // `""` is not a tag; keep the first quote and retry from the second
                rest.push_str(&remaining[..=open]);
                remaining = after;
            }
            Some(close) => {
                rest.push_str(&remaining[..open]);
                rest.push(' ');
                let tag = after[..close].trim();
                if !tag.is_empty() {
                    tags.push(tag.to_string());
                }
                remaining = &after[close + 1..];
            }
            None => break,
        }
    }
    rest.push_str(remaining);

    SearchQuery {
        name: rest.split_whitespace().collect::<Vec<_>>().join(" "),
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, name: &str, card_type: &str) -> Card {
        Card::new(id, name, card_type)
    }

    #[test]
    fn test_parse_plain_name() {
        let q = parse_search_query("  Fiery   Duelist ");
        assert_eq!(q.name, "Fiery Duelist");
        assert!(q.tags.is_empty());
    }

    #[test]
    fn test_parse_tags_only() {
        let q = parse_search_query(r#""Jinx""Signature""#);
        assert_eq!(q.name, "");
        assert_eq!(q.tags, vec!["Jinx", "Signature"]);
    }

    #[test]
    fn test_parse_unmatched_quote() {
        let q = parse_search_query(r#"bolt "Zaun"#);
        assert_eq!(q.name, r#"bolt "Zaun"#);
        assert!(q.tags.is_empty());

        let q = parse_search_query(r#"a "" b"#);
        assert_eq!(q.name, r#"a "" b"#);
    }

    #[test]
    fn test_parse_blank_tag_dropped() {
        let q = parse_search_query(r#"x "   " y"#);
        assert_eq!(q.name, "x y");
        assert!(q.tags.is_empty());
    }

    #[test]
    fn test_category_mirrors_router() {
        let legend = card("1", "Jinx", "Legend");
        let rune = card("2", "Rune", "Rune");
        let bf = card("3", "Altar", "Battlefield");
        let unit = card("4", "Duelist", "Champion Unit");

        assert!(Category::All.matches(&legend));
        assert!(Category::Legend.matches(&legend));
        assert!(!Category::MainDeck.matches(&legend));
        assert!(Category::Rune.matches(&rune));
        assert!(Category::Battlefield.matches(&bf));
        assert!(Category::MainDeck.matches(&unit));
        assert!(!Category::MainDeck.matches(&rune));
    }

    #[test]
    fn test_matches_name_and_tags() {
        let jinx = card("1", "Jinx, Rebel", "Champion Unit").with_tags(["Jinx", "Zaun"]);

        assert!(CardFilters::from_query("jinx").matches(&jinx));
        assert!(CardFilters::from_query(r#"rebel "zaun""#).matches(&jinx));
        assert!(!CardFilters::from_query(r#""Zaun" "Noxus""#).matches(&jinx));
        assert!(!CardFilters::from_query("viktor").matches(&jinx));
    }

    #[test]
    fn test_matches_factions_any() {
        let dual = card("1", "X", "Unit").with_faction("Fury Chaos");
        let filters = CardFilters::default().with_factions(["Chaos", "Calm"]);
        assert!(filters.matches(&dual));

        let filters = CardFilters::default().with_factions(["Calm"]);
        assert!(!filters.matches(&dual));
    }

    #[test]
    fn test_matches_ranges_and_type() {
        let cheap = card("1", "Cheap", "Spell").with_cost(1);
        let costless = card("2", "Costless", "Spell");

        let filters = CardFilters {
            min_cost: Some(1),
            max_cost: Some(2),
            card_type: Some("Spell".into()),
            ..CardFilters::default()
        };
        assert!(filters.matches(&cheap));
        assert!(!filters.matches(&costless));

        let gear = CardFilters {
            card_type: Some("Gear".into()),
            ..CardFilters::default()
        };
        assert!(!gear.matches(&cheap));
    }

    #[test]
    fn test_compare_missing_stats_last() {
        let a = card("a", "A", "Unit").with_cost(3);
        let b = card("b", "B", "Unit").with_cost(1);
        let c = card("c", "C", "Unit");

        let asc = CardFilters::default().sorted_by(SortKey::Cost, SortOrder::Asc);
        let mut cards = vec![a.clone(), c.clone(), b.clone()];
        cards.sort_by(|x, y| asc.compare(x, y));
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        let desc = CardFilters::default().sorted_by(SortKey::Cost, SortOrder::Desc);
        cards.sort_by(|x, y| desc.compare(x, y));
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_descending_ties_break_by_ascending_name() {
        let x = card("x", "Zed", "Unit").with_cost(2);
        let y = card("y", "Amber", "Unit").with_cost(2);
        let z = card("z", "Mid", "Unit").with_cost(5);

        let desc = CardFilters::default().sorted_by(SortKey::Cost, SortOrder::Desc);
        let mut cards = vec![x, y, z];
        cards.sort_by(|a, b| desc.compare(a, b));
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "y", "x"]);

        let a1 = card("a1", "Same", "Unit");
        let a2 = card("a2", "Same", "Unit");
        let by_name = CardFilters::default().sorted_by(SortKey::Name, SortOrder::Desc);
        assert_eq!(by_name.compare(&a1, &a2), Ordering::Less);
        assert_eq!(by_name.compare(&card("b", "Beta", "Unit"), &a1), Ordering::Greater);
    }

    #[test]
    fn test_filters_deserialize() {
        let json = r#"{ "name": "jinx", "category": "MainDeck", "sort": "cost", "order": "desc" }"#;
        let filters: CardFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters.category, Category::MainDeck);
        assert_eq!(filters.sort, SortKey::Cost);
        assert_eq!(filters.order, SortOrder::Desc);
        assert!(filters.tags.is_empty());
    }
}
