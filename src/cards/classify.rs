//! Card classifier: semantic facts derived from raw card records.
//!
//! All functions are pure and total. Empty or missing `card_type` and
//! `faction` strings produce empty token sets, never an error.

use smallvec::SmallVec;

use super::definition::Card;
use crate::core::config::{DeckRules, DEFAULT_NON_CHAMPION_TAGS};

/// Small token set. Cards rarely carry more than three type or domain tokens.
pub type Tokens<'a> = SmallVec<[&'a str; 4]>;

/// Tag marking a champion's signature card.
pub const SIGNATURE_TAG: &str = "Signature";

/// Split on whitespace, dropping repeated tokens while keeping first-seen order.
fn tokens(raw: &str) -> Tokens<'_> {
    let mut out = Tokens::new();
    for token in raw.split_whitespace() {
        if !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

/// Type tokens of a card ("Champion Unit" -> `["Champion", "Unit"]`).
#[must_use]
pub fn type_tokens(card: &Card) -> Tokens<'_> {
    tokens(&card.card_type)
}

/// Domain tokens of a card ("Fury Chaos" -> `["Fury", "Chaos"]`).
#[must_use]
pub fn domain_tokens(card: &Card) -> Tokens<'_> {
    tokens(&card.faction)
}

/// Check whether a card's type tokens include `token`.
#[must_use]
pub fn has_type(card: &Card, token: &str) -> bool {
    card.card_type.split_whitespace().any(|t| t == token)
}

/// Check whether the raw type contains the consecutive tokens "Champion Unit".
#[must_use]
pub fn is_champion_unit(card: &Card) -> bool {
    let words = card.card_type.split_whitespace();
    words
        .clone()
        .zip(words.skip(1))
        .any(|(first, second)| first == "Champion" && second == "Unit")
}

/// Check whether a card is tagged "Signature".
#[must_use]
pub fn is_signature(card: &Card) -> bool {
    card.has_tag(SIGNATURE_TAG)
}

/// First tag not on the default non-champion denylist.
#[must_use]
pub fn champion_tag(card: &Card) -> Option<&str> {
    card.tags
        .iter()
        .map(String::as_str)
        .find(|t| !DEFAULT_NON_CHAMPION_TAGS.contains(t))
}

/// First tag not on the denylist configured in `rules`.
#[must_use]
pub fn champion_tag_with<'a>(card: &'a Card, rules: &DeckRules) -> Option<&'a str> {
    card.tags
        .iter()
        .map(String::as_str)
        .find(|t| !rules.is_non_champion_tag(t))
}

/// Check whether every domain of `card` lies inside `identity`.
///
/// An empty identity admits nothing, not even colorless cards.
#[must_use]
pub fn is_in_domain(card: &Card, identity: &[&str]) -> bool {
    if identity.is_empty() {
        return false;
    }
    domain_tokens(card).iter().all(|d| identity.contains(d))
}
