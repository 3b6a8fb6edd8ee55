//! Deck validator.
//!
//! `validate` recomputes the full legality state from the four zones on every
//! call. It keeps no state between calls and never mutates its inputs, so the
//! same zones always produce the same report.
//!
//! ## Rules checked (legend present)
//!
//! - Main deck: exact size, per-card copy limit, domain identity, Signature
//!   cards match the legend's champion, total Signature cards capped
//! - Rune deck: exact size, domain identity, optional per-card copy limit
//! - Battlefields: exact count, unique names (one collection-level error),
//!   domain identity
//!
//! Counts saturate at `u32::MAX` rather than wrapping, so oversized saved
//! decks are still reported as illegal.
//!
//! Without a legend the report short-circuits: nothing is valid, every count
//! is zero and no per-entry errors are produced.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{classify, Card};
use crate::core::config::DeckRules;
use crate::zones::ZoneList;

/// Collection-level battlefield error.
pub const DUPLICATE_BATTLEFIELD_ERROR: &str = "Battlefield deck cannot have duplicate cards.";

/// Legality of a deck, as shown next to the deck list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub has_legend: bool,
    pub domain_identity: Vec<String>,
    pub champion_tag: Option<String>,

    pub total_main_deck_cards: u32,
    pub is_main_deck_size_valid: bool,
    pub main_deck_errors: Vec<String>,

    pub total_signature_cards: u32,
    pub is_signature_card_count_valid: bool,

    pub total_rune_cards: u32,
    pub is_rune_deck_size_valid: bool,
    pub rune_deck_errors: Vec<String>,

    pub total_battlefield_cards: u32,
    pub is_battlefield_deck_size_valid: bool,
    pub is_battlefield_deck_unique: bool,
    pub battlefield_deck_errors: Vec<String>,

    pub is_deck_valid: bool,
}

impl ValidationReport {
    /// Iterate over every per-zone error, main deck first.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.main_deck_errors
            .iter()
            .chain(&self.rune_deck_errors)
            .chain(&self.battlefield_deck_errors)
            .map(String::as_str)
    }

    /// Every reason the deck is illegal, including size and count problems
    /// that have no per-entry error.
    #[must_use]
    pub fn problems(&self, rules: &DeckRules) -> Vec<String> {
        if self.is_deck_valid {
            return Vec::new();
        }

        if !self.has_legend {
            return vec!["Choose a Legend.".to_string()];
        }

        let mut out = Vec::new();
        if !self.is_main_deck_size_valid {
            out.push(format!(
                "Main deck must contain exactly {} cards (has {}).",
                rules.main_deck_size, self.total_main_deck_cards
            ));
        }
        if !self.is_signature_card_count_valid {
            out.push(format!(
                "At most {} Signature cards allowed (has {}).",
                rules.signature_limit, self.total_signature_cards
            ));
        }
        if !self.is_rune_deck_size_valid {
            out.push(format!(
                "Rune deck must contain exactly {} runes (has {}).",
                rules.rune_deck_size, self.total_rune_cards
            ));
        }
        if !self.is_battlefield_deck_size_valid {
            out.push(format!(
                "Battlefield deck must contain exactly {} battlefields (has {}).",
                rules.battlefield_deck_size, self.total_battlefield_cards
            ));
        }
        out.extend(self.errors().map(str::to_string));
        out
    }
}

fn not_in_identity(card: &Card) -> String {
    format!("{}: Not in your Domain Identity.", card.name)
}

fn too_many_copies(card: &Card, limit: u32) -> String {
    format!("{}: Max {} copies allowed.", card.name, limit)
}

/// Validate a deck against `rules`.
///
/// ## Example
///
/// ```
/// use deckforge::cards::Card;
/// use deckforge::core::DeckRules;
/// use deckforge::rules::validate;
/// use deckforge::zones::ZoneList;
///
/// let empty = ZoneList::new();
/// let report = validate(None, &empty, &empty, &empty, &DeckRules::default());
/// assert!(!report.is_deck_valid);
/// assert_eq!(report.total_main_deck_cards, 0);
///
/// let legend = Card::new("L", "Jinx", "Legend").with_faction("Fury");
/// let report = validate(Some(&legend), &empty, &empty, &empty, &DeckRules::default());
/// assert_eq!(report.domain_identity, vec!["Fury".to_string()]);
/// assert!(!report.is_main_deck_size_valid);
/// ```
#[must_use]
pub fn validate(
    legend: Option<&Card>,
    main_deck: &ZoneList,
    rune_deck: &ZoneList,
    battlefield_deck: &ZoneList,
    rules: &DeckRules,
) -> ValidationReport {
    let Some(legend) = legend else {
        return ValidationReport::default();
    };

    let identity = classify::domain_tokens(legend);
    let champion_tag = classify::champion_tag_with(legend, rules);

    let mut report = ValidationReport {
        has_legend: true,
        domain_identity: identity.iter().map(|d| (*d).to_string()).collect(),
        champion_tag: champion_tag.map(str::to_string),
        ..ValidationReport::default()
    };

    // === Main deck ===
    report.total_main_deck_cards = main_deck.total();
    report.is_main_deck_size_valid = report.total_main_deck_cards == rules.main_deck_size;

    for entry in main_deck {
        let card = &entry.card;
        if entry.count > rules.main_copy_limit {
            report
                .main_deck_errors
                .push(too_many_copies(card, rules.main_copy_limit));
        }
        if !classify::is_in_domain(card, &identity) {
            report.main_deck_errors.push(not_in_identity(card));
        }
        if classify::is_signature(card) {
            if classify::champion_tag_with(card, rules) != champion_tag {
                report
                    .main_deck_errors
                    .push(format!("{}: Signature card does not match Legend.", card.name));
            }
        } else if rules.require_champion_match
            && classify::has_type(card, "Champion")
            && classify::champion_tag_with(card, rules) != champion_tag
        {
            report
                .main_deck_errors
                .push(format!("{}: Champion does not match Legend.", card.name));
        }
    }

    report.total_signature_cards = main_deck
        .iter()
        .filter(|e| classify::is_signature(&e.card))
        .fold(0u32, |acc, e| acc.saturating_add(e.count));
    report.is_signature_card_count_valid = report.total_signature_cards <= rules.signature_limit;

    // === Rune deck ===
    report.total_rune_cards = rune_deck.total();
    report.is_rune_deck_size_valid = report.total_rune_cards == rules.rune_deck_size;

    for entry in rune_deck {
        if let Some(limit) = rules.rune_copy_limit {
            if entry.count > limit {
                report.rune_deck_errors.push(too_many_copies(&entry.card, limit));
            }
        }
        if !classify::is_in_domain(&entry.card, &identity) {
            report.rune_deck_errors.push(not_in_identity(&entry.card));
        }
    }

    // === Battlefield deck ===
    report.total_battlefield_cards = u32::try_from(battlefield_deck.len()).unwrap_or(u32::MAX);
    report.is_battlefield_deck_size_valid =
        report.total_battlefield_cards == rules.battlefield_deck_size;

    let names: FxHashSet<&str> = battlefield_deck
        .iter()
        .map(|e| e.card.name.as_str())
        .collect();
    report.is_battlefield_deck_unique = names.len() == battlefield_deck.len();
    if !report.is_battlefield_deck_unique {
        report
            .battlefield_deck_errors
            .push(DUPLICATE_BATTLEFIELD_ERROR.to_string());
    }

    for entry in battlefield_deck {
        if !classify::is_in_domain(&entry.card, &identity) {
            report.battlefield_deck_errors.push(not_in_identity(&entry.card));
        }
    }

    // === Overall ===
    report.is_deck_valid = report.has_legend
        && report.is_main_deck_size_valid
        && report.is_signature_card_count_valid
        && report.is_rune_deck_size_valid
        && report.is_battlefield_deck_size_valid
        && report.is_battlefield_deck_unique
        && report.main_deck_errors.is_empty()
        && report.rune_deck_errors.is_empty()
        && report.battlefield_deck_errors.is_empty();

    debug!(
        main = report.total_main_deck_cards,
        runes = report.total_rune_cards,
        battlefields = report.total_battlefield_cards,
        errors = report.errors().count(),
        valid = report.is_deck_valid,
        "validated deck"
    );

    report
}
