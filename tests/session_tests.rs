//! Builder session integration tests.
//!
//! Cards are pulled from an in-memory catalog loaded from JSON, dragged into
//! the deck and saved through a deck store.

use deckforge::catalog::{CardCatalog, CardFilters, Category, InMemoryCatalog};
use deckforge::cards::{Card, CardId};
use deckforge::core::{DeckRules, SaveError};
use deckforge::drag::{DragOrigin, DropTarget};
use deckforge::session::{BuilderSession, DeckStore, Identity, MemoryDeckStore};
use deckforge::zones::Zone;

fn catalog_json() -> String {
    let mut records = vec![
        r#"{ "id": "LEG", "name": "Jinx, Loose Cannon", "type": "Legend", "faction": "Fury Chaos", "tags": ["Jinx", "Zaun"] }"#.to_string(),
        r#"{ "id": "CHAMP", "name": "Jinx, Rebel", "type": "Champion Unit", "faction": "Chaos", "tags": ["Jinx"], "stats": { "cost": 4, "might": 4 } }"#.to_string(),
        r#"{ "id": "SIG", "name": "Get Excited!", "type": "Spell", "faction": "Fury", "tags": ["Jinx", "Signature"], "stats": { "cost": 2 } }"#.to_string(),
        r#"{ "id": "RUNE-F", "name": "Fury Rune", "type": "Rune", "faction": "Fury" }"#.to_string(),
        r#"{ "id": "RUNE-C", "name": "Chaos Rune", "type": "Rune", "faction": "Chaos" }"#.to_string(),
        r#"{ "id": "BF-1", "name": "Zaun Warrens", "type": "Battlefield", "faction": "Chaos" }"#.to_string(),
        r#"{ "id": "BF-2", "name": "Ember Forge", "type": "Battlefield", "faction": "Fury" }"#.to_string(),
        r#"{ "id": "BF-3", "name": "Trifarian War Camp", "type": "Battlefield", "faction": "Fury" }"#.to_string(),
    ];
    for i in 0..12 {
        records.push(format!(
            r#"{{ "id": "U{i}", "name": "Unit {i}", "type": "Unit", "faction": "{}", "stats": {{ "cost": {} }} }}"#,
            if i % 2 == 0 { "Fury" } else { "Chaos" },
            i % 5
        ));
    }
    format!("[{}]", records.join(","))
}

fn drop_into_deck(session: &mut BuilderSession, card: &Card) {
    session.drag_start(card.clone(), DragOrigin::Grid);
    session.drag_end(Some(DropTarget::DeckList));
}

/// Browse each category and drag cards in until the deck is legal.
fn build_from_catalog(catalog: &InMemoryCatalog) -> BuilderSession {
    let mut session = BuilderSession::default();

    let legends = catalog
        .search(&CardFilters::default().with_category(Category::Legend))
        .unwrap();
    drop_into_deck(&mut session, &legends[0]);

    let champion = catalog.get(&CardId::new("CHAMP")).unwrap().unwrap();
    session.drag_start(champion, DragOrigin::Grid);
    session.drag_end(Some(DropTarget::ChampionSlot));

    let signature = catalog.get(&CardId::new("SIG")).unwrap().unwrap();
    drop_into_deck(&mut session, &signature);

    let units = catalog
        .search(&CardFilters::from_query("unit").with_category(Category::MainDeck))
        .unwrap();
    assert_eq!(units.len(), 12);
    for unit in units.iter().take(12) {
        for _ in 0..3 {
            drop_into_deck(&mut session, unit);
        }
    }
    // 1 champion + 1 signature + 36 units, top up with two more of the champion
    let champion = catalog.get(&CardId::new("CHAMP")).unwrap().unwrap();
    drop_into_deck(&mut session, &champion);
    drop_into_deck(&mut session, &champion);

    let runes = catalog
        .search(&CardFilters::default().with_category(Category::Rune))
        .unwrap();
    for rune in &runes {
        for _ in 0..6 {
            drop_into_deck(&mut session, rune);
        }
    }

    let battlefields = catalog
        .search(&CardFilters::default().with_category(Category::Battlefield))
        .unwrap();
    for bf in &battlefields {
        drop_into_deck(&mut session, bf);
    }

    session
}

#[test]
fn test_catalog_to_saved_deck() {
    let catalog = InMemoryCatalog::from_json(&catalog_json()).unwrap();
    let session = build_from_catalog(&catalog);

    let report = session.report();
    assert_eq!(report.total_main_deck_cards, 40);
    assert_eq!(report.total_signature_cards, 1);
    assert_eq!(report.champion_tag.as_deref(), Some("Jinx"));
    assert!(report.is_deck_valid, "problems: {:?}", report.problems(session.deck().rules()));

    assert_eq!(
        session.deck().chosen_champion().map(|c| c.id.as_str()),
        Some("CHAMP")
    );
    let display_total: u32 = session.deck().main_deck_display().iter().map(|e| e.count).sum();
    assert_eq!(display_total, 39);

    let mut store = MemoryDeckStore::new();
    let user = Identity::new("user-1", "id-token");
    let id = session.save("Jinx Chaos", Some(&user), &mut store).unwrap();

    let saved = store.get(&id).unwrap();
    let json = serde_json::to_value(saved).unwrap();
    assert_eq!(json["legend"]["id"], "LEG");
    assert_eq!(json["battlefieldDeck"].as_array().unwrap().len(), 3);

    let resumed = BuilderSession::from_saved(saved, DeckRules::default());
    assert_eq!(resumed.report(), report);
}

#[test]
fn test_category_filter_agrees_with_router() {
    let catalog = InMemoryCatalog::from_json(&catalog_json()).unwrap();

    for (category, zone) in [
        (Category::Legend, Zone::Legend),
        (Category::MainDeck, Zone::Main),
        (Category::Rune, Zone::Rune),
        (Category::Battlefield, Zone::Battlefield),
    ] {
        let cards = catalog
            .search(&CardFilters::default().with_category(category))
            .unwrap();
        assert!(!cards.is_empty());

        for card in cards {
            let mut session = BuilderSession::default();
            assert_eq!(session.add_card(&card), zone);
        }
    }
}

#[test]
fn test_faction_filter_and_sort() {
    let catalog = InMemoryCatalog::from_json(&catalog_json()).unwrap();
    let filters = CardFilters {
        category: Category::MainDeck,
        factions: vec!["Chaos".into()],
        sort: deckforge::catalog::SortKey::Cost,
        order: deckforge::catalog::SortOrder::Desc,
        ..CardFilters::default()
    };

    let found = catalog.search(&filters).unwrap();
    assert!(found.iter().all(|c| c.faction.contains("Chaos")));
    let costs: Vec<_> = found.iter().map(|c| c.stats.cost.unwrap_or(-1)).collect();
    let mut sorted = costs.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(costs, sorted);
}

#[test]
fn test_failed_save_keeps_session() {
    struct Offline;

    impl DeckStore for Offline {
        fn create_deck(
            &mut self,
            _: &Identity,
            _: &deckforge::deck::SavedDeck,
        ) -> Result<deckforge::session::DeckId, SaveError> {
            Err(SaveError::Store("offline".into()))
        }
    }

    let catalog = InMemoryCatalog::from_json(&catalog_json()).unwrap();
    let session = build_from_catalog(&catalog);
    let before = session.report();

    let err = session
        .save("Jinx Chaos", Some(&Identity::new("u", "t")), &mut Offline)
        .unwrap_err();
    assert_eq!(err.to_string(), "Deck store rejected the deck: offline");
    assert_eq!(session.report(), before);
}
