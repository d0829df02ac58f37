//! End-to-end session tests.
//!
//! These tests drive a `DeckBuilder` the way the presentation layer does:
//! - Search, add, remove
//! - Deck management and persistence across sessions
//! - Import, export and the read models

mod common;

use common::*;
use rust_deckbuilder::analysis::ProbabilityTier;
use rust_deckbuilder::cards::CategoryBucket;
use rust_deckbuilder::core::{BuilderConfig, DeckError, DeckRng, ErrorKind, SearchError};
use rust_deckbuilder::deck::{FileStorage, MemoryStorage};
use rust_deckbuilder::search::{CmcFilter, SearchFilters, SearchOutcome};
use rust_deckbuilder::session::DeckBuilder;

fn open(storage: MemoryStorage) -> DeckBuilder<MemoryStorage> {
    DeckBuilder::open(storage, BuilderConfig::default(), DeckRng::new(2024)).unwrap()
}

#[tokio::test]
async fn test_build_a_deck_from_search() {
    init_logging();
    let mut builder = open(MemoryStorage::new());
    let search = FakeSearch::answering(burn_cards());

    let filters = SearchFilters::new().with_color("r").with_cmc(CmcFilter::AtLeast(6));
    let outcome = builder.search(&search, "", &filters).await;
    assert_eq!(outcome.cards().len(), 6);
    assert_eq!(search.queries(), vec!["c:r cmc>=6".to_string()]);

    builder.create_deck("Burn").unwrap();
    for _ in 0..4 {
        assert!(builder.add_to_deck(&lightning_bolt().id).unwrap());
        assert!(builder.add_to_deck(&goblin_guide().id).unwrap());
    }
    for _ in 0..12 {
        assert!(builder.add_to_deck(&mountain().id).unwrap());
    }

    let deck = builder.current_deck();
    assert_eq!(deck.name(), "Burn");
    assert_eq!(deck.total_count(), 20);
    assert_eq!(deck.len(), 3);
}

#[tokio::test]
async fn test_outage_shows_no_results() {
    init_logging();
    let mut builder = open(MemoryStorage::new());
    let search = FakeSearch::failing(SearchError::Api {
        status: 500,
        details: "internal error".into(),
    });

    let outcome = builder.search(&search, "bolt", &SearchFilters::new()).await;
    assert_eq!(outcome, SearchOutcome::NoResults);
    assert!(!builder.add_to_deck(&lightning_bolt().id).unwrap());
}

#[tokio::test]
async fn test_filter_only_search_requires_filters() {
    let mut builder = open(MemoryStorage::new());
    let search = FakeSearch::answering(burn_cards());

    let err = builder
        .search_filters_only(&search, &SearchFilters::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::NoFiltersSelected));
    assert!(search.queries().is_empty());

    builder
        .search_filters_only(&search, &SearchFilters::new().with_format("pauper").legendary())
        .await
        .unwrap();
    assert_eq!(search.queries(), vec!["r:common is:legendary".to_string()]);
}

#[test]
fn test_empty_deck_commands_fail() {
    let mut builder = open(MemoryStorage::new());

    for err in [
        builder.shuffle_deck().unwrap_err(),
        builder.simulate_hand().unwrap_err(),
        builder.export_current().unwrap_err(),
    ] {
        assert!(matches!(err, DeckError::EmptyDeck));
        assert_eq!(err.kind(), ErrorKind::UserInput);
    }
}

#[test]
fn test_deck_management() {
    init_logging();
    let mut builder = open(MemoryStorage::new());

    builder.create_deck("Burn").unwrap();
    builder.add_card(&lightning_bolt()).unwrap();
    builder.create_deck("Control").unwrap();
    assert!(builder.current_deck().is_empty());

    assert!(matches!(builder.create_deck("Burn"), Err(DeckError::DuplicateName(_))));
    assert!(matches!(builder.create_deck("  "), Err(DeckError::EmptyDeckName)));

    assert!(builder.switch_deck("Burn").unwrap());
    assert_eq!(builder.current_deck().total_count(), 1);
    assert_eq!(builder.deck_names(), vec!["default", "Burn", "Control"]);
}

#[test]
fn test_session_survives_restart() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = BuilderConfig::default();

    {
        let storage = FileStorage::open(dir.path()).unwrap();
        let mut builder = DeckBuilder::open(storage, config.clone(), DeckRng::new(1)).unwrap();
        builder.create_deck("Burn").unwrap();
        builder.add_card(&lightning_bolt()).unwrap();
        builder.add_card(&lightning_bolt()).unwrap();
        builder.add_card(&mountain()).unwrap();
        builder.remove_from_deck(&mountain().id).unwrap();
    }

    let storage = FileStorage::open(dir.path()).unwrap();
    let builder = DeckBuilder::open(storage, config, DeckRng::new(1)).unwrap();
    assert_eq!(builder.current_deck().name(), "Burn");
    assert_eq!(builder.current_deck().quantity_of(&lightning_bolt().id), 2);
    assert_eq!(builder.current_deck().quantity_of(&mountain().id), 0);
}

#[test]
fn test_seeded_sessions_shuffle_alike() {
    let mut first = open(MemoryStorage::new());
    let mut second = open(MemoryStorage::new());
    for builder in [&mut first, &mut second] {
        for card in burn_cards() {
            builder.add_card(&card).unwrap();
        }
        builder.shuffle_deck().unwrap();
    }

    assert_eq!(first.current_deck(), second.current_deck());
    assert_eq!(first.rng_state(), second.rng_state());
    assert_eq!(first.simulate_hand().unwrap(), second.simulate_hand().unwrap());
}

#[tokio::test]
async fn test_import_export_cycle() {
    init_logging();
    let mut builder = open(MemoryStorage::new());
    let catalog = catalog();

    let report = builder
        .import_deck(
            "# Burn\n\n4 Lightning Bolt\n4 Boros Charm\n16 Mountain\n2 Rift Bolt",
            "Burn",
            &catalog,
        )
        .await
        .unwrap();
    assert_eq!(report.total_cards, 24);
    assert_eq!(report.unresolved, vec!["Rift Bolt".to_string()]);
    assert_eq!(builder.current_deck().name(), "Burn");

    assert_eq!(
        builder.export_current().unwrap(),
        "# Burn\n\n4 Lightning Bolt\n4 Boros Charm\n16 Mountain\n"
    );

    // Re-importing under the same name replaces rather than merges.
    builder
        .import_deck("1 Mountain", "Burn", &catalog)
        .await
        .unwrap();
    assert_eq!(builder.current_deck().total_count(), 1);
}

#[tokio::test]
async fn test_import_errors_leave_state_alone() {
    let mut builder = open(MemoryStorage::new());
    builder.add_card(&lightning_bolt()).unwrap();
    let catalog = catalog();

    let err = builder.import_deck("   ", "New", &catalog).await.unwrap_err();
    assert!(matches!(err, DeckError::EmptyImportText));

    let err = builder
        .import_deck("1 Nothing Here", "New", &catalog)
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::EmptyImport { .. }));

    assert_eq!(builder.deck_names(), vec!["default"]);
    assert_eq!(builder.current_deck().total_count(), 1);
}

#[test]
fn test_read_models() {
    let mut builder = open(MemoryStorage::new());
    for _ in 0..4 {
        builder.add_card(&lightning_bolt()).unwrap();
    }
    for _ in 0..36 {
        builder.add_card(&mountain()).unwrap();
    }

    let view = builder.deck_view();
    assert_eq!(view.total_cards, 40);
    let bolt = &view.category(CategoryBucket::Instants).unwrap().cards[0];
    assert!((bolt.odds.opening_hand.percentage - 52.17).abs() < 0.01);
    assert_eq!(bolt.odds.opening_hand.tier, ProbabilityTier::Medium);
    let turns: Vec<u32> = bolt.odds.by_turn.iter().map(|(t, _)| *t).collect();
    assert_eq!(turns, vec![3, 5, 10]);
    assert_eq!(bolt.odds.turn(10).unwrap().tier, ProbabilityTier::High);

    let mountains = &view.category(CategoryBucket::Lands).unwrap().cards[0];
    assert!(mountains.odds.opening_hand.percentage > 99.99);
    assert_eq!(mountains.odds.opening_hand.tier, ProbabilityTier::High);

    let stats = builder.stats();
    assert_eq!(stats.land_count, 36);
    assert_eq!(stats.mana_curve[0], 36);
    assert_eq!(stats.mana_curve[1], 4);
    assert_eq!(stats.colors.red, 4);
}

#[tokio::test]
async fn test_oversized_decklist_lines_are_skipped() {
    init_logging();
    let mut builder = open(MemoryStorage::new());
    let catalog = catalog();

    let report = builder
        .import_deck("4294967295 Lightning Bolt\n4294967295 Mountain\n1 Mountain", "X", &catalog)
        .await
        .unwrap();

    assert_eq!(report.total_cards, 1);
    assert_eq!(builder.current_deck().quantity_of(&lightning_bolt().id), 0);
}

#[tokio::test]
async fn test_capped_lines_merge_into_large_decks() {
    init_logging();
    let mut builder = open(MemoryStorage::new());
    let catalog = catalog();

    // Lines at the cap merge past any real deck size.
    let text = "9999 Lightning Bolt\n".repeat(500) + "9999 Mountain\n";
    let report = builder.import_deck(&text, "Huge", &catalog).await.unwrap();
    assert_eq!(report.total_cards, 9999 * 501);

    for _ in 0..2 {
        builder.add_card(&goblin_guide()).unwrap();
    }
    assert_eq!(builder.simulate_hand().unwrap().len(), 7);
    assert_eq!(builder.deck_view().total_cards, 9999 * 501 + 2);
    assert_eq!(builder.stats().mana_curve[0], 9999);
}

#[test]
fn test_blank_switch_keeps_current_deck() {
    let mut builder = open(MemoryStorage::new());
    builder.create_deck("Burn").unwrap();

    assert!(!builder.switch_deck("").unwrap());
    assert!(!builder.switch_deck("  ").unwrap());
    builder.add_card(&lightning_bolt()).unwrap();

    assert_eq!(builder.current_deck().name(), "Burn");
    assert_eq!(builder.deck_names(), vec!["default", "Burn"]);
}

#[test]
fn test_view_odds_match_configured_hand_size() {
    let config = BuilderConfig::default().with_opening_hand_size(5);
    let mut builder = DeckBuilder::open(MemoryStorage::new(), config, DeckRng::new(3)).unwrap();
    for _ in 0..4 {
        builder.add_card(&lightning_bolt()).unwrap();
    }
    for _ in 0..36 {
        builder.add_card(&mountain()).unwrap();
    }

    assert_eq!(builder.simulate_hand().unwrap().len(), 5);
    let view = builder.deck_view();
    let bolt = &view.category(CategoryBucket::Instants).unwrap().cards[0];
    assert_eq!(
        bolt.odds.opening_hand.percentage,
        rust_deckbuilder::analysis::probability_of_drawing(4, 40, 5)
    );
}
