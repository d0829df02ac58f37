//! Shared fixtures and logging for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use rust_deckbuilder::cards::{Card, CardCatalog};
use rust_deckbuilder::core::SearchError;
use rust_deckbuilder::search::CardSearch;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level: `TEST_LOG`, then `RUST_LOG`,
/// then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn lightning_bolt() -> Card {
    Card::new("e3285e6b", "Lightning Bolt", "Instant")
        .with_mana_cost("{R}")
        .with_cmc(1.0)
        .with_oracle_text("Lightning Bolt deals 3 damage to any target.")
}

pub fn goblin_guide() -> Card {
    Card::new("1d8ab6c9", "Goblin Guide", "Creature — Goblin Scout")
        .with_mana_cost("{R}")
        .with_cmc(1.0)
}

pub fn boros_charm() -> Card {
    Card::new("7f2b5a10", "Boros Charm", "Instant")
        .with_mana_cost("{R}{W}")
        .with_cmc(2.0)
}

pub fn skewer() -> Card {
    Card::new("b0c3a1e2", "Skewer the Critics", "Sorcery")
        .with_mana_cost("{2}{R}")
        .with_cmc(3.0)
}

pub fn mountain() -> Card {
    Card::new("a3fb7228", "Mountain", "Basic Land — Mountain")
}

pub fn sacred_foundry() -> Card {
    Card::new("4c1f2d0e", "Sacred Foundry", "Land — Mountain Plains")
}

pub fn burn_cards() -> Vec<Card> {
    vec![
        lightning_bolt(),
        goblin_guide(),
        boros_charm(),
        skewer(),
        mountain(),
        sacred_foundry(),
    ]
}

pub fn catalog() -> CardCatalog {
    burn_cards().into_iter().collect()
}

/// Search double that records queries and answers from a fixed reply.
pub struct FakeSearch {
    pub queries: Mutex<Vec<String>>,
    reply: Result<Vec<Card>, SearchError>,
}

impl FakeSearch {
    pub fn answering(cards: Vec<Card>) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            reply: Ok(cards),
        }
    }

    pub fn failing(err: SearchError) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            reply: Err(err),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardSearch for FakeSearch {
    async fn search(&self, query: &str) -> Result<Vec<Card>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.reply.clone()
    }
}

/// Search double over a catalog that understands exact-name queries.
pub struct CatalogSearch {
    catalog: CardCatalog,
}

impl CatalogSearch {
    pub fn new(catalog: CardCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CardSearch for CatalogSearch {
    async fn search(&self, query: &str) -> Result<Vec<Card>, SearchError> {
        let name = query
            .strip_prefix("!\"")
            .and_then(|q| q.strip_suffix('"'))
            .unwrap_or(query);
        match self.catalog.get_by_name(name) {
            Some(card) => Ok(vec![card.clone()]),
            None => Err(SearchError::Api {
                status: 404,
                details: format!("no card named {name}"),
            }),
        }
    }
}
