//! In-memory card catalog.
//!
//! The `CardCatalog` holds cards already fetched from the search
//! capability. It provides lookup by `CardId` and by name, and can act as
//! the name resolver for decklist import when no network is available.

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use super::category::CategoryBucket;
use super::definition::{Card, CardId};
use crate::core::SearchError;
use crate::search::CardResolver;

/// Catalog of known cards.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::{Card, CardCatalog};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new("bolt", "Lightning Bolt", "Instant"));
///
/// let found = catalog.get_by_name("lightning bolt").unwrap();
/// assert_eq!(found.id.as_str(), "bolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card, replacing any previous card with the same ID.
    ///
    /// Returns the replaced card. When two printings share a name, name
    /// lookup returns the most recently registered one.
    pub fn register(&mut self, card: Card) -> Option<Card> {
        self.by_name.insert(name_key(&card.name), card.id.clone());
        self.cards.insert(card.id.clone(), card)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Get a card by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Card> {
        self.by_name
            .get(&name_key(name))
            .and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards by category.
    pub fn find_by_category(&self, bucket: CategoryBucket) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.category() == bucket)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl FromIterator<Card> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Card> for CardCatalog {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.register(card);
        }
    }
}

#[async_trait]
impl CardResolver for CardCatalog {
    async fn resolve(&self, name: &str) -> Result<Option<Card>, SearchError> {
        Ok(self.get_by_name(name).cloned())
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
