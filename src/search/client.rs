//! Card search capabilities.
//!
//! The core never talks to the network itself. A host supplies a
//! [`CardSearch`] (free-text query → cards) and, for decklist import, a
//! [`CardResolver`] (exact name → card). Any search can serve as a
//! resolver through [`SearchResolver`].

use async_trait::async_trait;
use tracing::debug;

use crate::cards::Card;
use crate::core::SearchError;

/// HTTP status the search service uses for "no cards matched".
const NOT_FOUND: u16 = 404;

/// Free-text card search.
#[async_trait]
pub trait CardSearch: Send + Sync {
    /// Run a query in the service's query language.
    async fn search(&self, query: &str) -> Result<Vec<Card>, SearchError>;
}

/// Exact-name card lookup.
#[async_trait]
pub trait CardResolver: Send + Sync {
    /// Resolve a printed name. `Ok(None)` when no card has that name.
    async fn resolve(&self, name: &str) -> Result<Option<Card>, SearchError>;
}

#[async_trait]
impl<T: CardSearch + ?Sized> CardSearch for &T {
    async fn search(&self, query: &str) -> Result<Vec<Card>, SearchError> {
        (**self).search(query).await
    }
}

#[async_trait]
impl<T: CardResolver + ?Sized> CardResolver for &T {
    async fn resolve(&self, name: &str) -> Result<Option<Card>, SearchError> {
        (**self).resolve(name).await
    }
}

/// Query matching one exact card name: `!"<name>"`.
///
/// ```
/// use rust_deckbuilder::search::exact_name_query;
///
/// assert_eq!(exact_name_query("Lightning Bolt"), r#"!"Lightning Bolt""#);
/// ```
#[must_use]
pub fn exact_name_query(name: &str) -> String {
    format!("!\"{}\"", name.trim().replace('"', "\\\""))
}

/// Resolves names by running exact-name queries against a [`CardSearch`].
///
/// The first result whose name matches case-insensitively wins. A
/// "not found" answer from the service is a miss, not an error.
#[derive(Clone, Debug)]
pub struct SearchResolver<S> {
    search: S,
}

impl<S: CardSearch> SearchResolver<S> {
    #[must_use]
    pub fn new(search: S) -> Self {
        Self { search }
    }

    pub fn into_inner(self) -> S {
        self.search
    }
}

#[async_trait]
impl<S: CardSearch> CardResolver for SearchResolver<S> {
    async fn resolve(&self, name: &str) -> Result<Option<Card>, SearchError> {
        let wanted = name.trim();
        let query = exact_name_query(wanted);
        debug!(%query, "resolving card name");

        let cards = match self.search.search(&query).await {
            Ok(cards) => cards,
            Err(SearchError::Api { status, .. }) if status == NOT_FOUND => return Ok(None),
            Err(err) => return Err(err),
        };

        let wanted = wanted.to_lowercase();
        Ok(cards
            .into_iter()
            .find(|card| card.name.trim().to_lowercase() == wanted))
    }
}

/// Result of a user-facing search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Results(Vec<Card>),
    /// Nothing matched, or the service failed.
    NoResults,
}

impl SearchOutcome {
    /// Cards found; empty for `NoResults`.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            SearchOutcome::Results(cards) => cards,
            SearchOutcome::NoResults => &[],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}
