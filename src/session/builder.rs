//! The deck builder application state.
//!
//! `DeckBuilder` is what the presentation layer holds on to. It owns the
//! registry, the storage it persists to, the random source and the last
//! search results, and exposes one method per user command. Every command
//! that changes a deck writes the registry back to storage before
//! returning.

use tracing::{debug, info, warn};

use super::view::DeckView;
use crate::analysis::HandSimulator;
use crate::cards::{Card, CardId};
use crate::core::{BuilderConfig, DeckError, DeckResult, DeckRng, DeckRngState};
use crate::deck::{DeckModel, DeckRegistry, DeckStats, Storage};
use crate::decklist::{self, ImportOutcome};
use crate::search::{compose_query, CardResolver, CardSearch, SearchFilters, SearchOutcome};

/// Summary of a committed import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportReport {
    pub deck_name: String,
    pub total_cards: u32,
    pub unresolved: Vec<String>,
}

/// Application state for one user.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::Card;
/// use rust_deckbuilder::core::{BuilderConfig, DeckRng};
/// use rust_deckbuilder::deck::MemoryStorage;
/// use rust_deckbuilder::session::DeckBuilder;
///
/// let mut builder =
///     DeckBuilder::open(MemoryStorage::new(), BuilderConfig::default(), DeckRng::new(7)).unwrap();
///
/// builder.create_deck("Burn").unwrap();
/// builder
///     .add_card(&Card::new("bolt", "Lightning Bolt", "Instant"))
///     .unwrap();
///
/// assert_eq!(builder.current_deck().total_count(), 1);
/// assert_eq!(builder.export_current().unwrap(), "# Burn\n\n1 Lightning Bolt\n");
/// ```
pub struct DeckBuilder<S> {
    registry: DeckRegistry,
    storage: S,
    rng: DeckRng,
    config: BuilderConfig,
    hands: HandSimulator,
    last_results: Vec<Card>,
}

impl<S: Storage> DeckBuilder<S> {
    /// Restore the registry from `storage` and start a session.
    pub fn open(storage: S, config: BuilderConfig, rng: DeckRng) -> DeckResult<Self> {
        let registry = DeckRegistry::restore(&storage, &config)?;
        Ok(Self {
            registry,
            storage,
            rng,
            hands: HandSimulator::new(config.opening_hand_size),
            config,
            last_results: Vec::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &DeckRegistry {
        &self.registry
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage, ending the session.
    pub fn into_storage(self) -> S {
        self.storage
    }

    #[must_use]
    pub fn current_deck(&self) -> &DeckModel {
        self.registry.current()
    }

    /// Deck names in selector order.
    #[must_use]
    pub fn deck_names(&self) -> Vec<&str> {
        self.registry.deck_names()
    }

    /// Random-source position, for replaying shuffles and hands.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    /// Cards from the most recent search.
    #[must_use]
    pub fn last_results(&self) -> &[Card] {
        &self.last_results
    }

    // === Search ===

    /// Search with free text plus filters.
    ///
    /// With neither text nor filters nothing is sent. Service failures are
    /// logged and reported as `NoResults`.
    pub async fn search<C>(&mut self, search: &C, text: &str, filters: &SearchFilters) -> SearchOutcome
    where
        C: CardSearch + ?Sized,
    {
        match compose_query(text, filters) {
            Some(query) => self.run_search(search, &query).await,
            None => {
                debug!("empty search ignored");
                SearchOutcome::NoResults
            }
        }
    }

    /// Search with filters only.
    ///
    /// # Errors
    ///
    /// `NoFiltersSelected` if no filter is active.
    pub async fn search_filters_only<C>(
        &mut self,
        search: &C,
        filters: &SearchFilters,
    ) -> DeckResult<SearchOutcome>
    where
        C: CardSearch + ?Sized,
    {
        if filters.is_empty() {
            return Err(DeckError::NoFiltersSelected);
        }
        let query = filters.build();
        Ok(self.run_search(search, &query).await)
    }

    async fn run_search<C>(&mut self, search: &C, query: &str) -> SearchOutcome
    where
        C: CardSearch + ?Sized,
    {
        debug!(%query, "searching cards");
        match search.search(query).await {
            Ok(cards) if !cards.is_empty() => {
                self.last_results = cards.clone();
                SearchOutcome::Results(cards)
            }
            Ok(_) => {
                self.last_results.clear();
                SearchOutcome::NoResults
            }
            Err(err) => {
                warn!(%query, error = %err, "card search failed");
                self.last_results.clear();
                SearchOutcome::NoResults
            }
        }
    }

    // === Deck editing ===

    /// Add one copy of a card from the last search results.
    ///
    /// Returns `false` if the id is not among them.
    pub fn add_to_deck(&mut self, id: &CardId) -> DeckResult<bool> {
        let Some(card) = self.last_results.iter().find(|c| &c.id == id).cloned() else {
            debug!(card = %id, "card not in search results");
            return Ok(false);
        };
        self.add_card(&card)?;
        Ok(true)
    }

    /// Add one copy of `card` to the current deck.
    pub fn add_card(&mut self, card: &Card) -> DeckResult<()> {
        self.registry.current_mut().add_card(card);
        debug!(card = %card.id, deck = self.registry.current_name(), "added card");
        self.save()
    }

    /// Remove one copy from the current deck. Returns `false` if absent.
    pub fn remove_from_deck(&mut self, id: &CardId) -> DeckResult<bool> {
        if self.registry.current().entry(id).is_none() {
            return Ok(false);
        }
        self.registry.current_mut().remove_card(id);
        debug!(card = %id, deck = self.registry.current_name(), "removed card");
        self.save()?;
        Ok(true)
    }

    /// Shuffle the current deck's entry order.
    ///
    /// # Errors
    ///
    /// `EmptyDeck` if the current deck has no cards.
    pub fn shuffle_deck(&mut self) -> DeckResult<()> {
        self.ensure_not_empty()?;
        self.registry.current_mut().shuffle(&mut self.rng);
        self.save()
    }

    /// Deal an opening hand from the current deck.
    ///
    /// # Errors
    ///
    /// `EmptyDeck` if the current deck has no cards.
    pub fn simulate_hand(&mut self) -> DeckResult<Vec<Card>> {
        self.ensure_not_empty()?;
        let hand = self
            .hands
            .draw_opening_hand(self.registry.current(), &mut self.rng);
        debug!(cards = hand.len(), lands = hand.land_count(), "dealt opening hand");
        Ok(hand.to_cards())
    }

    // === Deck management ===

    /// Create an empty deck and switch to it.
    pub fn create_deck(&mut self, name: &str) -> DeckResult<()> {
        self.registry.create_deck(name)?;
        self.save()
    }

    /// Switch the current deck. Returns `false` for an unknown name, which
    /// shows an empty deck until something is added to it, and for a blank
    /// name, which changes nothing.
    pub fn switch_deck(&mut self, name: &str) -> DeckResult<bool> {
        let known = self.registry.switch_to(name);
        self.save()?;
        Ok(known)
    }

    /// Decklist text for the current deck.
    ///
    /// # Errors
    ///
    /// `EmptyDeck` if the current deck has no cards.
    pub fn export_current(&self) -> DeckResult<String> {
        self.ensure_not_empty()?;
        Ok(decklist::export(self.registry.current()))
    }

    /// Import decklist text as `deck_name`, replacing any deck of that
    /// name, and switch to it.
    ///
    /// Nothing changes unless at least one line resolves.
    pub async fn import_deck<R>(
        &mut self,
        text: &str,
        deck_name: &str,
        resolver: &R,
    ) -> DeckResult<ImportReport>
    where
        R: CardResolver + ?Sized,
    {
        let ImportOutcome { deck, unresolved } = decklist::import(text, deck_name, resolver).await?;
        let report = ImportReport {
            deck_name: deck.name().to_string(),
            total_cards: deck.total_count(),
            unresolved,
        };

        if self.registry.replace_deck(deck).is_some() {
            info!(deck = %report.deck_name, "import replaced existing deck");
        }
        self.registry.switch_to(&report.deck_name);
        self.save()?;
        Ok(report)
    }

    // === Read models ===

    /// The current deck grouped for display, with draw odds.
    #[must_use]
    pub fn deck_view(&self) -> DeckView {
        DeckView::build(
            self.registry.current(),
            self.config.opening_hand_size,
            &self.config.view_turns,
        )
    }

    /// Statistics for the current deck.
    #[must_use]
    pub fn stats(&self) -> DeckStats {
        DeckStats::compute(self.registry.current(), self.config.curve_cap)
    }

    fn ensure_not_empty(&self) -> DeckResult<()> {
        if self.registry.current().is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(())
    }

    fn save(&mut self) -> DeckResult<()> {
        self.registry.persist(&mut self.storage, &self.config)
    }
}
