//! # rust-deckbuilder
//!
//! The deck-building core of a trading-card-game client.
//!
//! ## Design Principles
//!
//! 1. **Capabilities In, Data Out**: Card search and persistent storage are
//!    traits supplied by the host. The core hands back display-ready data.
//!
//! 2. **No Globals**: All state lives in an explicit `DeckBuilder`, so
//!    independent instances can run side by side.
//!
//! 3. **Seeded Randomness**: Shuffles and simulated hands draw from an
//!    injected `DeckRng`, so every sequence can be replayed.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `cards`: Card records, category classification, colors, catalog
//! - `deck`: Deck model, statistics, registry, storage
//! - `analysis`: Draw probabilities and opening-hand simulation
//! - `decklist`: Plain-text decklist export and import
//! - `search`: Query building and the search capabilities
//! - `session`: The `DeckBuilder` application state and its views

pub mod analysis;
pub mod cards;
pub mod core;
pub mod deck;
pub mod decklist;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BuilderConfig, DeckError, DeckResult, DeckRng, ErrorKind, SearchError};

pub use crate::cards::{Card, CardCatalog, CardId, CardImages, CategoryBucket, ManaColor};

pub use crate::deck::{DeckEntry, DeckModel, DeckRegistry, DeckStats, FileStorage, MemoryStorage, Storage};

pub use crate::analysis::{
    probability_by_turn, probability_of_drawing, DrawOdds, HandSimulator, ProbabilityTier,
};

pub use crate::decklist::ImportOutcome;

pub use crate::search::{CardResolver, CardSearch, SearchFilters, SearchOutcome, SearchResolver};

pub use crate::session::{DeckBuilder, DeckView, ImportReport};
