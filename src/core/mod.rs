//! Core building blocks: errors, RNG, configuration.
//!
//! Nothing here knows about decks; the deck, analysis and codec modules
//! build on these types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    BuilderConfig, CURRENT_DECK_STORAGE_KEY, DECKS_STORAGE_KEY, DEFAULT_DECK_NAME,
    OPENING_HAND_SIZE,
};
pub use error::{DeckError, DeckResult, ErrorKind, SearchError};
pub use rng::{DeckRng, DeckRngState};
