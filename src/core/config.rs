//! Builder configuration.
//!
//! Clients configure the core at startup by providing a `BuilderConfig`:
//! - The reserved default deck name
//! - Storage keys for the registry and the current-deck pointer
//! - Opening hand size and the turns shown in the deck view
//!
//! Defaults match the storage layout browser clients already use.

use serde::{Deserialize, Serialize};

/// Name of the deck that always exists.
pub const DEFAULT_DECK_NAME: &str = "default";

/// Storage key for the full deck registry.
pub const DECKS_STORAGE_KEY: &str = "mtgDecks";

/// Storage key for the current-deck pointer.
pub const CURRENT_DECK_STORAGE_KEY: &str = "currentDeckName";

/// Cards in an opening hand.
pub const OPENING_HAND_SIZE: usize = 7;

/// Complete builder configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Reserved deck name, always present in the registry.
    pub default_deck_name: String,

    /// Storage key holding every deck.
    pub decks_key: String,

    /// Storage key holding the current deck name.
    pub current_deck_key: String,

    /// Number of cards dealt by the hand simulator.
    pub opening_hand_size: usize,

    /// Highest mana-curve bucket; costs at or above it share one bar.
    pub curve_cap: u32,

    /// Turns for which the deck view reports draw odds, in addition to
    /// the opening hand.
    pub view_turns: Vec<u32>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_deck_name: DEFAULT_DECK_NAME.to_string(),
            decks_key: DECKS_STORAGE_KEY.to_string(),
            current_deck_key: CURRENT_DECK_STORAGE_KEY.to_string(),
            opening_hand_size: OPENING_HAND_SIZE,
            curve_cap: 7,
            view_turns: vec![3, 5, 10],
        }
    }
}

impl BuilderConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved default deck name.
    #[must_use]
    pub fn with_default_deck_name(mut self, name: impl Into<String>) -> Self {
        self.default_deck_name = name.into();
        self
    }

    /// Set both storage keys.
    #[must_use]
    pub fn with_storage_keys(
        mut self,
        decks_key: impl Into<String>,
        current_deck_key: impl Into<String>,
    ) -> Self {
        self.decks_key = decks_key.into();
        self.current_deck_key = current_deck_key.into();
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    /// Set the mana-curve cap.
    #[must_use]
    pub fn with_curve_cap(mut self, cap: u32) -> Self {
        self.curve_cap = cap;
        self
    }

    /// Set the turns reported by the deck view.
    #[must_use]
    pub fn with_view_turns(mut self, turns: impl Into<Vec<u32>>) -> Self {
        self.view_turns = turns.into();
        self
    }
}
