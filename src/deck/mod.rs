//! Decks: the entry model, statistics, the registry and its storage.
//!
//! ## Key Types
//!
//! - `DeckModel`: Named, ordered list of `DeckEntry` (card, quantity)
//! - `DeckStats`: Totals, mana curve, color and type distribution
//! - `DeckRegistry`: Name → deck map with the current-deck pointer
//! - `Storage`: Key-value capability the registry persists through

pub mod collation;
pub mod model;
pub mod registry;
pub mod stats;
pub mod storage;

pub use collation::compare_names;
pub use model::{DeckEntry, DeckModel};
pub(crate) use model::sum_copies;
pub use registry::DeckRegistry;
pub use stats::{ColorDistribution, DeckStats};
pub use storage::{FileStorage, MemoryStorage, Storage};
