//! Named collection of decks with a current-deck pointer.
//!
//! The reserved default deck always exists. The current pointer normally
//! names a stored deck; switching to an unknown name yields an empty
//! ad-hoc view that is only stored once something is added to it.
//!
//! ## Persistence
//!
//! Two storage keys:
//! - decks key: JSON object `{ deck name: [card record + quantity, ...] }`
//! - current key: the current deck name as a plain string

use std::collections::BTreeMap;

use im::OrdMap;
use tracing::{debug, info, warn};

use super::model::{DeckEntry, DeckModel};
use super::storage::Storage;
use crate::core::{BuilderConfig, DeckError, DeckResult};

/// Registry of named decks.
///
/// Uses an `im` ordered map so snapshots handed to the presentation layer
/// are O(1) clones.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::core::BuilderConfig;
/// use rust_deckbuilder::deck::DeckRegistry;
///
/// let mut registry = DeckRegistry::new(&BuilderConfig::default());
/// registry.create_deck("Burn").unwrap();
///
/// assert_eq!(registry.current_name(), "Burn");
/// assert!(registry.create_deck(" Burn ").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DeckRegistry {
    decks: OrdMap<String, DeckModel>,
    current: String,
    default_name: String,
    /// Empty view returned for an unknown current name.
    scratch: DeckModel,
}

impl DeckRegistry {
    /// A registry holding only the empty default deck, which is current.
    #[must_use]
    pub fn new(config: &BuilderConfig) -> Self {
        let default_name = config.default_deck_name.clone();
        let mut decks = OrdMap::new();
        decks.insert(default_name.clone(), DeckModel::new(default_name.clone()));
        Self {
            decks,
            current: default_name.clone(),
            scratch: DeckModel::new(default_name.clone()),
            default_name,
        }
    }

    /// Reserved default deck name.
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Current deck name.
    #[must_use]
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// Whether the current name refers to a stored deck.
    #[must_use]
    pub fn current_is_stored(&self) -> bool {
        self.decks.contains_key(&self.current)
    }

    /// The current deck, or an empty view if it is not stored.
    #[must_use]
    pub fn current(&self) -> &DeckModel {
        self.decks.get(&self.current).unwrap_or(&self.scratch)
    }

    /// The current deck for mutation, storing an ad-hoc deck first.
    ///
    /// A blank ad-hoc name is never stored; the default deck is used
    /// instead.
    pub fn current_mut(&mut self) -> &mut DeckModel {
        if !self.decks.contains_key(&self.current) {
            if self.current.trim().is_empty() {
                warn!("blank current deck name, using default");
                self.current = self.default_name.clone();
            } else {
                debug!(deck = %self.current, "materializing ad-hoc deck");
            }
        }
        let name = self.current.clone();
        self.decks
            .entry(name.clone())
            .or_insert_with(|| DeckModel::new(name))
    }

    /// Look up a deck.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DeckModel> {
        self.decks.get(name)
    }

    /// Check if a deck is stored.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.decks.contains_key(name)
    }

    /// Number of stored decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Always false: the default deck is always stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Deck names in selector order: default first, then by name.
    #[must_use]
    pub fn deck_names(&self) -> Vec<&str> {
        std::iter::once(self.default_name.as_str())
            .chain(
                self.decks
                    .keys()
                    .map(String::as_str)
                    .filter(|name| *name != self.default_name),
            )
            .collect()
    }

    /// Iterate over stored decks in name order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckModel> {
        self.decks.values()
    }

    /// Create an empty deck and make it current.
    ///
    /// The name is trimmed. Fails on an empty name or an existing name,
    /// including the default deck.
    pub fn create_deck(&mut self, name: &str) -> DeckResult<&mut DeckModel> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyDeckName);
        }
        if self.decks.contains_key(name) {
            return Err(DeckError::DuplicateName(name.to_string()));
        }

        info!(deck = name, "created deck");
        self.decks.insert(name.to_string(), DeckModel::new(name));
        self.current = name.to_string();
        Ok(self.current_mut())
    }

    /// Point at `name`, trimmed.
    ///
    /// Returns `false` when no such deck is stored; the current view is
    /// then empty until something is added. A blank name leaves the
    /// current deck unchanged and returns `false`.
    pub fn switch_to(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            warn!("ignoring switch to a blank deck name");
            return false;
        }
        self.current = name.to_string();
        let known = self.decks.contains_key(name);
        if known {
            debug!(deck = name, "switched deck");
        } else {
            warn!(deck = name, "switched to unknown deck, showing empty view");
            self.scratch.set_name(name);
        }
        known
    }

    /// Point at `name`, failing if it is blank or not stored.
    pub fn try_switch_to(&mut self, name: &str) -> DeckResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyDeckName);
        }
        if !self.decks.contains_key(name) {
            return Err(DeckError::DeckNotFound(name.to_string()));
        }
        self.current = name.to_string();
        debug!(deck = name, "switched deck");
        Ok(())
    }

    /// Store `deck`, replacing any deck with the same name.
    ///
    /// Returns the replaced deck.
    pub fn replace_deck(&mut self, deck: DeckModel) -> Option<DeckModel> {
        debug!(deck = deck.name(), entries = deck.len(), "replacing deck");
        self.decks.insert(deck.name().to_string(), deck)
    }

    /// Write every deck and the current pointer to `storage`.
    pub fn persist<S: Storage + ?Sized>(
        &self,
        storage: &mut S,
        config: &BuilderConfig,
    ) -> DeckResult<()> {
        let payload: BTreeMap<&str, &[DeckEntry]> = self
            .decks
            .iter()
            .map(|(name, deck)| (name.as_str(), deck.entries()))
            .collect();
        let body = serde_json::to_string(&payload)?;
        storage.set(&config.decks_key, &body)?;
        storage.set(&config.current_deck_key, &self.current)?;
        debug!(decks = payload.len(), current = %self.current, "persisted registry");
        Ok(())
    }

    /// Read the registry back from `storage`.
    ///
    /// With nothing stored this is `DeckRegistry::new`. A missing default
    /// deck is re-created, and a current pointer naming a deck that is not
    /// stored falls back to the default deck.
    pub fn restore<S: Storage + ?Sized>(storage: &S, config: &BuilderConfig) -> DeckResult<Self> {
        let mut registry = Self::new(config);

        let Some(body) = storage.get(&config.decks_key)? else {
            info!("no stored decks, starting with an empty default deck");
            return Ok(registry);
        };

        let stored: BTreeMap<String, Vec<DeckEntry>> = serde_json::from_str(&body)?;
        for (name, entries) in stored {
            let deck = DeckModel::from_entries(name.clone(), entries);
            registry.decks.insert(name, deck);
        }

        if let Some(current) = storage.get(&config.current_deck_key)? {
            if registry.decks.contains_key(&current) {
                registry.current = current;
            } else {
                warn!(deck = %current, "stored current deck is missing, using default");
            }
        }

        info!(
            decks = registry.decks.len(),
            current = %registry.current,
            "restored registry"
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::ErrorKind;
    use crate::deck::MemoryStorage;

    fn config() -> BuilderConfig {
        BuilderConfig::default()
    }

    fn bolt() -> Card {
        Card::new("bolt", "Lightning Bolt", "Instant").with_cmc(1.0)
    }

    #[test]
    fn test_new_has_default() {
        let registry = DeckRegistry::new(&config());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.current_name(), "default");
        assert!(registry.current().is_empty());
        assert!(registry.current_is_stored());
    }

    #[test]
    fn test_create_deck() {
        let mut registry = DeckRegistry::new(&config());

        let deck = registry.create_deck("  Mono Red  ").unwrap();
        assert_eq!(deck.name(), "Mono Red");
        assert_eq!(registry.current_name(), "Mono Red");
        assert_eq!(registry.deck_names(), vec!["default", "Mono Red"]);
    }

    #[test]
    fn test_create_deck_rejects_bad_names() {
        let mut registry = DeckRegistry::new(&config());
        registry.create_deck("Burn").unwrap();

        let err = registry.create_deck("   ").unwrap_err();
        assert!(matches!(err, DeckError::EmptyDeckName));
        assert_eq!(err.kind(), ErrorKind::UserInput);

        assert!(matches!(
            registry.create_deck("Burn"),
            Err(DeckError::DuplicateName(name)) if name == "Burn"
        ));
        assert!(matches!(
            registry.create_deck("default"),
            Err(DeckError::DuplicateName(_))
        ));
        assert_eq!(registry.current_name(), "Burn");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_switch_to_unknown_gives_empty_view() {
        let mut registry = DeckRegistry::new(&config());
        registry.current_mut().add_card(&bolt());

        assert!(!registry.switch_to("Ghost"));
        assert_eq!(registry.current_name(), "Ghost");
        assert!(registry.current().is_empty());
        assert_eq!(registry.current().name(), "Ghost");
        assert!(!registry.current_is_stored());
        assert!(!registry.contains("Ghost"));

        registry.current_mut().add_card(&bolt());
        assert!(registry.contains("Ghost"));
        assert_eq!(registry.current().total_count(), 1);
    }

    #[test]
    fn test_switch_to_blank_name_keeps_current() {
        let mut registry = DeckRegistry::new(&config());
        registry.create_deck("Burn").unwrap();

        assert!(!registry.switch_to(""));
        assert!(!registry.switch_to("   "));
        assert_eq!(registry.current_name(), "Burn");

        registry.current_mut().add_card(&bolt());
        assert!(!registry.contains(""));
        assert_eq!(registry.get("Burn").unwrap().total_count(), 1);

        assert!(registry.switch_to("  Burn "));
        assert_eq!(registry.current_name(), "Burn");
        assert!(matches!(registry.try_switch_to(" "), Err(DeckError::EmptyDeckName)));
    }

    #[test]
    fn test_blank_current_falls_back_to_default() {
        let mut registry = DeckRegistry::new(&config());
        registry.current = " ".to_string();

        registry.current_mut().add_card(&bolt());

        assert_eq!(registry.current_name(), "default");
        assert!(!registry.contains(" "));
        assert_eq!(registry.get("default").unwrap().total_count(), 1);
    }

    #[test]
    fn test_try_switch_to_unknown_fails() {
        let mut registry = DeckRegistry::new(&config());
        let err = registry.try_switch_to("Ghost").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(registry.current_name(), "default");
    }

    #[test]
    fn test_switch_between_decks() {
        let mut registry = DeckRegistry::new(&config());
        registry.create_deck("Burn").unwrap().add_card(&bolt());

        assert!(registry.switch_to("default"));
        assert!(registry.current().is_empty());
        assert!(registry.switch_to("Burn"));
        assert_eq!(registry.current().total_count(), 1);
    }

    #[test]
    fn test_persist_restore_roundtrip() {
        let mut storage = MemoryStorage::new();
        let mut registry = DeckRegistry::new(&config());
        registry.create_deck("Burn").unwrap().add_copies(&bolt(), 4);
        registry.persist(&mut storage, &config()).unwrap();

        let restored = DeckRegistry::restore(&storage, &config()).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.current_name(), "Burn");
        assert_eq!(restored.current().total_count(), 4);
        assert_eq!(restored.current().entries()[0].card, bolt());
    }

    #[test]
    fn test_restore_first_run() {
        let storage = MemoryStorage::new();
        let registry = DeckRegistry::restore(&storage, &config()).unwrap();

        assert_eq!(registry.deck_names(), vec!["default"]);
        assert_eq!(registry.current_name(), "default");
    }

    #[test]
    fn test_restore_stale_pointer_and_missing_default() {
        let mut storage = MemoryStorage::new();
        storage.set("mtgDecks", r#"{"Burn": []}"#).unwrap();
        storage.set("currentDeckName", "Deleted").unwrap();

        let registry = DeckRegistry::restore(&storage, &config()).unwrap();
        assert_eq!(registry.current_name(), "default");
        assert!(registry.contains("default"));
        assert!(registry.contains("Burn"));
    }

    #[test]
    fn test_restore_corrupt_payload() {
        let mut storage = MemoryStorage::new();
        storage.set("mtgDecks", "not json").unwrap();

        let err = DeckRegistry::restore(&storage, &config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_replace_deck() {
        let mut registry = DeckRegistry::new(&config());
        registry.create_deck("Burn").unwrap().add_copies(&bolt(), 4);

        let mut fresh = DeckModel::new("Burn");
        fresh.add_card(&bolt());
        let old = registry.replace_deck(fresh).unwrap();

        assert_eq!(old.total_count(), 4);
        assert_eq!(registry.get("Burn").map(DeckModel::total_count), Some(1));
    }
}
