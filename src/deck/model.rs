//! The deck model: a named multiset of cards with quantities.
//!
//! Each distinct card id has at most one `DeckEntry`; the entry's quantity
//! is the number of copies. There is deliberately no copy limit.
//!
//! Entry order is insertion order until `shuffle` permutes it. Display
//! code sorts by name itself (see `group_by_category`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::collation::compare_names;
use crate::cards::{Card, CardId, CategoryBucket};
use crate::core::DeckRng;

/// One (card, quantity) pair. `quantity` is always at least 1.
///
/// Serializes as the card record with a `quantity` field added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    #[serde(flatten)]
    pub card: Card,
    pub quantity: u32,
}

impl DeckEntry {
    /// Copies contributed to a total, weighted by cmc.
    fn weighted_cmc(&self) -> f64 {
        self.card.cmc * f64::from(self.quantity)
    }
}

/// A named deck.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::Card;
/// use rust_deckbuilder::deck::DeckModel;
///
/// let bolt = Card::new("bolt", "Lightning Bolt", "Instant").with_cmc(1.0);
/// let mut deck = DeckModel::new("Burn");
///
/// deck.add_card(&bolt);
/// deck.add_card(&bolt);
/// assert_eq!(deck.total_count(), 2);
/// assert_eq!(deck.len(), 1);
///
/// deck.remove_card(&bolt.id);
/// assert_eq!(deck.quantity_of(&bolt.id), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckModel {
    name: String,
    entries: Vec<DeckEntry>,
}

impl DeckModel {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Build a deck from stored entries, merging duplicate ids and
    /// dropping zero quantities.
    #[must_use]
    pub fn from_entries(name: impl Into<String>, entries: Vec<DeckEntry>) -> Self {
        let mut deck = Self::new(name);
        for entry in entries {
            deck.add_copies(&entry.card, entry.quantity);
        }
        deck
    }

    /// Deck name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in current order.
    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Entry for a card id.
    #[must_use]
    pub fn entry(&self, id: &CardId) -> Option<&DeckEntry> {
        self.entries.iter().find(|e| &e.card.id == id)
    }

    /// Copies of a card in this deck (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, id: &CardId) -> u32 {
        self.entry(id).map_or(0, |e| e.quantity)
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the deck has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one copy of a card.
    pub fn add_card(&mut self, card: &Card) {
        self.add_copies(card, 1);
    }

    /// Add `count` copies of a card. Zero is a no-op.
    pub fn add_copies(&mut self, card: &Card, count: u32) {
        if count == 0 {
            return;
        }
        match self.entries.iter_mut().find(|e| e.card.id == card.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(count),
            None => self.entries.push(DeckEntry {
                card: card.clone(),
                quantity: count,
            }),
        }
    }

    /// Remove one copy of a card, deleting the entry at zero.
    ///
    /// Returns `false` if the card was not in the deck.
    pub fn remove_card(&mut self, id: &CardId) -> bool {
        let Some(index) = self.entries.iter().position(|e| &e.card.id == id) else {
            return false;
        };
        if self.entries[index].quantity > 1 {
            self.entries[index].quantity -= 1;
        } else {
            self.entries.remove(index);
        }
        true
    }

    /// Sum of quantities, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        sum_copies(self.entries.iter())
    }

    /// Copies whose card falls in `bucket`.
    #[must_use]
    pub fn copies_in_category(&self, bucket: CategoryBucket) -> u32 {
        sum_copies(self.entries.iter().filter(|e| e.card.category() == bucket))
    }

    /// Copies whose card does not fall in `bucket`.
    #[must_use]
    pub fn total_copies_excluding_category(&self, bucket: CategoryBucket) -> u32 {
        sum_copies(self.entries.iter().filter(|e| e.card.category() != bucket))
    }

    /// Copies whose type line mentions "land".
    #[must_use]
    pub fn land_count(&self) -> u32 {
        sum_copies(self.entries.iter().filter(|e| e.card.is_land()))
    }

    /// Average cmc weighted by quantity, 0 for an empty subset.
    ///
    /// With `exclude_lands`, cards whose type line mentions "land" are
    /// left out.
    #[must_use]
    pub fn average_cmc(&self, exclude_lands: bool) -> f64 {
        let (total_cmc, copies) = self
            .entries
            .iter()
            .filter(|e| !(exclude_lands && e.card.is_land()))
            .fold((0.0, 0.0), |(cmc, n), e| {
                (cmc + e.weighted_cmc(), n + f64::from(e.quantity))
            });
        if copies == 0.0 {
            0.0
        } else {
            total_cmc / copies
        }
    }

    /// Suggested land count: `round(non-land average cmc * 10)`.
    ///
    /// A rule of thumb, not derived from any game rule.
    #[must_use]
    pub fn recommended_land_count(&self) -> u32 {
        (self.average_cmc(true) * 10.0).round() as u32
    }

    /// Entries grouped by category, every bucket present, each list
    /// sorted by card name.
    #[must_use]
    pub fn group_by_category(&self) -> BTreeMap<CategoryBucket, Vec<&DeckEntry>> {
        let mut groups: BTreeMap<CategoryBucket, Vec<&DeckEntry>> = CategoryBucket::ALL
            .iter()
            .map(|&bucket| (bucket, Vec::new()))
            .collect();
        for entry in &self.entries {
            groups.entry(entry.card.category()).or_default().push(entry);
        }
        for list in groups.values_mut() {
            list.sort_by(|a, b| compare_names(&a.card.name, &b.card.name));
        }
        groups
    }

    /// Uniformly permute the entries in place.
    ///
    /// Distinct cards move; copies are not tracked individually.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        rng.shuffle(&mut self.entries);
    }

    /// Rename the deck.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Sum of entry quantities, saturating at `u32::MAX`.
pub(crate) fn sum_copies<'a>(entries: impl IntoIterator<Item = &'a DeckEntry>) -> u32 {
    entries
        .into_iter()
        .fold(0u32, |total, e| total.saturating_add(e.quantity))
}
