//! Display-ready read models for the presentation layer.
//!
//! ## DeckView
//!
//! The current deck grouped by category, in display order:
//! - One `CategoryView` per non-empty bucket, cards sorted by name
//! - Per-card draw odds (opening hand and the configured turns), using
//!   the same hand size the hand simulator deals
//! - Deck totals and the non-land average cmc
//!
//! Views are snapshots. They own their data and do not track later edits.

use serde::Serialize;

use crate::analysis::DrawOdds;
use crate::cards::{CardId, CategoryBucket, DETAIL_SIZES, THUMBNAIL_SIZES};
use crate::deck::{sum_copies, DeckEntry, DeckModel};

/// One card as shown in the deck view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    pub type_line: String,
    /// Mana cost, or the cmc when the card has no printed cost.
    pub cost_label: String,
    pub quantity: u32,
    pub thumbnail_url: Option<String>,
    pub detail_url: Option<String>,
    pub odds: DrawOdds,
}

impl CardView {
    fn new(entry: &DeckEntry, deck_size: u32, hand_size: usize, turns: &[u32]) -> Self {
        let card = &entry.card;
        let cost_label = if card.mana_cost.is_empty() {
            card.cmc.to_string()
        } else {
            card.mana_cost.clone()
        };

        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            type_line: card.type_line.clone(),
            cost_label,
            quantity: entry.quantity,
            thumbnail_url: card.image_url(THUMBNAIL_SIZES).map(str::to_string),
            detail_url: card.image_url(DETAIL_SIZES).map(str::to_string),
            odds: DrawOdds::with_hand_size(entry.quantity, deck_size, hand_size, turns),
        }
    }
}

/// One category section.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryView {
    pub bucket: CategoryBucket,
    /// Copies in this category.
    pub count: u32,
    pub cards: Vec<CardView>,
}

/// The whole deck view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeckView {
    pub name: String,
    pub total_cards: u32,
    pub average_cmc_nonland: f64,
    pub categories: Vec<CategoryView>,
}

impl DeckView {
    /// Build the view of `deck`, with odds for an opening hand of
    /// `hand_size` and for each of `turns`.
    #[must_use]
    pub fn build(deck: &DeckModel, hand_size: usize, turns: &[u32]) -> Self {
        let deck_size = deck.total_count();
        let categories = deck
            .group_by_category()
            .into_iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(bucket, entries)| CategoryView {
                bucket,
                count: sum_copies(entries.iter().copied()),
                cards: entries
                    .into_iter()
                    .map(|entry| CardView::new(entry, deck_size, hand_size, turns))
                    .collect(),
            })
            .collect();

        Self {
            name: deck.name().to_string(),
            total_cards: deck_size,
            average_cmc_nonland: deck.average_cmc(true),
            categories,
        }
    }

    /// Section for `bucket`, if it has cards.
    #[must_use]
    pub fn category(&self, bucket: CategoryBucket) -> Option<&CategoryView> {
        self.categories.iter().find(|c| c.bucket == bucket)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
