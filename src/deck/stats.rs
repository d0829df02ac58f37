//! Aggregate deck statistics for the summary panel and charts.
//!
//! ## Charts
//!
//! - Mana curve: copies per cmc, with every cost at or above the cap
//!   sharing the last bar
//! - Color distribution: each distinct color in a card's mana cost adds
//!   the card's quantity; cards without colored pips count as colorless
//! - Type distribution: copies per category bucket

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::DeckModel;
use crate::cards::{CategoryBucket, ManaColor};

/// Copies per color, plus colorless.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDistribution {
    pub white: u32,
    pub blue: u32,
    pub black: u32,
    pub red: u32,
    pub green: u32,
    pub colorless: u32,
}

impl ColorDistribution {
    /// Count for one color.
    #[must_use]
    pub fn get(&self, color: ManaColor) -> u32 {
        match color {
            ManaColor::White => self.white,
            ManaColor::Blue => self.blue,
            ManaColor::Black => self.black,
            ManaColor::Red => self.red,
            ManaColor::Green => self.green,
        }
    }

    fn add(&mut self, color: ManaColor, copies: u32) {
        let slot = match color {
            ManaColor::White => &mut self.white,
            ManaColor::Blue => &mut self.blue,
            ManaColor::Black => &mut self.black,
            ManaColor::Red => &mut self.red,
            ManaColor::Green => &mut self.green,
        };
        *slot = slot.saturating_add(copies);
    }

    /// Counts in chart order: W, U, B, R, G, colorless.
    #[must_use]
    pub fn as_array(&self) -> [u32; 6] {
        [
            self.white,
            self.blue,
            self.black,
            self.red,
            self.green,
            self.colorless,
        ]
    }
}

/// Summary statistics for one deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Total copies.
    pub total_cards: u32,
    /// Average cmc over every card.
    pub average_cmc: f64,
    /// Average cmc over cards whose type line does not mention "land".
    pub average_cmc_nonland: f64,
    /// Copies whose type line mentions "land".
    pub land_count: u32,
    /// Copies per cmc, index = floored cmc; the last index is "cap+".
    pub mana_curve: Vec<u32>,
    pub colors: ColorDistribution,
    /// Copies per bucket, non-empty buckets only.
    pub types: BTreeMap<CategoryBucket, u32>,
}

impl DeckStats {
    /// Compute statistics with a mana curve capped at `curve_cap`.
    #[must_use]
    pub fn compute(deck: &DeckModel, curve_cap: u32) -> Self {
        let mut mana_curve = vec![0u32; curve_cap as usize + 1];
        let mut colors = ColorDistribution::default();
        let mut types = BTreeMap::new();

        for entry in deck.entries() {
            let card = &entry.card;

            let bucket = (card.cmc.floor() as u32).min(curve_cap) as usize;
            mana_curve[bucket] = mana_curve[bucket].saturating_add(entry.quantity);

            let card_colors = card.colors();
            if card_colors.is_empty() {
                colors.colorless = colors.colorless.saturating_add(entry.quantity);
            } else {
                for color in card_colors {
                    colors.add(color, entry.quantity);
                }
            }

            let count = types.entry(card.category()).or_insert(0u32);
            *count = count.saturating_add(entry.quantity);
        }

        Self {
            total_cards: deck.total_count(),
            average_cmc: deck.average_cmc(false),
            average_cmc_nonland: deck.average_cmc(true),
            land_count: deck.land_count(),
            mana_curve,
            colors,
            types,
        }
    }

    /// Mana-curve labels: "0", "1", …, "cap+".
    #[must_use]
    pub fn curve_labels(&self) -> Vec<String> {
        let last = self.mana_curve.len().saturating_sub(1);
        (0..self.mana_curve.len())
            .map(|i| {
                if i == last {
                    format!("{i}+")
                } else {
                    i.to_string()
                }
            })
            .collect()
    }
}
