//! Opening-hand simulation.

use crate::cards::Card;
use crate::core::{DeckRng, OPENING_HAND_SIZE};
use crate::deck::DeckModel;

/// Deals random hands from a deck.
///
/// Stateless apart from the hand size. Each draw picks uniformly among
/// the copies still in the library, so a hand costs one pass over the
/// entries per card no matter how many copies the deck holds. The deck
/// itself is never modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandSimulator {
    hand_size: usize,
}

impl Default for HandSimulator {
    fn default() -> Self {
        Self::new(OPENING_HAND_SIZE)
    }
}

impl HandSimulator {
    #[must_use]
    pub fn new(hand_size: usize) -> Self {
        Self { hand_size }
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Deal one hand of `min(hand_size, total copies)` cards.
    #[must_use]
    pub fn draw_opening_hand<'a>(&self, deck: &'a DeckModel, rng: &mut DeckRng) -> HandSample<'a> {
        let entries = deck.entries();
        let mut remaining: Vec<u64> = entries.iter().map(|e| u64::from(e.quantity)).collect();
        let mut left: u64 = remaining.iter().sum();

        let mut cards = Vec::new();
        while cards.len() < self.hand_size && left > 0 {
            let mut pick = rng.gen_below(left);
            for (entry, count) in entries.iter().zip(remaining.iter_mut()) {
                if pick < *count {
                    *count -= 1;
                    cards.push(&entry.card);
                    break;
                }
                pick -= *count;
            }
            left -= 1;
        }
        HandSample { cards }
    }
}

/// A dealt hand, borrowing cards from the deck.
#[derive(Clone, Debug, PartialEq)]
pub struct HandSample<'a> {
    cards: Vec<&'a Card>,
}

impl<'a> HandSample<'a> {
    #[must_use]
    pub fn cards(&self) -> &[&'a Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards whose type line mentions "land".
    #[must_use]
    pub fn land_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_land()).count()
    }

    /// Owned copies of the dealt cards.
    #[must_use]
    pub fn to_cards(&self) -> Vec<Card> {
        self.cards.iter().map(|&c| c.clone()).collect()
    }
}
