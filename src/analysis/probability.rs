//! Draw probabilities.
//!
//! The chance of seeing at least one copy of a card is computed with the
//! independent-draw (binomial) model:
//!
//! ```text
//! P = 100 * (1 - (1 - copies / deck_size) ^ cards_seen)
//! ```
//!
//! Real draws are without replacement, so the exact answer is
//! hypergeometric. The binomial form slightly underestimates it and is
//! kept as an approximation on purpose.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::OPENING_HAND_SIZE;

/// Percentage chance (0..=100) of at least one copy among `cards_seen`.
///
/// ```
/// use rust_deckbuilder::analysis::probability_of_drawing;
///
/// let p = probability_of_drawing(4, 40, 7);
/// assert!((p - 52.17).abs() < 0.01);
/// assert_eq!(probability_of_drawing(0, 40, 7), 0.0);
/// ```
#[must_use]
pub fn probability_of_drawing(copies: u32, deck_size: u32, cards_seen: u32) -> f64 {
    if deck_size == 0 || copies == 0 {
        return 0.0;
    }
    let p = f64::from(copies) / f64::from(deck_size);
    let miss = (1.0 - p).max(0.0).powf(f64::from(cards_seen));
    (100.0 * (1.0 - miss)).clamp(0.0, 100.0)
}

/// Percentage chance of at least one copy by `turn` (1-indexed), with a
/// seven-card opening hand.
///
/// Turn 1 sees the opening hand only; each later turn draws one more card.
/// Turn 0 is treated as turn 1.
#[must_use]
pub fn probability_by_turn(copies: u32, deck_size: u32, turn: u32) -> f64 {
    probability_by_turn_with_hand(copies, deck_size, OPENING_HAND_SIZE, turn)
}

/// `probability_by_turn` for an opening hand of `hand_size` cards.
#[must_use]
pub fn probability_by_turn_with_hand(
    copies: u32,
    deck_size: u32,
    hand_size: usize,
    turn: u32,
) -> f64 {
    probability_of_drawing(copies, deck_size, cards_seen_with_hand(hand_size, turn))
}

/// Cards seen by the start of `turn`'s main phase, seven-card hand.
#[must_use]
pub fn cards_seen_by_turn(turn: u32) -> u32 {
    cards_seen_with_hand(OPENING_HAND_SIZE, turn)
}

/// Cards seen by `turn` after an opening hand of `hand_size`, saturating
/// at `u32::MAX`.
#[must_use]
pub fn cards_seen_with_hand(hand_size: usize, turn: u32) -> u32 {
    hand_cards(hand_size).saturating_add(turn.saturating_sub(1))
}

fn hand_cards(hand_size: usize) -> u32 {
    u32::try_from(hand_size).unwrap_or(u32::MAX)
}

/// Qualitative band for a probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbabilityTier {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ProbabilityTier {
    /// Band for a percentage: ≥70 high, ≥40 medium, ≥20 low, else very low.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            ProbabilityTier::High
        } else if percentage >= 40.0 {
            ProbabilityTier::Medium
        } else if percentage >= 20.0 {
            ProbabilityTier::Low
        } else {
            ProbabilityTier::VeryLow
        }
    }

    /// Stable key, used as a style class by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProbabilityTier::High => "high",
            ProbabilityTier::Medium => "medium",
            ProbabilityTier::Low => "low",
            ProbabilityTier::VeryLow => "very-low",
        }
    }
}

impl std::fmt::Display for ProbabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One probability with its band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    pub percentage: f64,
    pub tier: ProbabilityTier,
}

impl Odds {
    #[must_use]
    pub fn new(percentage: f64) -> Self {
        Self {
            percentage,
            tier: ProbabilityTier::from_percentage(percentage),
        }
    }
}

/// Odds of drawing a card in the opening hand and by each listed turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawOdds {
    pub opening_hand: Odds,
    pub by_turn: SmallVec<[(u32, Odds); 4]>,
}

impl DrawOdds {
    /// Odds for a card with `copies` in a deck of `deck_size`, seven-card
    /// opening hand.
    #[must_use]
    pub fn for_copies(copies: u32, deck_size: u32, turns: &[u32]) -> Self {
        Self::with_hand_size(copies, deck_size, OPENING_HAND_SIZE, turns)
    }

    /// Odds with an opening hand of `hand_size` cards.
    #[must_use]
    pub fn with_hand_size(copies: u32, deck_size: u32, hand_size: usize, turns: &[u32]) -> Self {
        let by_turn = turns
            .iter()
            .map(|&turn| {
                let p = probability_by_turn_with_hand(copies, deck_size, hand_size, turn);
                (turn, Odds::new(p))
            })
            .collect();
        Self {
            opening_hand: Odds::new(probability_of_drawing(
                copies,
                deck_size,
                hand_cards(hand_size),
            )),
            by_turn,
        }
    }

    /// Odds for one listed turn.
    #[must_use]
    pub fn turn(&self, turn: u32) -> Option<Odds> {
        self.by_turn
            .iter()
            .find(|(t, _)| *t == turn)
            .map(|&(_, odds)| odds)
    }
}
