//! Deck analytics: draw probabilities and opening-hand simulation.

pub mod hand;
pub mod probability;

pub use hand::{HandSample, HandSimulator};
pub use probability::{
    cards_seen_by_turn, cards_seen_with_hand, probability_by_turn, probability_by_turn_with_hand,
    probability_of_drawing, DrawOdds, Odds, ProbabilityTier,
};
