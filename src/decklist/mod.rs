//! Decklist text export and import.

pub mod codec;

pub use codec::{export, import, parse, DecklistLine, ImportOutcome, MAX_LINE_QUANTITY};
