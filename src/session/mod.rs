//! Application state and read models for the presentation layer.

pub mod builder;
pub mod view;

pub use builder::{DeckBuilder, ImportReport};
pub use view::{CardView, CategoryView, DeckView};
