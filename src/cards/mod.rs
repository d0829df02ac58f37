//! Card system: records, classification, colors, catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable snapshot from the search capability
//! - `CardImages`: Absent, single-set, or per-face image URLs
//! - `CategoryBucket`: Coarse type group from the type line
//! - `ManaColor`: Colors read from a mana cost
//! - `CardCatalog`: In-memory lookup by ID and name

pub mod catalog;
pub mod category;
pub mod color;
pub mod definition;

pub use catalog::CardCatalog;
pub use category::{classify, CategoryBucket};
pub use color::{extract_colors, ManaColor};
pub use definition::{
    Card, CardFace, CardId, CardImages, ImageSet, ImageSize, DETAIL_SIZES, THUMBNAIL_SIZES,
};
