//! Card records as returned by the card search capability.
//!
//! A `Card` is an immutable snapshot of a card's printed attributes. The
//! per-deck quantity is not part of the card; it lives on
//! [`DeckEntry`](crate::deck::DeckEntry).
//!
//! The wire form is the search API's JSON record (`type_line`,
//! `mana_cost`, `cmc`, `oracle_text`, `image_uris`, `card_faces`). Missing
//! fields are accepted and normalized into explicit optional types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::{classify, CategoryBucket};
use super::color::{extract_colors, ManaColor};

/// Opaque card identifier assigned by the external source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Named image resolutions offered by the search API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Large,
    Normal,
    Small,
}

/// Preference order for grid and list thumbnails.
pub const THUMBNAIL_SIZES: &[ImageSize] = &[ImageSize::Normal, ImageSize::Small];

/// Preference order for the card detail view.
pub const DETAIL_SIZES: &[ImageSize] = &[ImageSize::Large, ImageSize::Normal];

/// Image URLs for one card or face. Any resolution may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
}

impl ImageSet {
    /// URL for one resolution.
    #[must_use]
    pub fn get(&self, size: ImageSize) -> Option<&str> {
        match size {
            ImageSize::Large => self.large.as_deref(),
            ImageSize::Normal => self.normal.as_deref(),
            ImageSize::Small => self.small.as_deref(),
        }
    }

    /// First available URL in preference order.
    #[must_use]
    pub fn first_of(&self, sizes: &[ImageSize]) -> Option<&str> {
        sizes.iter().find_map(|&size| self.get(size))
    }
}

/// One face of a multi-faced card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mana_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageSet>,
}

/// Where a card's images come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CardImages {
    /// No images at all.
    #[default]
    Absent,
    /// One image set for the whole card.
    Single(ImageSet),
    /// Per-face images (double-faced cards).
    PerFace(Vec<CardFace>),
}

impl CardImages {
    /// First available URL, trying the card-level set and then the first
    /// face for each size in order.
    #[must_use]
    pub fn url(&self, sizes: &[ImageSize]) -> Option<&str> {
        match self {
            CardImages::Absent => None,
            CardImages::Single(set) => set.first_of(sizes),
            CardImages::PerFace(faces) => faces
                .first()
                .and_then(|face| face.image_uris.as_ref())
                .and_then(|set| set.first_of(sizes)),
        }
    }
}

/// Immutable card snapshot.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::{Card, CategoryBucket};
///
/// let bolt = Card::new("bolt-1", "Lightning Bolt", "Instant")
///     .with_mana_cost("{R}")
///     .with_cmc(1.0);
///
/// assert_eq!(bolt.category(), CategoryBucket::Instants);
/// assert!(!bolt.is_land());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCard", into = "RawCard")]
pub struct Card {
    /// Identifier from the external source.
    pub id: CardId,

    /// Printed name.
    pub name: String,

    /// Free-text type line, e.g. "Artifact Creature — Construct".
    pub type_line: String,

    /// Mana cost in brace notation; empty for lands and most back faces.
    pub mana_cost: String,

    /// Converted mana cost.
    pub cmc: f64,

    /// Rules text.
    pub oracle_text: Option<String>,

    /// Image URLs.
    pub images: CardImages,
}

impl Card {
    /// Create a card with an empty cost and no images.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        type_line: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_line: type_line.into(),
            mana_cost: String::new(),
            cmc: 0.0,
            oracle_text: None,
            images: CardImages::Absent,
        }
    }

    #[must_use]
    pub fn with_mana_cost(mut self, mana_cost: impl Into<String>) -> Self {
        self.mana_cost = mana_cost.into();
        self
    }

    #[must_use]
    pub fn with_cmc(mut self, cmc: f64) -> Self {
        self.cmc = cmc.max(0.0);
        self
    }

    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_images(mut self, images: CardImages) -> Self {
        self.images = images;
        self
    }

    /// Category bucket of this card's type line.
    #[must_use]
    pub fn category(&self) -> CategoryBucket {
        classify(&self.type_line)
    }

    /// Whether the type line mentions "land" anywhere.
    ///
    /// Broader than `category() == Lands`: a land creature counts here.
    #[must_use]
    pub fn is_land(&self) -> bool {
        self.type_line.to_lowercase().contains("land")
    }

    /// Distinct colors in the mana cost, in order of first appearance.
    #[must_use]
    pub fn colors(&self) -> SmallVec<[ManaColor; 5]> {
        extract_colors(&self.mana_cost)
    }

    /// First available image URL for the given preference order.
    #[must_use]
    pub fn image_url(&self, sizes: &[ImageSize]) -> Option<&str> {
        self.images.url(sizes)
    }
}

/// Wire shape of a card record.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawCard {
    id: CardId,
    name: String,
    #[serde(default)]
    type_line: String,
    #[serde(default)]
    mana_cost: String,
    #[serde(default)]
    cmc: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    oracle_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_uris: Option<ImageSet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    card_faces: Vec<CardFace>,
}

impl From<RawCard> for Card {
    fn from(raw: RawCard) -> Self {
        let images = match (raw.image_uris, raw.card_faces) {
            (Some(set), _) => CardImages::Single(set),
            (None, faces) if !faces.is_empty() => CardImages::PerFace(faces),
            _ => CardImages::Absent,
        };
        Self {
            id: raw.id,
            name: raw.name,
            type_line: raw.type_line,
            mana_cost: raw.mana_cost,
            cmc: raw.cmc.max(0.0),
            oracle_text: raw.oracle_text,
            images,
        }
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        let (image_uris, card_faces) = match card.images {
            CardImages::Absent => (None, Vec::new()),
            CardImages::Single(set) => (Some(set), Vec::new()),
            CardImages::PerFace(faces) => (None, faces),
        };
        Self {
            id: card.id,
            name: card.name,
            type_line: card.type_line,
            mana_cost: card.mana_cost,
            cmc: card.cmc,
            oracle_text: card.oracle_text,
            image_uris,
            card_faces,
        }
    }
}
