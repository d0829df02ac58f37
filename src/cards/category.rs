//! Type-line classification into category buckets.
//!
//! A type line can mention several card types ("Artifact Creature",
//! "Land Creature"), so buckets are tested in a fixed priority order and
//! the first match wins.

use serde::{Deserialize, Serialize};

/// Coarse card category used for grouping and charts.
///
/// Variant order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryBucket {
    Creatures,
    Lands,
    Instants,
    Sorceries,
    Enchantments,
    Artifacts,
    Planeswalkers,
    Other,
}

impl CategoryBucket {
    /// Every bucket, in display order.
    pub const ALL: [CategoryBucket; 8] = [
        CategoryBucket::Creatures,
        CategoryBucket::Lands,
        CategoryBucket::Instants,
        CategoryBucket::Sorceries,
        CategoryBucket::Enchantments,
        CategoryBucket::Artifacts,
        CategoryBucket::Planeswalkers,
        CategoryBucket::Other,
    ];

    /// Stable lower-case key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryBucket::Creatures => "creatures",
            CategoryBucket::Lands => "lands",
            CategoryBucket::Instants => "instants",
            CategoryBucket::Sorceries => "sorceries",
            CategoryBucket::Enchantments => "enchantments",
            CategoryBucket::Artifacts => "artifacts",
            CategoryBucket::Planeswalkers => "planeswalkers",
            CategoryBucket::Other => "other",
        }
    }
}

impl std::fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword tested for each bucket, highest priority first.
const PRIORITY: [(&str, CategoryBucket); 7] = [
    ("creature", CategoryBucket::Creatures),
    ("land", CategoryBucket::Lands),
    ("instant", CategoryBucket::Instants),
    ("sorcery", CategoryBucket::Sorceries),
    ("enchantment", CategoryBucket::Enchantments),
    ("artifact", CategoryBucket::Artifacts),
    ("planeswalker", CategoryBucket::Planeswalkers),
];

/// Classify a type line.
///
/// ```
/// use rust_deckbuilder::cards::{classify, CategoryBucket};
///
/// assert_eq!(classify("Artifact Creature — Construct"), CategoryBucket::Creatures);
/// assert_eq!(classify("Basic Land — Forest"), CategoryBucket::Lands);
/// assert_eq!(classify("Tribal Kindred"), CategoryBucket::Other);
/// ```
#[must_use]
pub fn classify(type_line: &str) -> CategoryBucket {
    let lower = type_line.to_lowercase();
    PRIORITY
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(CategoryBucket::Other, |&(_, bucket)| bucket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_types() {
        assert_eq!(classify("Creature — Goblin"), CategoryBucket::Creatures);
        assert_eq!(classify("Instant"), CategoryBucket::Instants);
        assert_eq!(classify("Sorcery"), CategoryBucket::Sorceries);
        assert_eq!(classify("Enchantment — Aura"), CategoryBucket::Enchantments);
        assert_eq!(classify("Artifact — Equipment"), CategoryBucket::Artifacts);
        assert_eq!(
            classify("Legendary Planeswalker — Jace"),
            CategoryBucket::Planeswalkers
        );
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            classify("Artifact Creature — Construct"),
            CategoryBucket::Creatures
        );
        assert_eq!(classify("Basic Land — Forest"), CategoryBucket::Lands);
        assert_eq!(classify("Artifact Land"), CategoryBucket::Lands);
        assert_eq!(
            classify("Enchantment Creature — God"),
            CategoryBucket::Creatures
        );
        assert_eq!(
            classify("Legendary Enchantment Artifact"),
            CategoryBucket::Enchantments
        );
    }

    #[test]
    fn test_case_insensitive_and_other() {
        assert_eq!(classify("CREATURE"), CategoryBucket::Creatures);
        assert_eq!(classify(""), CategoryBucket::Other);
        assert_eq!(classify("Battle — Siege"), CategoryBucket::Other);
    }

    #[test]
    fn test_all_is_display_order() {
        let mut sorted = CategoryBucket::ALL;
        sorted.sort();
        assert_eq!(sorted, CategoryBucket::ALL);
        assert_eq!(CategoryBucket::Other.to_string(), "other");
    }
}
