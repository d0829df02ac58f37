//! Card-search query building.
//!
//! Filters are rendered into the search service's query language, one
//! fragment per active filter group, joined by single spaces in a fixed
//! order: type, color, cmc, rarity, keyword, format, legendary.
//!
//! | Filter | Fragment |
//! |---|---|
//! | type | `t:creature` |
//! | color | `c:r` |
//! | cmc | `cmc:3`, or `cmc>=6` for "6+" |
//! | rarity | `r:rare`, or `(r:rare OR r:mythic)` |
//! | keyword | `keyword:flying`, or `(keyword:flying OR keyword:haste)` |
//! | format | `f:modern`; pauper becomes `r:common` |
//! | legendary | `is:legendary` |

use serde::{Deserialize, Serialize};

/// Converted-mana-cost filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmcFilter {
    Exactly(u32),
    AtLeast(u32),
}

impl CmcFilter {
    /// Parse a selector value: `"3"` or `"6+"`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value.strip_suffix('+') {
            Some(n) => n.trim().parse().ok().map(CmcFilter::AtLeast),
            None => value.parse().ok().map(CmcFilter::Exactly),
        }
    }

    fn fragment(self) -> String {
        match self {
            CmcFilter::Exactly(n) => format!("cmc:{n}"),
            CmcFilter::AtLeast(n) => format!("cmc>={n}"),
        }
    }
}

/// Printed rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Rarity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Mythic => "mythic",
        }
    }
}

/// Format whose legality filter is expressed through rarity instead.
const PAUPER: &str = "pauper";

/// Search filters selected in the UI.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::search::{CmcFilter, Rarity, SearchFilters};
///
/// let filters = SearchFilters::new()
///     .with_type("creature")
///     .with_cmc(CmcFilter::AtLeast(6))
///     .with_rarity(Rarity::Rare)
///     .with_rarity(Rarity::Mythic);
///
/// assert_eq!(filters.build(), "t:creature cmc>=6 (r:rare OR r:mythic)");
/// assert_eq!(filters.active_count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub card_type: Option<String>,
    pub color: Option<String>,
    pub cmc: Option<CmcFilter>,
    pub rarities: Vec<Rarity>,
    pub keywords: Vec<String>,
    pub format: Option<String>,
    pub legendary: bool,
}

impl SearchFilters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_cmc(mut self, cmc: CmcFilter) -> Self {
        self.cmc = Some(cmc);
        self
    }

    /// Add a rarity; duplicates are ignored.
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        if !self.rarities.contains(&rarity) {
            self.rarities.push(rarity);
        }
        self
    }

    /// Add a keyword; blanks and duplicates are ignored.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        if !keyword.trim().is_empty() && !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn legendary(mut self) -> Self {
        self.legendary = true;
        self
    }

    /// Reset every filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of active filter groups (multi-selects count once).
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            set(&self.card_type).is_some(),
            set(&self.color).is_some(),
            self.cmc.is_some(),
            !self.rarities.is_empty(),
            !self.keywords.is_empty(),
            set(&self.format).is_some(),
            self.legendary,
        ]
        .iter()
        .filter(|&&active| active)
        .count()
    }

    /// Check if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Render the filters as a query string; empty when none are active.
    #[must_use]
    pub fn build(&self) -> String {
        let mut fragments = Vec::new();

        if let Some(card_type) = set(&self.card_type) {
            fragments.push(format!("t:{card_type}"));
        }
        if let Some(color) = set(&self.color) {
            fragments.push(format!("c:{color}"));
        }
        if let Some(cmc) = self.cmc {
            fragments.push(cmc.fragment());
        }
        if let Some(group) = any_of("r", self.rarities.iter().map(|r| r.as_str())) {
            fragments.push(group);
        }
        if let Some(group) = any_of("keyword", self.keywords.iter().map(String::as_str)) {
            fragments.push(group);
        }
        if let Some(format) = set(&self.format) {
            if format.eq_ignore_ascii_case(PAUPER) {
                fragments.push("r:common".to_string());
            } else {
                fragments.push(format!("f:{format}"));
            }
        }
        if self.legendary {
            fragments.push("is:legendary".to_string());
        }

        fragments.join(" ")
    }
}

/// Combine free text with filters. `None` when both are empty.
///
/// ```
/// use rust_deckbuilder::search::{compose_query, SearchFilters};
///
/// let filters = SearchFilters::new().with_color("r");
/// assert_eq!(compose_query(" bolt ", &filters).as_deref(), Some("bolt c:r"));
/// assert_eq!(compose_query("", &SearchFilters::new()), None);
/// ```
#[must_use]
pub fn compose_query(text: &str, filters: &SearchFilters) -> Option<String> {
    let text = text.trim();
    let filters = filters.build();
    match (text.is_empty(), filters.is_empty()) {
        (true, true) => None,
        (true, false) => Some(filters),
        (false, true) => Some(text.to_string()),
        (false, false) => Some(format!("{text} {filters}")),
    }
}

/// A trimmed, non-empty option value.
fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `field:a`, or `(field:a OR field:b ...)` for several values.
fn any_of<'a>(field: &str, values: impl Iterator<Item = &'a str>) -> Option<String> {
    let terms: Vec<String> = values.map(|v| format!("{field}:{v}")).collect();
    match terms.len() {
        0 => None,
        1 => terms.into_iter().next(),
        _ => Some(format!("({})", terms.join(" OR "))),
    }
}
