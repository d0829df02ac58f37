//! Plain-text decklist format.
//!
//! ```text
//! # Burn
//!
//! 4 Lightning Bolt
//! 20 Mountain
//! ```
//!
//! Export writes a `# <deck name>` header, a blank line, then one
//! `<quantity> <card name>` line per entry. Import skips blank lines,
//! `#` comments and anything not shaped like `<quantity> <name>`.
//! Lines asking for more than `MAX_LINE_QUANTITY` copies are skipped.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::core::{DeckError, DeckResult};
use crate::deck::DeckModel;
use crate::search::CardResolver;

/// Largest quantity accepted on one decklist line.
pub const MAX_LINE_QUANTITY: u32 = 9_999;

fn line_regex() -> &'static Regex {
    static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^(\d+)\s+(.+)$").unwrap()
    });
    &LINE_REGEX
}

/// One parsed `<quantity> <name>` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecklistLine {
    pub quantity: u32,
    pub name: String,
}

/// Render `deck` as decklist text.
///
/// ```
/// use rust_deckbuilder::cards::Card;
/// use rust_deckbuilder::deck::DeckModel;
/// use rust_deckbuilder::decklist::export;
///
/// let mut deck = DeckModel::new("Burn");
/// deck.add_copies(&Card::new("bolt", "Lightning Bolt", "Instant"), 4);
///
/// assert_eq!(export(&deck), "# Burn\n\n4 Lightning Bolt\n");
/// ```
#[must_use]
pub fn export(deck: &DeckModel) -> String {
    let mut text = format!("# {}\n\n", deck.name());
    for entry in deck.entries() {
        text.push_str(&format!("{} {}\n", entry.quantity, entry.card.name));
    }
    text
}

/// Parse decklist text into lines, in order.
///
/// Zero quantities and quantities above `MAX_LINE_QUANTITY` are skipped.
#[must_use]
pub fn parse(text: &str) -> Vec<DecklistLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<DecklistLine> {
    let caps = line_regex().captures(line)?;
    let name = caps[2].trim();
    let quantity = match caps[1].parse::<u32>() {
        Ok(quantity) if quantity <= MAX_LINE_QUANTITY => quantity,
        _ => {
            warn!(line, max = MAX_LINE_QUANTITY, "skipping decklist line with oversized quantity");
            return None;
        }
    };
    if quantity == 0 || name.is_empty() {
        debug!(line, "skipping decklist line");
        return None;
    }
    Some(DecklistLine {
        quantity,
        name: name.to_string(),
    })
}

/// Result of a decklist import.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportOutcome {
    /// The new deck. Not yet stored anywhere.
    pub deck: DeckModel,
    /// Names that could not be resolved, one per failed line.
    pub unresolved: Vec<String>,
}

impl ImportOutcome {
    /// Check if every line resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Build a deck named `deck_name` from decklist `text`.
///
/// Names are resolved one at a time, in line order, and each distinct
/// name is looked up once. A resolver error counts as an unresolved line.
///
/// # Errors
///
/// - `EmptyImportText` if `text` is blank.
/// - `EmptyDeckName` if `deck_name` is blank.
/// - `EmptyImport` if no line resolved.
pub async fn import<R>(text: &str, deck_name: &str, resolver: &R) -> DeckResult<ImportOutcome>
where
    R: CardResolver + ?Sized,
{
    if text.trim().is_empty() {
        return Err(DeckError::EmptyImportText);
    }
    let deck_name = deck_name.trim();
    if deck_name.is_empty() {
        return Err(DeckError::EmptyDeckName);
    }

    let lines = parse(text);
    let mut deck = DeckModel::new(deck_name);
    let mut unresolved = Vec::new();
    let mut cache: FxHashMap<String, Option<Card>> = FxHashMap::default();

    for line in &lines {
        let key = line.name.to_lowercase();
        let card = match cache.get(&key) {
            Some(cached) => cached.clone(),
            None => {
                let resolved = match resolver.resolve(&line.name).await {
                    Ok(card) => card,
                    Err(err) => {
                        warn!(name = %line.name, error = %err, "card lookup failed");
                        None
                    }
                };
                cache.insert(key, resolved.clone());
                resolved
            }
        };

        match card {
            Some(card) => deck.add_copies(&card, line.quantity),
            None => {
                warn!(name = %line.name, "unresolved decklist line");
                unresolved.push(line.name.clone());
            }
        }
    }

    if deck.is_empty() {
        return Err(DeckError::EmptyImport { unresolved });
    }

    info!(
        deck = deck_name,
        lines = lines.len(),
        cards = deck.total_count(),
        unresolved = unresolved.len(),
        "imported decklist"
    );
    Ok(ImportOutcome { deck, unresolved })
}
