//! Mana colors read from a mana cost string.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The five colors, in WUBRG order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ManaColor {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl ManaColor {
    /// Every color, in WUBRG order.
    pub const ALL: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    /// Color for a pip letter.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(ManaColor::White),
            'U' => Some(ManaColor::Blue),
            'B' => Some(ManaColor::Black),
            'R' => Some(ManaColor::Red),
            'G' => Some(ManaColor::Green),
            _ => None,
        }
    }

    /// Pip letter.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            ManaColor::White => 'W',
            ManaColor::Blue => 'U',
            ManaColor::Black => 'B',
            ManaColor::Red => 'R',
            ManaColor::Green => 'G',
        }
    }
}

/// Distinct colors appearing in a mana cost, in order of first appearance.
///
/// Any W/U/B/R/G letter counts, so hybrid and Phyrexian pips
/// (`{W/U}`, `{G/P}`) contribute their colors.
#[must_use]
pub fn extract_colors(mana_cost: &str) -> SmallVec<[ManaColor; 5]> {
    let mut colors = SmallVec::new();
    for color in mana_cost.chars().filter_map(ManaColor::from_symbol) {
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        for color in ManaColor::ALL {
            assert_eq!(ManaColor::from_symbol(color.symbol()), Some(color));
        }
        assert_eq!(ManaColor::from_symbol('C'), None);
        assert_eq!(ManaColor::from_symbol('w'), None);
    }

    #[test]
    fn test_extract_colors() {
        assert!(extract_colors("").is_empty());
        assert!(extract_colors("{3}").is_empty());
        assert_eq!(extract_colors("{R}").as_slice(), &[ManaColor::Red]);
        assert_eq!(
            extract_colors("{2}{U}{U}{B}").as_slice(),
            &[ManaColor::Blue, ManaColor::Black]
        );
        assert_eq!(
            extract_colors("{G/W}{G/P}").as_slice(),
            &[ManaColor::Green, ManaColor::White]
        );
    }
}
