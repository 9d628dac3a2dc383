//! Color name resolution.

use ribbonboard_core::{Color, Metal};
use std::collections::BTreeMap;

/// Resolves the color strings used in catalog files.
///
/// A color is either a palette name (`"royal_blue"`), a metal token
/// (`"metal:gold"`), or a hex triple (`"#aabbcc"`).
#[derive(Debug, Clone, Default)]
pub struct Palette {
    named: BTreeMap<String, Color>,
}

impl Palette {
    pub fn new(named: &BTreeMap<String, [u8; 3]>) -> Self {
        Self {
            named: named
                .iter()
                .map(|(name, rgb)| (name.clone(), Color::from(*rgb)))
                .collect(),
        }
    }

    /// Resolve a color string. Returns `None` if it names nothing.
    pub fn resolve(&self, color: &str) -> Option<Color> {
        if let Some(metal) = color.strip_prefix("metal:") {
            return Metal::parse(metal).map(Color::Metal);
        }
        if let Some(hex) = color.strip_prefix('#') {
            return parse_hex(hex);
        }
        self.named.get(color).copied()
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        let mut named = BTreeMap::new();
        named.insert("crimson".to_string(), [175, 30, 45]);
        Palette::new(&named)
    }

    #[test]
    fn resolves_names() {
        assert_eq!(palette().resolve("crimson"), Some(Color::rgb(175, 30, 45)));
        assert_eq!(palette().resolve("mauve"), None);
        assert_eq!(palette().len(), 1);
    }

    #[test]
    fn resolves_metals() {
        assert_eq!(
            palette().resolve("metal:bronze"),
            Some(Color::Metal(Metal::Bronze))
        );
        assert_eq!(palette().resolve("metal:tin"), None);
    }

    #[test]
    fn resolves_hex() {
        assert_eq!(palette().resolve("#1a2732"), Some(Color::rgb(26, 39, 50)));
        assert_eq!(palette().resolve("#1a27"), None);
        assert_eq!(palette().resolve("#zz2732"), None);
    }
}
