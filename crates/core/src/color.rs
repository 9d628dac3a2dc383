//! Ribbon colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A band color. Colors are passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Rgb(u8, u8, u8),
    Metal(Metal),
}

/// Named metallic finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metal {
    Gold,
    Silver,
    Bronze,
}

impl Metal {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "gold" => Some(Metal::Gold),
            "silver" => Some(Metal::Silver),
            "bronze" => Some(Metal::Bronze),
            _ => None,
        }
    }

    /// CSS color value of the finish.
    pub fn css(self) -> &'static str {
        match self {
            Metal::Gold => "#cfb53b",
            Metal::Silver => "#c0c0c0",
            Metal::Bronze => "#a05a2c",
        }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// CSS color value, e.g. `rgb(173, 155, 12)`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<Metal> for Color {
    fn from(metal: Metal) -> Self {
        Color::Metal(metal)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
            Color::Metal(metal) => f.write_str(metal.css()),
        }
    }
}
