//! Stripe recipes and ribbon shapes.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Width of one stripe segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripeWidth {
    Fixed(f64),
    /// Takes whatever the explicit widths leave of the extent.
    FillRemainder,
}

impl StripeWidth {
    pub fn is_fill(&self) -> bool {
        matches!(self, StripeWidth::FillRemainder)
    }
}

/// One colored segment of a stripe recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripeSegment {
    pub color: Color,
    pub width: StripeWidth,
}

impl StripeSegment {
    pub fn fixed(color: impl Into<Color>, width: f64) -> Self {
        Self {
            color: color.into(),
            width: StripeWidth::Fixed(width),
        }
    }

    pub fn fill(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            width: StripeWidth::FillRemainder,
        }
    }
}

/// How a ribbon's colors are arranged.
///
/// - `Solid` — a single color across the whole ribbon.
/// - `Vertical` — vertical stripes left to right, in recipe order.
/// - `Mirror` — one side of a symmetric ribbon; the last segment is the
///   center stripe and the other side is its reflection.
/// - `Horizontal` — horizontal stripes top to bottom, the recipe repeated
///   as a tile until the ribbon height is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RibbonShape {
    Solid(Color),
    Vertical(Vec<StripeSegment>),
    Mirror(Vec<StripeSegment>),
    Horizontal(Vec<StripeSegment>),
}

impl RibbonShape {
    /// Short lowercase name of the shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RibbonShape::Solid(_) => "solid",
            RibbonShape::Vertical(_) => "vertical",
            RibbonShape::Mirror(_) => "mirror",
            RibbonShape::Horizontal(_) => "horizontal",
        }
    }
}
