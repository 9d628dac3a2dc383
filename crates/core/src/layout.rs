//! Stripe layout engine.
//!
//! Turns a [`RibbonShape`] into an ordered list of [`Band`]s along the
//! shape's principal axis. All lengths are in ribbon units; the renderer
//! applies its scale factor afterwards.
//!
//! Recipes are validated here: a layout that does not exactly cover the
//! ribbon is an error, never a silently malformed picture.

use crate::color::Color;
use crate::error::LayoutError;
use crate::shape::{RibbonShape, StripeSegment, StripeWidth};
use serde::Serialize;
use std::iter;
use tracing::debug;

/// Ribbon width in units.
pub const RIBBON_WIDTH: f64 = 35.0;
/// Ribbon height in units.
pub const RIBBON_HEIGHT: f64 = 9.0;

/// Slack allowed when comparing accumulated widths against the extent.
const TOLERANCE: f64 = 1e-6;

/// Shortest horizontal tile. Bounds the band count of a tiled ribbon.
pub const MIN_TILE_LENGTH: f64 = 0.01;

/// Fixed ribbon dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RibbonDims {
    pub width: f64,
    pub height: f64,
}

impl RibbonDims {
    pub const STANDARD: RibbonDims = RibbonDims {
        width: RIBBON_WIDTH,
        height: RIBBON_HEIGHT,
    };

    /// Length of the ribbon along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

impl Default for RibbonDims {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Direction in which bands advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Bands are laid left to right (vertical stripes).
    Horizontal,
    /// Bands are laid top to bottom (horizontal stripes).
    Vertical,
}

/// One contiguous colored band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub color: Color,
    pub offset: f64,
    pub length: f64,
}

/// A validated band layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub axis: Axis,
    pub bands: Vec<Band>,
}

impl Layout {
    /// Sum of all band lengths.
    pub fn total_length(&self) -> f64 {
        self.bands.iter().map(|b| b.length).sum()
    }
}

/// Compute the band layout of `shape` on a ribbon of size `dims`.
pub fn layout(shape: &RibbonShape, dims: RibbonDims) -> Result<Layout, LayoutError> {
    let axis = match shape {
        RibbonShape::Horizontal(_) => Axis::Vertical,
        _ => Axis::Horizontal,
    };
    let extent = dims.extent(axis);
    let bands = match shape {
        RibbonShape::Solid(color) => vec![Band {
            color: *color,
            offset: 0.0,
            length: extent,
        }],
        RibbonShape::Vertical(segments) => place(vertical_widths(segments, extent)?),
        RibbonShape::Mirror(segments) => place(mirror_widths(segments, extent)?),
        RibbonShape::Horizontal(segments) => tile(segments, extent)?,
    };
    Ok(Layout { axis, bands })
}

/// Lay widths end to end starting at offset 0.
fn place(widths: impl IntoIterator<Item = (Color, f64)>) -> Vec<Band> {
    let mut offset = 0.0;
    widths
        .into_iter()
        .map(|(color, length)| {
            let band = Band {
                color,
                offset,
                length,
            };
            offset += length;
            band
        })
        .collect()
}

/// Sum the explicit widths, rejecting any that are not finite and positive.
/// Open-ended segments contribute nothing.
fn explicit_total(segments: &[StripeSegment]) -> Result<f64, LayoutError> {
    let mut total = 0.0;
    for (index, segment) in segments.iter().enumerate() {
        if let StripeWidth::Fixed(width) = segment.width {
            if !(width.is_finite() && width > 0.0) {
                return Err(LayoutError::InvalidWidth { index, width });
            }
            total += width;
        }
    }
    Ok(total)
}

fn vertical_widths(
    segments: &[StripeSegment],
    extent: f64,
) -> Result<Vec<(Color, f64)>, LayoutError> {
    if segments.is_empty() {
        return Err(LayoutError::EmptyRecipe);
    }
    let explicit = explicit_total(segments)?;
    let fills = segments.iter().filter(|s| s.width.is_fill()).count();

    let remainder = match fills {
        0 => {
            if (explicit - extent).abs() > TOLERANCE {
                if explicit < extent {
                    return Err(LayoutError::NoFillRemainder {
                        shortfall: extent - explicit,
                    });
                }
                return Err(LayoutError::WidthMismatch {
                    expected: extent,
                    actual: explicit,
                });
            }
            0.0
        }
        1 => {
            let remainder = extent - explicit;
            if remainder <= TOLERANCE {
                return Err(LayoutError::WidthMismatch {
                    expected: extent,
                    actual: explicit,
                });
            }
            remainder
        }
        count => return Err(LayoutError::MultipleFillRemainder { count }),
    };

    Ok(segments
        .iter()
        .map(|s| match s.width {
            StripeWidth::Fixed(width) => (s.color, width),
            StripeWidth::FillRemainder => (s.color, remainder),
        })
        .collect())
}

fn mirror_widths(
    segments: &[StripeSegment],
    extent: f64,
) -> Result<Vec<(Color, f64)>, LayoutError> {
    let (center, sides) = segments.split_last().ok_or(LayoutError::EmptyRecipe)?;

    // The center is always open-ended, so any fill on a side is one too many.
    let side_fills = sides.iter().filter(|s| s.width.is_fill()).count();
    if side_fills > 0 {
        return Err(LayoutError::MultipleFillRemainder {
            count: side_fills + 1,
        });
    }

    let side_total = explicit_total(sides)?;
    let center_width = extent - 2.0 * side_total;
    if center_width <= TOLERANCE {
        return Err(LayoutError::WidthMismatch {
            expected: extent,
            actual: 2.0 * side_total,
        });
    }
    if let StripeWidth::Fixed(hint) = center.width
        && (hint - center_width).abs() > TOLERANCE
    {
        debug!(hint, computed = center_width, "Mirror center width hint ignored");
    }

    let side = sides.iter().map(|s| match s.width {
        StripeWidth::Fixed(width) => (s.color, width),
        StripeWidth::FillRemainder => unreachable!("side fills rejected above"),
    });
    Ok(side
        .clone()
        .chain(iter::once((center.color, center_width)))
        .chain(side.rev())
        .collect())
}

/// Repeat the recipe top to bottom until `extent` is covered, clipping the
/// final band.
fn tile(segments: &[StripeSegment], extent: f64) -> Result<Vec<Band>, LayoutError> {
    if segments.iter().any(|s| s.width.is_fill()) {
        return Err(LayoutError::FillRemainderInTile);
    }
    let total = explicit_total(segments)?;
    if total <= 0.0 {
        return Err(LayoutError::ZeroLengthRecipe);
    }
    for (index, segment) in segments.iter().enumerate() {
        if let StripeWidth::Fixed(width) = segment.width
            && width < MIN_TILE_LENGTH
        {
            return Err(LayoutError::TileTooShort {
                index,
                width,
                min: MIN_TILE_LENGTH,
            });
        }
    }

    let mut bands = Vec::new();
    let mut offset = 0.0;
    for segment in segments.iter().cycle() {
        let remaining = extent - offset;
        if remaining <= TOLERANCE {
            break;
        }
        let StripeWidth::Fixed(width) = segment.width else {
            unreachable!("tile fills rejected above");
        };
        let length = width.min(remaining);
        bands.push(Band {
            color: segment.color,
            offset,
            length,
        });
        offset += length;
    }
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(232, 17, 45);
    const GOLD: Color = Color::rgb(173, 155, 12);
    const BLUE: Color = Color::rgb(17, 33, 81);
    const WHITE: Color = Color::rgb(255, 255, 255);

    fn dims() -> RibbonDims {
        RibbonDims::STANDARD
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn solid_is_one_full_band() {
        let layout = layout(&RibbonShape::Solid(RED), dims()).unwrap();
        assert_eq!(layout.axis, Axis::Horizontal);
        assert_eq!(layout.bands.len(), 1);
        assert_eq!(layout.bands[0].offset, 0.0);
        assert_eq!(layout.bands[0].length, RIBBON_WIDTH);
    }

    #[test]
    fn vertical_offsets_accumulate() {
        let shape = RibbonShape::Vertical(vec![
            StripeSegment::fixed(GOLD, 2.0),
            StripeSegment::fixed(BLUE, 15.5),
            StripeSegment::fixed(WHITE, 15.5),
            StripeSegment::fixed(GOLD, 2.0),
        ]);
        let layout = layout(&shape, dims()).unwrap();
        let offsets: Vec<f64> = layout.bands.iter().map(|b| b.offset).collect();
        assert_eq!(offsets, vec![0.0, 2.0, 17.5, 33.0]);
        assert!(approx(layout.total_length(), RIBBON_WIDTH));
    }

    #[test]
    fn vertical_thirds_within_tolerance() {
        let third = RIBBON_WIDTH / 3.0;
        let shape = RibbonShape::Vertical(vec![
            StripeSegment::fixed(RED, third),
            StripeSegment::fixed(BLUE, third),
            StripeSegment::fixed(WHITE, third),
        ]);
        let layout = layout(&shape, dims()).unwrap();
        assert!(approx(layout.total_length(), RIBBON_WIDTH));
    }

    #[test]
    fn vertical_fill_takes_remainder() {
        let shape = RibbonShape::Vertical(vec![
            StripeSegment::fixed(RED, 5.0),
            StripeSegment::fill(WHITE),
            StripeSegment::fixed(RED, 5.0),
        ]);
        let layout = layout(&shape, dims()).unwrap();
        assert_eq!(layout.bands[1].length, 25.0);
        assert_eq!(layout.bands[2].offset, 30.0);
    }

    #[test]
    fn vertical_overfull_is_width_mismatch() {
        let shape = RibbonShape::Vertical(vec![
            StripeSegment::fixed(RED, 20.0),
            StripeSegment::fixed(BLUE, 20.0),
        ]);
        assert_eq!(
            layout(&shape, dims()),
            Err(LayoutError::WidthMismatch {
                expected: 35.0,
                actual: 40.0
            })
        );
    }

    #[test]
    fn vertical_underfull_without_fill() {
        let shape = RibbonShape::Vertical(vec![StripeSegment::fixed(RED, 30.0)]);
        assert!(matches!(
            layout(&shape, dims()),
            Err(LayoutError::NoFillRemainder { shortfall }) if approx(shortfall, 5.0)
        ));
    }

    #[test]
    fn vertical_fill_with_nothing_left() {
        let shape = RibbonShape::Vertical(vec![
            StripeSegment::fixed(RED, 35.0),
            StripeSegment::fill(BLUE),
        ]);
        assert!(matches!(
            layout(&shape, dims()),
            Err(LayoutError::WidthMismatch { .. })
        ));
    }

    #[test]
    fn vertical_two_fills_rejected() {
        let shape = RibbonShape::Vertical(vec![StripeSegment::fill(RED), StripeSegment::fill(BLUE)]);
        assert_eq!(
            layout(&shape, dims()),
            Err(LayoutError::MultipleFillRemainder { count: 2 })
        );
    }

    #[test]
    fn empty_vertical_rejected() {
        assert_eq!(
            layout(&RibbonShape::Vertical(vec![]), dims()),
            Err(LayoutError::EmptyRecipe)
        );
        assert_eq!(
            layout(&RibbonShape::Mirror(vec![]), dims()),
            Err(LayoutError::EmptyRecipe)
        );
    }

    #[test]
    fn negative_width_rejected() {
        let shape = RibbonShape::Vertical(vec![
            StripeSegment::fixed(RED, -1.0),
            StripeSegment::fill(BLUE),
        ]);
        assert_eq!(
            layout(&shape, dims()),
            Err(LayoutError::InvalidWidth {
                index: 0,
                width: -1.0
            })
        );
    }

    #[test]
    fn mirror_red_gold_scenario() {
        let shape = RibbonShape::Mirror(vec![
            StripeSegment::fixed(RED, 2.0),
            StripeSegment::fill(GOLD),
        ]);
        let layout = layout(&shape, dims()).unwrap();
        let bands: Vec<(Color, f64, f64)> = layout
            .bands
            .iter()
            .map(|b| (b.color, b.offset, b.length))
            .collect();
        assert_eq!(
            bands,
            vec![(RED, 0.0, 2.0), (GOLD, 2.0, 31.0), (RED, 33.0, 2.0)]
        );
    }

    #[test]
    fn mirror_is_symmetric() {
        let shape = RibbonShape::Mirror(vec![
            StripeSegment::fixed(RED, 4.0),
            StripeSegment::fixed(GOLD, 3.8),
            StripeSegment::fixed(RED, 2.0),
            StripeSegment::fixed(GOLD, 3.8),
            StripeSegment::fixed(RED, 2.0),
            StripeSegment::fixed(GOLD, 3.8),
        ]);
        let bands = layout(&shape, dims()).unwrap().bands;
        let n = bands.len();
        assert_eq!(n, 11);
        for i in 0..n {
            assert_eq!(bands[i].color, bands[n - 1 - i].color);
            assert!(approx(bands[i].length, bands[n - 1 - i].length));
        }
        assert!(approx(bands.iter().map(|b| b.length).sum::<f64>(), RIBBON_WIDTH));
    }

    #[test]
    fn mirror_center_hint_is_ignored() {
        let shape = RibbonShape::Mirror(vec![
            StripeSegment::fixed(GOLD, 2.0),
            StripeSegment::fixed(BLUE, 99.0),
        ]);
        let bands = layout(&shape, dims()).unwrap().bands;
        assert_eq!(bands[1].length, 31.0);
    }

    #[test]
    fn mirror_sides_too_wide() {
        let shape = RibbonShape::Mirror(vec![
            StripeSegment::fixed(GOLD, 17.5),
            StripeSegment::fill(BLUE),
        ]);
        assert_eq!(
            layout(&shape, dims()),
            Err(LayoutError::WidthMismatch {
                expected: 35.0,
                actual: 35.0
            })
        );
    }

    #[test]
    fn mirror_side_fill_rejected() {
        let shape = RibbonShape::Mirror(vec![StripeSegment::fill(GOLD), StripeSegment::fill(BLUE)]);
        assert_eq!(
            layout(&shape, dims()),
            Err(LayoutError::MultipleFillRemainder { count: 2 })
        );
    }

    #[test]
    fn horizontal_tiles_and_clips() {
        let shape = RibbonShape::Horizontal(vec![
            StripeSegment::fixed(BLUE, 3.0),
            StripeSegment::fixed(WHITE, 2.0),
        ]);
        let layout = layout(&shape, dims()).unwrap();
        assert_eq!(layout.axis, Axis::Vertical);
        let lengths: Vec<f64> = layout.bands.iter().map(|b| b.length).collect();
        assert_eq!(lengths, vec![3.0, 2.0, 3.0, 1.0]);
        assert_eq!(layout.total_length(), RIBBON_HEIGHT);
        let last = layout.bands.last().unwrap();
        assert_eq!(last.color, WHITE);
        assert_eq!(last.offset, 8.0);
    }

    #[test]
    fn horizontal_exact_fit_does_not_add_sliver() {
        let shape = RibbonShape::Horizontal(vec![StripeSegment::fixed(BLUE, 3.0)]);
        let bands = layout(&shape, dims()).unwrap().bands;
        assert_eq!(bands.len(), 3);
    }

    #[test]
    fn horizontal_longer_than_height() {
        let shape = RibbonShape::Horizontal(vec![
            StripeSegment::fixed(BLUE, 6.0),
            StripeSegment::fixed(WHITE, 6.0),
        ]);
        let bands = layout(&shape, dims()).unwrap().bands;
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[1].length, 3.0);
    }

    #[test]
    fn horizontal_degenerate_recipes() {
        assert_eq!(
            layout(&RibbonShape::Horizontal(vec![]), dims()),
            Err(LayoutError::ZeroLengthRecipe)
        );
        assert_eq!(
            layout(
                &RibbonShape::Horizontal(vec![StripeSegment::fill(BLUE)]),
                dims()
            ),
            Err(LayoutError::FillRemainderInTile)
        );
        assert!(matches!(
            layout(
                &RibbonShape::Horizontal(vec![StripeSegment::fixed(BLUE, 0.0)]),
                dims()
            ),
            Err(LayoutError::InvalidWidth { index: 0, .. })
        ));
    }

    #[test]
    fn horizontal_rejects_hairline_tiles() {
        let shape = RibbonShape::Horizontal(vec![
            StripeSegment::fixed(BLUE, 1.0),
            StripeSegment::fixed(WHITE, 1e-9),
        ]);
        assert_eq!(
            layout(&shape, dims()),
            Err(LayoutError::TileTooShort {
                index: 1,
                width: 1e-9,
                min: MIN_TILE_LENGTH,
            })
        );

        let shape = RibbonShape::Horizontal(vec![StripeSegment::fixed(BLUE, MIN_TILE_LENGTH)]);
        let bands = layout(&shape, dims()).unwrap().bands;
        assert!(bands.len() <= 900);
    }

    #[test]
    fn extent_by_axis() {
        assert_eq!(dims().extent(Axis::Horizontal), 35.0);
        assert_eq!(dims().extent(Axis::Vertical), 9.0);
    }
}
