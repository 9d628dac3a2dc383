//! Ribbon boards: collapsed entries broken into centered rows.

use crate::RenderOptions;
use crate::svg::write_ribbon;
use ribbonboard_core::RibbonEntry;

/// Row rules for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Boards with at least this many entries use `wide_columns`.
    pub wide_threshold: usize,
    pub narrow_columns: usize,
    pub wide_columns: usize,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            wide_threshold: 12,
            narrow_columns: 3,
            wide_columns: 4,
        }
    }
}

impl BoardLayout {
    /// Row width for a board of `len` entries.
    pub fn columns(&self, len: usize) -> usize {
        let columns = if len >= self.wide_threshold {
            self.wide_columns
        } else {
            self.narrow_columns
        };
        columns.max(1)
    }
}

/// Split entries into rows, most senior first. Every row is full except the
/// first, which takes the remainder.
pub fn board_rows<'e, T>(entries: &'e [T], layout: &BoardLayout) -> Vec<&'e [T]> {
    let width = layout.columns(entries.len());
    let (first, rest) = entries.split_at(entries.len() % width);
    let mut rows = Vec::with_capacity(rest.len() / width + 1);
    if !first.is_empty() {
        rows.push(first);
    }
    rows.extend(rest.chunks(width));
    rows
}

/// `<div class="ribbon-board">` with one `<div>` per row.
pub fn board_html(entries: &[RibbonEntry<'_>], layout: &BoardLayout, opts: &RenderOptions) -> String {
    let mut out = String::from(r#"<div class="ribbon-board">"#);
    for row in board_rows(entries, layout) {
        out.push_str("<div>");
        for entry in row {
            write_ribbon(&mut out, entry.ribbon(), entry.count(), opts, false);
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribbonboard_core::{Color, Ribbon, RibbonShape, collapse};
    use std::collections::HashMap;

    fn lens(rows: &[&[u32]]) -> Vec<usize> {
        rows.iter().map(|r| r.len()).collect()
    }

    #[test]
    fn narrow_boards_put_remainder_first() {
        let layout = BoardLayout::default();
        let entries: Vec<u32> = (0..5).collect();
        let rows = board_rows(&entries, &layout);
        assert_eq!(lens(&rows), vec![2, 3]);
        assert_eq!(rows[0], &[0, 1]);
    }

    #[test]
    fn full_rows_have_no_empty_first_row() {
        let layout = BoardLayout::default();
        let entries: Vec<u32> = (0..6).collect();
        assert_eq!(lens(&board_rows(&entries, &layout)), vec![3, 3]);
    }

    #[test]
    fn wide_boards_switch_at_threshold() {
        let layout = BoardLayout::default();
        let eleven: Vec<u32> = (0..11).collect();
        assert_eq!(lens(&board_rows(&eleven, &layout)), vec![2, 3, 3, 3]);
        let thirteen: Vec<u32> = (0..13).collect();
        assert_eq!(lens(&board_rows(&thirteen, &layout)), vec![1, 4, 4, 4]);
    }

    #[test]
    fn empty_board_has_no_rows() {
        let rows = board_rows::<u32>(&[], &BoardLayout::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn zero_columns_treated_as_one() {
        let layout = BoardLayout {
            wide_threshold: 12,
            narrow_columns: 0,
            wide_columns: 0,
        };
        let entries: Vec<u32> = (0..3).collect();
        assert_eq!(lens(&board_rows(&entries, &layout)), vec![1, 1, 1]);
    }

    #[test]
    fn board_html_wraps_rows() {
        let catalog: HashMap<String, Ribbon> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, code)| {
                let ribbon = Ribbon::new(
                    *code,
                    Some(i as u32),
                    *code,
                    RibbonShape::Solid(Color::rgb(0, 0, 0)),
                )
                .unwrap();
                (code.to_string(), ribbon)
            })
            .collect();
        let entries = collapse(["D", "C", "B", "A", "A"], &catalog);
        let html = board_html(&entries, &BoardLayout::default(), &RenderOptions::default());
        assert!(html.starts_with(r#"<div class="ribbon-board"><div><svg "#));
        assert_eq!(html.matches("<div>").count(), 2);
        assert_eq!(html.matches("<svg ").count(), 4);
        assert!(html.contains("<title>A (×2)</title>"));
        let a = html.find(r#"data-code="A""#).unwrap();
        let d = html.find(r#"data-code="D""#).unwrap();
        assert!(a < d);
    }
}
