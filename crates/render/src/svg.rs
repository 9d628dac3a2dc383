//! Single-ribbon SVG output.

use crate::RenderOptions;
use crate::defs::write_defs;
use crate::text::{escape_xml, num};
use ribbonboard_core::{Axis, Ribbon};
use std::fmt::Write;
use tracing::debug;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render `ribbon` as worn for `count` awards.
///
/// The result refers to the shared symbols emitted by [`defs`](crate::defs)
/// and is meant to be embedded in a page that carries them once.
pub fn render_ribbon(ribbon: &Ribbon, count: u32, opts: &RenderOptions) -> String {
    let mut out = String::new();
    write_ribbon(&mut out, ribbon, count, opts, false);
    out
}

/// Render `ribbon` as a self-contained SVG document with its own defs.
pub fn render_standalone(ribbon: &Ribbon, count: u32, opts: &RenderOptions) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_ribbon(&mut out, ribbon, count, opts, true);
    out.push('\n');
    out
}

/// One standalone SVG per visually distinct award count up to `max`.
pub fn variants(ribbon: &Ribbon, max: u32, opts: &RenderOptions) -> Vec<(u32, String)> {
    ribbon
        .devices()
        .distinguishable_counts(max)
        .into_iter()
        .map(|count| (count, render_standalone(ribbon, count, opts)))
        .collect()
}

pub(crate) fn write_ribbon(
    out: &mut String,
    ribbon: &Ribbon,
    count: u32,
    opts: &RenderOptions,
    with_defs: bool,
) {
    let width = opts.pixel_width();
    let height = opts.pixel_height();
    let scale = opts.scale();

    let _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" class="ribbon" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-code="{code}">"#,
        w = num(width),
        h = num(height),
        code = escape_xml(ribbon.code()),
    );

    let _ = write!(out, "<title>{}", escape_xml(ribbon.name()));
    if count > 1 {
        let _ = write!(out, " (×{count})");
    }
    out.push_str("</title>");

    if with_defs {
        write_defs(out, opts);
    }

    let layout = ribbon.layout();
    for band in &layout.bands {
        let (x, y, w, h) = match layout.axis {
            Axis::Horizontal => (band.offset * scale, 0.0, band.length * scale, height),
            Axis::Vertical => (0.0, band.offset * scale, width, band.length * scale),
        };
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" style="fill:{};"/>"#,
            num(x),
            num(y),
            num(w),
            num(h),
            band.color.css(),
        );
    }

    out.push_str(r##"<use href="#ribbon-shade"/>"##);

    let placements = ribbon.placements(count);
    debug!(code = ribbon.code(), count, devices = placements.len(), "Rendering ribbon");
    for placement in placements {
        let _ = write!(
            out,
            r##"<use href="#{}" x="{}" width="{}" height="{}" class="device"/>"##,
            placement.icon.symbol_id(),
            num(placement.x_offset * width),
            num(width),
            num(height),
        );
    }

    out.push_str("</svg>");
}
