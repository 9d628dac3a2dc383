//! Complete HTML pages.

use crate::RenderOptions;
use crate::board::{BoardLayout, board_html};
use crate::defs::write_defs;
use crate::svg::write_ribbon;
use crate::text::{escape_xml, num};
use chrono::{DateTime, SecondsFormat, Utc};
use ribbonboard_catalog::RibbonCatalog;
use ribbonboard_core::RibbonEntry;
use std::fmt::Write;

/// A person's heading and collapsed ribbons, ready to render.
#[derive(Debug, Clone)]
pub struct PersonBoard<'a> {
    pub heading: String,
    pub entries: Vec<RibbonEntry<'a>>,
}

/// A page holding a single board.
pub fn board_page(
    title: &str,
    entries: &[RibbonEntry<'_>],
    layout: &BoardLayout,
    opts: &RenderOptions,
    generated_at: DateTime<Utc>,
) -> String {
    let body = board_html(entries, layout, opts);
    document(title, &body, layout, opts, generated_at)
}

/// One heading and board per person, in the order given.
pub fn records_page(
    people: &[PersonBoard<'_>],
    layout: &BoardLayout,
    opts: &RenderOptions,
    generated_at: DateTime<Utc>,
) -> String {
    let mut body = String::from(r#"<dl class="records">"#);
    for person in people {
        let _ = write!(
            body,
            "\n<dt>{}</dt>\n<dd>{}</dd>",
            escape_xml(&person.heading),
            board_html(&person.entries, layout, opts)
        );
    }
    body.push_str("\n</dl>");
    document("Service Records", &body, layout, opts, generated_at)
}

/// Every catalog ribbon in precedence order: order, code, the ribbon as a
/// single award, and name.
pub fn catalog_page(
    catalog: &RibbonCatalog,
    layout: &BoardLayout,
    opts: &RenderOptions,
    generated_at: DateTime<Utc>,
) -> String {
    let mut body = String::from(concat!(
        r#"<table class="ribbon-catalog">"#,
        "\n<thead><tr><th>Order</th><th>Code</th><th>Ribbon</th><th>Name</th></tr></thead>\n<tbody>",
    ));
    for ribbon in catalog.ribbons_by_precedence() {
        let order = ribbon.order().map(|o| o.to_string()).unwrap_or_default();
        let _ = write!(
            body,
            r#"
<tr><th scope="row">{}</th><td>{}</td><td>"#,
            order,
            escape_xml(ribbon.code())
        );
        write_ribbon(&mut body, ribbon, 1, opts, false);
        let _ = write!(body, "</td><td>{}</td></tr>", escape_xml(ribbon.name()));
    }
    body.push_str("\n</tbody>\n</table>");
    document("Ribbon Catalog", &body, layout, opts, generated_at)
}

fn document(
    title: &str,
    body: &str,
    layout: &BoardLayout,
    opts: &RenderOptions,
    generated_at: DateTime<Utc>,
) -> String {
    let columns = layout.wide_columns.max(1) as f64;
    let board_width = columns * opts.pixel_width() + (columns - 1.0);

    let mut out = String::with_capacity(body.len() + 4096);
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{font-family: sans-serif;}}
.ribbon-board {{width: {board_width}px;}}
.ribbon-board>div {{text-align: center; line-height: 0;}}
.ribbon-board>div+div {{margin-top: 1px;}}
.ribbon-board>div>svg+svg {{margin-left: 1px;}}
.ribbon-catalog td, .ribbon-catalog th {{padding: 2px 8px; text-align: left;}}
</style>
</head>
<body>
<svg class="ribbon-defs" width="0" height="0" style="position:absolute" aria-hidden="true">"#,
        title = escape_xml(title),
        board_width = num(board_width),
    );
    write_defs(&mut out, opts);
    let _ = write!(
        out,
        r#"</svg>
<h1>{title}</h1>
{body}
<footer>Generated <time datetime="{stamp}">{human}</time></footer>
</body>
</html>
"#,
        title = escape_xml(title),
        stamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        human = generated_at.format("%Y-%m-%d %H:%M UTC"),
    );
    out
}
