//! Shared SVG definitions: shading gradients, the ribbon shade overlay, the
//! device drop shadow and one symbol per device icon.
//!
//! Icon symbols are drawn in ribbon units centered on the origin and share
//! the ribbon's aspect ratio, so a `<use>` sized to the ribbon and shifted
//! by a placement offset lands the icon where the placement says.

use crate::RenderOptions;
use crate::text::num;
use ribbonboard_core::{IconKind, Metal};
use std::f64::consts::PI;
use std::fmt::Write;

/// Append the `<defs>` block for a page or standalone ribbon.
pub(crate) fn write_defs(out: &mut String, opts: &RenderOptions) {
    let dims = opts.dims();
    let scale = opts.scale();
    let width = opts.pixel_width();
    let height = opts.pixel_height();

    out.push_str("<defs>");

    let _ = write!(
        out,
        concat!(
            r#"<linearGradient id="ribbon-ridges" spreadMethod="repeat" x1="0" x2="0" y1="0" y2="{}">"#,
            r#"<stop offset="0" stop-color="white" stop-opacity="1"/>"#,
            r#"<stop offset="0.5" stop-color="white" stop-opacity="0"/>"#,
            r#"<stop offset="0.5" stop-color="black" stop-opacity="0"/>"#,
            r#"<stop offset="1" stop-color="black" stop-opacity="0"/>"#,
            "</linearGradient>",
        ),
        num(1.0 / dims.height),
    );
    out.push_str(concat!(
        r#"<linearGradient id="ribbon-shape" x1="0" x2="0" y1="0" y2="1">"#,
        r#"<stop offset="0" stop-color="white" stop-opacity="1"/>"#,
        r#"<stop offset="0.25" stop-color="white" stop-opacity="0"/>"#,
        r#"<stop offset="0.75" stop-color="black" stop-opacity="0"/>"#,
        r#"<stop offset="1" stop-color="black" stop-opacity="0.5"/>"#,
        "</linearGradient>",
    ));

    let _ = write!(
        out,
        concat!(
            r#"<symbol id="ribbon-shade">"#,
            r#"<rect x="{x}" width="{inner}" height="{h}" style="opacity:0.125; fill:url(#ribbon-ridges);"/>"#,
            r#"<rect width="{w}" height="{h}" style="opacity:0.25; fill:url(#ribbon-shape);"/>"#,
            "</symbol>",
        ),
        x = num(scale),
        inner = num(width - 2.0 * scale),
        w = num(width),
        h = num(height),
    );

    let _ = write!(
        out,
        concat!(
            r#"<filter id="shadow" x="-50%" y="-50%" width="200%" height="200%">"#,
            r#"<feGaussianBlur in="SourceAlpha" stdDeviation="{blur}" result="blurred"/>"#,
            r#"<feOffset dx="0" dy="{dy}" in="blurred" result="shadow"/>"#,
            r#"<feMerge><feMergeNode in="shadow"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
            "</filter>",
        ),
        blur = num(scale / 3.0),
        dy = num(scale / 3.0),
    );

    let view_box = format!(
        "{} {} {} {}",
        num(-dims.width / 2.0),
        num(-dims.height / 2.0),
        num(dims.width),
        num(dims.height)
    );
    for icon in IconKind::ALL {
        let _ = write!(
            out,
            r#"<symbol id="{}" viewBox="{view_box}" style="filter:url(#shadow);">{}</symbol>"#,
            icon.symbol_id(),
            icon_body(icon),
        );
    }

    out.push_str("</defs>");
}

fn icon_body(icon: IconKind) -> String {
    let bronze = Metal::Bronze.css();
    let silver = Metal::Silver.css();
    let gold = Metal::Gold.css();
    match icon {
        IconKind::Star => format!(
            r#"<polygon points="{}" fill="{bronze}" stroke="{bronze}" stroke-width="0.15"/>"#,
            star_points(3.6, 1.5)
        ),
        IconKind::StarLaurel => format!(
            concat!(
                r#"<path d="M -1.9 3.4 A 3.9 3.9 0 0 1 -3.4 -2.2 M 1.9 3.4 A 3.9 3.9 0 0 0 3.4 -2.2" "#,
                r#"fill="none" stroke="{bronze}" stroke-width="0.9" stroke-linecap="round"/>"#,
                r#"<polygon points="{points}" fill="{bronze}"/>"#,
            ),
            bronze = bronze,
            points = star_points(2.7, 1.1),
        ),
        IconKind::Crown => format!(
            r#"<polygon points="-3.5,2.5 -3.5,-2.2 -1.8,0 0,-3.2 1.8,0 3.5,-2.2 3.5,2.5" fill="{silver}" stroke="{stroke}" stroke-width="0.2"/>"#,
            stroke = "#555555",
        ),
        IconKind::FleetE => format!(
            r#"<path d="M -1.8 -3 H 2 V -1.8 H -0.4 V -0.6 H 1.4 V 0.6 H -0.4 V 1.8 H 2 V 3 H -1.8 Z" fill="{gold}"/>"#
        ),
        IconKind::Wreath => format!(
            r#"<circle r="3.1" fill="none" stroke="{gold}" stroke-width="0.9" stroke-dasharray="1.2 0.5"/>"#
        ),
    }
}

/// Points of a five-pointed star with one point straight up.
fn star_points(outer: f64, inner: f64) -> String {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + f64::from(i) * PI / 5.0;
            format!("{},{}", num(radius * angle.cos()), num(radius * angle.sin()))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
