//! `ribbonboard ribbon` — Render one ribbon as a standalone SVG.

use super::Context;
use ribbonboard_render::render_standalone;
use std::path::PathBuf;

pub async fn run(
    code: String,
    count: u32,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    let ribbon = ctx.ribbon(&code)?;
    let svg = render_standalone(ribbon, count, &ctx.opts);
    ctx.emit(output.as_deref(), &svg).await
}
