//! `ribbonboard board` — Render a board page for a set of award codes.

use super::Context;
use ribbonboard_core::collapse;
use ribbonboard_render::board_page;
use std::path::PathBuf;

pub async fn run(
    codes: Vec<String>,
    title: String,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    let entries = collapse(&codes, &ctx.catalog);
    if entries.is_empty() {
        tracing::warn!("None of the given codes has a ribbon; the board is empty");
    }
    let html = board_page(&title, &entries, &ctx.layout, &ctx.opts, chrono::Utc::now());
    ctx.emit(output.as_deref(), &html).await
}
