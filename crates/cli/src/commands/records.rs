//! `ribbonboard records` — Render boards for everyone in a records file.

use super::Context;
use ribbonboard_catalog::{Records, RibbonCatalog};
use ribbonboard_core::collapse;
use ribbonboard_render::{PersonBoard, records_page};
use std::path::PathBuf;

pub async fn run(
    file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    let path = file
        .or_else(|| ctx.config.records_path.clone())
        .ok_or("No records file given and no records_path configured")?;

    let records = Records::load(&path)?;
    let people = boards(&records, &ctx.catalog);
    let html = records_page(&people, &ctx.layout, &ctx.opts, chrono::Utc::now());
    ctx.emit(output.as_deref(), &html).await
}

fn boards<'a>(records: &Records, catalog: &'a RibbonCatalog) -> Vec<PersonBoard<'a>> {
    records
        .people
        .iter()
        .map(|person| PersonBoard {
            heading: person.heading(),
            entries: collapse(&person.awards, catalog),
        })
        .collect()
}
