//! `ribbonboard collapse` — Show the worn ribbon list for a set of codes.

use super::Context;
use ribbonboard_core::{RibbonEntry, collapse};

pub async fn run(codes: Vec<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    let entries = collapse(&codes, &ctx.catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&entries))?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No ribbons.");
        return Ok(());
    }
    println!("{:>5}  {:<8} {:>5}  Name", "Order", "Code", "Count");
    for entry in &entries {
        let ribbon = entry.ribbon();
        let order = ribbon.order().map(|o| o.to_string()).unwrap_or_default();
        println!(
            "{order:>5}  {:<8} {:>5}  {}",
            ribbon.code(),
            entry.count(),
            ribbon.name()
        );
    }
    Ok(())
}

fn to_json(entries: &[RibbonEntry<'_>]) -> serde_json::Value {
    entries
        .iter()
        .map(|entry| {
            let ribbon = entry.ribbon();
            serde_json::json!({
                "code": ribbon.code(),
                "order": ribbon.order(),
                "name": ribbon.name(),
                "set": ribbon.set(),
                "count": entry.count(),
            })
        })
        .collect()
}
