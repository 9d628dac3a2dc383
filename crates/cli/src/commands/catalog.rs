//! `ribbonboard catalog` — Catalog inspection commands.

use super::Context;
use ribbonboard_catalog::RibbonCatalog;
use ribbonboard_core::DevicePolicy;
use ribbonboard_render::catalog_page;
use std::path::PathBuf;

pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    for line in listing(&ctx.catalog) {
        println!("{line}");
    }
    Ok(())
}

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating ribbon catalog...");

    let ctx = match Context::load() {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("   ❌ Catalog error: {e}");
            return Err(e);
        }
    };

    println!("   ✅ Catalog built successfully");
    println!();
    match &ctx.config.catalog_path {
        Some(path) => println!("   Overlay:      {}", path.display()),
        None => println!("   Overlay:      (built-in only)"),
    }
    println!("   Ribbons:      {}", ctx.catalog.len());
    println!("   Non-ribbons:  {}", ctx.catalog.non_ribbons().count());
    println!(
        "   Sets:         {}",
        ctx.catalog
            .sets()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

pub async fn table(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    let html = catalog_page(&ctx.catalog, &ctx.layout, &ctx.opts, chrono::Utc::now());
    ctx.emit(output.as_deref(), &html).await
}

fn listing(catalog: &RibbonCatalog) -> Vec<String> {
    catalog
        .ribbons_by_precedence()
        .into_iter()
        .map(|ribbon| {
            let order = ribbon.order().map(|o| o.to_string()).unwrap_or_default();
            let mut line = format!(
                "{order:>3}  {:<7} {:<10} {}",
                ribbon.code(),
                ribbon.shape().kind(),
                ribbon.name()
            );
            if let Some(set) = ribbon.set() {
                line.push_str(&format!("  [{set}]"));
            }
            if let Some(devices) = describe_devices(ribbon.devices()) {
                line.push_str(&format!("  ({devices})"));
            }
            line
        })
        .collect()
}

fn describe_devices(policy: &DevicePolicy) -> Option<String> {
    match policy {
        DevicePolicy::Standard => None,
        DevicePolicy::None => Some("no devices".into()),
        DevicePolicy::One(icon) => Some(icon.symbol_id().into()),
        DevicePolicy::SpecialWithStars(icon) => Some(format!("{} with stars", icon.symbol_id())),
        DevicePolicy::Frame { icon, inner } => Some(match describe_devices(inner) {
            Some(inner) => format!("{} framing {inner}", icon.symbol_id()),
            None => format!("{} framing stars", icon.symbol_id()),
        }),
    }
}
