//! `ribbonboard config` — Configuration management commands.

use ribbonboard_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let warnings = warnings(&config);
            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Scale:     {}", config.scale);
            println!("   Output:    {}", config.output_dir.display());
            println!(
                "   Board:     {} columns, {} from {} entries",
                config.board.narrow_columns, config.board.wide_columns, config.board.wide_threshold
            );
            println!("   Variants:  up to {} awards", config.variants.max_count);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

/// Settings that load fine but probably are not what the user meant.
fn warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(path) = &config.catalog_path
        && !path.exists()
    {
        warnings.push(format!("catalog_path {} does not exist", path.display()));
    }

    if let Some(path) = &config.records_path
        && !path.exists()
    {
        warnings.push(format!("records_path {} does not exist", path.display()));
    }

    if config.board.wide_columns < config.board.narrow_columns {
        warnings.push("board.wide_columns is smaller than board.narrow_columns".to_string());
    }

    warnings
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();

    if config_path.exists() {
        println!("  Config file exists: {}", config_path.display());
        return Ok(());
    }

    tokio::fs::create_dir_all(&config_dir).await?;
    tokio::fs::write(&config_path, AppConfig::default_toml()).await?;
    println!("✅ Created config file: {}", config_path.display());
    Ok(())
}
