//! Command implementations and the state they share.

pub mod board;
pub mod catalog;
pub mod collapse;
pub mod config_cmd;
pub mod records;
pub mod ribbon;
pub mod variants;

use ribbonboard_catalog::RibbonCatalog;
use ribbonboard_config::AppConfig;
use ribbonboard_core::{Ribbon, RibbonSource};
use ribbonboard_render::{BoardLayout, RenderOptions};
use std::path::{Path, PathBuf};

/// Configuration, catalog and render settings, loaded once per command.
pub struct Context {
    pub config: AppConfig,
    pub catalog: RibbonCatalog,
    pub opts: RenderOptions,
    pub layout: BoardLayout,
}

impl Context {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
        let catalog = RibbonCatalog::load(config.catalog_path.as_deref())?;
        let opts = RenderOptions::new(config.scale)?;
        let layout = board_layout(&config);
        Ok(Self {
            config,
            catalog,
            opts,
            layout,
        })
    }

    /// Look up a ribbon, with an error that says why there is none.
    pub fn ribbon(&self, code: &str) -> Result<&Ribbon, Box<dyn std::error::Error>> {
        if let Some(ribbon) = self.catalog.get(code) {
            return Ok(ribbon);
        }
        if self.catalog.is_non_ribbon(code) {
            Err(format!("'{code}' is an award without a ribbon").into())
        } else {
            Err(format!("unknown award code '{code}'").into())
        }
    }

    /// Resolve an output path against the configured output directory.
    pub fn output_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config.output_dir.join(path)
        }
    }

    /// Write `content` to `output` (resolved against `output_dir`), or to
    /// stdout when no output is given.
    pub async fn emit(
        &self,
        output: Option<&Path>,
        content: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match output {
            Some(path) => write_file(&self.output_path(path), content).await,
            None => {
                print!("{content}");
                Ok(())
            }
        }
    }
}

pub fn board_layout(config: &AppConfig) -> BoardLayout {
    BoardLayout {
        wide_threshold: config.board.wide_threshold,
        narrow_columns: config.board.narrow_columns,
        wide_columns: config.board.wide_columns,
    }
}

pub async fn write_file(path: &Path, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_config() {
        let mut config = AppConfig::default();
        config.board.wide_columns = 5;
        let layout = board_layout(&config);
        assert_eq!(layout.wide_columns, 5);
        assert_eq!(layout.narrow_columns, 3);
        assert_eq!(layout.wide_threshold, 12);
    }

    #[tokio::test]
    async fn write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boards").join("ssd.svg");
        write_file(&path, "<svg/>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
