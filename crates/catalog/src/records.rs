//! Service records: people and the raw award codes they hold.

use crate::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A records file.
///
/// ```toml
/// [[people]]
/// rank = "Spacer First Class"
/// name = "Ada Quill"
/// awards = ["SSD", "AFSM", "MT"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub rank: String,
    pub name: String,

    /// Award codes as recorded: unordered, possibly repeated, possibly
    /// including codes that have no ribbon.
    #[serde(default)]
    pub awards: Vec<String>,
}

impl Person {
    /// Heading shown above the person's board.
    pub fn heading(&self) -> String {
        if self.rank.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.rank, self.name)
        }
    }
}

impl Records {
    pub fn from_toml(toml_str: &str) -> CatalogResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read a records file from disk.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let records = Self::from_toml(&content)?;
        info!(path = %path.display(), people = records.people.len(), "Records loaded");
        Ok(records)
    }
}
