//! Ribbon catalog for ribbonboard.
//!
//! The catalog maps award codes to [`Ribbon`](ribbonboard_core::Ribbon)
//! definitions. It is described in TOML, built once at startup, validated
//! completely (every color, set tag and stripe recipe), and read-only
//! afterwards.
//!
//! A built-in catalog ships with the crate; a user catalog file can add
//! ribbons or replace built-in ones by code.
//!
//! # Example Catalog
//!
//! ```toml
//! sets = ["order_king_roger"]
//!
//! [colors]
//! gold = [173, 155, 12]
//! scarlet = [232, 17, 45]
//!
//! [[ribbons]]
//! code = "KCR"
//! order = 9
//! name = "Knight Companion, King Roger"
//! set = "order_king_roger"
//! shape = "mirror"
//! stripes = [{ color = "gold", width = 2 }, { color = "scarlet" }]
//! ```

mod catalog;
mod model;
mod palette;
mod records;

pub use catalog::RibbonCatalog;
pub use model::{CatalogFile, NonRibbonSpec, RibbonSpec, ShapeKind, StripeSpec};
pub use palette::Palette;
pub use records::{Person, Records};

use ribbonboard_core::LayoutError;
use std::path::PathBuf;

/// Re-export for convenience.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors from building a catalog or reading a records file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("invalid award code '{0}': expected ASCII letters and digits, starting with a letter")]
    InvalidCode(String),

    #[error("award code '{0}' is defined more than once")]
    DuplicateCode(String),

    #[error("ribbon '{code}': unknown color '{color}'")]
    UnknownColor { code: String, color: String },

    #[error("invalid set tag '{0}'")]
    InvalidSetTag(String),

    #[error("ribbon '{code}': set '{set}' is not declared in the catalog's sets")]
    UndeclaredSet { code: String, set: String },

    #[error("ribbon '{code}': {reason}")]
    InvalidRibbon { code: String, reason: String },

    #[error("ribbon '{code}' has an invalid stripe layout: {source}")]
    Layout {
        code: String,
        #[source]
        source: LayoutError,
    },
}
