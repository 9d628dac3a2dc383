//! Catalog file model — the TOML shape of a ribbon catalog.

use ribbonboard_core::DevicePolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A catalog as written in TOML, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Named RGB colors usable in stripe recipes.
    #[serde(default)]
    pub colors: BTreeMap<String, [u8; 3]>,

    /// Declared set tags. A ribbon may only name a declared set.
    #[serde(default)]
    pub sets: Vec<String>,

    /// Award codes that exist but have no ribbon.
    #[serde(default)]
    pub non_ribbons: Vec<NonRibbonSpec>,

    #[serde(default)]
    pub ribbons: Vec<RibbonSpec>,
}

impl CatalogFile {
    /// Parse a catalog file without validating it.
    pub fn from_toml(toml_str: &str) -> Result<Self, crate::CatalogError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Layer `overlay` on top of this file. Colors and ribbons from the
    /// overlay replace entries with the same name or code; sets and
    /// non-ribbon codes are added.
    pub fn merge(mut self, overlay: CatalogFile) -> Self {
        self.colors.extend(overlay.colors);

        for set in overlay.sets {
            if !self.sets.contains(&set) {
                self.sets.push(set);
            }
        }

        for non_ribbon in overlay.non_ribbons {
            self.non_ribbons.retain(|n| n.code != non_ribbon.code);
            self.ribbons.retain(|r| r.code != non_ribbon.code);
            self.non_ribbons.push(non_ribbon);
        }

        for ribbon in overlay.ribbons {
            if let Some(existing) = self.ribbons.iter_mut().find(|r| r.code == ribbon.code) {
                warn!(code = %ribbon.code, "Catalog overlay replaces ribbon");
                *existing = ribbon;
            } else {
                self.non_ribbons.retain(|n| n.code != ribbon.code);
                self.ribbons.push(ribbon);
            }
        }
        self
    }
}

/// An award code with no ribbon of its own (a citation, a certificate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonRibbonSpec {
    pub code: String,

    #[serde(default)]
    pub name: String,
}

/// One ribbon as written in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RibbonSpec {
    /// Award code, e.g. `"KCE"`.
    pub code: String,

    /// Precedence (lower is more senior). Omit for ribbons with no place of
    /// their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    pub name: String,

    /// Mutually exclusive set this ribbon belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,

    pub shape: ShapeKind,

    /// The color of a `solid` ribbon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Stripe recipe for `vertical`, `mirror` and `horizontal` ribbons.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stripes: Vec<StripeSpec>,

    #[serde(default)]
    pub devices: DevicePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Solid,
    Vertical,
    Mirror,
    Horizontal,
}

/// One stripe. A missing width means "fill the remainder".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeSpec {
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}
