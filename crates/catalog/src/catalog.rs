//! The validated, read-only ribbon catalog.

use crate::model::{CatalogFile, RibbonSpec, ShapeKind, StripeSpec};
use crate::palette::Palette;
use crate::{CatalogError, CatalogResult};
use regex_lite::Regex;
use ribbonboard_core::{Ribbon, RibbonShape, RibbonSource, SetTag, StripeSegment};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

/// The catalog that ships with ribbonboard.
const BUILTIN: &str = include_str!("builtin.toml");

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("static pattern"));

/// Award codes mapped to validated ribbons.
///
/// Built once; every ribbon in it has a valid layout and refers only to
/// declared sets, so lookups never fail in a way the caller must handle.
#[derive(Debug, Clone, Default)]
pub struct RibbonCatalog {
    ribbons: HashMap<String, Ribbon>,
    non_ribbons: BTreeMap<String, String>,
    sets: BTreeSet<SetTag>,
}

impl RibbonCatalog {
    /// The built-in catalog.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_toml(BUILTIN)
    }

    /// The built-in catalog, overlaid with the catalog file at `extra` if
    /// one is given.
    pub fn load(extra: Option<&Path>) -> CatalogResult<Self> {
        let mut file = CatalogFile::from_toml(BUILTIN)?;
        if let Some(path) = extra {
            let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            info!(path = %path.display(), "Loading catalog overlay");
            file = file.merge(CatalogFile::from_toml(&content)?);
        }
        Self::build(file)
    }

    /// Parse and validate a catalog from TOML.
    pub fn from_toml(toml_str: &str) -> CatalogResult<Self> {
        Self::build(CatalogFile::from_toml(toml_str)?)
    }

    /// Validate a parsed catalog file and build the catalog.
    pub fn build(file: CatalogFile) -> CatalogResult<Self> {
        let palette = Palette::new(&file.colors);

        let mut sets = BTreeSet::new();
        for set in &file.sets {
            let tag =
                SetTag::new(set.as_str()).map_err(|_| CatalogError::InvalidSetTag(set.clone()))?;
            sets.insert(tag);
        }

        let mut non_ribbons = BTreeMap::new();
        for spec in &file.non_ribbons {
            check_code(&spec.code)?;
            if non_ribbons
                .insert(spec.code.clone(), spec.name.clone())
                .is_some()
            {
                return Err(CatalogError::DuplicateCode(spec.code.clone()));
            }
        }

        let mut ribbons = HashMap::with_capacity(file.ribbons.len());
        for spec in &file.ribbons {
            check_code(&spec.code)?;
            if non_ribbons.contains_key(&spec.code) || ribbons.contains_key(&spec.code) {
                return Err(CatalogError::DuplicateCode(spec.code.clone()));
            }
            let ribbon = build_ribbon(spec, &palette, &sets)?;
            ribbons.insert(spec.code.clone(), ribbon);
        }

        info!(
            ribbons = ribbons.len(),
            non_ribbons = non_ribbons.len(),
            sets = sets.len(),
            colors = palette.len(),
            "Ribbon catalog built"
        );
        Ok(Self {
            ribbons,
            non_ribbons,
            sets,
        })
    }

    /// Look up a ribbon by award code.
    pub fn get(&self, code: &str) -> Option<&Ribbon> {
        self.ribbons.get(code)
    }

    /// All ribbons in precedence order; unordered ribbons last, ties by code.
    pub fn ribbons_by_precedence(&self) -> Vec<&Ribbon> {
        let mut ribbons: Vec<&Ribbon> = self.ribbons.values().collect();
        ribbons.sort_by(|a, b| {
            (a.order().is_none(), a.order(), a.code()).cmp(&(
                b.order().is_none(),
                b.order(),
                b.code(),
            ))
        });
        ribbons
    }

    /// Known codes that have no ribbon, with their names.
    pub fn non_ribbons(&self) -> impl Iterator<Item = (&str, &str)> {
        self.non_ribbons
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    /// Declared set tags.
    pub fn sets(&self) -> impl Iterator<Item = &SetTag> {
        self.sets.iter()
    }

    /// Number of ribbons.
    pub fn len(&self) -> usize {
        self.ribbons.len()
    }

    /// Whether the catalog has no ribbons.
    pub fn is_empty(&self) -> bool {
        self.ribbons.is_empty()
    }
}

impl RibbonSource for RibbonCatalog {
    fn ribbon(&self, code: &str) -> Option<&Ribbon> {
        self.get(code)
    }

    fn is_non_ribbon(&self, code: &str) -> bool {
        self.non_ribbons.contains_key(code)
    }
}

fn check_code(code: &str) -> CatalogResult<()> {
    if CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(CatalogError::InvalidCode(code.to_string()))
    }
}

fn build_ribbon(
    spec: &RibbonSpec,
    palette: &Palette,
    sets: &BTreeSet<SetTag>,
) -> CatalogResult<Ribbon> {
    let shape = build_shape(spec, palette)?;

    let mut ribbon = Ribbon::new(&spec.code, spec.order, &spec.name, shape).map_err(|source| {
        CatalogError::Layout {
            code: spec.code.clone(),
            source,
        }
    })?;

    if let Some(set) = &spec.set {
        let tag = SetTag::new(set.as_str()).map_err(|_| CatalogError::InvalidSetTag(set.clone()))?;
        if !sets.contains(&tag) {
            return Err(CatalogError::UndeclaredSet {
                code: spec.code.clone(),
                set: set.clone(),
            });
        }
        ribbon = ribbon.in_set(tag);
    }

    debug!(code = %spec.code, shape = ribbon.shape().kind(), bands = ribbon.bands().len(), "Ribbon built");
    Ok(ribbon.with_devices(spec.devices.clone()))
}

fn build_shape(spec: &RibbonSpec, palette: &Palette) -> CatalogResult<RibbonShape> {
    let invalid = |reason: &str| CatalogError::InvalidRibbon {
        code: spec.code.clone(),
        reason: reason.to_string(),
    };

    let striped: fn(Vec<StripeSegment>) -> RibbonShape = match spec.shape {
        ShapeKind::Solid => {
            if !spec.stripes.is_empty() {
                return Err(invalid("solid ribbons take `color`, not `stripes`"));
            }
            let color = spec
                .color
                .as_deref()
                .ok_or_else(|| invalid("solid ribbons need a `color`"))?;
            return Ok(RibbonShape::Solid(resolve(spec, palette, color)?));
        }
        ShapeKind::Vertical => RibbonShape::Vertical,
        ShapeKind::Mirror => RibbonShape::Mirror,
        ShapeKind::Horizontal => RibbonShape::Horizontal,
    };

    if spec.color.is_some() {
        return Err(invalid("striped ribbons take `stripes`, not `color`"));
    }
    let segments = spec
        .stripes
        .iter()
        .map(|stripe| segment(spec, palette, stripe))
        .collect::<CatalogResult<Vec<_>>>()?;
    Ok(striped(segments))
}

fn segment(spec: &RibbonSpec, palette: &Palette, stripe: &StripeSpec) -> CatalogResult<StripeSegment> {
    let color = resolve(spec, palette, &stripe.color)?;
    Ok(match stripe.width {
        Some(width) => StripeSegment::fixed(color, width),
        None => StripeSegment::fill(color),
    })
}

fn resolve(
    spec: &RibbonSpec,
    palette: &Palette,
    color: &str,
) -> CatalogResult<ribbonboard_core::Color> {
    palette
        .resolve(color)
        .ok_or_else(|| CatalogError::UnknownColor {
            code: spec.code.clone(),
            color: color.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribbonboard_core::{Axis, DevicePolicy, IconKind, LayoutError, collapse};
    use std::io::Write;

    const SMALL: &str = r#"
sets = ["order_king_roger"]
non_ribbons = [{ code = "MT", name = "Monarch's Thanks" }]

[colors]
gold = [173, 155, 12]
scarlet = [232, 17, 45]
blood_red = [117, 38, 61]

[[ribbons]]
code = "GCR"
order = 4
name = "Knight Grand Cross, King Roger"
set = "order_king_roger"
shape = "mirror"
stripes = [{ color = "gold", width = 2 }, { color = "scarlet", width = 31 }]
devices = { one = "crown" }

[[ribbons]]
code = "KCR"
order = 9
name = "Knight Companion, King Roger"
set = "order_king_roger"
shape = "mirror"
stripes = [{ color = "gold", width = 2 }, { color = "scarlet" }]

[[ribbons]]
code = "MC"
order = 11
name = "Manticore Cross"
shape = "solid"
color = "blood_red"
"#;

    #[test]
    fn builds_small_catalog() {
        let catalog = RibbonCatalog::from_toml(SMALL).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        let gcr = catalog.get("GCR").unwrap();
        assert_eq!(gcr.devices(), &DevicePolicy::One(IconKind::Crown));
        assert_eq!(gcr.set().unwrap().as_str(), "order_king_roger");
        assert_eq!(gcr.bands().len(), 3);
        assert!(catalog.is_non_ribbon("MT"));
        assert!(!catalog.is_non_ribbon("MC"));
        assert_eq!(catalog.sets().count(), 1);
    }

    #[test]
    fn precedence_listing() {
        let catalog = RibbonCatalog::from_toml(SMALL).unwrap();
        let codes: Vec<&str> = catalog
            .ribbons_by_precedence()
            .iter()
            .map(|r| r.code())
            .collect();
        assert_eq!(codes, vec!["GCR", "KCR", "MC"]);
    }

    #[test]
    fn catalog_is_a_ribbon_source() {
        let catalog = RibbonCatalog::from_toml(SMALL).unwrap();
        let entries = collapse(["MC", "KCR", "MT", "GCR", "MC"], &catalog);
        let summary: Vec<(&str, u32)> = entries
            .iter()
            .map(|e| (e.ribbon().code(), e.count()))
            .collect();
        assert_eq!(summary, vec![("GCR", 1), ("MC", 2)]);
    }

    #[test]
    fn unknown_color_rejected() {
        let err = RibbonCatalog::from_toml(
            r#"
[[ribbons]]
code = "X"
name = "X"
shape = "solid"
color = "chartreuse"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownColor { ref color, .. } if color == "chartreuse"));
    }

    #[test]
    fn undeclared_set_rejected() {
        let err = RibbonCatalog::from_toml(
            r##"
[[ribbons]]
code = "X"
name = "X"
set = "order_nobody"
shape = "solid"
color = "#ffffff"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UndeclaredSet { .. }));
    }

    #[test]
    fn malformed_set_rejected() {
        let err = RibbonCatalog::from_toml(r#"sets = ["Order King"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSetTag(_)));
    }

    #[test]
    fn layout_errors_carry_code() {
        let err = RibbonCatalog::from_toml(
            r##"
[[ribbons]]
code = "OG"
name = "Order of Gallantry"
shape = "horizontal"
stripes = []
"##,
        )
        .unwrap_err();
        match err {
            CatalogError::Layout { code, source } => {
                assert_eq!(code, "OG");
                assert_eq!(source, LayoutError::ZeroLengthRecipe);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_and_invalid_codes_rejected() {
        let dup = r##"
non_ribbons = [{ code = "MT" }]
[[ribbons]]
code = "MT"
name = "X"
shape = "solid"
color = "#000000"
"##;
        assert!(matches!(
            RibbonCatalog::from_toml(dup),
            Err(CatalogError::DuplicateCode(c)) if c == "MT"
        ));

        let bad = r##"
[[ribbons]]
code = "K-R"
name = "X"
shape = "solid"
color = "#000000"
"##;
        assert!(matches!(
            RibbonCatalog::from_toml(bad),
            Err(CatalogError::InvalidCode(_))
        ));
    }

    #[test]
    fn shape_fields_must_match_kind() {
        let solid_with_stripes = r##"
[[ribbons]]
code = "X"
name = "X"
shape = "solid"
color = "#000000"
stripes = [{ color = "#ffffff" }]
"##;
        assert!(matches!(
            RibbonCatalog::from_toml(solid_with_stripes),
            Err(CatalogError::InvalidRibbon { .. })
        ));

        let solid_without_color = r##"
[[ribbons]]
code = "X"
name = "X"
shape = "solid"
"##;
        assert!(matches!(
            RibbonCatalog::from_toml(solid_without_color),
            Err(CatalogError::InvalidRibbon { .. })
        ));
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = RibbonCatalog::builtin().unwrap();
        assert!(catalog.len() >= 60);
        for ribbon in catalog.ribbons_by_precedence() {
            let layout = ribbon.layout();
            let extent = match layout.axis {
                Axis::Horizontal => ribbonboard_core::RIBBON_WIDTH,
                Axis::Vertical => ribbonboard_core::RIBBON_HEIGHT,
            };
            assert!(
                (layout.total_length() - extent).abs() < 1e-6,
                "{} covers {} of {}",
                ribbon.code(),
                layout.total_length(),
                extent
            );
        }
    }

    #[test]
    fn builtin_known_entries() {
        let catalog = RibbonCatalog::builtin().unwrap();
        assert_eq!(catalog.get("SSD").unwrap().order(), Some(60));
        assert_eq!(catalog.get("AFSM").unwrap().order(), Some(71));
        assert_eq!(
            catalog.get("FEA").unwrap().devices(),
            &DevicePolicy::One(IconKind::FleetE)
        );
        assert!(catalog.get("MT").is_none());
        assert!(catalog.is_non_ribbon("MT"));
        assert_eq!(catalog.get("OG").unwrap().layout().axis, Axis::Vertical);
    }

    #[test]
    fn builtin_medals_keep_whole_side_widths() {
        let catalog = RibbonCatalog::builtin().unwrap();
        for code in ["RM", "EM"] {
            let lengths: Vec<f64> = catalog
                .get(code)
                .unwrap()
                .layout()
                .bands
                .iter()
                .map(|b| b.length)
                .collect();
            assert_eq!(lengths, vec![16.0, 3.0, 16.0], "{code}");
        }
    }

    #[test]
    fn load_overlays_user_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[ribbons]]
code = "SSD"
order = 60
name = "Space Service Deployment Ribbon (revised)"
shape = "solid"
color = "space_black"
"#
        )
        .unwrap();
        let catalog = RibbonCatalog::load(Some(file.path())).unwrap();
        let ssd = catalog.get("SSD").unwrap();
        assert_eq!(ssd.name(), "Space Service Deployment Ribbon (revised)");
        assert_eq!(ssd.bands().len(), 1);
        assert_eq!(catalog.len(), RibbonCatalog::builtin().unwrap().len());
    }

    #[test]
    fn load_missing_overlay_is_read_error() {
        let err = RibbonCatalog::load(Some(Path::new("/nonexistent/catalog.toml"))).unwrap_err();
        assert!(matches!(err, CatalogError::ReadError { .. }));
    }
}
