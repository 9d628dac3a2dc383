//! Ribbons, set tags, and collapsed display entries.

use crate::device::{DevicePlacement, DevicePolicy};
use crate::error::{Error, LayoutError, Result};
use crate::layout::{Band, Layout, RibbonDims, layout};
use crate::shape::RibbonShape;
use serde::Serialize;
use std::fmt;
use std::iter;
use std::str::FromStr;

/// Names a group of mutually exclusive ribbons, such as the grades of one
/// order. At most one ribbon per set appears in a collapsed list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SetTag(String);

impl SetTag {
    /// Validate and wrap a tag: lowercase ASCII letters, digits and `_`,
    /// starting with a letter.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        let mut chars = tag.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(Self(tag))
        } else {
            Err(Error::InvalidSetTag(tag))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SetTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for SetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoration's ribbon.
///
/// Immutable once built. The band layout is computed and validated by
/// [`Ribbon::new`], so a constructed ribbon always has drawable geometry.
#[derive(Debug, Clone)]
pub struct Ribbon {
    code: String,
    order: Option<u32>,
    name: String,
    set: Option<SetTag>,
    shape: RibbonShape,
    devices: DevicePolicy,
    layout: Layout,
}

impl Ribbon {
    /// Build a ribbon on the standard 35×9 ribbon.
    pub fn new(
        code: impl Into<String>,
        order: Option<u32>,
        name: impl Into<String>,
        shape: RibbonShape,
    ) -> Result<Self, LayoutError> {
        Self::with_dims(code, order, name, shape, RibbonDims::STANDARD)
    }

    pub fn with_dims(
        code: impl Into<String>,
        order: Option<u32>,
        name: impl Into<String>,
        shape: RibbonShape,
        dims: RibbonDims,
    ) -> Result<Self, LayoutError> {
        let layout = layout(&shape, dims)?;
        Ok(Self {
            code: code.into(),
            order,
            name: name.into(),
            set: None,
            shape,
            devices: DevicePolicy::default(),
            layout,
        })
    }

    /// Place this ribbon in a mutually exclusive set.
    pub fn in_set(mut self, set: SetTag) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_devices(mut self, devices: DevicePolicy) -> Self {
        self.devices = devices;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Precedence; lower is more senior. `None` means the ribbon has no
    /// place of its own in the order of wear.
    pub fn order(&self) -> Option<u32> {
        self.order
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&self) -> Option<&SetTag> {
        self.set.as_ref()
    }

    pub fn shape(&self) -> &RibbonShape {
        &self.shape
    }

    pub fn devices(&self) -> &DevicePolicy {
        &self.devices
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn bands(&self) -> &[Band] {
        &self.layout.bands
    }

    /// Device icons for `count` awards of this ribbon.
    pub fn placements(&self, count: u32) -> Vec<DevicePlacement> {
        self.devices.placements(count)
    }
}

/// One line of a collapsed display list: a ribbon and how many times it
/// was awarded.
#[derive(Debug, Clone, Copy)]
pub struct RibbonEntry<'a> {
    ribbon: &'a Ribbon,
    count: u32,
}

impl<'a> RibbonEntry<'a> {
    pub fn new(ribbon: &'a Ribbon) -> Self {
        Self { ribbon, count: 1 }
    }

    pub fn ribbon(&self) -> &'a Ribbon {
        self.ribbon
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub(crate) fn increment(&mut self) {
        self.count += 1;
    }

    /// The entry expanded back into award codes, one per award.
    pub fn codes(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        iter::repeat_n(self.ribbon.code(), self.count as usize)
    }

    pub fn placements(&self) -> Vec<DevicePlacement> {
        self.ribbon.placements(self.count)
    }
}

impl PartialEq for RibbonEntry<'_> {
    /// Entries are equal when they refer to the same ribbon instance with
    /// the same count.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ribbon, other.ribbon) && self.count == other.count
    }
}
