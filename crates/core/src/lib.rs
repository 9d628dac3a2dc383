//! # ribbonboard core
//!
//! Domain types and the three pure algorithms behind ribbonboard:
//!
//! - [`layout`] turns a ribbon's stripe recipe into geometric bands.
//! - [`device`] turns an award count into device-icon placements.
//! - [`collapse`] turns a raw award-code list into a precedence-ordered,
//!   deduplicated display list.
//!
//! This crate has **no I/O**. Ribbon definitions come from a
//! [`RibbonSource`] implemented elsewhere (the catalog crate), and the
//! geometry it produces is serialized to markup by the render crate.
//!
//! ```text
//! ┌──────────────┐   codes    ┌────────────┐  entries  ┌──────────┐
//! │ award list   │──────────▶│  collapse  │─────────▶│ renderer │
//! └──────────────┘            └─────┬──────┘           └────┬─────┘
//!                                   │ RibbonSource          │ bands / placements
//!                             ┌─────┴──────┐          ┌────┴─────────┐
//!                             │  catalog   │          │ layout/device│
//!                             └────────────┘          └──────────────┘
//! ```

pub mod collapse;
pub mod color;
pub mod device;
pub mod error;
pub mod layout;
pub mod ribbon;
pub mod shape;

// Re-export key types at crate root for ergonomics
pub use collapse::{RibbonSource, collapse};
pub use color::{Color, Metal};
pub use device::{CountRange, DevicePlacement, DevicePolicy, IconKind};
pub use error::{Error, LayoutError, Result};
pub use layout::{Axis, Band, Layout, RIBBON_HEIGHT, RIBBON_WIDTH, RibbonDims, layout};
pub use ribbon::{Ribbon, RibbonEntry, SetTag};
pub use shape::{RibbonShape, StripeSegment, StripeWidth};
