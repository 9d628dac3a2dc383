//! Error types for the ribbonboard domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Layout problems have
//! their own enum because they are raised while a ribbon is constructed and
//! are wrapped by the catalog with the offending code.

use thiserror::Error;

/// The top-level error type for core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid set tag '{0}': expected lowercase letters, digits and '_', starting with a letter")]
    InvalidSetTag(String),
}

/// Result type alias using our Error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A stripe recipe that cannot be turned into a valid band layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("stripe recipe has no segments")]
    EmptyRecipe,

    #[error("segment {index} has invalid width {width}: widths must be finite and positive")]
    InvalidWidth { index: usize, width: f64 },

    #[error("stripe widths total {actual} but the ribbon extent is {expected}")]
    WidthMismatch { expected: f64, actual: f64 },

    #[error("stripe widths fall {shortfall} short of the extent and no segment fills the remainder")]
    NoFillRemainder { shortfall: f64 },

    #[error("{count} open-ended segments in one recipe; at most one may fill the remainder")]
    MultipleFillRemainder { count: usize },

    #[error("horizontal tiles must have explicit lengths")]
    FillRemainderInTile,

    #[error("horizontal recipe has zero total length and would never fill the ribbon")]
    ZeroLengthRecipe,

    #[error("horizontal tile {index} is {width} long; tiles must be at least {min}")]
    TileTooShort { index: usize, width: f64, min: f64 },
}
