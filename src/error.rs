//! Defines [`SdoError`], representing all errors returned by this crate.

use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SdoError {
    /// The SDO_GEOMETRY parts are structurally invalid: offsets out of range or non-monotonic,
    /// or an etype/interpretation pair that is not allowed where it was found.
    #[error("Malformed SDO encoding: {0}")]
    MalformedEncoding(String),

    /// The geometry cannot be represented as SDO_GEOMETRY by this crate.
    #[error("Unsupported geometry kind: {0}")]
    UnsupportedGeometryKind(String),

    /// The input geometry violates the geometry model, e.g. ring curves that do not share
    /// endpoints.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A count or offset does not fit in the 32-bit integers of the wire format.
    #[error("Overflow: value does not fit in a 32-bit SDO integer.")]
    Overflow,
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, SdoError>;
