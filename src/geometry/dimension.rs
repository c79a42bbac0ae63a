use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::SdoError;

/// The coordinate dimension of a position or geometry.
///
/// [Dimension] implements [TryFrom] for integers:
///
/// ```
/// use sdo_geometry::geometry::Dimension;
///
/// assert_eq!(Dimension::try_from(3).unwrap(), Dimension::XYZ);
/// assert!(Dimension::try_from(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,
}

impl Dimension {
    /// Returns the number of ordinates per position.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
        }
    }
}

impl TryFrom<usize> for Dimension {
    type Error = SdoError;

    fn try_from(value: usize) -> std::result::Result<Self, Self::Error> {
        match value {
            2 => Ok(Dimension::XY),
            3 => Ok(Dimension::XYZ),
            _ => Err(SdoError::InvalidGeometry(format!(
                "Unsupported coordinate dimension {value}"
            ))),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
        }
    }
}
