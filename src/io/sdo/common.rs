use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SdoError};
use crate::geometry::Dimension;

/// The SRID stored when a geometry carries no spatial reference.
pub const SRID_NULL: i32 = -1;

/// The parts of one SDO_GEOMETRY value as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdoGeometry {
    pub gtype: i32,
    pub srid: i32,
    /// SDO_POINT, set only for the compact single point form.
    pub point: Option<Vec<f64>>,
    pub elem_info: Vec<i32>,
    pub ordinates: Vec<f64>,
}

impl SdoGeometry {
    pub fn gtype(&self) -> GType {
        GType::from(self.gtype)
    }
}

/// The `TT` geometry type code carried in the last two digits of a GTYPE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum SdoGeometryType {
    Unknown = 0,
    Point = 1,
    Line = 2,
    Polygon = 3,
    Collection = 4,
    MultiPoint = 5,
    MultiLine = 6,
    MultiPolygon = 7,
    Solid = 8,
    MultiSolid = 9,
}

/// The structural role of one ELEM_INFO triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ElementType {
    Custom = 0,
    Point = 1,
    Line = 2,
    Polygon = 3,
    Compound = 4,
    CompoundPolygon = 5,
    PolygonExterior = 1003,
    PolygonInterior = 2003,
    CompoundPolygonExterior = 1005,
    CompoundPolygonInterior = 2005,
    CompositeSurfaceExterior = 1006,
    CompositeSurfaceInterior = 2006,
    Solid = 1007,
}

impl ElementType {
    pub(crate) fn is_compound(&self) -> bool {
        matches!(
            self,
            ElementType::Compound
                | ElementType::CompoundPolygon
                | ElementType::CompoundPolygonExterior
                | ElementType::CompoundPolygonInterior
        )
    }
}

/// Interpretation codes of line and polygon triplets.
///
/// Compound and shell triplets use the interpretation as a sub-triplet count instead, and point
/// triplets as a point count.
pub mod interpretation {
    pub const STRAIGHT: i32 = 1;
    pub const ARC: i32 = 2;
    pub const RECTANGLE: i32 = 3;
    pub const CIRCLE: i32 = 4;
}

/// The GTYPE descriptor, `D * 1000 + L * 100 + TT`.
///
/// `D` is the coordinate dimension, `L` the 1-based position of the measure ordinate (or 0 for
/// none) and `TT` the [SdoGeometryType] code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GType(i32);

impl GType {
    pub fn new(dim: Dimension, lrs: i32, geometry_type: SdoGeometryType) -> Self {
        let d = dim.size() as i32;
        Self(d * 1000 + lrs * 100 + i32::from(geometry_type))
    }

    /// Coordinate dimension `D`.
    pub fn dimension(&self) -> i32 {
        self.0 / 1000
    }

    /// Measure ordinate position `L`.
    pub fn lrs(&self) -> i32 {
        (self.0 - self.dimension() * 1000) / 100
    }

    /// Geometry type code `TT`.
    pub fn type_code(&self) -> i32 {
        self.0 - self.dimension() * 1000 - self.lrs() * 100
    }

    pub fn geometry_type(&self) -> Result<SdoGeometryType> {
        SdoGeometryType::try_from(self.type_code()).map_err(|_| {
            SdoError::MalformedEncoding(format!("Unknown geometry type in GTYPE {}", self.0))
        })
    }
}

impl From<i32> for GType {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<GType> for i32 {
    fn from(value: GType) -> Self {
        value.0
    }
}
