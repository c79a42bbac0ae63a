//! The in-crate geometry kernel: a small immutable geometry model and the factory the decoder
//! builds it through.

pub use curve::{Curve, Ring};
pub use dimension::Dimension;
pub use factory::{DefaultGeometryFactory, GeometryFactory};
pub use geometry_type::{Geometry, GeometryType};
pub use multi::{Collection, MultiCurve, MultiPoint, MultiSurface};
pub use position::{Point, Position};
pub use surface::{Shell, Solid, Surface};

mod curve;
mod dimension;
pub mod factory;
mod geo;
mod geometry_type;
mod multi;
mod position;
mod surface;
