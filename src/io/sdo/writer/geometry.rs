use crate::error::Result;
use crate::geometry::GeometryType;
use crate::io::sdo::writer::{
    write_collection, write_curve, write_multi_curve, write_multi_point, write_multi_surface,
    write_point, write_solid, write_surface, SdoWriter,
};

/// Write any geometry, dispatching on its variant.
pub fn write_geometry(writer: &mut SdoWriter, geom: &GeometryType) -> Result<usize> {
    match geom {
        GeometryType::Point(g) => write_point(writer, g),
        GeometryType::Curve(g) => write_curve(writer, g),
        GeometryType::Surface(g) => write_surface(writer, g),
        GeometryType::Solid(g) => write_solid(writer, g),
        GeometryType::MultiPoint(g) => write_multi_point(writer, g),
        GeometryType::MultiCurve(g) => write_multi_curve(writer, g),
        GeometryType::MultiSurface(g) => write_multi_surface(writer, g),
        GeometryType::Collection(g) => write_collection(writer, g),
    }
}
