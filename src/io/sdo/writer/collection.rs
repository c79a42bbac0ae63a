use crate::error::{Result, SdoError};
use crate::geometry::{Collection, GeometryType};
use crate::io::sdo::writer::{
    write_curve, write_multi_curve, write_multi_point, write_multi_surface, write_point,
    write_surface, SdoWriter,
};

/// Write each member of a collection in order.
///
/// Nested multi geometries and collections are flattened into their members. Solids cannot be
/// members of a collection.
pub fn write_collection(writer: &mut SdoWriter, geom: &Collection) -> Result<usize> {
    if geom.num_geometries() == 0 {
        return Err(SdoError::InvalidGeometry(
            "Cannot encode an empty Collection".to_string(),
        ));
    }

    let mut consumed = 0;
    for member in geom.geometries() {
        consumed += match member.as_type() {
            GeometryType::Point(g) => write_point(writer, g)?,
            GeometryType::Curve(g) => write_curve(writer, g)?,
            GeometryType::Surface(g) => write_surface(writer, g)?,
            GeometryType::MultiPoint(g) => write_multi_point(writer, g)?,
            GeometryType::MultiCurve(g) => write_multi_curve(writer, g)?,
            GeometryType::MultiSurface(g) => write_multi_surface(writer, g)?,
            GeometryType::Collection(g) => write_collection(writer, g)?,
            GeometryType::Solid(_) => {
                return Err(SdoError::UnsupportedGeometryKind(
                    "Solid inside a Collection".to_string(),
                ))
            }
        };
    }
    Ok(consumed)
}
