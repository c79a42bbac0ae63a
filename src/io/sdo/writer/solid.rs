use tracing::debug;

use crate::error::{Result, SdoError};
use crate::geometry::Solid;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::writer::surface::write_surface;
use crate::io::sdo::writer::{to_sdo_int, SdoWriter};

/// Write a solid as `(offset, 1007, 1)`, then its exterior shell header `(offset, 1006, N)` and
/// the `N` faces of the shell.
///
/// Faces are written with the [write_surface] rules.
///
/// The solid header, the shell header and the first face share one offset. A solid without an
/// exterior shell is written as the solid header alone.
pub fn write_solid(writer: &mut SdoWriter, geom: &Solid) -> Result<usize> {
    if !geom.interiors().is_empty() {
        return Err(SdoError::UnsupportedGeometryKind(
            "Solid with interior shells".to_string(),
        ));
    }

    let start = writer.len();
    writer.push_element(ElementType::Solid, 1)?;

    let Some(shell) = geom.exterior() else {
        debug!("Solid has no exterior shell, writing the header only");
        return Ok(0);
    };

    writer.push_element(
        ElementType::CompositeSurfaceExterior,
        to_sdo_int(shell.num_surfaces())?,
    )?;
    for face in shell.surfaces() {
        write_surface(writer, face)?;
    }

    Ok(writer.len() - start)
}
