use crate::error::{Result, SdoError};
use crate::geometry::MultiSurface;
use crate::io::sdo::writer::{write_surface, SdoWriter};

/// Write each surface of a multisurface in order, holes directly after their exterior.
pub fn write_multi_surface(writer: &mut SdoWriter, geom: &MultiSurface) -> Result<usize> {
    if geom.num_surfaces() == 0 {
        return Err(SdoError::InvalidGeometry(
            "Cannot encode an empty MultiSurface".to_string(),
        ));
    }

    let mut consumed = 0;
    for surface in geom.surfaces() {
        consumed += write_surface(writer, surface)?;
    }
    Ok(consumed)
}
