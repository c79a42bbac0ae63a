use crate::error::{Result, SdoError};
use crate::geometry::MultiPoint;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::writer::{to_sdo_int, SdoWriter};

/// Write a multipoint as a single `(offset, 1, N)` triplet followed by its `N` positions.
pub fn write_multi_point(writer: &mut SdoWriter, geom: &MultiPoint) -> Result<usize> {
    if geom.num_points() == 0 {
        return Err(SdoError::InvalidGeometry(
            "Cannot encode an empty MultiPoint".to_string(),
        ));
    }

    let start = writer.len();
    writer.push_element(ElementType::Point, to_sdo_int(geom.num_points())?)?;
    writer.push_positions(geom.points().iter().map(|p| p.position()))?;
    Ok(writer.len() - start)
}
