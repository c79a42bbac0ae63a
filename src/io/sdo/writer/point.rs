use crate::error::Result;
use crate::geometry::Point;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::writer::SdoWriter;

/// Write a point as `(offset, 1, 1)` and its ordinates.
pub fn write_point(writer: &mut SdoWriter, geom: &Point) -> Result<usize> {
    let start = writer.len();
    writer.push_element(ElementType::Point, 1)?;
    writer.push_position(geom.position())?;
    Ok(writer.len() - start)
}
