use crate::algorithm::is_curve;
use crate::error::{Result, SdoError};
use crate::geometry::Curve;
use crate::io::sdo::common::{interpretation, ElementType};
use crate::io::sdo::writer::SdoWriter;

/// Write a curve as one line triplet followed by its control points.
pub fn write_curve(writer: &mut SdoWriter, geom: &Curve) -> Result<usize> {
    if geom.num_positions() < 2 {
        return Err(SdoError::InvalidGeometry(format!(
            "A curve needs at least 2 positions, got {}",
            geom.num_positions()
        )));
    }
    let interpretation = if is_curve(geom.positions()) {
        interpretation::ARC
    } else {
        interpretation::STRAIGHT
    };

    let start = writer.len();
    writer.push_element(ElementType::Line, interpretation)?;
    writer.push_positions(geom.positions())?;
    Ok(writer.len() - start)
}
