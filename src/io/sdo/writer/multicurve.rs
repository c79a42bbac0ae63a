use crate::error::{Result, SdoError};
use crate::geometry::MultiCurve;
use crate::io::sdo::writer::{write_curve, SdoWriter};

/// Write each curve of a multicurve in order.
pub fn write_multi_curve(writer: &mut SdoWriter, geom: &MultiCurve) -> Result<usize> {
    if geom.num_curves() == 0 {
        return Err(SdoError::InvalidGeometry(
            "Cannot encode an empty MultiCurve".to_string(),
        ));
    }

    let mut consumed = 0;
    for curve in geom.curves() {
        consumed += write_curve(writer, curve)?;
    }
    Ok(consumed)
}
