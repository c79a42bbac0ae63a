use tracing::warn;

use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode consecutive line triplets starting at `triplet` into a multicurve.
    pub(crate) fn multi_curve(&self, triplet: usize) -> Result<Option<F::Geometry>> {
        self.start_index(triplet)?;
        if self.elem_info.element_type(triplet) != Some(ElementType::Line) {
            return Err(SdoError::MalformedEncoding(format!(
                "ETYPE {} is not a line",
                self.elem_info.etype(triplet)
            )));
        }
        let interpretation = self.elem_info.interpretation(triplet);
        if interpretation != 1 {
            warn!("Cannot decode a multicurve with interpretation {interpretation}, expected 1");
            return Ok(None);
        }

        let mut curves = vec![];
        let mut i = triplet;
        while self.elem_info.element_type(i) == Some(ElementType::Line) {
            let Some(curve) = self.curve(i, false)? else {
                return Ok(None);
            };
            curves.push(curve);
            i += 1;
        }
        Ok(Some(self.factory.create_multi_curve(curves)))
    }
}
