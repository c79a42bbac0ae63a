use tracing::warn;

use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode a `(offset, 1, 1)` point triplet.
    pub(crate) fn point(&self, triplet: usize) -> Result<Option<F::Point>> {
        let index = self.start_index(triplet)?;
        if self.elem_info.element_type(triplet) != Some(ElementType::Point) {
            return Err(SdoError::MalformedEncoding(format!(
                "ETYPE {} is not a point",
                self.elem_info.etype(triplet)
            )));
        }
        let interpretation = self.elem_info.interpretation(triplet);
        if interpretation != 1 {
            warn!("Cannot decode a point with interpretation {interpretation}, expected 1");
            return Ok(None);
        }

        let position = self.position(&self.coords.positions()[index]);
        Ok(Some(self.factory.create_point(position)))
    }
}
