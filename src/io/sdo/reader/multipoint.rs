use tracing::warn;

use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode the points of a `(offset, 1, N)` triplet.
    pub(crate) fn multi_point(&self, triplet: usize) -> Result<Option<Vec<F::Point>>> {
        let start = self.start_index(triplet)?;
        if self.elem_info.element_type(triplet) != Some(ElementType::Point) {
            return Err(SdoError::MalformedEncoding(format!(
                "ETYPE {} is not a point",
                self.elem_info.etype(triplet)
            )));
        }
        let Ok(count @ 1..) = usize::try_from(self.elem_info.interpretation(triplet)) else {
            warn!(
                "Cannot decode a multipoint with interpretation {}, expected a point count",
                self.elem_info.interpretation(triplet)
            );
            return Ok(None);
        };

        let Some(positions) = self.coords.positions().get(start..start + count) else {
            return Err(SdoError::MalformedEncoding(format!(
                "Multipoint of {count} points at offset {} overruns the ordinates",
                self.elem_info.starting_offset(triplet)
            )));
        };
        Ok(Some(
            positions
                .iter()
                .map(|p| self.factory.create_point(self.position(p)))
                .collect(),
        ))
    }
}
