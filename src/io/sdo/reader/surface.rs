use tracing::warn;

use crate::algorithm::is_ccw;
use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode a polygon starting at `triplet` together with the holes that follow it.
    ///
    /// Returns the surface and the index of the first triplet after it. A plain polygon triplet
    /// (etype 3) after the exterior is a hole when its ring is clockwise, and the start of the
    /// next polygon otherwise.
    pub(crate) fn surface(&self, triplet: usize) -> Result<Option<(F::Surface, usize)>> {
        self.start_index(triplet)?;
        let etype = match self.elem_info.element_type(triplet) {
            Some(
                etype @ (ElementType::Polygon
                | ElementType::PolygonExterior
                | ElementType::CompoundPolygon
                | ElementType::CompoundPolygonExterior),
            ) => etype,
            _ => {
                return Err(SdoError::MalformedEncoding(format!(
                    "ETYPE {} is not a polygon exterior",
                    self.elem_info.etype(triplet)
                )))
            }
        };
        let interpretation = self.elem_info.interpretation(triplet);
        if !etype.is_compound() && !(1..=4).contains(&interpretation) {
            warn!("Cannot decode a polygon with interpretation {interpretation}");
            return Ok(None);
        }

        let Some(exterior) = self.ring(triplet)? else {
            return Ok(None);
        };
        let mut next = triplet + 1;
        if etype.is_compound() {
            next += self.elem_info.sub_elements(triplet)?;
        }

        let mut interiors = vec![];
        loop {
            let consumed = match self.elem_info.element_type(next) {
                Some(ElementType::PolygonInterior) => 1,
                Some(ElementType::CompoundPolygonInterior) => {
                    1 + self.elem_info.sub_elements(next)?
                }
                Some(ElementType::Polygon) => {
                    if is_ccw(&self.ring_positions(next)?) {
                        break;
                    }
                    1
                }
                _ => break,
            };
            let Some(interior) = self.ring(next)? else {
                return Ok(None);
            };
            interiors.push(interior);
            next += consumed;
        }

        Ok(Some((self.factory.create_surface(exterior, interiors), next)))
    }
}
