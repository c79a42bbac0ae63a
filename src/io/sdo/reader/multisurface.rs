use tracing::warn;

use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::{interpretation, ElementType};
use crate::io::sdo::reader::Decoder;

fn is_polygon(etype: Option<ElementType>) -> bool {
    matches!(
        etype,
        Some(
            ElementType::Polygon
                | ElementType::PolygonExterior
                | ElementType::CompoundPolygon
                | ElementType::CompoundPolygonExterior
        )
    )
}

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode consecutive polygons starting at `triplet`, each with its holes, into a
    /// multisurface.
    pub(crate) fn multi_surface(&self, triplet: usize) -> Result<Option<F::Geometry>> {
        self.start_index(triplet)?;
        let etype = self.elem_info.element_type(triplet);
        if !is_polygon(etype) {
            return Err(SdoError::MalformedEncoding(format!(
                "ETYPE {} is not a polygon exterior",
                self.elem_info.etype(triplet)
            )));
        }
        let interpretation = self.elem_info.interpretation(triplet);
        let compound = etype.is_some_and(|etype| etype.is_compound());
        if !compound
            && interpretation != interpretation::STRAIGHT
            && interpretation != interpretation::RECTANGLE
        {
            warn!("Cannot decode a multisurface with interpretation {interpretation}");
            return Ok(None);
        }

        let mut surfaces = vec![];
        let mut i = triplet;
        while is_polygon(self.elem_info.element_type(i)) {
            let Some((surface, next)) = self.surface(i)? else {
                return Ok(None);
            };
            surfaces.push(surface);
            i = next;
        }
        Ok(Some(self.factory.create_multi_surface(surfaces)))
    }
}
