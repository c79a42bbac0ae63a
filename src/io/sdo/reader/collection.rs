use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode every triplet from `triplet` on as a member of a collection.
    ///
    /// Points, multipoints, lines and polygons (with their holes) are accepted. Holes without
    /// an exterior, compound elements, custom elements and solids are malformed here.
    pub(crate) fn collection(&self, triplet: usize) -> Result<Option<F::Geometry>> {
        self.start_index(triplet)?;

        let mut members = vec![];
        let mut i = triplet;
        while i < self.elem_info.len() {
            let member = match self.elem_info.element_type(i) {
                Some(ElementType::Point) => {
                    let interpretation = self.elem_info.interpretation(i);
                    i += 1;
                    if interpretation == 1 {
                        self.point(i - 1)?
                            .map(|point| self.factory.point_geometry(point))
                    } else if interpretation > 1 {
                        self.multi_point(i - 1)?
                            .map(|points| self.factory.create_multi_point(points))
                    } else {
                        return Err(SdoError::MalformedEncoding(format!(
                            "Point interpretation {interpretation} in a collection, expected a \
                             point count"
                        )));
                    }
                }
                Some(ElementType::Line) => {
                    i += 1;
                    self.curve(i - 1, false)?
                        .map(|curve| self.factory.curve_geometry(curve))
                }
                Some(ElementType::Polygon | ElementType::PolygonExterior) => {
                    match self.surface(i)? {
                        Some((surface, next)) => {
                            i = next;
                            Some(self.factory.surface_geometry(surface))
                        }
                        None => None,
                    }
                }
                Some(ElementType::PolygonInterior) => {
                    return Err(SdoError::MalformedEncoding(format!(
                        "Polygon interior at triplet {i} has no exterior in this collection"
                    )))
                }
                _ => {
                    return Err(SdoError::MalformedEncoding(format!(
                        "ETYPE {} cannot be a member of a collection",
                        self.elem_info.etype(i)
                    )))
                }
            };
            let Some(member) = member else {
                return Ok(None);
            };
            members.push(member);
        }
        Ok(Some(self.factory.create_collection(members)))
    }
}
