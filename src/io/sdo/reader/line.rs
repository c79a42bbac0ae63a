use tracing::debug;

use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::{interpretation, ElementType};
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode a line triplet, or a compound line header and its parts.
    ///
    /// `compound` marks a part of a compound element that shares its last position with the
    /// next part.
    pub(crate) fn curve(&self, triplet: usize, compound: bool) -> Result<Option<F::Curve>> {
        let interpretation = self.elem_info.interpretation(triplet);
        match self.elem_info.element_type(triplet) {
            Some(ElementType::Line) => {
                match interpretation {
                    interpretation::STRAIGHT => {}
                    interpretation::ARC => {
                        debug!("Reading circular arcs of triplet {triplet} as straight edges")
                    }
                    _ => {
                        return Err(SdoError::MalformedEncoding(format!(
                            "Line interpretation {interpretation} is not supported"
                        )))
                    }
                }
                let positions = self.slice(triplet, compound)?;
                Ok(Some(self.factory.create_curve(self.positions(positions))))
            }
            Some(ElementType::Compound) => {
                self.start_index(triplet)?;
                let Some(parts) = self.compound_parts(triplet)? else {
                    return Ok(None);
                };
                Ok(Some(self.factory.create_compound_curve(parts)))
            }
            _ => Err(SdoError::MalformedEncoding(format!(
                "ETYPE {} is not a line",
                self.elem_info.etype(triplet)
            ))),
        }
    }

    /// Decode the line parts following a compound header.
    pub(crate) fn compound_parts(&self, triplet: usize) -> Result<Option<Vec<F::Curve>>> {
        let count = self.elem_info.sub_elements(triplet)?;
        let mut parts = Vec::with_capacity(count);
        for k in 1..=count {
            if self.elem_info.element_type(triplet + k) != Some(ElementType::Line) {
                return Err(SdoError::MalformedEncoding(format!(
                    "Compound element part has ETYPE {}, expected a line",
                    self.elem_info.etype(triplet + k)
                )));
            }
            let Some(part) = self.curve(triplet + k, k < count)? else {
                return Ok(None);
            };
            parts.push(part);
        }
        Ok(Some(parts))
    }
}
