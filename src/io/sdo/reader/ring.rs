use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::{Result, SdoError};
use crate::geometry::{GeometryFactory, Position};
use crate::io::sdo::common::{interpretation, ElementType};
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode one polygon ring triplet, or a compound ring header and its parts.
    pub(crate) fn ring(&self, triplet: usize) -> Result<Option<F::Ring>> {
        self.start_index(triplet)?;
        let etype = match self.elem_info.element_type(triplet) {
            Some(
                etype @ (ElementType::Polygon
                | ElementType::PolygonExterior
                | ElementType::PolygonInterior
                | ElementType::CompoundPolygon
                | ElementType::CompoundPolygonExterior
                | ElementType::CompoundPolygonInterior),
            ) => etype,
            _ => {
                return Err(SdoError::MalformedEncoding(format!(
                    "ETYPE {} is not a polygon ring",
                    self.elem_info.etype(triplet)
                )))
            }
        };

        if etype.is_compound() {
            let Some(parts) = self.compound_parts(triplet)? else {
                return Ok(None);
            };
            return Ok(Some(self.factory.create_ring(parts)));
        }

        let interpretation = self.elem_info.interpretation(triplet);
        let edges = match interpretation {
            interpretation::STRAIGHT | interpretation::ARC => {
                if interpretation == interpretation::ARC {
                    debug!("Reading circular arcs of triplet {triplet} as straight edges");
                }
                self.edges(self.slice(triplet, false)?)
            }
            interpretation::RECTANGLE => {
                let positions = self.slice(triplet, false)?;
                let [ld, ru, ..] = positions else {
                    return Err(SdoError::MalformedEncoding(format!(
                        "Rectangle triplet {triplet} needs 2 positions, got {}",
                        positions.len()
                    )));
                };
                self.edges(&rectangle(ld, ru)?)
            }
            interpretation::CIRCLE => {
                warn!("Cannot decode a circle ring, circles are not supported");
                return Ok(None);
            }
            _ => {
                warn!("Cannot decode a ring with interpretation {interpretation}");
                return Ok(None);
            }
        };
        Ok(Some(self.factory.create_ring(edges)))
    }

    /// The positions of a single ring triplet in ring order, before any factory call.
    ///
    /// Rectangles are expanded to their closed five position form.
    pub(crate) fn ring_positions(&self, triplet: usize) -> Result<Vec<Position>> {
        let positions = self.slice(triplet, false)?;
        match (self.elem_info.interpretation(triplet), positions) {
            (interpretation::RECTANGLE, [ld, ru, ..]) => rectangle(ld, ru),
            _ => Ok(positions.to_vec()),
        }
    }

    /// One straight two point curve per pair of consecutive positions.
    fn edges(&self, positions: &[Position]) -> Vec<F::Curve> {
        positions
            .iter()
            .tuple_windows()
            .map(|(a, b)| {
                self.factory
                    .create_line_segment(self.position(a), self.position(b))
            })
            .collect()
    }
}

/// The closed ring of the rectangle with lower corner `ld` and upper corner `ru`.
///
/// A 3D rectangle must lie in a plane where x, y or z is constant.
pub(crate) fn rectangle(ld: &Position, ru: &Position) -> Result<Vec<Position>> {
    let (lu, rd) = match (ld.z(), ru.z()) {
        (Some(lz), Some(rz)) => {
            if ld.x() == ru.x() {
                let c = ld.x();
                (
                    Position::new_3d(c, ru.y(), lz),
                    Position::new_3d(c, ld.y(), rz),
                )
            } else if ld.y() == ru.y() {
                let c = ld.y();
                (
                    Position::new_3d(ru.x(), c, lz),
                    Position::new_3d(ld.x(), c, rz),
                )
            } else if lz == rz {
                (
                    Position::new_3d(ru.x(), ld.y(), lz),
                    Position::new_3d(ld.x(), ru.y(), lz),
                )
            } else {
                return Err(SdoError::MalformedEncoding(
                    "3D rectangle corners share no ordinate".to_string(),
                ));
            }
        }
        _ => (
            Position::new(ru.x(), ld.y()),
            Position::new(ld.x(), ru.y()),
        ),
    };
    Ok(vec![*ld, lu, *ru, rd, *ld])
}
