//! Decode SDO_GEOMETRY parts into geometries.
//!
//! Decoding walks ELEM_INFO by recursive descent and asks a [GeometryFactory] for every node it
//! builds. Structural errors are returned as [SdoError::MalformedEncoding]. Encodings that are
//! well formed but cannot be represented (circles, solid cavities and the like) are logged and
//! decode to `Ok(None)`.
//!
//! [SdoError::MalformedEncoding]: crate::error::SdoError::MalformedEncoding

mod collection;
mod coords;
mod cursor;
mod geometry;
mod line;
mod multicurve;
mod multipoint;
mod multisurface;
mod point;
mod ring;
mod solid;
mod surface;

pub use coords::Coordinates;
pub use cursor::ElemInfoCursor;
pub use geometry::decode_parts;

use crate::error::{Result, SdoError};
use crate::geometry::{GeometryFactory, Position};

/// The state shared by every decoding step of one geometry.
pub(crate) struct Decoder<'a, F: GeometryFactory> {
    factory: &'a F,
    elem_info: ElemInfoCursor<'a>,
    coords: Coordinates,
}

impl<'a, F: GeometryFactory> Decoder<'a, F> {
    pub(crate) fn new(factory: &'a F, elem_info: ElemInfoCursor<'a>, coords: Coordinates) -> Self {
        Self {
            factory,
            elem_info,
            coords,
        }
    }

    fn position(&self, position: &Position) -> F::Position {
        self.factory
            .create_position(position.x(), position.y(), position.z())
    }

    fn positions(&self, positions: &[Position]) -> Vec<F::Position> {
        positions.iter().map(|p| self.position(p)).collect()
    }

    /// The position index a triplet starts at.
    fn start_index(&self, triplet: usize) -> Result<usize> {
        self.coords
            .position_index(self.elem_info.starting_offset(triplet))
    }

    /// The positions of a triplet, from its offset up to the next triplet's offset.
    ///
    /// With `compound` set the slice also takes the first position of the next triplet, which
    /// a part of a compound element shares with the part after it.
    fn slice(&self, triplet: usize, compound: bool) -> Result<&[Position]> {
        let start = self.start_index(triplet)?;
        let end = if self.elem_info.starting_offset(triplet + 1) == -1 {
            self.coords.len()
        } else {
            let next = self.start_index(triplet + 1)?;
            if compound {
                (next + 1).min(self.coords.len())
            } else {
                next
            }
        };
        if end <= start {
            return Err(SdoError::MalformedEncoding(format!(
                "ELEM_INFO offsets do not increase after triplet {triplet}"
            )));
        }
        Ok(&self.coords.positions()[start..end])
    }
}
