//! Encode geometries into SDO_ELEM_INFO and SDO_ORDINATES.
//!
//! Every writer appends its triplets and its ordinates to one [SdoWriter] in the same pass, and
//! a triplet's offset is always read from the number of ordinates written so far. Each writer
//! returns the number of ordinates it consumed.

mod collection;
mod curve;
mod geometry;
mod multicurve;
mod multipoint;
mod multisurface;
mod point;
mod solid;
mod surface;

pub use collection::write_collection;
pub use curve::write_curve;
pub use geometry::write_geometry;
pub use multicurve::write_multi_curve;
pub use multipoint::write_multi_point;
pub use multisurface::write_multi_surface;
pub use point::write_point;
pub use solid::write_solid;
pub use surface::write_surface;

use crate::error::{Result, SdoError};
use crate::geometry::{Dimension, Position};
use crate::io::sdo::common::ElementType;

/// Accumulates the ELEM_INFO triplets and ordinates of one geometry.
#[derive(Debug)]
pub struct SdoWriter {
    dim: Dimension,
    elem_info: Vec<i32>,
    ordinates: Vec<f64>,
}

impl SdoWriter {
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            elem_info: vec![],
            ordinates: vec![],
        }
    }

    /// Number of ordinates written so far.
    pub fn len(&self) -> usize {
        self.ordinates.len()
    }

    /// The 1-based offset the next written ordinate will have.
    pub fn offset(&self) -> Result<i32> {
        to_sdo_int(self.ordinates.len() + 1)
    }

    /// Append a triplet starting at the current offset.
    pub fn push_element(&mut self, etype: ElementType, interpretation: i32) -> Result<()> {
        let offset = self.offset()?;
        self.elem_info
            .extend([offset, etype.into(), interpretation]);
        Ok(())
    }

    pub fn push_position(&mut self, position: &Position) -> Result<()> {
        if position.dim() != self.dim {
            return Err(SdoError::InvalidGeometry(format!(
                "Position of dimension {} in a geometry of dimension {}",
                position.dim(),
                self.dim
            )));
        }
        position.extend_ordinates(&mut self.ordinates);
        Ok(())
    }

    pub fn push_positions<'a>(
        &mut self,
        positions: impl IntoIterator<Item = &'a Position>,
    ) -> Result<()> {
        positions
            .into_iter()
            .try_for_each(|position| self.push_position(position))
    }

    pub fn into_parts(self) -> (Vec<i32>, Vec<f64>) {
        (self.elem_info, self.ordinates)
    }
}

/// Convert a count or offset to the 32-bit integer stored on the wire.
pub(crate) fn to_sdo_int(value: usize) -> Result<i32> {
    value.try_into().map_err(|_| SdoError::Overflow)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offsets_follow_ordinates() {
        let mut writer = SdoWriter::new(Dimension::XY);
        writer.push_element(ElementType::Line, 1).unwrap();
        writer
            .push_positions(&[Position::new(0., 0.), Position::new(1., 1.)])
            .unwrap();
        writer.push_element(ElementType::Point, 1).unwrap();
        writer.push_position(&Position::new(2., 2.)).unwrap();
        assert_eq!(writer.offset().unwrap(), 7);

        let (elem_info, ordinates) = writer.into_parts();
        assert_eq!(elem_info, vec![1, 2, 1, 5, 1, 1]);
        assert_eq!(ordinates, vec![0., 0., 1., 1., 2., 2.]);
    }

    #[test]
    fn mixed_dimensions() {
        let mut writer = SdoWriter::new(Dimension::XY);
        let err = writer.push_position(&Position::new_3d(0., 0., 0.));
        assert!(matches!(err, Err(SdoError::InvalidGeometry(_))));
    }
}
