use tracing::debug;

use crate::error::{Result, SdoError};
use crate::geometry::Position;
use crate::io::sdo::common::{GType, SdoGeometryType};

/// The positions of an SDO_ORDINATES array, read with the stride of its GTYPE.
#[derive(Debug, Clone)]
pub struct Coordinates {
    dim: usize,
    positions: Vec<Position>,
}

impl Coordinates {
    /// Read `ordinates` into positions.
    ///
    /// The stride is `D`. Z is kept when `D >= 3` and the measure is not the third ordinate.
    /// The measure ordinate, if any, is dropped.
    pub fn try_new(gtype: GType, ordinates: &[f64]) -> Result<Self> {
        let d = gtype.dimension();
        let l = gtype.lrs();
        if !(2..=4).contains(&d) {
            return Err(SdoError::MalformedEncoding(format!(
                "Unsupported dimension {d} in GTYPE {}",
                i32::from(gtype)
            )));
        }
        if l > d {
            return Err(SdoError::MalformedEncoding(format!(
                "Measure ordinate {l} is past the dimension {d}"
            )));
        }
        let dim = d as usize;

        // A 2D point may carry a z in a 3 ordinate array
        if d == 2 && l == 0 && gtype.type_code() == i32::from(SdoGeometryType::Point) {
            if let [x, y, z] = *ordinates {
                return Ok(Self {
                    dim,
                    positions: vec![Position::new_3d(x, y, z)],
                });
            }
        }

        if ordinates.len() % dim != 0 {
            return Err(SdoError::MalformedEncoding(format!(
                "{} ordinates cannot be split into positions of {dim}",
                ordinates.len()
            )));
        }
        if l != 0 {
            debug!("Dropping measure ordinate {l} of GTYPE {}", i32::from(gtype));
        }

        let keep_z = d >= 3 && l != 3;
        let positions = ordinates
            .chunks_exact(dim)
            .map(|c| {
                if keep_z {
                    Position::new_3d(c[0], c[1], c[2])
                } else {
                    Position::new(c[0], c[1])
                }
            })
            .collect();
        Ok(Self { dim, positions })
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// The index of the position a 1-based ordinate offset points at.
    ///
    /// Valid offsets are `1..=len * dim`.
    pub fn position_index(&self, offset: i32) -> Result<usize> {
        let max = self.positions.len() * self.dim;
        match usize::try_from(offset) {
            Ok(o) if (1..=max).contains(&o) => Ok((o - 1) / self.dim),
            _ => Err(SdoError::MalformedEncoding(format!(
                "ELEM_INFO offset {offset} outside the ordinate range 1..={max}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn xy() {
        let coords = Coordinates::try_new(GType::from(2002), &[0., 1., 2., 3.]).unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords.positions()[1], Position::new(2., 3.));
    }

    #[test]
    fn measures_are_dropped() {
        let coords = Coordinates::try_new(GType::from(3302), &[0., 1., 9., 2., 3., 9.]).unwrap();
        assert_eq!(coords.positions(), &[Position::new(0., 1.), Position::new(2., 3.)]);

        let coords = Coordinates::try_new(GType::from(4402), &[0., 1., 2., 9.]).unwrap();
        assert_eq!(coords.positions(), &[Position::new_3d(0., 1., 2.)]);
    }

    #[test]
    fn point_with_z() {
        let coords = Coordinates::try_new(GType::from(2001), &[1., 2., 3.]).unwrap();
        assert_eq!(coords.positions(), &[Position::new_3d(1., 2., 3.)]);
    }

    #[test]
    fn bad_stride() {
        assert!(Coordinates::try_new(GType::from(3002), &[0., 1., 2., 3.]).is_err());
        assert!(Coordinates::try_new(GType::from(2402), &[0., 1.]).is_err());
        assert!(Coordinates::try_new(GType::from(5002), &[0.; 5]).is_err());
    }

    #[test]
    fn offsets() {
        let coords = Coordinates::try_new(GType::from(2002), &[0., 1., 2., 3.]).unwrap();
        assert_eq!(coords.position_index(1).unwrap(), 0);
        assert_eq!(coords.position_index(3).unwrap(), 1);
        assert_eq!(coords.position_index(4).unwrap(), 1);
        assert!(coords.position_index(0).is_err());
        assert!(coords.position_index(5).is_err());
        assert!(coords.position_index(-1).is_err());
    }
}
