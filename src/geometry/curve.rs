use crate::error::{Result, SdoError};
use crate::geometry::Position;

/// A one-dimensional geometry with straight edges between consecutive control points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    positions: Vec<Position>,
}

impl Curve {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// The control points of this curve.
    ///
    /// Curves only have straight edges, so this is the curve flattened to a polyline with zero
    /// tolerance.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn num_positions(&self) -> usize {
        self.positions.len()
    }

    pub fn start(&self) -> Option<&Position> {
        self.positions.first()
    }

    pub fn end(&self) -> Option<&Position> {
        self.positions.last()
    }

    /// Join curves that share endpoints into a single curve.
    ///
    /// The first position of each part is dropped when it repeats the previous part's last
    /// position.
    pub fn join(parts: impl IntoIterator<Item = Curve>) -> Self {
        let mut positions: Vec<Position> = vec![];
        for part in parts {
            let mut part_positions = part.positions.into_iter().peekable();
            if let (Some(last), Some(first)) = (positions.last(), part_positions.peek()) {
                if last == first {
                    part_positions.next();
                }
            }
            positions.extend(part_positions);
        }
        Self::new(positions)
    }
}

impl From<Vec<Position>> for Curve {
    fn from(value: Vec<Position>) -> Self {
        Self::new(value)
    }
}

/// A closed boundary made of one or more curves that share endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring {
    curves: Vec<Curve>,
}

impl Ring {
    pub fn new(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    /// A ring made of a single curve through `positions`.
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self::new(vec![Curve::new(positions)])
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Assemble the ordered sequence of positions of this ring.
    ///
    /// Each curve after the first is appended if it starts where the running sequence ends, or
    /// prepended if it ends where the running sequence starts.
    pub fn positions(&self) -> Result<Vec<Position>> {
        let mut positions: Vec<Position> = vec![];
        for curve in self.curves.iter().filter(|c| c.num_positions() > 0) {
            let curve_positions = curve.positions();
            if positions.is_empty() {
                positions.extend_from_slice(curve_positions);
                continue;
            }
            let start = positions[0];
            let end = positions[positions.len() - 1];

            let n = curve_positions.len();
            if end == curve_positions[0] {
                positions.extend_from_slice(&curve_positions[1..]);
            } else if curve_positions[n - 1] == start {
                positions.splice(0..0, curve_positions[..n - 1].iter().copied());
            } else {
                return Err(SdoError::InvalidGeometry(
                    "Ring curves do not agree in a start and end point".to_string(),
                ));
            }
        }

        Ok(positions)
    }
}
