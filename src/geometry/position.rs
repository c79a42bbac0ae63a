use crate::geometry::Dimension;

/// A single 2D or 3D location.
///
/// Equality is exact ordinate equality; no tolerance is applied anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl Position {
    /// Construct a 2D position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Construct a 3D position.
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Native dimension of this position
    pub fn dim(&self) -> Dimension {
        if self.z.is_some() {
            Dimension::XYZ
        } else {
            Dimension::XY
        }
    }

    /// Access the n'th (0-based) ordinate.
    ///
    /// Returns `None` if `n >= self.dim().size()`.
    pub fn nth(&self, n: usize) -> Option<f64> {
        match n {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => self.z,
            _ => None,
        }
    }

    /// Append this position's ordinates to `buf`, x first.
    pub(crate) fn extend_ordinates(&self, buf: &mut Vec<f64>) {
        buf.push(self.x);
        buf.push(self.y);
        if let Some(z) = self.z {
            buf.push(z);
        }
    }
}

impl From<(f64, f64)> for Position {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from(value: (f64, f64, f64)) -> Self {
        Self::new_3d(value.0, value.1, value.2)
    }
}

/// A zero-dimensional geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    position: Position,
}

impl Point {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }
}

impl From<Position> for Point {
    fn from(value: Position) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dim() {
        assert_eq!(Position::new(1., 2.).dim(), Dimension::XY);
        assert_eq!(Position::new_3d(1., 2., 3.).dim(), Dimension::XYZ);
    }

    #[test]
    fn nth() {
        let p = Position::new_3d(4., 5., 6.);
        assert_eq!(p.nth(0), Some(4.));
        assert_eq!(p.nth(2), Some(6.));
        assert_eq!(p.nth(3), None);
        assert_eq!(Position::new(4., 5.).nth(2), None);
    }

    #[test]
    fn extend_ordinates() {
        let mut buf = vec![];
        Position::new(1., 2.).extend_ordinates(&mut buf);
        Position::new_3d(3., 4., 5.).extend_ordinates(&mut buf);
        assert_eq!(buf, vec![1., 2., 3., 4., 5.]);
    }
}
