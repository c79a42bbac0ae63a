use crate::algorithm::shape::is_rectangle_ring;
use crate::algorithm::{clockwise, counter_clockwise};
use crate::error::{Result, SdoError};
use crate::geometry::{Position, Ring, Surface};
use crate::io::sdo::common::{interpretation, ElementType};
use crate::io::sdo::writer::SdoWriter;

/// Write a surface as an exterior triplet followed by one interior triplet per hole.
///
/// The exterior ring is written counterclockwise and every hole clockwise. A surface without
/// holes whose exterior is an axis-aligned rectangle is written as its two envelope corners.
pub fn write_surface(writer: &mut SdoWriter, geom: &Surface) -> Result<usize> {
    let start = writer.len();

    let exterior = ring_positions(geom.exterior())?;
    if geom.num_interiors() == 0 && is_rectangle_ring(&exterior) {
        let (min, max) = envelope(&exterior);
        writer.push_element(ElementType::PolygonExterior, interpretation::RECTANGLE)?;
        writer.push_positions([&min, &max])?;
        return Ok(writer.len() - start);
    }

    writer.push_element(ElementType::PolygonExterior, interpretation::STRAIGHT)?;
    writer.push_positions(&counter_clockwise(&exterior))?;

    for interior in geom.interiors() {
        let interior = ring_positions(interior)?;
        writer.push_element(ElementType::PolygonInterior, interpretation::STRAIGHT)?;
        writer.push_positions(&clockwise(&interior))?;
    }

    Ok(writer.len() - start)
}

fn ring_positions(ring: &Ring) -> Result<Vec<Position>> {
    let positions = ring.positions()?;
    if positions.len() < 4 {
        return Err(SdoError::InvalidGeometry(format!(
            "A ring needs at least 4 positions, got {}",
            positions.len()
        )));
    }
    Ok(positions)
}

/// The lower and upper corners of the bounding box of `positions`.
fn envelope(positions: &[Position]) -> (Position, Position) {
    let first = positions[0];
    positions.iter().fold((first, first), |(min, max), p| {
        (corner(&min, p, f64::min), corner(&max, p, f64::max))
    })
}

fn corner(a: &Position, b: &Position, pick: fn(f64, f64) -> f64) -> Position {
    let x = pick(a.x(), b.x());
    let y = pick(a.y(), b.y());
    match (a.z(), b.z()) {
        (Some(az), Some(bz)) => Position::new_3d(x, y, pick(az, bz)),
        _ => Position::new(x, y),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Dimension;
    use crate::test::surface::{p0, p1, p1_reversed, rect, triangle};

    fn write(geom: &geo::Polygon) -> (usize, Vec<i32>, Vec<f64>) {
        let mut writer = SdoWriter::new(Dimension::XY);
        let consumed = write_surface(&mut writer, &geom.into()).unwrap();
        let (elem_info, ordinates) = writer.into_parts();
        (consumed, elem_info, ordinates)
    }

    #[test]
    fn triangle_exterior() {
        let (consumed, elem_info, ordinates) = write(&triangle());
        assert_eq!(consumed, 8);
        assert_eq!(elem_info, vec![1, 1003, 1]);
        assert_eq!(ordinates, vec![0., 0., 4., 0., 4., 4., 0., 0.]);
    }

    #[test]
    fn rectangle_is_two_corners() {
        let (consumed, elem_info, ordinates) = write(&rect());
        assert_eq!(consumed, 4);
        assert_eq!(elem_info, vec![1, 1003, 3]);
        assert_eq!(ordinates, vec![0., 0., 4., 4.]);
    }

    #[test]
    fn l_shape() {
        let (consumed, elem_info, _) = write(&p0());
        assert_eq!(consumed, 14);
        assert_eq!(elem_info, vec![1, 1003, 1]);
    }

    #[test]
    fn holes_follow_exterior() {
        let (consumed, elem_info, ordinates) = write(&p1());
        assert_eq!(consumed, 20);
        assert_eq!(elem_info, vec![1, 1003, 1, 11, 2003, 1]);
        assert_eq!(&ordinates[10..14], &[1., 1., 1., 2.]);
    }

    #[test]
    fn rings_are_reoriented() {
        let (_, elem_info, ordinates) = write(&p1_reversed());
        let (_, _, expected) = write(&p1());
        assert_eq!(elem_info, vec![1, 1003, 1, 11, 2003, 1]);

        let exterior: Vec<_> = ordinates[..10].chunks(2).map(|c| (c[0], c[1])).collect();
        assert_eq!(
            exterior,
            vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]
        );
        assert_eq!(ordinates, expected);
    }

    #[test]
    fn envelope_3d() {
        let (min, max) = envelope(&[
            Position::new_3d(2., 3., 1.),
            Position::new_3d(2., 0., 1.),
            Position::new_3d(2., 0., 0.),
        ]);
        assert_eq!(min, Position::new_3d(2., 0., 0.));
        assert_eq!(max, Position::new_3d(2., 3., 1.));
    }
}
