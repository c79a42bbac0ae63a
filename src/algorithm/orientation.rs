//! Ring orientation.
//!
//! 2D rings are tested directly. 3D rings are projected onto the coordinate plane most
//! perpendicular to their Newell normal first, with the projection chosen so that a ring which
//! is counterclockwise seen from the positive end of that axis stays counterclockwise.

use geo::{Coord, LineString, Winding};
use itertools::Itertools;

use crate::geometry::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

/// The axis of the largest component of the ring's Newell normal.
fn dominant_axis(ring: &[Position]) -> Axis {
    let (mut nx, mut ny, mut nz) = (0., 0., 0.);
    for (a, b) in ring.iter().circular_tuple_windows() {
        let (az, bz) = (a.z().unwrap_or(0.), b.z().unwrap_or(0.));
        nx += (a.y() - b.y()) * (az + bz);
        ny += (az - bz) * (a.x() + b.x());
        nz += (a.x() - b.x()) * (a.y() + b.y());
    }
    let (nx, ny, nz) = (nx.abs(), ny.abs(), nz.abs());
    if nz >= nx && nz >= ny {
        Axis::Z
    } else if nx >= ny {
        Axis::X
    } else {
        Axis::Y
    }
}

fn project(ring: &[Position]) -> LineString {
    let is_3d = ring.iter().any(|p| p.z().is_some());
    let axis = if is_3d {
        dominant_axis(ring)
    } else {
        Axis::Z
    };
    ring.iter()
        .map(|p| {
            let z = p.z().unwrap_or(0.);
            match axis {
                Axis::Z => Coord { x: p.x(), y: p.y() },
                Axis::X => Coord { x: p.y(), y: z },
                Axis::Y => Coord { x: z, y: p.x() },
            }
        })
        .collect()
}

/// Returns true if the closed ring runs counterclockwise.
///
/// Degenerate rings (fewer than four positions, open, or with zero area) are not
/// counterclockwise.
pub fn is_ccw(ring: &[Position]) -> bool {
    project(ring).is_ccw()
}

/// The ring in counterclockwise order, reversed from `ring` if needed.
pub fn counter_clockwise(ring: &[Position]) -> Vec<Position> {
    if is_ccw(ring) {
        ring.to_vec()
    } else {
        ring.iter().rev().copied().collect()
    }
}

/// The ring in clockwise order, reversed from `ring` if needed.
pub fn clockwise(ring: &[Position]) -> Vec<Position> {
    if is_ccw(ring) {
        ring.iter().rev().copied().collect()
    } else {
        ring.to_vec()
    }
}
