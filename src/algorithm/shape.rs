//! Shape classification with exact ordinate equality.

use crate::geometry::{Position, Surface};

/// Returns true if `surface` is an axis-aligned rectangle that can be stored as its two
/// envelope corners.
///
/// The surface must have no holes and an exterior ring of exactly five positions, closed. In
/// 3D the four corners must lie in a plane where one of x, y or z is constant. Ordinates are
/// compared exactly, so a rectangle carrying floating point noise is not a rectangle.
pub fn is_rectangle(surface: &Surface) -> bool {
    if surface.num_interiors() != 0 {
        return false;
    }
    match surface.exterior().positions() {
        Ok(ring) => is_rectangle_ring(&ring),
        Err(_) => false,
    }
}

pub(crate) fn is_rectangle_ring(ring: &[Position]) -> bool {
    let [p1, p2, p3, p4, p5] = ring else {
        return false;
    };
    if p1 != p5 {
        return false;
    }
    let corners = [p1, p2, p3, p4];
    let same = |n: usize| corners.iter().all(|p| p.nth(n) == p1.nth(n));

    match (p1.z(), corners.iter().all(|p| p.z().is_some())) {
        (None, _) if corners.iter().all(|p| p.z().is_none()) => axis_aligned(&corners, 0, 1),
        (Some(_), true) => {
            if same(0) {
                axis_aligned(&corners, 2, 1)
            } else if same(1) {
                axis_aligned(&corners, 0, 2)
            } else if same(2) {
                axis_aligned(&corners, 0, 1)
            } else {
                false
            }
        }
        _ => false,
    }
}

/// Whether the corners form a rectangle with edges parallel to axes `a` and `b`.
fn axis_aligned(corners: &[&Position; 4], a: usize, b: usize) -> bool {
    let a = corners.map(|p| p.nth(a));
    let b = corners.map(|p| p.nth(b));
    (a[0] == a[3] && b[0] == b[1] && a[2] == a[1] && b[2] == b[3])
        || (a[0] == a[1] && b[0] == b[3] && a[2] == a[3] && b[2] == b[1])
}

/// Returns true if the curve has circular arc edges.
///
/// Curves in this crate only have straight edges.
pub fn is_curve(_positions: &[Position]) -> bool {
    false
}
