//! The construction interface the decoder uses to build geometries.
//!
//! The decoder never builds geometry values itself; it asks a [GeometryFactory] for each node
//! in the tree, leaves first. [DefaultGeometryFactory] builds this crate's own geometry model,
//! but any kernel can be targeted by implementing the trait.

use crate::geometry::{
    Collection, Curve, Geometry, MultiCurve, MultiPoint, MultiSurface, Point, Position, Ring,
    Shell, Solid, Surface,
};

/// Builder operations required from a geometry kernel to decode SDO_GEOMETRY values.
pub trait GeometryFactory {
    type Position: Clone;
    type Point;
    type Curve;
    type Ring;
    type Surface;
    type Shell;
    type Geometry;

    /// Create a 2D position, or a 3D one when `z` is set.
    fn create_position(&self, x: f64, y: f64, z: Option<f64>) -> Self::Position;

    fn create_point(&self, position: Self::Position) -> Self::Point;

    /// Create a curve through the given control points.
    fn create_curve(&self, positions: Vec<Self::Position>) -> Self::Curve;

    /// Create a straight edge between two positions.
    fn create_line_segment(&self, start: Self::Position, end: Self::Position) -> Self::Curve;

    /// Create one curve from consecutive parts that share endpoints.
    fn create_compound_curve(&self, parts: Vec<Self::Curve>) -> Self::Curve;

    /// Create a closed ring from curves that share endpoints.
    fn create_ring(&self, curves: Vec<Self::Curve>) -> Self::Ring;

    /// Create a surface from the rings of its boundary.
    fn create_surface(&self, exterior: Self::Ring, interiors: Vec<Self::Ring>) -> Self::Surface;

    fn create_shell(&self, surfaces: Vec<Self::Surface>) -> Self::Shell;

    /// Create a solid from the shells of its boundary.
    fn create_solid(&self, exterior: Self::Shell, interiors: Vec<Self::Shell>) -> Self::Geometry;

    fn create_multi_point(&self, points: Vec<Self::Point>) -> Self::Geometry;

    fn create_multi_curve(&self, curves: Vec<Self::Curve>) -> Self::Geometry;

    fn create_multi_surface(&self, surfaces: Vec<Self::Surface>) -> Self::Geometry;

    fn create_collection(&self, geometries: Vec<Self::Geometry>) -> Self::Geometry;

    fn point_geometry(&self, point: Self::Point) -> Self::Geometry;

    fn curve_geometry(&self, curve: Self::Curve) -> Self::Geometry;

    fn surface_geometry(&self, surface: Self::Surface) -> Self::Geometry;

    /// Attach the reference id tag that carries the SRID.
    fn set_srid(&self, geometry: &mut Self::Geometry, srid: i32);
}

/// A [GeometryFactory] that builds this crate's [Geometry] model.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGeometryFactory;

impl GeometryFactory for DefaultGeometryFactory {
    type Position = Position;
    type Point = Point;
    type Curve = Curve;
    type Ring = Ring;
    type Surface = Surface;
    type Shell = Shell;
    type Geometry = Geometry;

    fn create_position(&self, x: f64, y: f64, z: Option<f64>) -> Self::Position {
        match z {
            Some(z) => Position::new_3d(x, y, z),
            None => Position::new(x, y),
        }
    }

    fn create_point(&self, position: Self::Position) -> Self::Point {
        Point::new(position)
    }

    fn create_curve(&self, positions: Vec<Self::Position>) -> Self::Curve {
        Curve::new(positions)
    }

    fn create_line_segment(&self, start: Self::Position, end: Self::Position) -> Self::Curve {
        Curve::new(vec![start, end])
    }

    fn create_compound_curve(&self, parts: Vec<Self::Curve>) -> Self::Curve {
        Curve::join(parts)
    }

    fn create_ring(&self, curves: Vec<Self::Curve>) -> Self::Ring {
        Ring::new(curves)
    }

    fn create_surface(&self, exterior: Self::Ring, interiors: Vec<Self::Ring>) -> Self::Surface {
        Surface::new(exterior, interiors)
    }

    fn create_shell(&self, surfaces: Vec<Self::Surface>) -> Self::Shell {
        Shell::new(surfaces)
    }

    fn create_solid(&self, exterior: Self::Shell, interiors: Vec<Self::Shell>) -> Self::Geometry {
        Solid::new(Some(exterior), interiors).into()
    }

    fn create_multi_point(&self, points: Vec<Self::Point>) -> Self::Geometry {
        MultiPoint::new(points).into()
    }

    fn create_multi_curve(&self, curves: Vec<Self::Curve>) -> Self::Geometry {
        MultiCurve::new(curves).into()
    }

    fn create_multi_surface(&self, surfaces: Vec<Self::Surface>) -> Self::Geometry {
        MultiSurface::new(surfaces).into()
    }

    fn create_collection(&self, geometries: Vec<Self::Geometry>) -> Self::Geometry {
        Collection::new(geometries).into()
    }

    fn point_geometry(&self, point: Self::Point) -> Self::Geometry {
        point.into()
    }

    fn curve_geometry(&self, curve: Self::Curve) -> Self::Geometry {
        curve.into()
    }

    fn surface_geometry(&self, surface: Self::Surface) -> Self::Geometry {
        surface.into()
    }

    fn set_srid(&self, geometry: &mut Self::Geometry, srid: i32) {
        geometry.set_srid(Some(srid));
    }
}
