use crate::geometry::{Curve, Geometry, Point, Surface};

/// A collection of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

/// A collection of curves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiCurve {
    curves: Vec<Curve>,
}

impl MultiCurve {
    pub fn new(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }
}

/// A collection of surfaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiSurface {
    surfaces: Vec<Surface>,
}

impl MultiSurface {
    pub fn new(surfaces: Vec<Surface>) -> Self {
        Self { surfaces }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn num_surfaces(&self) -> usize {
        self.surfaces.len()
    }
}

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    geometries: Vec<Geometry>,
}

impl Collection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }
}
