use crate::geometry::{
    Collection, Curve, Dimension, MultiCurve, MultiPoint, MultiSurface, Point, Position, Ring,
    Solid, Surface,
};

/// The closed set of geometry variants understood by the SDO codec.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryType {
    Point(Point),
    Curve(Curve),
    Surface(Surface),
    Solid(Solid),
    MultiPoint(MultiPoint),
    MultiCurve(MultiCurve),
    MultiSurface(MultiSurface),
    Collection(Collection),
}

impl GeometryType {
    /// A human-readable name for this variant, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point(_) => "Point",
            GeometryType::Curve(_) => "Curve",
            GeometryType::Surface(_) => "Surface",
            GeometryType::Solid(_) => "Solid",
            GeometryType::MultiPoint(_) => "MultiPoint",
            GeometryType::MultiCurve(_) => "MultiCurve",
            GeometryType::MultiSurface(_) => "MultiSurface",
            GeometryType::Collection(_) => "Collection",
        }
    }

    fn first_position(&self) -> Option<Position> {
        match self {
            GeometryType::Point(p) => Some(*p.position()),
            GeometryType::Curve(c) => c.start().copied(),
            GeometryType::Surface(s) => ring_first_position(s.exterior()),
            GeometryType::Solid(s) => s
                .exterior()
                .and_then(|shell| shell.surfaces().first())
                .and_then(|surface| ring_first_position(surface.exterior())),
            GeometryType::MultiPoint(mp) => mp.points().first().map(|p| *p.position()),
            GeometryType::MultiCurve(mc) => mc.curves().iter().find_map(|c| c.start().copied()),
            GeometryType::MultiSurface(ms) => ms
                .surfaces()
                .iter()
                .find_map(|s| ring_first_position(s.exterior())),
            GeometryType::Collection(gc) => gc
                .geometries()
                .iter()
                .find_map(|g| g.as_type().first_position()),
        }
    }
}

fn ring_first_position(ring: &Ring) -> Option<Position> {
    ring.curves().iter().find_map(|c| c.start().copied())
}

/// A geometry tree plus the reference id tag used to carry its SRID.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    geometry: GeometryType,
    srid: Option<i32>,
}

impl Geometry {
    pub fn new(geometry: GeometryType) -> Self {
        Self {
            geometry,
            srid: None,
        }
    }

    pub fn as_type(&self) -> &GeometryType {
        &self.geometry
    }

    pub fn into_type(self) -> GeometryType {
        self.geometry
    }

    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn set_srid(&mut self, srid: Option<i32>) {
        self.srid = srid;
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = Some(srid);
        self
    }

    /// The coordinate dimension reported for this geometry.
    ///
    /// This is the dimension of the first position in the tree, or [Dimension::XY] for a
    /// geometry without positions.
    pub fn dimension(&self) -> Dimension {
        self.geometry
            .first_position()
            .map(|p| p.dim())
            .unwrap_or(Dimension::XY)
    }
}

impl From<GeometryType> for Geometry {
    fn from(value: GeometryType) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_into_geometry {
    ($type:ident) => {
        impl From<$type> for Geometry {
            fn from(value: $type) -> Self {
                Self::new(GeometryType::$type(value))
            }
        }
    };
}

impl_into_geometry!(Point);
impl_into_geometry!(Curve);
impl_into_geometry!(Surface);
impl_into_geometry!(Solid);
impl_into_geometry!(MultiPoint);
impl_into_geometry!(MultiCurve);
impl_into_geometry!(MultiSurface);
impl_into_geometry!(Collection);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_from_first_position() {
        let geom: Geometry = Point::new(Position::new_3d(1., 2., 3.)).into();
        assert_eq!(geom.dimension(), Dimension::XYZ);

        let geom: Geometry = MultiCurve::new(vec![
            Curve::default(),
            Curve::new(vec![Position::new(0., 0.), Position::new(1., 1.)]),
        ])
        .into();
        assert_eq!(geom.dimension(), Dimension::XY);
    }

    #[test]
    fn empty_geometry_is_xy() {
        let geom: Geometry = Collection::default().into();
        assert_eq!(geom.dimension(), Dimension::XY);
        assert_eq!(geom.as_type().name(), "Collection");
    }

    #[test]
    fn srid_tag() {
        let geom: Geometry = Point::new(Position::new(1., 2.)).into();
        assert_eq!(geom.srid(), None);
        assert_eq!(geom.with_srid(8307).srid(), Some(8307));
    }
}
