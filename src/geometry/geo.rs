//! Conversions from [geo] geometries into this crate's geometry model.

use crate::geometry::{
    Collection, Curve, Geometry, MultiCurve, MultiPoint, MultiSurface, Point, Position, Ring,
    Surface,
};

impl From<&geo::Coord<f64>> for Position {
    fn from(value: &geo::Coord<f64>) -> Self {
        Position::new(value.x, value.y)
    }
}

impl From<&geo::Point<f64>> for Point {
    fn from(value: &geo::Point<f64>) -> Self {
        Point::new(Position::new(value.x(), value.y()))
    }
}

impl From<&geo::LineString<f64>> for Curve {
    fn from(value: &geo::LineString<f64>) -> Self {
        Curve::new(value.coords().map(Position::from).collect())
    }
}

impl From<&geo::Line<f64>> for Curve {
    fn from(value: &geo::Line<f64>) -> Self {
        Curve::new(vec![(&value.start).into(), (&value.end).into()])
    }
}

impl From<&geo::LineString<f64>> for Ring {
    fn from(value: &geo::LineString<f64>) -> Self {
        Ring::new(vec![value.into()])
    }
}

impl From<&geo::Polygon<f64>> for Surface {
    fn from(value: &geo::Polygon<f64>) -> Self {
        Surface::new(
            value.exterior().into(),
            value.interiors().iter().map(Ring::from).collect(),
        )
    }
}

impl From<&geo::Rect<f64>> for Surface {
    fn from(value: &geo::Rect<f64>) -> Self {
        (&value.to_polygon()).into()
    }
}

impl From<&geo::Triangle<f64>> for Surface {
    fn from(value: &geo::Triangle<f64>) -> Self {
        (&value.to_polygon()).into()
    }
}

impl From<&geo::MultiPoint<f64>> for MultiPoint {
    fn from(value: &geo::MultiPoint<f64>) -> Self {
        MultiPoint::new(value.iter().map(Point::from).collect())
    }
}

impl From<&geo::MultiLineString<f64>> for MultiCurve {
    fn from(value: &geo::MultiLineString<f64>) -> Self {
        MultiCurve::new(value.iter().map(Curve::from).collect())
    }
}

impl From<&geo::MultiPolygon<f64>> for MultiSurface {
    fn from(value: &geo::MultiPolygon<f64>) -> Self {
        MultiSurface::new(value.iter().map(Surface::from).collect())
    }
}

impl From<&geo::GeometryCollection<f64>> for Collection {
    fn from(value: &geo::GeometryCollection<f64>) -> Self {
        Collection::new(value.iter().map(Geometry::from).collect())
    }
}

impl From<&geo::Geometry<f64>> for Geometry {
    fn from(value: &geo::Geometry<f64>) -> Self {
        match value {
            geo::Geometry::Point(g) => Point::from(g).into(),
            geo::Geometry::Line(g) => Curve::from(g).into(),
            geo::Geometry::LineString(g) => Curve::from(g).into(),
            geo::Geometry::Polygon(g) => Surface::from(g).into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiCurve::from(g).into(),
            geo::Geometry::MultiPolygon(g) => MultiSurface::from(g).into(),
            geo::Geometry::GeometryCollection(g) => Collection::from(g).into(),
            geo::Geometry::Rect(g) => Surface::from(g).into(),
            geo::Geometry::Triangle(g) => Surface::from(g).into(),
        }
    }
}

impl From<geo::Geometry<f64>> for Geometry {
    fn from(value: geo::Geometry<f64>) -> Self {
        (&value).into()
    }
}
