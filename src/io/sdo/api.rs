use tracing::debug;

use crate::error::Result;
use crate::geometry::{DefaultGeometryFactory, Geometry, GeometryFactory, GeometryType};
use crate::io::sdo::common::{GType, SdoGeometry, SdoGeometryType, SRID_NULL};
use crate::io::sdo::reader::decode_parts;
use crate::io::sdo::writer::{write_geometry, SdoWriter};

/// Options for encoding geometries as SDO_GEOMETRY.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdoEncodeOptions {
    /// Store a point without a measure in SDO_POINT, leaving SDO_ELEM_INFO and SDO_ORDINATES
    /// empty.
    pub point_type: bool,
}

/// The GTYPE descriptor of a geometry.
///
/// Only ordinary geometries are encoded, so the measure position is always 0.
pub fn gtype_of(geometry: &Geometry) -> GType {
    let geometry_type = match geometry.as_type() {
        GeometryType::Point(_) => SdoGeometryType::Point,
        GeometryType::Curve(_) => SdoGeometryType::Line,
        GeometryType::Surface(_) => SdoGeometryType::Polygon,
        GeometryType::Solid(_) => SdoGeometryType::Solid,
        GeometryType::MultiPoint(_) => SdoGeometryType::MultiPoint,
        GeometryType::MultiCurve(_) => SdoGeometryType::MultiLine,
        GeometryType::MultiSurface(_) => SdoGeometryType::MultiPolygon,
        GeometryType::Collection(_) => SdoGeometryType::Collection,
    };
    GType::new(geometry.dimension(), 0, geometry_type)
}

/// Encode a geometry as SDO_GEOMETRY with default options.
pub fn encode(geometry: &Geometry) -> Result<SdoGeometry> {
    encode_with_options(geometry, SdoEncodeOptions::default())
}

/// Encode a geometry as SDO_GEOMETRY.
///
/// A geometry without an SRID tag is encoded with [SRID_NULL].
pub fn encode_with_options(geometry: &Geometry, options: SdoEncodeOptions) -> Result<SdoGeometry> {
    let gtype = gtype_of(geometry);
    let srid = geometry.srid().unwrap_or(SRID_NULL);

    if let (true, 0, GeometryType::Point(point)) =
        (options.point_type, gtype.lrs(), geometry.as_type())
    {
        let mut ordinates = vec![];
        point.position().extend_ordinates(&mut ordinates);
        return Ok(SdoGeometry {
            gtype: gtype.into(),
            srid,
            point: Some(ordinates),
            elem_info: vec![],
            ordinates: vec![],
        });
    }

    let mut writer = SdoWriter::new(geometry.dimension());
    let consumed = write_geometry(&mut writer, geometry.as_type())?;
    debug!(
        gtype = i32::from(gtype),
        consumed, "Encoded {}",
        geometry.as_type().name()
    );

    let (elem_info, ordinates) = writer.into_parts();
    Ok(SdoGeometry {
        gtype: gtype.into(),
        srid,
        point: None,
        elem_info,
        ordinates,
    })
}

/// Decode SDO_GEOMETRY into this crate's geometry model.
pub fn decode(sdo: &SdoGeometry) -> Result<Option<Geometry>> {
    decode_with_factory(&DefaultGeometryFactory, sdo)
}

/// Decode SDO_GEOMETRY, building the geometry with `factory`.
pub fn decode_with_factory<F: GeometryFactory>(
    factory: &F,
    sdo: &SdoGeometry,
) -> Result<Option<F::Geometry>> {
    decode_parts(
        factory,
        sdo.gtype,
        sdo.srid,
        sdo.point.as_deref(),
        &sdo.elem_info,
        &sdo.ordinates,
    )
}

/// Encode a geometry as SDO_GEOMETRY.
pub trait ToSdo {
    fn to_sdo(&self) -> Result<SdoGeometry>;
}

impl ToSdo for Geometry {
    fn to_sdo(&self) -> Result<SdoGeometry> {
        encode(self)
    }
}

impl ToSdo for geo::Geometry<f64> {
    fn to_sdo(&self) -> Result<SdoGeometry> {
        encode(&self.into())
    }
}

/// Decode a geometry from SDO_GEOMETRY.
pub trait FromSdo: Sized {
    fn from_sdo(sdo: &SdoGeometry) -> Result<Option<Self>>;
}

impl FromSdo for Geometry {
    fn from_sdo(sdo: &SdoGeometry) -> Result<Option<Self>> {
        decode(sdo)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::is_ccw;
    use crate::geometry::{
        Collection, Curve, MultiCurve, MultiPoint, Point, Position, Solid, Surface,
    };
    use crate::io::sdo::common::ElementType;
    use crate::test::curve::{ls0, ls1};
    use crate::test::point::{p0, p1, p2};
    use crate::test::solid::cube;
    use crate::test::surface::{p1 as polygon_with_hole, p1_reversed, rect, triangle};

    fn round_trip(geometry: &Geometry) -> Geometry {
        let sdo = encode(geometry).unwrap();
        decode(&sdo).unwrap().unwrap()
    }

    /// Every ring of a surface as positions, which is what survives a round trip.
    fn rings(surface: &Surface) -> Vec<Vec<Position>> {
        std::iter::once(surface.exterior())
            .chain(surface.interiors())
            .map(|ring| ring.positions().unwrap())
            .collect()
    }

    /// Check that ELEM_INFO offsets of ring and element triplets strictly increase and that
    /// the spans they imply tile the ordinates.
    fn assert_offsets_tile(sdo: &SdoGeometry) {
        let triplets: Vec<_> = sdo
            .elem_info
            .chunks(3)
            .filter(|t| {
                !matches!(
                    ElementType::try_from(t[1]),
                    Ok(ElementType::Solid | ElementType::CompositeSurfaceExterior)
                )
            })
            .map(|t| t[0])
            .collect();
        assert_eq!(triplets.first(), Some(&1));
        for pair in triplets.windows(2) {
            assert!(pair[0] < pair[1], "offsets {pair:?} do not increase");
        }
        let d = sdo.gtype().dimension() as usize;
        for offset in &triplets {
            assert_eq!((*offset as usize - 1) % d, 0);
        }
        assert!((*triplets.last().unwrap() as usize) <= sdo.ordinates.len());
    }

    #[test]
    fn point_scenario() {
        let geometry = Geometry::from(Point::from(&p0())).with_srid(8307);
        let sdo = encode(&geometry).unwrap();
        assert_eq!(
            sdo,
            SdoGeometry {
                gtype: 2001,
                srid: 8307,
                point: None,
                elem_info: vec![1, 1, 1],
                ordinates: vec![1., 2.],
            }
        );
        assert_eq!(decode(&sdo).unwrap().unwrap(), geometry);
    }

    #[test]
    fn point_type_option() {
        let geometry = Geometry::from(Point::new(Position::new_3d(1., 2., 3.)));
        let sdo = encode_with_options(&geometry, SdoEncodeOptions { point_type: true }).unwrap();
        assert_eq!(sdo.gtype, 3001);
        assert_eq!(sdo.srid, SRID_NULL);
        assert_eq!(sdo.point, Some(vec![1., 2., 3.]));
        assert!(sdo.elem_info.is_empty());
        assert_eq!(decode(&sdo).unwrap().unwrap(), geometry);
    }

    #[test]
    fn triangle_scenario() {
        let sdo = geo::Geometry::Polygon(triangle()).to_sdo().unwrap();
        assert_eq!(sdo.gtype, 2003);
        assert_eq!(sdo.elem_info, vec![1, 1003, 1]);
        assert_eq!(sdo.ordinates, vec![0., 0., 4., 0., 4., 4., 0., 0.]);
    }

    #[test]
    fn reversed_rings_scenario() {
        let sdo = geo::Geometry::Polygon(p1_reversed()).to_sdo().unwrap();
        assert_eq!(sdo.elem_info, vec![1, 1003, 1, 11, 2003, 1]);

        let positions: Vec<Position> = sdo
            .ordinates
            .chunks(2)
            .map(|c| Position::new(c[0], c[1]))
            .collect();
        assert!(is_ccw(&positions[..5]));
        assert!(!is_ccw(&positions[5..]));
    }

    #[test]
    fn surface_round_trip() {
        for polygon in [triangle(), rect(), polygon_with_hole(), p1_reversed()] {
            let geometry = Geometry::from(&geo::Geometry::Polygon(polygon));
            let GeometryType::Surface(decoded) = round_trip(&geometry).into_type() else {
                panic!("expected a surface");
            };
            let GeometryType::Surface(original) = geometry.as_type() else {
                unreachable!()
            };

            let decoded = rings(&decoded);
            let original = rings(original);
            assert_eq!(decoded.len(), original.len());
            assert!(is_ccw(&decoded[0]));
            for (decoded, original) in decoded.iter().zip(&original).skip(1) {
                assert!(!is_ccw(decoded));
                assert_eq!(decoded.len(), original.len());
            }
        }
    }

    #[test]
    fn curve_round_trip() {
        let geometry: Geometry = Curve::from(&ls1()).into();
        assert_eq!(round_trip(&geometry), geometry);
    }

    #[test]
    fn multi_round_trip() {
        let multi_point: Geometry =
            MultiPoint::from(&geo::MultiPoint::new(vec![p0(), p1(), p2()])).into();
        assert_eq!(round_trip(&multi_point), multi_point);

        let multi_curve: Geometry =
            MultiCurve::from(&geo::MultiLineString::new(vec![ls0(), ls1()])).into();
        assert_eq!(round_trip(&multi_curve), multi_curve);

        let multi_surface = Geometry::from(&geo::Geometry::MultiPolygon(
            vec![polygon_with_hole(), rect()].into(),
        ));
        let sdo = encode(&multi_surface).unwrap();
        assert_eq!(sdo.gtype, 2007);
        let GeometryType::MultiSurface(decoded) = decode(&sdo).unwrap().unwrap().into_type()
        else {
            panic!("expected a multisurface");
        };
        assert_eq!(decoded.num_surfaces(), 2);
        assert_eq!(decoded.surfaces()[0].num_interiors(), 1);
        assert_eq!(
            decoded.surfaces()[1].exterior().positions().unwrap().len(),
            5
        );
    }

    #[test]
    fn collection_round_trip() {
        let geometry: Geometry = Collection::new(vec![
            Point::from(&p0()).into(),
            Curve::from(&ls0()).into(),
            MultiPoint::from(&geo::MultiPoint::new(vec![p1(), p2()])).into(),
        ])
        .into();
        let sdo = encode(&geometry).unwrap();
        assert_eq!(sdo.gtype, 2004);
        assert_eq!(sdo.elem_info, vec![1, 1, 1, 3, 2, 1, 7, 1, 2]);
        assert_eq!(round_trip(&geometry), geometry);
    }

    #[test]
    fn solid_round_trip() {
        let geometry: Geometry = cube().into();
        let sdo = encode(&geometry).unwrap();
        assert_eq!(sdo.gtype, 3008);
        assert_eq!(&sdo.elem_info[..6], &[1, 1007, 1, 1, 1006, 6]);
        assert_offsets_tile(&sdo);

        let GeometryType::Solid(decoded) = decode(&sdo).unwrap().unwrap().into_type() else {
            panic!("expected a solid");
        };
        let shell = decoded.exterior().unwrap();
        assert_eq!(shell.num_surfaces(), 6);
        for face in shell.surfaces() {
            let ring = face.exterior().positions().unwrap();
            assert_eq!(ring.len(), 5);
            assert_eq!(ring[0], ring[4]);
        }
        assert!(decoded.interiors().is_empty());
    }

    #[test]
    fn solid_faces_with_holes() {
        let positions = |corners: &[(f64, f64, f64)]| -> Vec<Position> {
            corners.iter().map(|c| Position::from(*c)).collect()
        };
        let face = Surface::new(
            crate::geometry::Ring::from_positions(positions(&[
                (0., 0., 0.),
                (4., 0., 0.),
                (4., 4., 0.),
                (0., 4., 0.),
                (0., 0., 0.),
            ])),
            vec![crate::geometry::Ring::from_positions(positions(&[
                (1., 1., 0.),
                (1., 2., 0.),
                (2., 2., 0.),
                (1., 1., 0.),
            ]))],
        );
        let geometry: Geometry =
            Solid::from(crate::geometry::Shell::new(vec![face.clone(), face])).into();
        let sdo = encode(&geometry).unwrap();
        assert_eq!(
            sdo.elem_info,
            vec![
                1, 1007, 1, 1, 1006, 2, 1, 1003, 1, 16, 2003, 1, 28, 1003, 1, 43, 2003, 1
            ]
        );

        let GeometryType::Solid(decoded) = decode(&sdo).unwrap().unwrap().into_type() else {
            panic!("expected a solid");
        };
        let shell = decoded.exterior().unwrap();
        assert_eq!(shell.num_surfaces(), 2);
        assert!(shell.surfaces().iter().all(|f| f.num_interiors() == 1));
    }

    #[test]
    fn srid_null_round_trip() {
        let geometry: Geometry = Point::from(&p0()).into();
        let sdo = encode(&geometry).unwrap();
        assert_eq!(sdo.srid, SRID_NULL);
        assert_eq!(decode(&sdo).unwrap().unwrap().srid(), None);
    }

    #[test]
    fn offsets_tile_ordinates() {
        let geometries = [
            Geometry::from(&geo::Geometry::Polygon(polygon_with_hole())),
            Geometry::from(&geo::Geometry::MultiPolygon(
                vec![polygon_with_hole(), rect(), triangle()].into(),
            )),
            Geometry::from(&geo::Geometry::MultiLineString(geo::MultiLineString::new(
                vec![ls0(), ls1()],
            ))),
            cube().into(),
        ];
        for geometry in &geometries {
            assert_offsets_tile(&encode(geometry).unwrap());
        }
    }

    #[test]
    fn mixed_dimensions_are_invalid() {
        let geometry: Geometry = Curve::new(vec![
            Position::new(0., 0.),
            Position::new_3d(1., 1., 1.),
        ])
        .into();
        assert!(matches!(
            encode(&geometry),
            Err(crate::error::SdoError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn serde_field_names() {
        let sdo = encode(&Point::from(&p0()).into()).unwrap();
        let json = serde_json::to_value(&sdo).unwrap();
        assert_eq!(json["gtype"], 2001);
        assert_eq!(json["srid"], -1);
        assert_eq!(json["elem_info"], serde_json::json!([1, 1, 1]));
        assert_eq!(json["ordinates"], serde_json::json!([1.0, 2.0]));
        assert!(json["point"].is_null());

        let back: SdoGeometry = serde_json::from_value(json).unwrap();
        assert_eq!(back, sdo);
    }
}
