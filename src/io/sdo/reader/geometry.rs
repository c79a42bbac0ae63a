use tracing::warn;

use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::{ElementType, GType, SdoGeometryType, SRID_NULL};
use crate::io::sdo::reader::{Coordinates, Decoder, ElemInfoCursor};

/// Decode the parts of an SDO_GEOMETRY with `factory`.
///
/// `point` is the SDO_POINT attribute. It is used for a point GTYPE with no measure when
/// `elem_info` is empty. An `srid` of [SRID_NULL] leaves the decoded geometry untagged.
///
/// Returns `Ok(None)` for encodings that are well formed but cannot be represented.
pub fn decode_parts<F: GeometryFactory>(
    factory: &F,
    gtype: i32,
    srid: i32,
    point: Option<&[f64]>,
    elem_info: &[i32],
    ordinates: &[f64],
) -> Result<Option<F::Geometry>> {
    let gtype = GType::from(gtype);
    let geometry_type = gtype.geometry_type()?;

    let point_elem_info: [i32; 3] = [1, ElementType::Point.into(), 1];
    let (mut elem_info, mut ordinates) = match point {
        Some(point)
            if gtype.lrs() == 0
                && geometry_type == SdoGeometryType::Point
                && elem_info.is_empty() =>
        {
            (&point_elem_info[..], point)
        }
        _ => (elem_info, ordinates),
    };

    let cursor = ElemInfoCursor::try_new(elem_info)?;
    if cursor.is_empty() {
        return Err(SdoError::MalformedEncoding("ELEM_INFO is empty".to_string()));
    }

    // Leading custom elements are skipped to the first element with a known layout, which is
    // decoded alone from its own offset on.
    let rebased_elem_info;
    if cursor.element_type(0) == Some(ElementType::Custom) {
        let Some(first) = (0..cursor.len())
            .find(|&i| cursor.element_type(i) != Some(ElementType::Custom))
        else {
            warn!("Cannot decode an SDO_GEOMETRY made only of custom elements");
            return Ok(None);
        };
        let offset = cursor.starting_offset(first);
        let rebased = usize::try_from(offset)
            .ok()
            .and_then(|offset| offset.checked_sub(1))
            .and_then(|start| ordinates.get(start..))
            .ok_or_else(|| {
                SdoError::MalformedEncoding(format!(
                    "ELEM_INFO offset {offset} outside the ordinate range"
                ))
            })?;
        rebased_elem_info = [1, cursor.etype(first), cursor.interpretation(first)];
        elem_info = &rebased_elem_info[..];
        ordinates = rebased;
    }

    let coords = Coordinates::try_new(gtype, ordinates)?;
    let decoder = Decoder::new(factory, ElemInfoCursor::try_new(elem_info)?, coords);

    let geometry = match geometry_type {
        SdoGeometryType::Point => decoder
            .point(0)?
            .map(|point| factory.point_geometry(point)),
        SdoGeometryType::Line => decoder
            .curve(0, false)?
            .map(|curve| factory.curve_geometry(curve)),
        SdoGeometryType::Polygon => decoder
            .surface(0)?
            .map(|(surface, _)| factory.surface_geometry(surface)),
        SdoGeometryType::MultiPoint => decoder
            .multi_point(0)?
            .map(|points| factory.create_multi_point(points)),
        SdoGeometryType::MultiLine => decoder.multi_curve(0)?,
        SdoGeometryType::MultiPolygon => decoder.multi_surface(0)?,
        SdoGeometryType::Collection => decoder.collection(0)?,
        SdoGeometryType::Solid => decoder.solid(0)?,
        SdoGeometryType::Unknown | SdoGeometryType::MultiSolid => {
            warn!("Cannot decode SDO_GEOMETRY of GTYPE {}", i32::from(gtype));
            None
        }
    };

    Ok(geometry.map(|mut geometry| {
        if srid != SRID_NULL {
            factory.set_srid(&mut geometry, srid);
        }
        geometry
    }))
}
