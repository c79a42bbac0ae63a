//! Encode and decode geometries to and from SDO_GEOMETRY, the spatial column type of Oracle
//! Spatial.
//!
//! An SDO_GEOMETRY value is a GTYPE descriptor, an SRID, an optional SDO_POINT, a list of
//! SDO_ELEM_INFO triplets and a flat SDO_ORDINATES buffer. [io::sdo::encode] writes a
//! [geometry::Geometry] into those parts in a single pass, and [io::sdo::decode] rebuilds the
//! geometry tree from them, optionally through a custom [geometry::GeometryFactory].
//!
//! ```
//! use sdo_geometry::geometry::{Geometry, Point, Position};
//! use sdo_geometry::io::sdo::{decode, encode};
//!
//! let geometry = Geometry::from(Point::new(Position::new(1., 2.))).with_srid(8307);
//! let sdo = encode(&geometry).unwrap();
//! assert_eq!(sdo.gtype, 2001);
//! assert_eq!(sdo.elem_info, vec![1, 1, 1]);
//! assert_eq!(decode(&sdo).unwrap(), Some(geometry));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod error;
pub mod geometry;
pub mod io;
