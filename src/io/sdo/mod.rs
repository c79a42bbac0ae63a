//! Reading and writing the SDO_GEOMETRY layout of spatial database columns: a GTYPE
//! descriptor, an SRID, an optional SDO_POINT, the SDO_ELEM_INFO triplets and the flat
//! SDO_ORDINATES buffer.

mod api;
pub mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{
    decode, decode_with_factory, encode, encode_with_options, gtype_of, FromSdo,
    SdoEncodeOptions, ToSdo,
};
pub use common::{ElementType, GType, SdoGeometry, SdoGeometryType, SRID_NULL};
pub use reader::{decode_parts, ElemInfoCursor};
