//! Reader and writer implementations of the SDO_GEOMETRY wire format.

pub mod sdo;
