//! Pure geometric predicates used by the SDO codec.

pub mod orientation;
pub mod shape;

pub use orientation::{clockwise, counter_clockwise, is_ccw};
pub use shape::{is_curve, is_rectangle};
