//! Algorithms implemented natively in this crate.

mod to_wkt;

pub use to_wkt::ToWKT;
