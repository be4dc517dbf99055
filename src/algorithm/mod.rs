//! Algorithms implemented on collections of geometries.

pub mod native;
