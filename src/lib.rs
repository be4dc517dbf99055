//! Write vector geometries as OGC Simple Features [Well-Known Text][wkt].
//!
//! The writer is generic over the [geo_traits] geometry traits, so any geometry model that
//! implements them can be written. [`scalar`] provides a small owned model of its own.
//!
//! ```
//! use geoarrow_wkt::scalar::{Geometry, GeometryCollection, LineString, Point};
//! use geoarrow_wkt::to_wkt;
//!
//! let line_string: LineString = [(15., 15.), (20., 20.)].into_iter().collect();
//! let collection: GeometryCollection = [
//!     Geometry::from(Point::new(10., 10.)),
//!     Geometry::from(Point::new(30., 30.)),
//!     Geometry::from(line_string),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(
//!     to_wkt(&Geometry::from(collection)).unwrap(),
//!     "GEOMETRYCOLLECTION (POINT (10 10), POINT (30 30), LINESTRING (15 15, 20 20))"
//! );
//! ```
//!
//! [wkt]: https://www.ogc.org/standard/sfa/

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use algorithm::native::ToWKT;
pub use common::WktType;
pub use error::{WktError, WktResult};
pub use options::{MultiPointStyle, ThirdOrdinate, WktWriterOptions};
pub use writer::{to_wkt, write_geometry, WktWriter};

pub mod algorithm;
mod common;
mod display;
pub mod error;
pub mod options;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
pub mod writer;
