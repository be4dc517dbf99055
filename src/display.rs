//! [`Display`][fmt::Display] for the owned scalars, rendered as WKT with the default options.
//!
//! Any write error, such as a non-finite ordinate, is reported as [`fmt::Error`].

use std::fmt;

use crate::options::WktWriterOptions;
use crate::scalar::*;
use crate::writer::*;

macro_rules! impl_fmt {
    ($struct_name:ty, $write_fn:ident) => {
        impl fmt::Display for $struct_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut emitter = Emitter::new(f, WktWriterOptions::default());
                $write_fn(&mut emitter, self).map_err(|_| fmt::Error)
            }
        }
    };
}

impl_fmt!(Point, write_point_tagged_text);
impl_fmt!(LineString, write_line_string_tagged_text);
impl_fmt!(Polygon, write_polygon_tagged_text);
impl_fmt!(MultiPoint, write_multi_point_tagged_text);
impl_fmt!(MultiLineString, write_multi_line_string_tagged_text);
impl_fmt!(MultiPolygon, write_multi_polygon_tagged_text);
impl_fmt!(GeometryCollection, write_geometry_collection_tagged_text);
impl_fmt!(Geometry, write_geometry_tagged_text);

#[cfg(test)]
mod test {
    use crate::scalar::{Geometry, Point};
    use crate::test::*;

    #[test]
    fn display_scalars() {
        assert_eq!(p0().to_string(), "POINT (15 20)");
        assert_eq!(ls0().to_string(), "LINESTRING (0 0, 10 10, 20 25, 50 60)");
        assert_eq!(
            Geometry::from(gc0()).to_string(),
            "GEOMETRYCOLLECTION (POINT (10 10), POINT (30 30), LINESTRING (15 15, 20 20))"
        );
    }

    #[test]
    fn display_matches_writer() {
        for geom in all_geometries() {
            assert_eq!(geom.to_string(), crate::writer::to_wkt(&geom).unwrap());
        }
    }

    #[test]
    fn display_invalid_ordinate_is_error() {
        use std::fmt::Write;

        let mut out = String::new();
        assert!(write!(out, "{}", Point::new(f64::NAN, 1.)).is_err());
    }
}
