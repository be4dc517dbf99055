use std::fmt;

use geo_traits::{GeometryTrait, GeometryType};

use crate::error::{WktError, WktResult};

/// The geometry kinds this crate can write as WKT.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WktType {
    /// A WKT Point
    Point,
    /// A WKT LineString
    LineString,
    /// A WKT Polygon
    Polygon,
    /// A WKT MultiPoint
    MultiPoint,
    /// A WKT MultiLineString
    MultiLineString,
    /// A WKT MultiPolygon
    MultiPolygon,
    /// A WKT GeometryCollection
    GeometryCollection,
}

impl WktType {
    /// The keyword that starts this kind's tagged text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Classify any geometry, failing for kinds outside the writable set.
    pub fn of(geom: &impl GeometryTrait<T = f64>) -> WktResult<Self> {
        let typ = match geom.as_type() {
            GeometryType::Point(_) => Self::Point,
            GeometryType::LineString(_) => Self::LineString,
            GeometryType::Polygon(_) => Self::Polygon,
            GeometryType::MultiPoint(_) => Self::MultiPoint,
            GeometryType::MultiLineString(_) => Self::MultiLineString,
            GeometryType::MultiPolygon(_) => Self::MultiPolygon,
            GeometryType::GeometryCollection(_) => Self::GeometryCollection,
            GeometryType::Rect(_) => return Err(unsupported("Rect")),
            GeometryType::Triangle(_) => return Err(unsupported("Triangle")),
            GeometryType::Line(_) => return Err(unsupported("Line")),
        };
        Ok(typ)
    }
}

impl fmt::Display for WktType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

pub(crate) fn unsupported(kind: &'static str) -> WktError {
    log::debug!("rejecting geometry of unsupported kind {kind}");
    WktError::UnsupportedGeometryKind(kind.into())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::Geometry;
    use crate::test::{gc0, ls0, p0};

    #[test]
    fn classify_supported() {
        assert_eq!(WktType::of(&Geometry::from(p0())).unwrap(), WktType::Point);
        assert_eq!(WktType::of(&Geometry::from(ls0())).unwrap(), WktType::LineString);
        assert_eq!(WktType::of(&Geometry::from(gc0())).unwrap(), WktType::GeometryCollection);
    }

    #[test]
    fn classify_rect_is_unsupported() {
        let rect = geo_types::Geometry::Rect(geo_types::Rect::new(
            geo_types::coord! { x: 0., y: 0. },
            geo_types::coord! { x: 1., y: 1. },
        ));
        assert!(matches!(
            WktType::of(&rect),
            Err(WktError::UnsupportedGeometryKind(kind)) if kind == "Rect"
        ));
    }

    #[test]
    fn keyword_display() {
        assert_eq!(WktType::MultiPolygon.to_string(), "MULTIPOLYGON");
    }
}
