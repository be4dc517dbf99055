use geo_traits::{
    Dimensions, GeometryTrait, GeometryType, UnimplementedLine, UnimplementedRect,
    UnimplementedTriangle,
};

use crate::scalar::*;

/// Any of the geometry kinds that can be written as WKT.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

type GeometryTypeRef<'a> = GeometryType<
    'a,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    UnimplementedRect<f64>,
    UnimplementedTriangle<f64>,
    UnimplementedLine<f64>,
>;

impl Geometry {
    fn dimension(&self) -> Dimensions {
        use geo_traits::{
            GeometryCollectionTrait, LineStringTrait, MultiLineStringTrait, MultiPointTrait,
            MultiPolygonTrait, PointTrait, PolygonTrait,
        };

        match self {
            Self::Point(g) => PointTrait::dim(g),
            Self::LineString(g) => LineStringTrait::dim(g),
            Self::Polygon(g) => PolygonTrait::dim(g),
            Self::MultiPoint(g) => MultiPointTrait::dim(g),
            Self::MultiLineString(g) => MultiLineStringTrait::dim(g),
            Self::MultiPolygon(g) => MultiPolygonTrait::dim(g),
            Self::GeometryCollection(g) => GeometryCollectionTrait::dim(g),
        }
    }

    fn geometry_type(&self) -> GeometryTypeRef<'_> {
        match self {
            Self::Point(g) => GeometryType::Point(g),
            Self::LineString(g) => GeometryType::LineString(g),
            Self::Polygon(g) => GeometryType::Polygon(g),
            Self::MultiPoint(g) => GeometryType::MultiPoint(g),
            Self::MultiLineString(g) => GeometryType::MultiLineString(g),
            Self::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            Self::GeometryCollection(g) => GeometryType::GeometryCollection(g),
        }
    }
}

macro_rules! impl_from {
    ($geometry_type:ident) => {
        impl From<$geometry_type> for Geometry {
            fn from(value: $geometry_type) -> Self {
                Self::$geometry_type(value)
            }
        }
    };
}

impl_from!(Point);
impl_from!(LineString);
impl_from!(Polygon);
impl_from!(MultiPoint);
impl_from!(MultiLineString);
impl_from!(MultiPolygon);
impl_from!(GeometryCollection);

impl GeometryTrait for Geometry {
    type T = f64;
    type PointType<'b>
        = Point
    where
        Self: 'b;
    type LineStringType<'b>
        = LineString
    where
        Self: 'b;
    type PolygonType<'b>
        = Polygon
    where
        Self: 'b;
    type MultiPointType<'b>
        = MultiPoint
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = MultiLineString
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = MultiPolygon
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = GeometryCollection
    where
        Self: 'b;
    type RectType<'b>
        = UnimplementedRect<f64>
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<f64>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<f64>
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        self.dimension()
    }

    fn as_type(&self) -> GeometryTypeRef<'_> {
        self.geometry_type()
    }
}

impl<'a> GeometryTrait for &'a Geometry {
    type T = f64;
    type PointType<'b>
        = Point
    where
        Self: 'b;
    type LineStringType<'b>
        = LineString
    where
        Self: 'b;
    type PolygonType<'b>
        = Polygon
    where
        Self: 'b;
    type MultiPointType<'b>
        = MultiPoint
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = MultiLineString
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = MultiPolygon
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = GeometryCollection
    where
        Self: 'b;
    type RectType<'b>
        = UnimplementedRect<f64>
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<f64>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<f64>
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        self.dimension()
    }

    fn as_type(&self) -> GeometryTypeRef<'_> {
        self.geometry_type()
    }
}
