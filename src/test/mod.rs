pub(crate) mod geometrycollection;
pub(crate) mod linestring;
pub(crate) mod multilinestring;
pub(crate) mod multipoint;
pub(crate) mod multipolygon;
pub(crate) mod polygon;

pub(crate) use geometrycollection::gc0;
pub(crate) use linestring::{ls0, ls_xyz};
pub(crate) use multilinestring::mls0;
pub(crate) use multipoint::mp0;
pub(crate) use multipolygon::mpoly0;
pub(crate) use point::p0;
pub(crate) use polygon::poly0;

use crate::scalar::Geometry;

/// One geometry of every kind, including empty ones.
pub(crate) fn all_geometries() -> Vec<Geometry> {
    vec![
        p0().into(),
        crate::scalar::Point::empty().into(),
        ls0().into(),
        ls_xyz().into(),
        poly0().into(),
        crate::scalar::Polygon::empty().into(),
        mp0().into(),
        mls0().into(),
        mpoly0().into(),
        gc0().into(),
        crate::scalar::GeometryCollection::default().into(),
    ]
}
