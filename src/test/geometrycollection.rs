use crate::scalar::{Geometry, GeometryCollection};
use crate::test::linestring::ls1;
use crate::test::point::{p1, p2};

pub(crate) fn gc0() -> GeometryCollection {
    let geoms: [Geometry; 3] = [p1().into(), p2().into(), ls1().into()];
    geoms.into_iter().collect()
}
