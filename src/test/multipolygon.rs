use crate::scalar::{MultiPolygon, Polygon};
use crate::test::polygon::poly1;

pub(crate) fn mpoly0() -> MultiPolygon {
    let outer: Polygon = Polygon::new(
        [(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]
            .into_iter()
            .collect(),
        vec![],
    );
    [outer, poly1()].into_iter().collect()
}
