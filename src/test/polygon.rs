use crate::scalar::{LineString, Polygon};

fn ring(coords: &[(f64, f64)]) -> LineString {
    coords.iter().copied().collect()
}

/// A square with a square hole.
pub(crate) fn poly0() -> Polygon {
    Polygon::new(
        ring(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]),
        vec![ring(&[(5., 5.), (7., 5.), (7., 7.), (5., 7.), (5., 5.)])],
    )
}

pub(crate) fn poly1() -> Polygon {
    Polygon::new(
        ring(&[(5., 5.), (7., 5.), (7., 7.), (5., 7.), (5., 5.)]),
        vec![],
    )
}
