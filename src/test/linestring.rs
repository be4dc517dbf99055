use crate::scalar::LineString;

pub(crate) fn ls0() -> LineString {
    [(0., 0.), (10., 10.), (20., 25.), (50., 60.)]
        .into_iter()
        .collect()
}

pub(crate) fn ls1() -> LineString {
    [(15., 15.), (20., 20.)].into_iter().collect()
}

pub(crate) fn ls_xyz() -> LineString {
    [(1., 2., 3.), (4., 5., 6.)].into_iter().collect()
}
