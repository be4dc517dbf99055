use crate::scalar::{LineString, MultiLineString};

pub(crate) fn mls0() -> MultiLineString {
    let ls: [LineString; 2] = [
        [(10., 10.), (20., 20.)].into_iter().collect(),
        [(15., 15.), (30., 15.)].into_iter().collect(),
    ];
    ls.into_iter().collect()
}
