use crate::scalar::{Coord, MultiPoint};

pub(crate) fn mp0() -> MultiPoint {
    [(0., 0.), (20., 20.), (60., 60.)]
        .into_iter()
        .map(Coord::from)
        .collect()
}
