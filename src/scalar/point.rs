use geo_traits::{CoordTrait, Dimensions, PointTrait};

use crate::scalar::Coord;

/// A point with zero or one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(Option<Coord>);

impl Point {
    /// A 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self(Some(Coord::new(x, y)))
    }

    /// A point with a Z value.
    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Self(Some(Coord::new_xyz(x, y, z)))
    }

    /// A point with no coordinate.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Whether the point has no coordinate.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(Some(value))
    }
}

impl From<Option<Coord>> for Point {
    fn from(value: Option<Coord>) -> Self {
        Self(value)
    }
}

impl PointTrait for Point {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        self.0.map(|coord| coord.dim()).unwrap_or(Dimensions::Xy)
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.0
    }
}
