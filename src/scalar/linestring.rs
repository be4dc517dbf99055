use geo_traits::{CoordTrait, Dimensions, LineStringTrait};

use crate::scalar::Coord;

/// An ordered sequence of coordinates. Also used for polygon rings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(Vec<Coord>);

impl LineString {
    /// A line string through `coords`, in order.
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    /// The vertices of this line string.
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Into<Coord>> FromIterator<C> for LineString {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl LineStringTrait for LineString {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        self.0
            .first()
            .map(|coord| coord.dim())
            .unwrap_or(Dimensions::Xy)
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        *self.0.get_unchecked(i)
    }
}

impl LineStringTrait for &LineString {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        LineStringTrait::dim(*self)
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        *self.0.get_unchecked(i)
    }
}
