use geo_traits::{Dimensions, MultiPointTrait, PointTrait};

use crate::scalar::Point;

/// An ordered collection of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    /// A multi point from its members.
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<Point>> FromIterator<P> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl MultiPointTrait for MultiPoint {
    type T = f64;
    type PointType<'a>
        = Point
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        self.0
            .first()
            .map(PointTrait::dim)
            .unwrap_or(Dimensions::Xy)
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::PointType<'_> {
        *self.0.get_unchecked(i)
    }
}
