use geo_traits::{Dimensions, MultiPolygonTrait, PolygonTrait};

use crate::scalar::Polygon;

/// An ordered collection of polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    /// A multi polygon from its members.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl MultiPolygonTrait for MultiPolygon {
    type T = f64;
    type PolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        self.0
            .first()
            .map(PolygonTrait::dim)
            .unwrap_or(Dimensions::Xy)
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::PolygonType<'_> {
        self.0.get_unchecked(i)
    }
}
