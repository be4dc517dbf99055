use geo_traits::{Dimensions, GeometryCollectionTrait, GeometryTrait};

use crate::scalar::Geometry;

/// An ordered, possibly heterogeneous, collection of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    /// A collection of arbitrary geometries.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<G: Into<Geometry>> FromIterator<G> for GeometryCollection {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl GeometryCollectionTrait for GeometryCollection {
    type T = f64;
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        self.0
            .first()
            .map(GeometryTrait::dim)
            .unwrap_or(Dimensions::Xy)
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        self.0.get_unchecked(i)
    }
}
