use geo_traits::{Dimensions, LineStringTrait, PolygonTrait};

use crate::scalar::LineString;

/// An exterior ring with zero or more interior rings (holes).
///
/// A polygon without an exterior ring is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    exterior: Option<LineString>,
    interiors: Vec<LineString>,
}

impl Polygon {
    /// A polygon from an exterior ring and its holes.
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self {
            exterior: Some(exterior),
            interiors,
        }
    }

    /// A polygon with no exterior ring.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the exterior ring is absent or has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.exterior.as_ref().map_or(true, LineString::is_empty)
    }
}

impl PolygonTrait for Polygon {
    type T = f64;
    type RingType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        self.exterior
            .as_ref()
            .map(LineStringTrait::dim)
            .unwrap_or(Dimensions::Xy)
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.exterior.as_ref()
    }

    fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        self.interiors.get_unchecked(i)
    }
}

impl PolygonTrait for &Polygon {
    type T = f64;
    type RingType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        PolygonTrait::dim(*self)
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.exterior.as_ref()
    }

    fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        self.interiors.get_unchecked(i)
    }
}
