use geo_traits::{Dimensions, LineStringTrait, MultiLineStringTrait};

use crate::scalar::LineString;

/// An ordered collection of line strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    /// A multi line string from its members.
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self(line_strings)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<I: IntoIterator<Item = LineString>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl MultiLineStringTrait for MultiLineString {
    type T = f64;
    type LineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        self.0
            .first()
            .map(LineStringTrait::dim)
            .unwrap_or(Dimensions::Xy)
    }

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::LineStringType<'_> {
        self.0.get_unchecked(i)
    }
}
