use arrow_array::builder::GenericStringBuilder;
use arrow_array::{GenericStringArray, OffsetSizeTrait};
use geo_traits::GeometryTrait;

use crate::error::WktResult;
use crate::options::WktWriterOptions;
use crate::writer::WktWriter;

/// Converts a sequence of nullable geometries to an Arrow string array of WKT.
///
/// A `None` entry becomes a null slot in the output. Any other failure aborts the conversion.
///
/// ```
/// use arrow_array::Array;
/// use geoarrow_wkt::algorithm::native::ToWKT;
/// use geoarrow_wkt::options::WktWriterOptions;
/// use geoarrow_wkt::scalar::{Geometry, Point};
///
/// let geoms = vec![Some(Geometry::from(Point::new(1., 2.))), None];
/// let array = geoms.to_wkt::<i32>(&WktWriterOptions::default()).unwrap();
/// assert_eq!(array.value(0), "POINT (1 2)");
/// assert!(array.is_null(1));
/// ```
pub trait ToWKT {
    fn to_wkt<O: OffsetSizeTrait>(
        &self,
        options: &WktWriterOptions,
    ) -> WktResult<GenericStringArray<O>>;
}

impl<G: GeometryTrait<T = f64>> ToWKT for [Option<G>] {
    fn to_wkt<O: OffsetSizeTrait>(
        &self,
        options: &WktWriterOptions,
    ) -> WktResult<GenericStringArray<O>> {
        let writer = WktWriter::new(*options);
        let mut wkt_builder: GenericStringBuilder<O> = GenericStringBuilder::new();

        for item in self {
            match item {
                Some(geom) => {
                    writer.write_to(&mut wkt_builder, Some(geom))?;
                    wkt_builder.append_value("");
                }
                None => wkt_builder.append_null(),
            }
        }

        Ok(wkt_builder.finish())
    }
}

#[cfg(test)]
mod test {
    use arrow_array::Array;

    use super::*;
    use crate::error::WktError;
    use crate::options::MultiPointStyle;
    use crate::scalar::Geometry;
    use crate::test::*;

    #[test]
    fn nulls_become_null_slots() {
        let geoms = vec![
            Some(Geometry::from(p0())),
            None,
            Some(Geometry::from(ls0())),
        ];
        let array = geoms.to_wkt::<i32>(&Default::default()).unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(array.value(0), "POINT (15 20)");
        assert!(array.is_null(1));
        assert_eq!(array.value(2), "LINESTRING (0 0, 10 10, 20 25, 50 60)");
    }

    #[test]
    fn large_offsets_with_options() {
        let geoms = [Some(Geometry::from(mp0()))];
        let options = WktWriterOptions::default().with_multi_point(MultiPointStyle::Parenthesized);
        let array = geoms.to_wkt::<i64>(&options).unwrap();
        assert_eq!(array.value(0), "MULTIPOINT ((0 0), (20 20), (60 60))");
    }

    #[test]
    fn failure_aborts_conversion() {
        let geoms = [
            Some(Geometry::from(p0())),
            Some(Geometry::from(crate::scalar::Point::new(f64::INFINITY, 0.))),
        ];
        let err = geoms.to_wkt::<i32>(&Default::default()).unwrap_err();
        assert!(matches!(err, WktError::InvalidOrdinate(_)));
    }

    #[test]
    fn geo_types_input() {
        let geoms = vec![
            Some(geo_types::Geometry::Point(geo_types::point!(x: 1., y: 2.))),
            None,
        ];
        let array = geoms.to_wkt::<i32>(&Default::default()).unwrap();
        assert_eq!(array.value(0), "POINT (1 2)");
        assert!(array.is_null(1));
    }
}
