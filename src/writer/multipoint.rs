use std::fmt::Write;

use geo_traits::{MultiPointTrait, PointTrait};

use crate::common::WktType;
use crate::error::WktResult;
use crate::options::MultiPointStyle;
use crate::writer::coord::write_coord;
use crate::writer::point::{is_nan_coord, write_point_text};
use crate::writer::Emitter;

/// Write a multi point as `MULTIPOINT <multipoint text>`.
pub(crate) fn write_multi_point_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    multi_point: &impl MultiPointTrait<T = f64>,
) -> WktResult<()> {
    emitter.write_keyword(WktType::MultiPoint)?;
    write_multi_point_text(emitter, multi_point)
}

/// Write `EMPTY` or the member points.
///
/// In [`MultiPointStyle::Bare`] form empty members have no representation and are skipped; a
/// multi point with no non-empty members is `EMPTY`. In [`MultiPointStyle::Parenthesized`] form
/// each empty member is written as `EMPTY`.
pub(super) fn write_multi_point_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    multi_point: &impl MultiPointTrait<T = f64>,
) -> WktResult<()> {
    let style = emitter.options.multi_point;
    match style {
        MultiPointStyle::Parenthesized => {
            if multi_point.num_points() == 0 {
                return emitter.write_empty();
            }
            emitter.write_list(multi_point.points(), |emitter, point| {
                write_point_text(emitter, &point)
            })
        }
        MultiPointStyle::Bare => {
            if multi_point.points().all(|point| is_empty_point(&point)) {
                return emitter.write_empty();
            }
            let members = multi_point.points().filter(|point| !is_empty_point(point));
            emitter.write_list(members, |emitter, point| match point.coord() {
                Some(coord) => write_coord(emitter, &coord),
                None => Ok(()),
            })
        }
    }
}

fn is_empty_point(point: &impl PointTrait<T = f64>) -> bool {
    point.coord().map_or(true, |coord| is_nan_coord(&coord))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::options::WktWriterOptions;
    use crate::scalar::{MultiPoint, Point};

    fn write(multi_point: &MultiPoint, style: MultiPointStyle) -> String {
        let mut out = String::new();
        let mut emitter = Emitter::new(
            &mut out,
            WktWriterOptions::default().with_multi_point(style),
        );
        write_multi_point_text(&mut emitter, multi_point).unwrap();
        out
    }

    #[test]
    fn bare_skips_empty_members() {
        let mp = MultiPoint::new(vec![
            Point::empty(),
            Point::new(1., 2.),
            Point::new(f64::NAN, f64::NAN),
            Point::new(3., 4.),
        ]);
        assert_eq!(write(&mp, MultiPointStyle::Bare), "(1 2, 3 4)");
        assert_eq!(
            write(&mp, MultiPointStyle::Parenthesized),
            "(EMPTY, (1 2), EMPTY, (3 4))"
        );
    }

    #[test]
    fn bare_all_empty_members() {
        let mp = MultiPoint::new(vec![Point::empty(), Point::empty()]);
        assert_eq!(write(&mp, MultiPointStyle::Bare), "EMPTY");
        assert_eq!(write(&mp, MultiPointStyle::Parenthesized), "(EMPTY, EMPTY)");
    }
}
