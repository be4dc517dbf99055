use std::fmt::Write;

use geo_traits::{CoordTrait, PointTrait};

use crate::common::WktType;
use crate::error::WktResult;
use crate::writer::coord::write_coord;
use crate::writer::Emitter;

/// Write a point as `POINT <point text>`.
pub(crate) fn write_point_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    point: &impl PointTrait<T = f64>,
) -> WktResult<()> {
    emitter.write_keyword(WktType::Point)?;
    write_point_text(emitter, point)
}

/// Write `EMPTY` or the parenthesized coordinate of a point.
pub(super) fn write_point_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    point: &impl PointTrait<T = f64>,
) -> WktResult<()> {
    match point.coord() {
        Some(coord) if !is_nan_coord(&coord) => {
            emitter.write_str("(")?;
            write_coord(emitter, &coord)?;
            emitter.write_str(")")
        }
        _ => emitter.write_empty(),
    }
}

/// Columnar point storage marks empty points with NaN in both X and Y.
pub(super) fn is_nan_coord(coord: &impl CoordTrait<T = f64>) -> bool {
    coord.x().is_nan() && coord.y().is_nan()
}
