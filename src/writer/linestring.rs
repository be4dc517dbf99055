use std::fmt::Write;

use geo_traits::LineStringTrait;

use crate::common::WktType;
use crate::error::WktResult;
use crate::writer::coord::write_coord;
use crate::writer::Emitter;

/// Write a line string as `LINESTRING <linestring text>`.
pub(crate) fn write_line_string_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    line_string: &impl LineStringTrait<T = f64>,
) -> WktResult<()> {
    emitter.write_keyword(WktType::LineString)?;
    write_line_string_text(emitter, line_string)
}

/// Write `EMPTY` or the parenthesized vertex list of a line string.
///
/// Vertices are written in their stored order. Rings are not closed or deduplicated.
pub(super) fn write_line_string_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    line_string: &impl LineStringTrait<T = f64>,
) -> WktResult<()> {
    if line_string.num_coords() == 0 {
        return emitter.write_empty();
    }

    emitter.write_list(line_string.coords(), |emitter, coord| {
        write_coord(emitter, &coord)
    })
}
