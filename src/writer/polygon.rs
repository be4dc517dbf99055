use std::fmt::Write;

use geo_traits::{LineStringTrait, PolygonTrait};

use crate::common::WktType;
use crate::error::WktResult;
use crate::writer::linestring::write_line_string_text;
use crate::writer::Emitter;

/// Write a polygon as `POLYGON <polygon text>`.
pub(crate) fn write_polygon_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    polygon: &impl PolygonTrait<T = f64>,
) -> WktResult<()> {
    emitter.write_keyword(WktType::Polygon)?;
    write_polygon_text(emitter, polygon)
}

/// Write `EMPTY` or the exterior ring followed by each interior ring.
pub(super) fn write_polygon_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    polygon: &impl PolygonTrait<T = f64>,
) -> WktResult<()> {
    let exterior = match polygon.exterior() {
        Some(exterior) if exterior.num_coords() > 0 => exterior,
        _ => return emitter.write_empty(),
    };

    emitter.write_str("(")?;
    write_line_string_text(emitter, &exterior)?;
    for interior in polygon.interiors() {
        emitter.write_str(", ")?;
        write_line_string_text(emitter, &interior)?;
    }
    emitter.write_str(")")
}
