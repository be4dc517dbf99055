use std::fmt::Write;

use geo_traits::MultiPolygonTrait;

use crate::common::WktType;
use crate::error::WktResult;
use crate::writer::polygon::write_polygon_text;
use crate::writer::Emitter;

/// Write a multi polygon as `MULTIPOLYGON <multipolygon text>`.
pub(crate) fn write_multi_polygon_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    multi_polygon: &impl MultiPolygonTrait<T = f64>,
) -> WktResult<()> {
    emitter.write_keyword(WktType::MultiPolygon)?;
    write_multi_polygon_text(emitter, multi_polygon)
}

pub(super) fn write_multi_polygon_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    multi_polygon: &impl MultiPolygonTrait<T = f64>,
) -> WktResult<()> {
    if multi_polygon.num_polygons() == 0 {
        return emitter.write_empty();
    }

    emitter.write_list(multi_polygon.polygons(), |emitter, polygon| {
        write_polygon_text(emitter, &polygon)
    })
}
