use std::fmt::Write;

use geo_traits::{GeometryTrait, GeometryType};

use crate::common::unsupported;
use crate::error::WktResult;
use crate::writer::Emitter;
use crate::writer::{
    write_geometry_collection_tagged_text, write_line_string_tagged_text,
    write_multi_line_string_tagged_text, write_multi_point_tagged_text,
    write_multi_polygon_tagged_text, write_point_tagged_text, write_polygon_tagged_text,
};

/// Write any geometry as `<geometry tagged text>`.
pub(crate) fn write_geometry_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    geometry: &impl GeometryTrait<T = f64>,
) -> WktResult<()> {
    match geometry.as_type() {
        GeometryType::Point(g) => write_point_tagged_text(emitter, g),
        GeometryType::LineString(g) => write_line_string_tagged_text(emitter, g),
        GeometryType::Polygon(g) => write_polygon_tagged_text(emitter, g),
        GeometryType::MultiPoint(g) => write_multi_point_tagged_text(emitter, g),
        GeometryType::MultiLineString(g) => write_multi_line_string_tagged_text(emitter, g),
        GeometryType::MultiPolygon(g) => write_multi_polygon_tagged_text(emitter, g),
        GeometryType::GeometryCollection(g) => write_geometry_collection_tagged_text(emitter, g),
        GeometryType::Rect(_) => Err(unsupported("Rect")),
        GeometryType::Triangle(_) => Err(unsupported("Triangle")),
        GeometryType::Line(_) => Err(unsupported("Line")),
    }
}
