use std::fmt::Write;

use geo_traits::GeometryCollectionTrait;

use crate::common::WktType;
use crate::error::WktResult;
use crate::writer::geometry::write_geometry_tagged_text;
use crate::writer::Emitter;

/// Write a geometry collection as `GEOMETRYCOLLECTION <geometrycollection text>`.
pub(crate) fn write_geometry_collection_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    geometry_collection: &impl GeometryCollectionTrait<T = f64>,
) -> WktResult<()> {
    emitter.write_keyword(WktType::GeometryCollection)?;
    write_geometry_collection_text(emitter, geometry_collection)
}

/// Write `EMPTY` or each member as full tagged text.
///
/// Fails with [`TooDeeplyNested`][crate::error::WktError::TooDeeplyNested] once collections nest
/// deeper than the configured limit.
pub(super) fn write_geometry_collection_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    geometry_collection: &impl GeometryCollectionTrait<T = f64>,
) -> WktResult<()> {
    if geometry_collection.num_geometries() == 0 {
        return emitter.write_empty();
    }

    emitter.enter_collection()?;
    emitter.write_list(geometry_collection.geometries(), |emitter, geometry| {
        write_geometry_tagged_text(emitter, &geometry)
    })?;
    emitter.leave_collection();
    Ok(())
}
