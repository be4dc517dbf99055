use std::fmt::Write;

use geo_traits::MultiLineStringTrait;

use crate::common::WktType;
use crate::error::WktResult;
use crate::writer::linestring::write_line_string_text;
use crate::writer::Emitter;

/// Write a multi line string as `MULTILINESTRING <multilinestring text>`.
pub(crate) fn write_multi_line_string_tagged_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    multi_line_string: &impl MultiLineStringTrait<T = f64>,
) -> WktResult<()> {
    emitter.write_keyword(WktType::MultiLineString)?;
    write_multi_line_string_text(emitter, multi_line_string)
}

pub(super) fn write_multi_line_string_text<W: Write>(
    emitter: &mut Emitter<'_, W>,
    multi_line_string: &impl MultiLineStringTrait<T = f64>,
) -> WktResult<()> {
    if multi_line_string.num_line_strings() == 0 {
        return emitter.write_empty();
    }

    emitter.write_list(multi_line_string.line_strings(), |emitter, line_string| {
        write_line_string_text(emitter, &line_string)
    })
}
