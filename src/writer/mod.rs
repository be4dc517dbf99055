//! Write geometries as Well-Known Text.
//!
//! Each geometry kind has two entry points, following the grammar of the OGC Simple Features
//! specification: `write_<kind>_tagged_text` writes the keyword followed by the body, while
//! `write_<kind>_text` writes the body alone. Multi-geometries write their members with the body
//! form; geometry collections write theirs with the tagged form.

use std::fmt::Write;
use std::io;

use geo_traits::GeometryTrait;

use crate::common::WktType;
use crate::error::{WktError, WktResult};
use crate::options::WktWriterOptions;

mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub(crate) use geometry::write_geometry_tagged_text;
pub(crate) use geometrycollection::write_geometry_collection_tagged_text;
pub(crate) use linestring::write_line_string_tagged_text;
pub(crate) use multilinestring::write_multi_line_string_tagged_text;
pub(crate) use multipoint::write_multi_point_tagged_text;
pub(crate) use multipolygon::write_multi_polygon_tagged_text;
pub(crate) use point::write_point_tagged_text;
pub(crate) use polygon::write_polygon_tagged_text;

/// Output sink plus the settings and recursion state of a single write.
pub(crate) struct Emitter<'a, W: Write> {
    writer: &'a mut W,
    options: WktWriterOptions,
    depth: usize,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub(crate) fn new(writer: &'a mut W, options: WktWriterOptions) -> Self {
        Self {
            writer,
            options,
            depth: 0,
        }
    }

    fn write_str(&mut self, s: &str) -> WktResult<()> {
        self.writer.write_str(s)?;
        Ok(())
    }

    fn write_keyword(&mut self, typ: WktType) -> WktResult<()> {
        self.write_str(typ.keyword())?;
        self.write_str(" ")
    }

    fn write_empty(&mut self) -> WktResult<()> {
        self.write_str("EMPTY")
    }

    /// Write `(`, then each item separated by `, `, then `)`.
    fn write_list<I>(
        &mut self,
        items: I,
        mut write_item: impl FnMut(&mut Self, I::Item) -> WktResult<()>,
    ) -> WktResult<()>
    where
        I: Iterator,
    {
        self.write_str("(")?;
        for (i, item) in items.enumerate() {
            if i > 0 {
                self.write_str(", ")?;
            }
            write_item(self, item)?;
        }
        self.write_str(")")
    }

    fn enter_collection(&mut self) -> WktResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            log::debug!(
                "geometry collection nesting exceeds limit of {}",
                self.options.max_depth
            );
            return Err(WktError::TooDeeplyNested {
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn leave_collection(&mut self) {
        self.depth -= 1;
    }
}

/// Converts geometries to their Well-Known Text representation.
///
/// The writer holds no state between calls, so a single instance can be shared freely across
/// threads.
///
/// ```
/// use geoarrow_wkt::scalar::{Geometry, Point};
/// use geoarrow_wkt::writer::WktWriter;
///
/// let writer = WktWriter::default();
/// let point = Geometry::from(Point::new(15., 20.));
/// assert_eq!(writer.write(Some(&point)).unwrap(), "POINT (15 20)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WktWriter {
    options: WktWriterOptions,
}

impl WktWriter {
    /// Create a writer with the given options.
    pub fn new(options: WktWriterOptions) -> Self {
        Self { options }
    }

    /// The options used by this writer.
    pub fn options(&self) -> &WktWriterOptions {
        &self.options
    }

    /// Write a geometry as `<geometry tagged text>` and return it.
    ///
    /// Text is only returned when the whole geometry was written successfully.
    pub fn write<G: GeometryTrait<T = f64>>(&self, geometry: Option<&G>) -> WktResult<String> {
        let mut out = String::new();
        self.write_to(&mut out, geometry)?;
        Ok(out)
    }

    /// Write a geometry as `<geometry tagged text>` into `writer`.
    ///
    /// Produces exactly the text of [`write`][Self::write]. If an error is returned, part of the
    /// text may already have been written; callers needing all-or-nothing output should write
    /// into a buffer first.
    pub fn write_to<W: Write, G: GeometryTrait<T = f64>>(
        &self,
        writer: &mut W,
        geometry: Option<&G>,
    ) -> WktResult<()> {
        let Some(geometry) = geometry else {
            log::debug!("refusing to write a null geometry");
            return Err(WktError::NullGeometry);
        };

        let typ = WktType::of(geometry)?;
        log::trace!("writing {typ} as WKT");

        let mut emitter = Emitter::new(writer, self.options);
        write_geometry_tagged_text(&mut emitter, geometry)
    }

    /// Write a geometry as UTF-8 encoded `<geometry tagged text>` into a byte stream.
    ///
    /// The text is buffered in full before anything is written, so nothing reaches `writer` when
    /// the geometry cannot be encoded.
    pub fn write_io<W: io::Write, G: GeometryTrait<T = f64>>(
        &self,
        mut writer: W,
        geometry: Option<&G>,
    ) -> WktResult<()> {
        let text = self.write(geometry)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Convert a geometry to WKT using the default options.
pub fn to_wkt(geometry: &impl GeometryTrait<T = f64>) -> WktResult<String> {
    WktWriter::default().write(Some(geometry))
}

/// Write a geometry as WKT into `writer` using the default options.
pub fn write_geometry<W: Write>(
    writer: &mut W,
    geometry: &impl GeometryTrait<T = f64>,
) -> WktResult<()> {
    WktWriter::default().write_to(writer, Some(geometry))
}
