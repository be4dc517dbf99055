use std::fmt::Write;

use geo_traits::{CoordTrait, Dimensions};

use crate::error::{WktError, WktResult};
use crate::options::ThirdOrdinate;
use crate::writer::Emitter;

/// Write the ordinates of a coordinate separated by single spaces.
pub(super) fn write_coord<W: Write>(
    emitter: &mut Emitter<'_, W>,
    coord: &impl CoordTrait<T = f64>,
) -> WktResult<()> {
    write_ordinate(&mut *emitter.writer, coord.x())?;
    emitter.write_str(" ")?;
    write_ordinate(&mut *emitter.writer, coord.y())?;

    if let Some(third) = third_ordinate(coord, emitter.options.third_ordinate) {
        emitter.write_str(" ")?;
        write_ordinate(&mut *emitter.writer, third)?;
    }

    Ok(())
}

/// The value to write after Y, if any.
///
/// The third ordinate is only a Z value for XYZ and XYZM coordinates. For XYM it is a measure,
/// which is never written.
fn third_ordinate(coord: &impl CoordTrait<T = f64>, policy: ThirdOrdinate) -> Option<f64> {
    let z = match coord.dim() {
        Dimensions::Xyz | Dimensions::Xyzm => coord.nth(2),
        Dimensions::Unknown(n) if n >= 3 => coord.nth(2),
        _ => None,
    }
    .filter(|z| !z.is_nan())?;

    match policy {
        ThirdOrdinate::Z => Some(z),
        ThirdOrdinate::RepeatY => Some(coord.y()),
        ThirdOrdinate::Omit => None,
    }
}

/// Write a single ordinate in plain decimal notation.
///
/// Uses the shortest digits that parse back to the same value, never an exponent, and always `.`
/// as the decimal separator.
fn write_ordinate<W: Write>(writer: &mut W, value: f64) -> WktResult<()> {
    if !value.is_finite() {
        log::debug!("cannot write non-finite ordinate {value}");
        return Err(WktError::InvalidOrdinate(value));
    }
    write!(writer, "{value}")?;
    Ok(())
}
