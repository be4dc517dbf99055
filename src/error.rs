//! Defines [`WktError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WktError {
    /// No geometry was passed to the writer.
    #[error("Cannot write Well-Known Text: geometry was null")]
    NullGeometry,

    /// The geometry kind has no representation in the supported WKT subset.
    #[error("Unsupported geometry kind: {0}")]
    UnsupportedGeometryKind(Cow<'static, str>),

    /// Geometry collections were nested deeper than the configured limit.
    #[error("Geometry collections nested deeper than {limit} levels")]
    TooDeeplyNested {
        /// The configured maximum depth.
        limit: usize,
    },

    /// An ordinate was NaN or infinite.
    ///
    /// WKT has no syntax for non-finite numbers. Empty points must be expressed with an absent
    /// coordinate instead.
    #[error("Ordinate is not a finite number: {0}")]
    InvalidOrdinate(f64),

    /// [std::fmt::Error]
    #[error("Failed to write to output: {0}")]
    FmtError(#[from] std::fmt::Error),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type WktResult<T> = std::result::Result<T, WktError>;
