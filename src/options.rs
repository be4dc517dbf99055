//! Configuration for [`WktWriter`][crate::writer::WktWriter].

use serde::{Deserialize, Serialize};

use crate::error::WktResult;

/// Default limit on nested geometry collections.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How members of a MultiPoint are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiPointStyle {
    /// Bare coordinates: `MULTIPOINT (0 0, 20 20)`.
    #[default]
    Bare,

    /// One parenthesized point body per member: `MULTIPOINT ((0 0), (20 20))`.
    Parenthesized,
}

/// What to write in the third position of a coordinate that carries a Z value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdOrdinate {
    /// Write the Z value.
    #[default]
    Z,

    /// Write the Y value a second time in place of Z.
    ///
    /// Older writers produced `x y y` triplets for 3D coordinates. This reproduces that output
    /// byte for byte so stored text can be compared or regenerated.
    RepeatY,

    /// Drop Z and always write 2D coordinates.
    Omit,
}

/// Options controlling WKT output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WktWriterOptions {
    /// Maximum nesting depth of geometry collections.
    ///
    /// A top-level collection is at depth 1.
    pub max_depth: usize,

    /// MultiPoint member encoding.
    pub multi_point: MultiPointStyle,

    /// Third ordinate policy for 3D coordinates.
    pub third_ordinate: ThirdOrdinate,
}

impl Default for WktWriterOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            multi_point: MultiPointStyle::default(),
            third_ordinate: ThirdOrdinate::default(),
        }
    }
}

impl WktWriterOptions {
    /// Load options from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> WktResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set [`max_depth`][Self::max_depth].
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Set [`multi_point`][Self::multi_point].
    pub fn with_multi_point(self, multi_point: MultiPointStyle) -> Self {
        Self {
            multi_point,
            ..self
        }
    }

    /// Set [`third_ordinate`][Self::third_ordinate].
    pub fn with_third_ordinate(self, third_ordinate: ThirdOrdinate) -> Self {
        Self {
            third_ordinate,
            ..self
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WktError;

    #[test]
    fn from_json_fills_defaults() {
        let options = WktWriterOptions::from_json(r#"{"multi_point": "parenthesized"}"#).unwrap();
        assert_eq!(options.multi_point, MultiPointStyle::Parenthesized);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.third_ordinate, ThirdOrdinate::Z);
    }

    #[test]
    fn from_json_all_fields() {
        let options = WktWriterOptions::from_json(
            r#"{"max_depth": 3, "multi_point": "bare", "third_ordinate": "repeat_y"}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            WktWriterOptions::default()
                .with_max_depth(3)
                .with_third_ordinate(ThirdOrdinate::RepeatY)
        );
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = WktWriterOptions::from_json(r#"{"precision": 3}"#).unwrap_err();
        assert!(matches!(err, WktError::SerdeJsonError(_)));
    }
}
