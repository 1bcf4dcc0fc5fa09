use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Which header field a dimension error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// The `_width` define.
    Width,
    /// The `_height` define.
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("largeur"),
            Self::Height => f.write_str("hauteur"),
        }
    }
}

/// Errors produced while decoding an XBM source.
///
/// All variants are terminal: no partial bitmap is ever returned.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The width/height/hot-spot/bits declarations were not found in order.
    #[error("Impossible de comprendre ce fichier XBM (structure non reconnue)")]
    MalformedSource,

    /// A dimension was found but does not fit an unsigned 32-bit integer.
    #[error("Impossible de lire la {field} « {value} » : {source}")]
    InvalidDimension {
        /// Field being parsed.
        field: Dimension,
        /// Raw text of the field.
        value: String,
        /// Underlying integer parse error.
        source: ParseIntError,
    },

    /// Source larger than the accepted maximum.
    #[error("Source trop volumineuse : {len} octets (maximum {max})")]
    Oversized {
        /// Actual size in bytes.
        len: usize,
        /// Accepted maximum in bytes.
        max: usize,
    },

    /// Declared pixel area larger than any accepted source could describe.
    #[error("Image trop grande : {width}×{height} demande plus de {max} octets de pixels")]
    TooLarge {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Accepted maximum of packed pixel bytes.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_names_the_field() {
        let source = "99999999999".parse::<u32>().unwrap_err();
        let err = DecodeError::InvalidDimension {
            field: Dimension::Height,
            value: "99999999999".into(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("hauteur"), "{msg}");
        assert!(msg.contains("99999999999"), "{msg}");
    }

    #[test]
    fn oversized_reports_both_sizes() {
        let err = DecodeError::Oversized { len: 2_000_000, max: 1_048_576 };
        let msg = err.to_string();
        assert!(msg.contains("2000000") && msg.contains("1048576"), "{msg}");
    }

    #[test]
    fn too_large_reports_declared_size() {
        let err = DecodeError::TooLarge { width: u32::MAX, height: 2, max: 1_048_576 };
        let msg = err.to_string();
        assert!(msg.contains("4294967295×2"), "{msg}");
    }
}
