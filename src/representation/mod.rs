//! Value representations and the byte-level codec built on them
//!
//! Every bulk vector stores one value per sample in a flat byte buffer. The
//! [`Representation`] tag says how wide one sample is and how its bytes are
//! interpreted. Fixed-width representations allow stride arithmetic (the
//! basis of slicing); the variable-width `String` representation does not,
//! and any fixed-stride operation on it fails with
//! [`CodecError::VariableWidth`](crate::error::CodecError::VariableWidth).
//!
//! # Byte layout
//!
//! All multi-byte values are stored big-endian, matching the buffers the
//! upstream loaders produce. A `Char` sample is one UTF-16 code unit (2
//! bytes); a `String` payload is a sequence of NUL-terminated UTF-8 entries.
//!
//! # Example
//!
//! ```rust
//! use bulkexpr::representation::Representation;
//!
//! assert_eq!(Representation::Double.byte_width(), Some(8));
//! assert_eq!(Representation::Boolean.byte_width(), Some(1));
//! assert_eq!(Representation::String.byte_width(), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod codec;
pub mod missing;

pub use missing::{count, count_missing};

/// Primitive encoding of one sample's value
///
/// Each tag maps to a fixed byte width, except `String` whose width varies
/// per entry. [`byte_width`](Representation::byte_width) returns `None` for
/// `String` so callers cannot mistake "variable" for a real byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    /// 64-bit IEEE-754 floating point, 8 bytes
    Double,
    /// 32-bit IEEE-754 floating point, 4 bytes
    Float,
    /// 32-bit signed integer, 4 bytes
    Int,
    /// 64-bit signed integer, 8 bytes
    Long,
    /// Single byte, 0 = false, anything else = true
    Boolean,
    /// One UTF-16 code unit, 2 bytes
    Char,
    /// NUL-terminated UTF-8 text, variable width
    String,
}

impl Representation {
    /// Fixed width of one sample in bytes, or `None` for variable-width
    /// representations
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            Representation::Double => Some(8),
            Representation::Float => Some(4),
            Representation::Int => Some(4),
            Representation::Long => Some(8),
            Representation::Boolean => Some(1),
            Representation::Char => Some(2),
            Representation::String => None,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::Double => "double",
            Representation::Float => "float",
            Representation::Int => "int",
            Representation::Long => "long",
            Representation::Boolean => "boolean",
            Representation::Char => "char",
            Representation::String => "string",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_widths() {
        assert_eq!(Representation::Double.byte_width(), Some(8));
        assert_eq!(Representation::Float.byte_width(), Some(4));
        assert_eq!(Representation::Int.byte_width(), Some(4));
        assert_eq!(Representation::Long.byte_width(), Some(8));
        assert_eq!(Representation::Boolean.byte_width(), Some(1));
        assert_eq!(Representation::Char.byte_width(), Some(2));
    }

    #[test]
    fn test_string_width_is_unknown() {
        assert_eq!(Representation::String.byte_width(), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Representation::Double.to_string(), "double");
        assert_eq!(Representation::String.to_string(), "string");
    }
}
