//! Decoding and encoding of sample buffers
//!
//! Converts between flat byte buffers and typed sample arrays. All
//! fixed-width values are big-endian; strings are NUL-terminated UTF-8
//! entries. Decoders validate shape up front and never return a partial
//! result.
//!
//! # Example
//!
//! ```rust
//! use bulkexpr::representation::codec;
//!
//! let buffer = codec::encode_doubles(&[10.0, 20.0, 30.0]);
//! assert_eq!(buffer.len(), 24);
//!
//! let values = codec::decode_doubles(&buffer).unwrap();
//! assert_eq!(values, vec![10.0, 20.0, 30.0]);
//! ```

use crate::error::{CodecError, Result};
use crate::representation::Representation;

/// Number of samples a buffer holds under the given representation
///
/// Fails with [`CodecError::VariableWidth`] for `String` and with
/// [`CodecError::Truncated`] when the buffer length is not a multiple of the
/// sample width.
pub fn sample_count(buffer: &[u8], representation: Representation) -> Result<usize> {
    let width = fixed_width(representation)?;
    check_multiple(buffer, width)?;
    Ok(buffer.len() / width)
}

/// Decode a buffer of big-endian 64-bit floats
pub fn decode_doubles(buffer: &[u8]) -> Result<Vec<f64>> {
    check_multiple(buffer, 8)?;
    Ok(buffer
        .chunks_exact(8)
        .map(|c| f64::from_be_bytes(c.try_into().unwrap()))
        .collect())
}

/// Decode a buffer of big-endian 32-bit floats
pub fn decode_floats(buffer: &[u8]) -> Result<Vec<f32>> {
    check_multiple(buffer, 4)?;
    Ok(buffer
        .chunks_exact(4)
        .map(|c| f32::from_be_bytes(c.try_into().unwrap()))
        .collect())
}

/// Decode a buffer of big-endian 32-bit signed integers
pub fn decode_ints(buffer: &[u8]) -> Result<Vec<i32>> {
    check_multiple(buffer, 4)?;
    Ok(buffer
        .chunks_exact(4)
        .map(|c| i32::from_be_bytes(c.try_into().unwrap()))
        .collect())
}

/// Decode a buffer of big-endian 64-bit signed integers
pub fn decode_longs(buffer: &[u8]) -> Result<Vec<i64>> {
    check_multiple(buffer, 8)?;
    Ok(buffer
        .chunks_exact(8)
        .map(|c| i64::from_be_bytes(c.try_into().unwrap()))
        .collect())
}

/// Decode a buffer of one-byte booleans (0 = false, anything else = true)
pub fn decode_booleans(buffer: &[u8]) -> Result<Vec<bool>> {
    Ok(buffer.iter().map(|&b| b != 0).collect())
}

/// Decode a buffer of UTF-16 code units (one sample = one code unit)
///
/// Values are returned as raw code units; the NUL code unit is the
/// missing-value sentinel upstream.
pub fn decode_chars(buffer: &[u8]) -> Result<Vec<u16>> {
    check_multiple(buffer, 2)?;
    Ok(buffer
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes(c.try_into().unwrap()))
        .collect())
}

/// Decode a buffer of NUL-terminated UTF-8 strings
///
/// An empty entry (a lone NUL) decodes to the empty string. Fails with
/// [`CodecError::MalformedPayload`] on invalid UTF-8 or when the final entry
/// is missing its terminator.
pub fn decode_strings(buffer: &[u8]) -> Result<Vec<String>> {
    if buffer.is_empty() {
        return Ok(Vec::new());
    }
    if buffer.last() != Some(&0) {
        return Err(CodecError::MalformedPayload(
            "string payload does not end with a NUL terminator".to_string(),
        )
        .into());
    }
    let mut out = Vec::new();
    for entry in buffer[..buffer.len() - 1].split(|&b| b == 0) {
        let s = std::str::from_utf8(entry)
            .map_err(|e| CodecError::MalformedPayload(format!("invalid UTF-8: {}", e)))?;
        out.push(s.to_string());
    }
    Ok(out)
}

/// Encode 64-bit floats as a big-endian buffer
pub fn encode_doubles(values: &[f64]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(values.len() * 8);
    for v in values {
        buffer.extend_from_slice(&v.to_be_bytes());
    }
    buffer
}

/// Encode 32-bit floats as a big-endian buffer
pub fn encode_floats(values: &[f32]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(values.len() * 4);
    for v in values {
        buffer.extend_from_slice(&v.to_be_bytes());
    }
    buffer
}

/// Encode 32-bit signed integers as a big-endian buffer
pub fn encode_ints(values: &[i32]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(values.len() * 4);
    for v in values {
        buffer.extend_from_slice(&v.to_be_bytes());
    }
    buffer
}

/// Encode 64-bit signed integers as a big-endian buffer
pub fn encode_longs(values: &[i64]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(values.len() * 8);
    for v in values {
        buffer.extend_from_slice(&v.to_be_bytes());
    }
    buffer
}

/// Encode booleans as a one-byte-per-sample buffer
pub fn encode_booleans(values: &[bool]) -> Vec<u8> {
    values.iter().map(|&v| v as u8).collect()
}

/// Encode UTF-16 code units as a big-endian buffer
pub fn encode_chars(values: &[u16]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(values.len() * 2);
    for v in values {
        buffer.extend_from_slice(&v.to_be_bytes());
    }
    buffer
}

/// Encode strings as NUL-terminated UTF-8 entries
///
/// Fails with [`CodecError::MalformedPayload`] if any entry contains an
/// interior NUL, since NUL is the entry terminator.
pub fn encode_strings(values: &[impl AsRef<str>]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    for v in values {
        let s = v.as_ref();
        if s.contains('\0') {
            return Err(CodecError::MalformedPayload(
                "string entry contains an interior NUL".to_string(),
            )
            .into());
        }
        buffer.extend_from_slice(s.as_bytes());
        buffer.push(0);
    }
    Ok(buffer)
}

/// Fixed byte width, or the variable-width error for `String`
pub(crate) fn fixed_width(representation: Representation) -> Result<usize> {
    representation
        .byte_width()
        .ok_or_else(|| CodecError::VariableWidth(representation.to_string()).into())
}

fn check_multiple(buffer: &[u8], width: usize) -> Result<()> {
    if buffer.len() % width != 0 {
        return Err(CodecError::Truncated {
            length: buffer.len(),
            width,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_double_round_trip() {
        let values = [1.5, -2.25, f64::NAN, 0.0];
        let decoded = decode_doubles(&encode_doubles(&values)).unwrap();
        assert_eq!(decoded.len(), 4);
        assert_eq!(decoded[0], 1.5);
        assert_eq!(decoded[1], -2.25);
        assert!(decoded[2].is_nan());
        assert_eq!(decoded[3], 0.0);
    }

    #[test]
    fn test_double_big_endian_layout() {
        let buffer = encode_doubles(&[1.0]);
        assert_eq!(buffer, 1.0f64.to_be_bytes());
    }

    #[test]
    fn test_truncated_buffer_rejected() {
        let err = decode_doubles(&[0u8; 12]).unwrap_err();
        assert!(matches!(
            err,
            Error::Codec(CodecError::Truncated {
                length: 12,
                width: 8
            })
        ));
    }

    #[test]
    fn test_boolean_round_trip() {
        let values = [true, false, true];
        assert_eq!(decode_booleans(&encode_booleans(&values)).unwrap(), values);
    }

    #[test]
    fn test_char_round_trip() {
        let values = ['P' as u16, 'A' as u16, 0];
        assert_eq!(decode_chars(&encode_chars(&values)).unwrap(), values);
    }

    #[test]
    fn test_string_round_trip() {
        let values = ["present", "", "absent"];
        let buffer = encode_strings(&values).unwrap();
        assert_eq!(
            decode_strings(&buffer).unwrap(),
            vec!["present".to_string(), String::new(), "absent".to_string()]
        );
    }

    #[test]
    fn test_string_missing_terminator_rejected() {
        assert!(decode_strings(b"no terminator").is_err());
    }

    #[test]
    fn test_string_interior_nul_rejected() {
        assert!(encode_strings(&["bad\0entry"]).is_err());
    }

    #[test]
    fn test_empty_buffers_decode_to_empty_arrays() {
        assert!(decode_doubles(&[]).unwrap().is_empty());
        assert!(decode_strings(&[]).unwrap().is_empty());
        assert_eq!(sample_count(&[], Representation::Double).unwrap(), 0);
    }

    #[test]
    fn test_sample_count_variable_width_rejected() {
        assert!(sample_count(b"x\0", Representation::String).is_err());
    }
}
