//! Presence and missingness counting
//!
//! How "missing" is spelled depends on the semantics of the vector, not just
//! its representation:
//!
//! - floating-point values: NaN is missing
//! - boolean present/absent calls: `false` is missing
//! - boolean flags of any other sub-kind (e.g. failed-measurement): nothing
//!   is missing, `false` is an ordinary value
//! - chars: the NUL code unit is missing
//! - strings: the empty string is missing
//! - integers: nothing is missing, there is no sentinel
//!
//! The sentinels are conventions inherited from upstream buffers; they are
//! deliberately kept here in one module so a future explicit presence flag
//! would replace only this policy.

use crate::error::Result;
use crate::representation::{codec, Representation};
use crate::types::StandardType;
use crate::vector::BulkVector;

/// Number of present (non-missing) samples in a vector
pub fn count<V: BulkVector>(vector: &V) -> Result<usize> {
    let (present, _total) = tally(vector)?;
    Ok(present)
}

/// Number of missing samples in a vector
pub fn count_missing<V: BulkVector>(vector: &V) -> Result<usize> {
    let (present, total) = tally(vector)?;
    Ok(total - present)
}

/// Counts present samples and total samples in one decode pass
fn tally<V: BulkVector>(vector: &V) -> Result<(usize, usize)> {
    let qt = vector.quantitation_type();
    let data = vector.data();
    match qt.representation() {
        Representation::Double => {
            let values = codec::decode_doubles(data)?;
            let present = values.iter().filter(|v| !v.is_nan()).count();
            Ok((present, values.len()))
        }
        Representation::Float => {
            let values = codec::decode_floats(data)?;
            let present = values.iter().filter(|v| !v.is_nan()).count();
            Ok((present, values.len()))
        }
        Representation::Boolean => {
            let values = codec::decode_booleans(data)?;
            if qt.standard_type() == StandardType::PresentAbsent {
                let present = values.iter().filter(|&&v| v).count();
                Ok((present, values.len()))
            } else {
                Ok((values.len(), values.len()))
            }
        }
        Representation::Char => {
            let values = codec::decode_chars(data)?;
            let present = values.iter().filter(|&&c| c != 0).count();
            Ok((present, values.len()))
        }
        Representation::String => {
            let values = codec::decode_strings(data)?;
            let present = values.iter().filter(|s| !s.is_empty()).count();
            Ok((present, values.len()))
        }
        Representation::Int => {
            let values = codec::decode_ints(data)?;
            Ok((values.len(), values.len()))
        }
        Representation::Long => {
            let values = codec::decode_longs(data)?;
            Ok((values.len(), values.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::{Assay, Dimension, GeneralType, QuantitationType};
    use crate::vector::RawVector;

    fn dimension(n: usize) -> Arc<Dimension> {
        Dimension::new(
            (0..n as u64)
                .map(|i| Assay::new(i, format!("s{}", i)))
                .collect(),
        )
        .unwrap()
        .into_shared()
    }

    fn vector(
        general: GeneralType,
        standard: StandardType,
        representation: Representation,
        data: Vec<u8>,
        n: usize,
    ) -> RawVector {
        let qt = Arc::new(QuantitationType::new(
            "test qt",
            general,
            standard,
            representation,
        ));
        RawVector::new("g1", dimension(n), qt, data).unwrap()
    }

    #[test]
    fn test_nan_is_missing_for_doubles() {
        let values: Vec<f64> = (0..100)
            .map(|i| if i % 10 == 0 { f64::NAN } else { i as f64 })
            .collect();
        let v = vector(
            GeneralType::Quantitative,
            StandardType::Amount,
            Representation::Double,
            codec::encode_doubles(&values),
            100,
        );
        assert_eq!(count(&v).unwrap(), 90);
        assert_eq!(count_missing(&v).unwrap(), 10);
    }

    #[test]
    fn test_false_is_missing_for_present_absent_calls() {
        let values: Vec<bool> = (0..100).map(|i| i % 10 != 0).collect();
        let v = vector(
            GeneralType::Categorical,
            StandardType::PresentAbsent,
            Representation::Boolean,
            codec::encode_booleans(&values),
            100,
        );
        assert_eq!(count(&v).unwrap(), 90);
        assert_eq!(count_missing(&v).unwrap(), 10);
    }

    #[test]
    fn test_false_is_present_for_other_boolean_flags() {
        // Identical bit pattern as the present/absent case, but a failed-call
        // flag carries no missing semantics.
        let values: Vec<bool> = (0..100).map(|i| i % 10 != 0).collect();
        let v = vector(
            GeneralType::Categorical,
            StandardType::Failed,
            Representation::Boolean,
            codec::encode_booleans(&values),
            100,
        );
        assert_eq!(count(&v).unwrap(), 100);
        assert_eq!(count_missing(&v).unwrap(), 0);
    }

    #[test]
    fn test_nul_is_missing_for_chars() {
        let values: Vec<u16> = (0..100)
            .map(|i| if i % 10 == 0 { 0 } else { 'P' as u16 })
            .collect();
        let v = vector(
            GeneralType::Categorical,
            StandardType::Other,
            Representation::Char,
            codec::encode_chars(&values),
            100,
        );
        assert_eq!(count(&v).unwrap(), 90);
        assert_eq!(count_missing(&v).unwrap(), 10);
    }

    #[test]
    fn test_empty_string_is_missing() {
        let values: Vec<&str> = (0..100)
            .map(|i| if i % 10 == 0 { "" } else { "call" })
            .collect();
        let v = vector(
            GeneralType::Categorical,
            StandardType::Other,
            Representation::String,
            codec::encode_strings(&values).unwrap(),
            100,
        );
        assert_eq!(count(&v).unwrap(), 90);
        assert_eq!(count_missing(&v).unwrap(), 10);
    }

    #[test]
    fn test_integers_have_no_missing_sentinel() {
        let values: Vec<i32> = (0..50).collect();
        let v = vector(
            GeneralType::Quantitative,
            StandardType::Count,
            Representation::Int,
            codec::encode_ints(&values),
            50,
        );
        assert_eq!(count(&v).unwrap(), 50);
        assert_eq!(count_missing(&v).unwrap(), 0);
    }
}
