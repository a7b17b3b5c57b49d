//! Slicing of dimensions and bulk vectors
//!
//! Slicing projects the sample axis of a vector onto a target assay list —
//! a subset, a permutation, or both. Inputs are never mutated: slicing
//! always produces a new dimension and new vectors.
//!
//! Vectors are byte buffers with a fixed stride per sample, so slicing one
//! vector is a gather of `byte_width`-sized chunks. Batch slicing memoizes
//! the sliced dimension and sample mapping per distinct source dimension,
//! keyed on reference identity (`Arc` pointer), so a thousand vectors sharing
//! one dimension pay for one mapping computation. The memo table lives on the
//! call stack of one [`slice_vectors`] invocation and is never shared, so
//! concurrent batch slices need no locking.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use bulkexpr::slice;
//! use bulkexpr::types::{Assay, Dimension, GeneralType, QuantitationType, StandardType};
//! use bulkexpr::representation::{codec, Representation};
//! use bulkexpr::vector::{BulkVector, RawVector};
//!
//! let a = Assay::new(1, "A");
//! let b = Assay::new(2, "B");
//! let c = Assay::new(3, "C");
//! let dimension = Dimension::new(vec![a.clone(), b, c.clone()]).unwrap().into_shared();
//! let qt = Arc::new(QuantitationType::new(
//!     "signal", GeneralType::Quantitative, StandardType::Amount, Representation::Double,
//! ));
//! let vector = RawVector::new(
//!     "gene-1", dimension, qt, codec::encode_doubles(&[10.0, 20.0, 30.0]),
//! ).unwrap();
//!
//! let sliced = slice::slice_vectors(&[vector], &[c, a]).unwrap();
//! let values = codec::decode_doubles(sliced[0].data()).unwrap();
//! assert_eq!(values, vec![30.0, 10.0]);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::error::{CodecError, Result, SliceError};
use crate::representation::codec;
use crate::representation::Representation;
use crate::types::{Assay, Dimension};
use crate::vector::BulkVector;

/// Position of each target assay within the source dimension
///
/// `result[i]` is the index of `target[i]` in `source`. Fails with
/// [`SliceError::AssayNotInDimension`], naming the assay, if any target assay
/// is absent from the source. Duplicates in the target are allowed here; they
/// are rejected by [`slice_dimension`] where the result must be a valid
/// dimension.
pub fn compute_sample_mapping(source: &Dimension, target: &[Assay]) -> Result<Vec<usize>> {
    let positions: HashMap<u64, usize> = source
        .assays()
        .iter()
        .enumerate()
        .map(|(i, a)| (a.id(), i))
        .collect();
    target
        .iter()
        .map(|assay| {
            positions
                .get(&assay.id())
                .copied()
                .ok_or_else(|| SliceError::AssayNotInDimension(assay.name().to_string()).into())
        })
        .collect()
}

/// Project a dimension onto a target assay list
///
/// The target must be a duplicate-free subset of the source's assays; order
/// is taken from the target. An empty target yields a valid zero-sample
/// dimension. When the target equals the source order exactly, the source
/// handle is returned as-is.
pub fn slice_dimension(source: &Arc<Dimension>, target: &[Assay]) -> Result<Arc<Dimension>> {
    check_no_duplicates(target)?;
    for assay in target {
        if !source.contains(assay) {
            return Err(SliceError::AssayNotInDimension(assay.name().to_string()).into());
        }
    }
    if target.len() == source.len()
        && target
            .iter()
            .zip(source.assays())
            .all(|(t, s)| t.id() == s.id())
    {
        return Ok(Arc::clone(source));
    }
    Ok(Dimension::new(target.to_vec())?.into_shared())
}

/// Gather a vector payload according to a sample mapping
///
/// Output position `i` receives the `byte_width` bytes at source offset
/// `mapping[i] * byte_width`. Fails for variable-width representations and
/// for mapping entries past the end of the source payload.
pub fn slice_data(data: &[u8], mapping: &[usize], representation: Representation) -> Result<Vec<u8>> {
    let width = codec::fixed_width(representation)?;
    let source_samples = codec::sample_count(data, representation)?;
    let mut out = Vec::with_capacity(mapping.len() * width);
    for &source_index in mapping {
        if source_index >= source_samples {
            return Err(SliceError::IndexOutOfRange {
                index: source_index,
                size: source_samples,
            }
            .into());
        }
        let offset = source_index * width;
        out.extend_from_slice(&data[offset..offset + width]);
    }
    Ok(out)
}

/// Slice a batch of vectors onto a target assay list
///
/// Works for any [`BulkVector`] variant: each output vector is rebuilt via
/// [`BulkVector::with_slice`], carrying every property except the dimension
/// and payload over unchanged. The sliced dimension and sample mapping are
/// computed once per distinct source dimension within this call; vectors that
/// shared a dimension going in share the sliced dimension coming out.
///
/// The whole batch fails on the first offending vector; no partial result is
/// returned.
pub fn slice_vectors<V: BulkVector>(vectors: &[V], target: &[Assay]) -> Result<Vec<V>> {
    // Keyed on Arc pointer identity: equal-but-distinct dimensions must not
    // be coalesced.
    let mut memo: HashMap<usize, (Arc<Dimension>, Vec<usize>)> = HashMap::new();
    let mut out = Vec::with_capacity(vectors.len());
    for vector in vectors {
        let source = vector.dimension();
        let key = Arc::as_ptr(source) as usize;
        if !memo.contains_key(&key) {
            let sliced_dimension = slice_dimension(source, target)?;
            let mapping = compute_sample_mapping(source, target)?;
            memo.insert(key, (sliced_dimension, mapping));
        }
        let (sliced_dimension, mapping) = &memo[&key];
        let data = slice_data(
            vector.data(),
            mapping,
            vector.quantitation_type().representation(),
        )?;
        out.push(vector.with_slice(Arc::clone(sliced_dimension), data));
    }
    debug!(
        vectors = vectors.len(),
        source_dimensions = memo.len(),
        target_samples = target.len(),
        "sliced vector batch"
    );
    Ok(out)
}

/// Slice one vector straight to doubles, skipping vector construction
///
/// For read-only consumers (e.g. rendering) that need values, not vector
/// objects. Same validation as [`slice_vectors`], plus the vector must
/// actually carry doubles.
pub fn slice_doubles<V: BulkVector>(vector: &V, target: &[Assay]) -> Result<Vec<f64>> {
    check_representation(vector, Representation::Double)?;
    check_no_duplicates(target)?;
    let mapping = compute_sample_mapping(vector.dimension(), target)?;
    let values = codec::decode_doubles(vector.data())?;
    gather(&values, &mapping)
}

/// Slice one vector straight to booleans, skipping vector construction
///
/// The vector must carry the boolean representation; any other encoding is
/// rejected rather than reinterpreted byte-for-byte.
pub fn slice_booleans<V: BulkVector>(vector: &V, target: &[Assay]) -> Result<Vec<bool>> {
    check_representation(vector, Representation::Boolean)?;
    check_no_duplicates(target)?;
    let mapping = compute_sample_mapping(vector.dimension(), target)?;
    let values = codec::decode_booleans(vector.data())?;
    gather(&values, &mapping)
}

fn check_representation<V: BulkVector>(vector: &V, expected: Representation) -> Result<()> {
    let actual = vector.quantitation_type().representation();
    if actual != expected {
        return Err(CodecError::RepresentationMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
        .into());
    }
    Ok(())
}

fn gather<T: Copy>(values: &[T], mapping: &[usize]) -> Result<Vec<T>> {
    mapping
        .iter()
        .map(|&i| {
            values.get(i).copied().ok_or_else(|| {
                SliceError::IndexOutOfRange {
                    index: i,
                    size: values.len(),
                }
                .into()
            })
        })
        .collect()
}

fn check_no_duplicates(target: &[Assay]) -> Result<()> {
    let mut seen = HashSet::with_capacity(target.len());
    for assay in target {
        if !seen.insert(assay.id()) {
            return Err(SliceError::DuplicateAssay(assay.name().to_string()).into());
        }
    }
    Ok(())
}
