//! Bulk expression-data vectors
//!
//! A bulk vector pairs one design element (probe or gene) with a flat byte
//! buffer holding one encoded value per sample of its [`Dimension`]. Many
//! vectors share one dimension by reference; none of them own it.
//!
//! The [`BulkVector`] trait is the seam slicing works through. Instead of a
//! reflective "copy every property except the dimension and payload" utility,
//! each variant implements [`with_slice`](BulkVector::with_slice), which
//! rebuilds the vector around a new dimension and payload while carrying
//! every other property over unchanged. New vector variants must implement
//! this method to be sliceable.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use bulkexpr::types::{Assay, Dimension, GeneralType, QuantitationType, StandardType};
//! use bulkexpr::representation::{codec, Representation};
//! use bulkexpr::vector::{BulkVector, RawVector};
//!
//! let dimension = Dimension::new(vec![Assay::new(1, "a"), Assay::new(2, "b")])
//!     .unwrap()
//!     .into_shared();
//! let qt = Arc::new(QuantitationType::new(
//!     "signal",
//!     GeneralType::Quantitative,
//!     StandardType::Amount,
//!     Representation::Double,
//! ));
//! let vector = RawVector::new("gene-1", dimension, qt, codec::encode_doubles(&[1.0, 2.0]))
//!     .unwrap();
//! assert_eq!(vector.data().len(), 16);
//! ```

use std::sync::Arc;

use crate::error::{Result, SliceError};
use crate::types::{Dimension, QuantitationType};

/// One design element's row of per-sample values
///
/// Implementors expose their dimension, semantics and raw payload for the
/// read path, and rebuild themselves around a sliced dimension and payload
/// via [`with_slice`](BulkVector::with_slice).
pub trait BulkVector: Sized {
    /// Name of the design element (probe/gene) this row belongs to
    fn design_element(&self) -> &str;

    /// The sample axis this vector's payload is aligned to
    fn dimension(&self) -> &Arc<Dimension>;

    /// Semantics and encoding of the payload values
    fn quantitation_type(&self) -> &Arc<QuantitationType>;

    /// The raw payload, one encoded value per assay of the dimension
    fn data(&self) -> &[u8];

    /// Rebuild this vector around a new dimension and payload
    ///
    /// Every property other than the dimension and payload is carried over
    /// unchanged. The caller guarantees `data` is aligned to `dimension`.
    fn with_slice(&self, dimension: Arc<Dimension>, data: Vec<u8>) -> Self;
}

/// Checks the payload-length invariant shared by all vector variants
///
/// Only enforceable when the representation has a fixed width; string
/// payloads are validated by the codec when decoded.
fn check_payload(
    design_element: &str,
    dimension: &Dimension,
    quantitation_type: &QuantitationType,
    data: &[u8],
) -> Result<()> {
    if let Some(width) = quantitation_type.representation().byte_width() {
        let expected = dimension.len() * width;
        if data.len() != expected {
            return Err(SliceError::PayloadSizeMismatch {
                element: design_element.to_string(),
                expected,
                actual: data.len(),
            }
            .into());
        }
    }
    Ok(())
}

/// A vector as loaded from the source platform, unprocessed
#[derive(Debug, Clone)]
pub struct RawVector {
    design_element: String,
    dimension: Arc<Dimension>,
    quantitation_type: Arc<QuantitationType>,
    data: Vec<u8>,
}

impl RawVector {
    /// Create a raw vector, validating the payload-length invariant
    pub fn new(
        design_element: impl Into<String>,
        dimension: Arc<Dimension>,
        quantitation_type: Arc<QuantitationType>,
        data: Vec<u8>,
    ) -> Result<Self> {
        let design_element = design_element.into();
        check_payload(&design_element, &dimension, &quantitation_type, &data)?;
        Ok(Self {
            design_element,
            dimension,
            quantitation_type,
            data,
        })
    }
}

impl BulkVector for RawVector {
    fn design_element(&self) -> &str {
        &self.design_element
    }

    fn dimension(&self) -> &Arc<Dimension> {
        &self.dimension
    }

    fn quantitation_type(&self) -> &Arc<QuantitationType> {
        &self.quantitation_type
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn with_slice(&self, dimension: Arc<Dimension>, data: Vec<u8>) -> Self {
        Self {
            design_element: self.design_element.clone(),
            dimension,
            quantitation_type: Arc::clone(&self.quantitation_type),
            data,
        }
    }
}

/// A vector that went through the processing pipeline
///
/// Carries the per-element expression ranks computed during processing. Ranks
/// describe the design element across the whole experiment, so slicing the
/// sample axis leaves them unchanged.
#[derive(Debug, Clone)]
pub struct ProcessedVector {
    design_element: String,
    dimension: Arc<Dimension>,
    quantitation_type: Arc<QuantitationType>,
    data: Vec<u8>,
    rank_by_mean: Option<f64>,
    rank_by_max: Option<f64>,
}

impl ProcessedVector {
    /// Create a processed vector, validating the payload-length invariant
    pub fn new(
        design_element: impl Into<String>,
        dimension: Arc<Dimension>,
        quantitation_type: Arc<QuantitationType>,
        data: Vec<u8>,
        rank_by_mean: Option<f64>,
        rank_by_max: Option<f64>,
    ) -> Result<Self> {
        let design_element = design_element.into();
        check_payload(&design_element, &dimension, &quantitation_type, &data)?;
        Ok(Self {
            design_element,
            dimension,
            quantitation_type,
            data,
            rank_by_mean,
            rank_by_max,
        })
    }

    /// Rank of this element's mean expression across the experiment
    pub fn rank_by_mean(&self) -> Option<f64> {
        self.rank_by_mean
    }

    /// Rank of this element's maximum expression across the experiment
    pub fn rank_by_max(&self) -> Option<f64> {
        self.rank_by_max
    }
}

impl BulkVector for ProcessedVector {
    fn design_element(&self) -> &str {
        &self.design_element
    }

    fn dimension(&self) -> &Arc<Dimension> {
        &self.dimension
    }

    fn quantitation_type(&self) -> &Arc<QuantitationType> {
        &self.quantitation_type
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn with_slice(&self, dimension: Arc<Dimension>, data: Vec<u8>) -> Self {
        Self {
            design_element: self.design_element.clone(),
            dimension,
            quantitation_type: Arc::clone(&self.quantitation_type),
            data,
            rank_by_mean: self.rank_by_mean,
            rank_by_max: self.rank_by_max,
        }
    }
}
