//! Core data types used throughout the library
//!
//! This module defines the fundamental data structures used across the system:
//!
//! # Key Types
//!
//! - **`Assay`**: One biological sample (one column of an expression matrix)
//! - **`Dimension`**: An ordered, duplicate-free list of assays shared by a
//!   set of vectors
//! - **`QuantitationType`**: Read-only descriptor of what a vector set's
//!   values mean and how they are encoded
//! - **`GeneralType`** / **`StandardType`**: The semantic vocabulary of
//!   quantitation types
//!
//! # Example
//!
//! ```rust
//! use bulkexpr::types::{Assay, Dimension, GeneralType, QuantitationType, StandardType};
//! use bulkexpr::representation::Representation;
//!
//! let dimension = Dimension::new(vec![
//!     Assay::new(1, "sample-1"),
//!     Assay::new(2, "sample-2"),
//! ]).unwrap();
//! assert_eq!(dimension.len(), 2);
//!
//! let qt = QuantitationType::new(
//!     "log2 signal",
//!     GeneralType::Quantitative,
//!     StandardType::Amount,
//!     Representation::Double,
//! );
//! assert_eq!(qt.representation(), Representation::Double);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SliceError};
use crate::representation::Representation;

/// One biological sample measured in an experiment
///
/// Assays carry identity semantics: two assays are the same assay if and only
/// if they have the same id, regardless of name. Membership tests against a
/// [`Dimension`] compare ids only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assay {
    id: u64,
    name: String,
}

impl Assay {
    /// Create an assay with the given identity and display name
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stable identity of this assay
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Human-readable name, used in error messages
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Assay {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Assay {}

impl Hash for Assay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Assay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An immutable ordered sequence of distinct assays
///
/// Defines the sample axis shared by a set of vectors. Dimensions are built
/// once and shared by reference (`Arc<Dimension>`) across many vectors; batch
/// slicing keys its per-call memoization on that reference identity, never on
/// structural equality, so two equal-but-distinct dimensions are never
/// coalesced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    assays: Vec<Assay>,
}

impl Dimension {
    /// Build a dimension from an ordered assay list
    ///
    /// Fails with [`SliceError::DuplicateAssay`] if any assay id appears more
    /// than once.
    pub fn new(assays: Vec<Assay>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(assays.len());
        for assay in &assays {
            if !seen.insert(assay.id()) {
                return Err(SliceError::DuplicateAssay(assay.name().to_string()).into());
            }
        }
        Ok(Self { assays })
    }

    /// Number of assays (samples) on this axis
    pub fn len(&self) -> usize {
        self.assays.len()
    }

    /// Whether this dimension has no assays
    ///
    /// Zero-sample dimensions are valid; they arise from slicing with an
    /// empty target list.
    pub fn is_empty(&self) -> bool {
        self.assays.is_empty()
    }

    /// The assays in order
    pub fn assays(&self) -> &[Assay] {
        &self.assays
    }

    /// Position of the given assay on this axis, if present
    pub fn position(&self, assay: &Assay) -> Option<usize> {
        self.assays.iter().position(|a| a == assay)
    }

    /// Whether the given assay is part of this dimension
    pub fn contains(&self, assay: &Assay) -> bool {
        self.position(assay).is_some()
    }

    /// Shared handle suitable for attaching to many vectors
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Broad semantic class of a vector set's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralType {
    /// Continuous measurements (signal intensities, counts, ranks, ...)
    Quantitative,
    /// Discrete labels (flags, calls, ...)
    Categorical,
    /// Semantics not established
    Unknown,
}

/// Standard sub-kind of a vector set's values
///
/// Only `PresentAbsent` changes how missingness is counted; the other
/// sub-kinds exist so upstream descriptors round-trip without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardType {
    /// A measured amount of signal
    Amount,
    /// A discrete count
    Count,
    /// A detection call: true = detected, false = not detected
    PresentAbsent,
    /// A failed-measurement flag; false does NOT mean missing
    Failed,
    /// A correlation coefficient
    Correlation,
    /// A confidence score attached to another quantity
    ConfidenceIndicator,
    /// A physical or array coordinate
    Coordinate,
    /// A raw measured signal
    MeasuredSignal,
    /// A standardized score
    ZScore,
    /// Anything else
    Other,
}

/// Read-only descriptor of a vector set's semantics
///
/// Supplied by the surrounding system; this library only reads it to choose
/// decode and missingness policy, and copies it verbatim onto sliced vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitationType {
    name: String,
    general_type: GeneralType,
    standard_type: StandardType,
    representation: Representation,
}

impl QuantitationType {
    /// Create a quantitation type descriptor
    pub fn new(
        name: impl Into<String>,
        general_type: GeneralType,
        standard_type: StandardType,
        representation: Representation,
    ) -> Self {
        Self {
            name: name.into(),
            general_type,
            standard_type,
            representation,
        }
    }

    /// Display name of this quantitation type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Broad semantic class
    pub fn general_type(&self) -> GeneralType {
        self.general_type
    }

    /// Standard sub-kind
    pub fn standard_type(&self) -> StandardType {
        self.standard_type
    }

    /// How one sample's value is encoded
    pub fn representation(&self) -> Representation {
        self.representation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assay_identity_ignores_name() {
        let a = Assay::new(7, "original name");
        let b = Assay::new(7, "renamed");
        assert_eq!(a, b);

        let c = Assay::new(8, "original name");
        assert_ne!(a, c);
    }

    #[test]
    fn test_dimension_rejects_duplicates() {
        let result = Dimension::new(vec![Assay::new(1, "s1"), Assay::new(1, "s1 again")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dimension_preserves_order() {
        let dim = Dimension::new(vec![
            Assay::new(3, "c"),
            Assay::new(1, "a"),
            Assay::new(2, "b"),
        ])
        .unwrap();

        assert_eq!(dim.position(&Assay::new(1, "a")), Some(1));
        assert_eq!(dim.position(&Assay::new(3, "c")), Some(0));
        assert_eq!(dim.position(&Assay::new(4, "d")), None);
    }

    #[test]
    fn test_empty_dimension_is_valid() {
        let dim = Dimension::new(vec![]).unwrap();
        assert!(dim.is_empty());
        assert_eq!(dim.len(), 0);
    }
}
