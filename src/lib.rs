//! bulkexpr - In-memory columnar layer for bulk expression vectors
//!
//! This library provides the hot-path data layer of an expression-data
//! curation system:
//! - Columnar byte-buffer encoding of one probe/gene across many samples
//! - Slicing: projecting or reordering the sample axis of many vectors at
//!   once, with per-batch memoization
//! - Masking: marking matrix cells hidden by row, column or coordinate,
//!   with O(1) inversion
//! - Presence/missingness counting driven by value semantics
//!
//! Everything is synchronous, allocation-conscious and free of I/O; loading,
//! persistence and statistical analyses live in external collaborators.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mask;
pub mod representation;
pub mod slice;
pub mod types;
pub mod vector;

// Re-export main types
pub use error::{Error, Result};
pub use mask::Mask;
pub use representation::Representation;
pub use types::{Assay, Dimension, GeneralType, QuantitationType, StandardType};
pub use vector::{BulkVector, ProcessedVector, RawVector};

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_sanity() {
        assert_eq!(2 + 2, 4);
    }
}
