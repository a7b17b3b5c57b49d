//! Error types for the library

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Codec error
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Slicing error
    #[error("Slicing error: {0}")]
    Slice(#[from] SliceError),

    /// Mask error
    #[error("Mask error: {0}")]
    Mask(#[from] MaskError),
}

/// Errors raised while decoding or encoding sample buffers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Fixed-stride access requested on a variable-width representation
    #[error("Representation {0} has no fixed byte width")]
    VariableWidth(String),

    /// Buffer length is not a multiple of the representation's byte width
    #[error("Buffer of {length} bytes is not a multiple of the {width}-byte sample width")]
    Truncated {
        /// Length of the offending buffer
        length: usize,
        /// Byte width of one sample
        width: usize,
    },

    /// A typed decode was requested for a vector of another representation
    #[error("Expected a {expected} vector, found {actual}")]
    RepresentationMismatch {
        /// Representation the decode target requires
        expected: String,
        /// Representation the vector actually carries
        actual: String,
    },

    /// Buffer bytes do not form valid values for the representation
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Errors raised while slicing dimensions or vectors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// A target assay is not part of the source dimension
    #[error("Assay '{0}' is not part of the source dimension")]
    AssayNotInDimension(String),

    /// The same assay appears more than once in a dimension or target list
    #[error("Assay '{0}' appears more than once")]
    DuplicateAssay(String),

    /// A sample mapping entry points past the end of the source
    #[error("Sample index {index} is out of range for a dimension of {size} assays")]
    IndexOutOfRange {
        /// The offending source index
        index: usize,
        /// Number of assays in the source
        size: usize,
    },

    /// Vector payload length disagrees with its dimension and representation
    #[error("Vector '{element}' holds {actual} bytes, expected {expected}")]
    PayloadSizeMismatch {
        /// Design element of the offending vector
        element: String,
        /// Expected payload length in bytes
        expected: usize,
        /// Actual payload length in bytes
        actual: usize,
    },
}

/// Errors raised while constructing masks
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MaskError {
    /// A flag array or grid does not match the declared mask shape
    #[error("Mask {what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        /// Which input is mis-shaped (row flags, column flags, grid row, ...)
        what: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// A sparse coordinate falls outside the mask grid
    #[error("Coordinate ({row}, {col}) is outside a {rows}x{cols} mask")]
    CoordinateOutOfRange {
        /// Offending row index
        row: usize,
        /// Offending column index
        col: usize,
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the grid
        cols: usize,
    },

    /// Sparse row and column index arrays differ in length
    #[error("Sparse coordinate arrays differ in length: {i_len} rows vs {j_len} columns")]
    CoordinateArityMismatch {
        /// Length of the row-index array
        i_len: usize,
        /// Length of the column-index array
        j_len: usize,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
