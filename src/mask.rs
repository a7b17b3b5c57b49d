//! Coordinate masks over a rows x cols grid
//!
//! A [`Mask`] marks cells of a notional matrix as hidden without touching the
//! matrix's values; it addresses cells purely by coordinate. Four rules can
//! be configured, in any combination:
//!
//! - a row rule (whole rows hidden)
//! - a column rule (whole columns hidden)
//! - a dense element rule (one flag per cell)
//! - a sparse element rule (a sorted list of hidden cells, membership by
//!   binary search)
//!
//! [`is_masked`](Mask::is_masked) is the OR of whichever rules are
//! configured: any rule marking a cell hidden wins. Inversion is per rule —
//! each configured rule's answer is XORed with the inversion flag — and
//! [`inverted`](Mask::inverted) is O(1), sharing the backing arrays with the
//! original.
//!
//! All validation happens at construction; queries never fail. Masks are
//! immutable and freely shareable across threads.
//!
//! # Example
//!
//! ```rust
//! use bulkexpr::mask::Mask;
//!
//! let mask = Mask::rows(3, 3, vec![true, false, false]).unwrap();
//! assert!(mask.is_masked(0, 2));
//! assert!(!mask.is_masked(1, 2));
//! assert!(mask.inverted().is_masked(1, 2));
//! ```

use std::sync::Arc;

use crate::error::{MaskError, Result};

/// An immutable hidden-cell predicate over a rows x cols grid
#[derive(Debug, Clone)]
pub struct Mask {
    rows: usize,
    cols: usize,
    row_flags: Option<Arc<[bool]>>,
    col_flags: Option<Arc<[bool]>>,
    dense: Option<Arc<[bool]>>,
    sparse: Option<Arc<[usize]>>,
    inverted: bool,
}

impl Mask {
    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_flags: None,
            col_flags: None,
            dense: None,
            sparse: None,
            inverted: false,
        }
    }

    /// Mask whole rows; `flags[r]` hides row `r`
    ///
    /// Fails with [`MaskError::ShapeMismatch`] unless `flags.len() == rows`.
    pub fn rows(rows: usize, cols: usize, flags: Vec<bool>) -> Result<Self> {
        Self::empty(rows, cols).and_rows(flags)
    }

    /// Mask whole columns; `flags[c]` hides column `c`
    pub fn columns(rows: usize, cols: usize, flags: Vec<bool>) -> Result<Self> {
        Self::empty(rows, cols).and_columns(flags)
    }

    /// Mask individual cells from a dense row-major grid
    ///
    /// The grid must have exactly `rows` rows of exactly `cols` flags each.
    pub fn elements(rows: usize, cols: usize, grid: Vec<Vec<bool>>) -> Result<Self> {
        Self::empty(rows, cols).and_elements(grid)
    }

    /// Mask individual cells given by parallel coordinate arrays
    ///
    /// Each `(i[k], j[k])` pair names one hidden cell. Coordinates are
    /// bounds-checked against the grid and the linearized indices sorted for
    /// binary-search membership tests.
    pub fn sparse_elements(rows: usize, cols: usize, i: &[usize], j: &[usize]) -> Result<Self> {
        Self::empty(rows, cols).and_sparse_elements(i, j)
    }

    /// Add a row rule to this mask
    pub fn and_rows(mut self, flags: Vec<bool>) -> Result<Self> {
        if flags.len() != self.rows {
            return Err(MaskError::ShapeMismatch {
                what: "row flags".to_string(),
                expected: self.rows,
                actual: flags.len(),
            }
            .into());
        }
        self.row_flags = Some(flags.into());
        Ok(self)
    }

    /// Add a column rule to this mask
    pub fn and_columns(mut self, flags: Vec<bool>) -> Result<Self> {
        if flags.len() != self.cols {
            return Err(MaskError::ShapeMismatch {
                what: "column flags".to_string(),
                expected: self.cols,
                actual: flags.len(),
            }
            .into());
        }
        self.col_flags = Some(flags.into());
        Ok(self)
    }

    /// Add a dense element rule to this mask
    pub fn and_elements(mut self, grid: Vec<Vec<bool>>) -> Result<Self> {
        if grid.len() != self.rows {
            return Err(MaskError::ShapeMismatch {
                what: "element grid".to_string(),
                expected: self.rows,
                actual: grid.len(),
            }
            .into());
        }
        let mut dense = Vec::with_capacity(self.rows * self.cols);
        for (r, row) in grid.iter().enumerate() {
            if row.len() != self.cols {
                return Err(MaskError::ShapeMismatch {
                    what: format!("element grid row {}", r),
                    expected: self.cols,
                    actual: row.len(),
                }
                .into());
            }
            dense.extend_from_slice(row);
        }
        self.dense = Some(dense.into());
        Ok(self)
    }

    /// Add a sparse element rule to this mask
    pub fn and_sparse_elements(mut self, i: &[usize], j: &[usize]) -> Result<Self> {
        if i.len() != j.len() {
            return Err(MaskError::CoordinateArityMismatch {
                i_len: i.len(),
                j_len: j.len(),
            }
            .into());
        }
        let mut linear = Vec::with_capacity(i.len());
        for (&row, &col) in i.iter().zip(j) {
            if row >= self.rows || col >= self.cols {
                return Err(MaskError::CoordinateOutOfRange {
                    row,
                    col,
                    rows: self.rows,
                    cols: self.cols,
                }
                .into());
            }
            linear.push(row * self.cols + col);
        }
        linear.sort_unstable();
        self.sparse = Some(linear.into());
        Ok(self)
    }

    /// Number of rows in the grid this mask addresses
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid this mask addresses
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Whether a row rule is configured
    pub fn has_row_mask(&self) -> bool {
        self.row_flags.is_some()
    }

    /// Whether a column rule is configured
    pub fn has_column_mask(&self) -> bool {
        self.col_flags.is_some()
    }

    /// Whether a dense or sparse element rule is configured
    pub fn has_element_mask(&self) -> bool {
        self.dense.is_some() || self.sparse.is_some()
    }

    /// Whether the row rule hides this row; false if no row rule
    pub fn is_row_masked(&self, row: usize) -> bool {
        match &self.row_flags {
            Some(flags) => flags.get(row).copied().unwrap_or(false) != self.inverted,
            None => false,
        }
    }

    /// Whether the column rule hides this column; false if no column rule
    pub fn is_column_masked(&self, col: usize) -> bool {
        match &self.col_flags {
            Some(flags) => flags.get(col).copied().unwrap_or(false) != self.inverted,
            None => false,
        }
    }

    /// Whether any configured rule hides this cell
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        if self.is_row_masked(row) || self.is_column_masked(col) {
            return true;
        }
        if let Some(dense) = &self.dense {
            let hit = row < self.rows
                && col < self.cols
                && dense[row * self.cols + col];
            if hit != self.inverted {
                return true;
            }
        }
        if let Some(sparse) = &self.sparse {
            let hit = row < self.rows
                && col < self.cols
                && sparse.binary_search(&(row * self.cols + col)).is_ok();
            if hit != self.inverted {
                return true;
            }
        }
        false
    }

    /// A view of this mask with every rule's answer flipped
    ///
    /// O(1): the new mask shares all backing arrays with the original, which
    /// is left untouched.
    pub fn inverted(&self) -> Self {
        let mut flipped = self.clone();
        flipped.inverted = !self.inverted;
        flipped
    }
}
