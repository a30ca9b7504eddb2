//! Reconstructed state-space matrix with explicit missing cells.
//!
//! ## Purpose
//!
//! This module defines `EmbeddingMatrix`, the state space produced by
//! time-delay embedding and consumed by S-Map prediction. One row per time
//! index, one column per retained lag.
//!
//! ## Design notes
//!
//! * **Flat storage**: Cells live in a single row-major buffer with explicit
//!   `nrows`/`ncols`; rows are borrowed as slices, never allocated.
//! * **Explicit missing**: A cell is `Option<T>`; `None` marks a time index
//!   that falls outside the series or a missing observation.
//! * **Lag bookkeeping**: Each column remembers the lag it was built from, so
//!   pruning keeps the schedule readable.
//!
//! ## Invariants
//!
//! * `cells.len() == nrows * ncols` and `lags.len() == ncols`.
//! * Matrices built by embedding never contain an all-missing column.
//!
//! ## Non-goals
//!
//! * This module does not perform arithmetic on the matrix (see `math`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use core::ops::Index;
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::SmapError;

/// Row-major state-space matrix whose cells may be missing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmbeddingMatrix<T> {
    cells: Vec<Option<T>>,
    nrows: usize,
    ncols: usize,
    lags: Vec<usize>,
}

impl<T: Float> EmbeddingMatrix<T> {
    /// Create an `nrows x lags.len()` matrix with every cell missing.
    pub fn missing(nrows: usize, lags: Vec<usize>) -> Self {
        let ncols = lags.len();
        Self {
            cells: vec![None; nrows * ncols],
            nrows,
            ncols,
            lags,
        }
    }

    /// Build a matrix from caller-provided rows.
    ///
    /// Columns are labelled with lags `0..ncols`. Rows must all have the same
    /// length.
    pub fn from_rows(rows: &[Vec<Option<T>>]) -> Result<Self, SmapError> {
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * ncols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(SmapError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
            cells.extend(row.iter().map(|c| c.filter(|v| v.is_finite())));
        }

        Ok(Self {
            cells,
            nrows: rows.len(),
            ncols,
            lags: (0..ncols).collect(),
        })
    }

    /// Number of rows (time indices).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of retained columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Lag of each retained column, in schedule order.
    #[inline]
    pub fn lags(&self) -> &[usize] {
        &self.lags
    }

    /// Returns true if the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Cell at `(row, col)`; `None` if missing.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows` or `col >= ncols`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        assert!(
            col < self.ncols,
            "column {} out of bounds ({})",
            col,
            self.ncols
        );
        self.row(row)[col]
    }

    /// Set the cell at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Option<T>) {
        assert!(
            row < self.nrows && col < self.ncols,
            "cell ({}, {}) out of bounds ({} x {})",
            row,
            col,
            self.nrows,
            self.ncols
        );
        self.cells[row * self.ncols + col] = value;
    }

    /// Borrow one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[Option<T>] {
        let start = row * self.ncols;
        &self.cells[start..start + self.ncols]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        (0..self.nrows).map(move |r| self.row(r))
    }

    /// Returns true if the row has no missing cell.
    #[inline]
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.row(row).iter().all(Option::is_some)
    }

    /// Returns true if at least one row has a value in this column.
    pub fn column_has_data(&self, col: usize) -> bool {
        (0..self.nrows).any(|r| self.cells[r * self.ncols + col].is_some())
    }

    /// Keep only the columns flagged in `keep`, preserving their order.
    pub fn retain_columns(&self, keep: &[bool]) -> Self {
        debug_assert_eq!(keep.len(), self.ncols);

        let lags: Vec<usize> = self
            .lags
            .iter()
            .zip(keep)
            .filter_map(|(&lag, &k)| k.then_some(lag))
            .collect();
        let ncols = lags.len();

        let mut cells = Vec::with_capacity(self.nrows * ncols);
        for row in self.rows() {
            cells.extend(row.iter().zip(keep).filter(|(_, k)| **k).map(|(c, _)| *c));
        }

        Self {
            cells,
            nrows: self.nrows,
            ncols,
            lags,
        }
    }
}

impl<T: Float> Index<(usize, usize)> for EmbeddingMatrix<T> {
    type Output = Option<T>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            col < self.ncols,
            "column {} out of bounds ({})",
            col,
            self.ncols
        );
        &self.cells[row * self.ncols + col]
    }
}

impl<T: Float + Display> Display for EmbeddingMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Embedding: {} rows x {} columns", self.nrows, self.ncols)?;
        write!(f, "{:>6}", "t")?;
        for lag in &self.lags {
            write!(f, "     lag {:>2}", lag)?;
        }
        writeln!(f)?;

        for (t, row) in self.rows().enumerate() {
            write!(f, "{:>6}", t)?;
            for cell in row {
                match cell {
                    Some(v) => write!(f, " {:>10.4}", v)?,
                    None => write!(f, " {:>10}", "NA")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
