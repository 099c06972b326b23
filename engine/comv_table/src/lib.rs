//! Dense row-major grid for comv.
//!
//! One container serves every tabular stage of a run: the raw string cells
//! ingested from a data file, the public (clear) half of a record, and the
//! protected (sealed) half.
//!
//! # Layout
//!
//! ```text
//! cells: [r0c0, r0c1, ..., r0c{cols-1}, r1c0, ...]
//!         ^ index = row * cols + col
//! ```
//!
//! `cells.len() == rows * cols` holds after every operation. Growing the
//! column count re-lays out existing rows under the new stride; it never
//! resizes the backing buffer in place, which would shift every row after
//! the first into its neighbour's columns.
//!
//! Indexing is bounds-checked and returns [`TableError`] instead of
//! panicking: an out-of-range access means the caller's index arithmetic
//! disagrees with the table's shape.

use std::slice;

/// Bounds violation on a [`Table`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// `(row, col)` lies outside the current extent.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} table")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Flat index past the last cell.
    #[error("linear index {index} is outside a table of {len} cells")]
    LinearOutOfRange { index: usize, len: usize },
    /// A row handed to [`Table::from_rows`] disagrees with the first row's width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Dense, row-major grid of a single value type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    /// Create an empty `0x0` table.
    pub const fn new() -> Self {
        Table {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// Build a table from complete rows.
    ///
    /// Every row must have the width of the first one.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut table = Table::new();
        for (row, values) in rows.into_iter().enumerate() {
            let before = table.cells.len();
            table.cells.extend(values);
            let found = table.cells.len() - before;
            if row == 0 {
                table.cols = found;
            } else if found != table.cols {
                return Err(TableError::RaggedRow {
                    row,
                    found,
                    expected: table.cols,
                });
            }
            table.rows += 1;
        }
        Ok(table)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the table holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> Result<usize, TableError> {
        if row >= self.rows || col >= self.cols {
            return Err(TableError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Borrow the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, TableError> {
        let index = self.index_of(row, col)?;
        Ok(&self.cells[index])
    }

    /// Mutably borrow the cell at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, TableError> {
        let index = self.index_of(row, col)?;
        Ok(&mut self.cells[index])
    }

    /// Overwrite the cell at `(row, col)` without growing.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), TableError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Borrow a cell by its row-major position.
    ///
    /// Only meaningful once the caller has established the table's shape;
    /// `linear(r * cols + c)` and `get(r, c)` name the same cell.
    pub fn linear(&self, index: usize) -> Result<&T, TableError> {
        self.cells.get(index).ok_or(TableError::LinearOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Iterate rows in order, each as a slice of `cols` cells.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| {
            let start = row * self.cols;
            &self.cells[start..start + self.cols]
        })
    }

    /// Iterate every cell in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T: Default> Table<T> {
    /// Create a `rows x cols` table filled with `T::default()`.
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, T::default);
        Table { rows, cols, cells }
    }

    /// Write `value` at `(row, col)`, growing the table first if needed.
    ///
    /// Growth keeps every existing cell at its `(row, col)`; new cells hold
    /// `T::default()`.
    pub fn push(&mut self, row: usize, col: usize, value: T) {
        if row >= self.rows || col >= self.cols {
            self.grow(row + 1, col + 1);
        }
        let index = row * self.cols + col;
        self.cells[index] = value;
    }

    /// Grow to at least `rows x cols`. Never shrinks either axis.
    pub fn grow(&mut self, rows: usize, cols: usize) {
        let rows = rows.max(self.rows);
        let cols = cols.max(self.cols);

        if cols == self.cols {
            // Same stride: new rows append at the end.
            self.cells.resize_with(rows * cols, T::default);
            self.rows = rows;
            return;
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut old = std::mem::take(&mut self.cells).into_iter();
        for row in 0..rows {
            if row < self.rows {
                cells.extend(old.by_ref().take(self.cols));
            }
            cells.resize_with((row + 1) * cols, T::default);
        }

        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
