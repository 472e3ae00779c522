//! Dense binary relation matrix.
//!
//! Rows are elements of the ground set, columns are blocks of the relation.
//! Entries are conceptually boolean; validation against {0,1} is opt-in via
//! [`Relation::check_binary`] so callers that already validated upstream can
//! skip the scan.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// Nonzero row indices of a single column.
pub type ColumnSupport = SmallVec<[usize; 8]>;

/// A binary relation matrix in row-major layout.
///
/// Immutable once constructed: every operation borrows `&self` and returns
/// fresh data. A relation may have zero columns (the degenerate relation)
/// but its row count is always defined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    rows: usize,
    cols: usize,
    /// Row-major entries, `rows * cols` of them.
    data: Vec<u8>,
}

impl Relation {
    /// Build a relation from explicit rows. Rejects ragged input.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: row_count, cols, data })
    }

    /// The degenerate relation: a fixed ground set with no blocks.
    pub fn empty(rows: usize) -> Self {
        Self { rows, cols: 0, data: Vec::new() }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the relation has no columns.
    pub fn is_empty(&self) -> bool {
        self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Row indices where column `col` is nonzero.
    pub fn column_support(&self, col: usize) -> ColumnSupport {
        (0..self.rows).filter(|&r| self.get(r, col) != 0).collect()
    }

    /// Exact entry-wise equality between column `c1` of `self` and column
    /// `c2` of `other`. Both relations must have the same row count.
    pub fn columns_equal(&self, c1: usize, other: &Relation, c2: usize) -> bool {
        debug_assert_eq!(self.rows, other.rows);
        (0..self.rows).all(|r| self.get(r, c1) == other.get(r, c2))
    }

    /// Project onto the given columns, preserving the order of `cols`.
    pub fn select_columns(&self, cols: &[usize]) -> Relation {
        let mut data = Vec::with_capacity(self.rows * cols.len());
        for r in 0..self.rows {
            for &c in cols {
                data.push(self.get(r, c));
            }
        }
        Relation { rows: self.rows, cols: cols.len(), data }
    }

    /// Fail-fast validation: every entry must be 0 or 1.
    pub fn check_binary(&self) -> Result<()> {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let value = self.get(r, c);
                if value > 1 {
                    return Err(Error::NonBinaryEntry { row: r, col: c, value });
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(r, c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_rejected() {
        let err = Relation::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRows { row: 1, expected: 2, got: 1 }
        ));
    }

    #[test]
    fn support_and_selection() {
        let r = Relation::from_rows(vec![
            vec![1, 0, 1],
            vec![0, 0, 1],
        ])
        .unwrap();
        assert_eq!(r.column_support(0).as_slice(), &[0]);
        assert_eq!(r.column_support(1).as_slice(), &[] as &[usize]);
        assert_eq!(r.column_support(2).as_slice(), &[0, 1]);

        let picked = r.select_columns(&[2, 0]);
        assert_eq!(picked.cols(), 2);
        assert_eq!(picked.get(0, 0), 1);
        assert_eq!(picked.get(1, 0), 1);
        assert_eq!(picked.get(1, 1), 0);
    }

    #[test]
    fn check_binary_flags_offending_entry() {
        let r = Relation::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        let err = r.check_binary().unwrap_err();
        assert!(matches!(
            err,
            Error::NonBinaryEntry { row: 1, col: 0, value: 2 }
        ));
    }

    #[test]
    fn empty_relation_has_rows_but_no_cols() {
        let r = Relation::empty(4);
        assert_eq!(r.rows(), 4);
        assert!(r.is_empty());
        assert!(r.check_binary().is_ok());
    }
}
