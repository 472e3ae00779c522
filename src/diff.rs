//! Greedy exact-column matching between two relations.

use crate::model::Relation;
use crate::{Error, Result};

/// One-for-one remove from `r1` any columns found exactly in `r2`, returning
/// the unmatched ("disagreeing") columns of `r1` in original order.
///
/// Matching is one-to-one: each `r2` column can absorb at most one `r1`
/// column, so duplicates in `r1` survive once the available `r2` copies run
/// out. Matching is greedy in index order on both sides and is not symmetric
/// in general. O(cols1 × cols2 × rows).
pub fn rel_diff(r1: &Relation, r2: &Relation, check_bin: bool) -> Result<Relation> {
    if check_bin {
        r1.check_binary()?;
        r2.check_binary()?;
    }
    if r1.rows() != r2.rows() {
        return Err(Error::RowCountMismatch {
            left: r1.rows(),
            right: r2.rows(),
        });
    }

    let mut consumed = vec![false; r2.cols()];
    let mut disagreeing = Vec::new();

    'source: for i in 0..r1.cols() {
        for j in 0..r2.cols() {
            if consumed[j] {
                continue;
            }
            if r1.columns_equal(i, r2, j) {
                consumed[j] = true;
                continue 'source;
            }
        }
        disagreeing.push(i);
    }

    Ok(r1.select_columns(&disagreeing))
}
