//! Upper bound on the relation distance between two relations.

use tracing::debug;

use crate::diff::rel_diff;
use crate::kappa::{KappaOptions, kappa};
use crate::model::Relation;
use crate::Result;

/// Calculate an upper bound on Michael Robinson's relation distance between
/// `r1` and `r2`, which must share a ground set (equal row counts).
///
/// The bound combines the disagreeing columns in each direction with two
/// capped kappa evaluations: `cols(Ri) − cols(Di)` counts the columns Ri
/// shares exactly with the other relation, and the kappa of the *other*
/// side's disagreeing columns bounds how many more can be reconciled through
/// their x-group structure. The better of the two directions wins.
pub fn rel_dist_bound(r1: &Relation, r2: &Relation, check_bin: bool) -> Result<usize> {
    if check_bin {
        r1.check_binary()?;
        r2.check_binary()?;
    }

    // Validation happened above (or the caller opted out); don't repeat it.
    let d1 = rel_diff(r1, r2, false)?;
    let d2 = rel_diff(r2, r1, false)?;
    debug!(
        d1_cols = d1.cols(),
        d2_cols = d2.cols(),
        "disagreeing columns"
    );

    let k12 = kappa(&d2, &KappaOptions::unchecked(d1.cols()))?;
    let k21 = kappa(&d1, &KappaOptions::unchecked(d2.cols()))?;
    debug!(k12, k21, "directional kappas");

    let reconciled_via_r1 = r1.cols() - d1.cols() + k12;
    let reconciled_via_r2 = r2.cols() - d2.cols() + k21;

    Ok(r1.cols().max(r2.cols()) - reconciled_via_r1.min(reconciled_via_r2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(rows: Vec<Vec<u8>>) -> Relation {
        Relation::from_rows(rows).unwrap()
    }

    #[test]
    fn identical_relations_have_zero_bound() {
        let r = rel(vec![
            vec![1, 0, 1],
            vec![0, 1, 1],
        ]);
        assert_eq!(rel_dist_bound(&r, &r, true).unwrap(), 0);
    }

    #[test]
    fn row_count_mismatch_rejected() {
        let r1 = rel(vec![vec![1]]);
        let r2 = rel(vec![vec![1], vec![0]]);
        assert!(rel_dist_bound(&r1, &r2, false).is_err());
    }

    #[test]
    fn disjoint_singletons() {
        // No column matches; each side is one x-group of its full width.
        let r1 = rel(vec![vec![1, 1], vec![0, 0]]);
        let r2 = rel(vec![vec![0, 0], vec![1, 1]]);
        // D1 = r1, D2 = r2. kappa of a single group is 0 both ways, so
        // nothing reconciles beyond the zero shared columns.
        assert_eq!(rel_dist_bound(&r1, &r2, true).unwrap(), 2);
    }
}
