//! The kappa calculator.
//!
//! `kappa(R)` is the greatest total column-count obtainable by selecting
//! whole x-groups without exceeding a capacity, where selecting *all* groups
//! is never allowed: when the capacity does not bind, the largest group is
//! excluded outright.

use tracing::debug;

use crate::cluster::x_groups;
use crate::model::Relation;
use crate::Result;

/// Options for [`kappa`].
#[derive(Clone, Copy, Debug)]
pub struct KappaOptions {
    /// Capacity on the total selected column-count. `None` and `Some(0)`
    /// both mean "use the total column count".
    pub max_count: Option<usize>,
    /// Validate that every entry is in {0,1} before computing.
    pub check_bin: bool,
}

impl Default for KappaOptions {
    fn default() -> Self {
        Self { max_count: None, check_bin: true }
    }
}

impl KappaOptions {
    /// Capacity with the given max_count, binary check left on.
    pub fn with_max_count(max_count: usize) -> Self {
        Self { max_count: Some(max_count), check_bin: true }
    }

    /// For internal call sites whose inputs were already validated.
    pub(crate) fn unchecked(max_count: usize) -> Self {
        Self { max_count: Some(max_count), check_bin: false }
    }
}

/// Calculate kappa for a binary relation matrix.
///
/// Algorithm: cluster the columns into x-groups, sort the group sizes
/// ascending, take prefix sums, then pick the largest prefix admissible
/// under the capacity:
///
/// - a single group (or an empty relation) yields 0;
/// - an unbinding capacity (≥ total columns) yields the sum of all group
///   sizes except the largest;
/// - otherwise the largest prefix sum that, together with one more group of
///   the same rank, still fits the capacity; stepping down one prefix when
///   it would not, and to the empty selection (0) when even the smallest
///   group exceeds the capacity.
pub fn kappa(r: &Relation, opts: &KappaOptions) -> Result<usize> {
    if opts.check_bin {
        r.check_binary()?;
    }

    // Empty relation has kappa = 0.
    if r.is_empty() {
        return Ok(0);
    }

    let groups = x_groups(r);

    let mut blockcounts: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    blockcounts.sort_unstable();

    // Strictly increasing since every group has at least one member.
    let blocksums: Vec<usize> = blockcounts
        .iter()
        .scan(0usize, |acc, &n| {
            *acc += n;
            Some(*acc)
        })
        .collect();

    let cap = match opts.max_count {
        Some(n) if n > 0 => n,
        _ => r.cols(),
    };

    // Largest index whose prefix sum fits the capacity, if any.
    let m = blocksums.iter().rposition(|&s| s <= cap);
    debug!(?blockcounts, ?blocksums, cap, ?m, "kappa selection");

    // A single group cannot be split off.
    if blocksums.len() == 1 {
        return Ok(0);
    }

    if cap >= r.cols() {
        // Capacity does not bind: everything but the largest group. The full
        // prefix always fits here, so m is the last index and at least 1.
        let m = blocksums.len() - 1;
        return Ok(blocksums[m - 1]);
    }

    let result = match m {
        // Even the smallest group exceeds the capacity: empty selection.
        None => 0,
        Some(m) => {
            if blocksums[m] + blockcounts[m] > cap {
                // Admitting one more group of this rank breaks the capacity;
                // step down, with the empty selection at the bottom.
                if m == 0 { 0 } else { blocksums[m - 1] }
            } else {
                blocksums[m]
            }
        }
    };
    Ok(result)
}
