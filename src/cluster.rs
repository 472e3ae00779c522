//! X-group clustering: connected components of the column-overlap graph.
//!
//! Two columns *interact* when their supports (sets of nonzero row indices)
//! intersect; an x-group is a maximal set of columns transitively connected
//! by interaction. The original algorithm rescans a mutable group list per
//! column; this is the same partition computed with a disjoint-set structure
//! over column indices plus a row → owning-column map, near-linear in
//! `rows × cols`.

use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

use crate::model::Relation;

/// A maximal cluster of overlapping columns.
#[derive(Clone, Debug)]
pub struct XGroup {
    /// Union of the member columns' supports (row indices).
    pub support: HashSet<usize>,
    /// Member column indices, ascending.
    pub members: Vec<usize>,
}

impl XGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition the columns of `r` into x-groups.
///
/// Invariants on the output: groups are member-disjoint and support-disjoint,
/// together cover every column exactly once, and columns share a group iff
/// they are connected by a chain of pairwise support intersections. All-zero
/// columns form singleton groups. Groups are ordered by smallest member.
///
/// `r` must have at least one column.
pub fn x_groups(r: &Relation) -> Vec<XGroup> {
    debug_assert!(r.cols() > 0);

    let mut sets = DisjointSets::new(r.cols());
    // row index → first column seen with that row in its support
    let mut row_owner: Vec<Option<usize>> = vec![None; r.rows()];

    for c in 0..r.cols() {
        let xs = r.column_support(c);
        trace!(col = c, support = ?xs, "clustering column");
        for &row in &xs {
            match row_owner[row] {
                Some(owner) => sets.union(owner, c),
                None => row_owner[row] = Some(c),
            }
        }
    }

    // Assemble groups root-by-root, keyed by smallest member column.
    let mut by_root: HashMap<usize, XGroup> = HashMap::new();
    for c in 0..r.cols() {
        let root = sets.find(c);
        let group = by_root.entry(root).or_insert_with(|| XGroup {
            support: HashSet::new(),
            members: Vec::new(),
        });
        group.members.push(c);
        group.support.extend(r.column_support(c));
    }

    let mut groups: Vec<XGroup> = by_root.into_values().collect();
    groups.sort_by_key(|g| g.members[0]);
    debug!(count = groups.len(), "x-groups built");
    groups
}

// ============================================================================
// DisjointSets
// ============================================================================

/// Union-find over dense indices, path halving + union by rank.
struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
    }
}
