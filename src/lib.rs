//! # kappa-rs — Bounds for the Distance Between Relations
//!
//! Rust implementation of the `kappa` algorithm from Kenneth P. Ewing,
//! *Bounds for the Distance Between Relations* (arXiv:2105.01690).
//!
//! A relation over a ground set is encoded as a binary matrix: rows are
//! elements of the ground set, columns are blocks of the relation. Two
//! invariants are computed:
//!
//! - [`kappa`] — the largest total block-count obtainable by selecting whole
//!   x-groups (maximal clusters of columns chained together by shared nonzero
//!   rows) without exceeding a capacity.
//! - [`rel_dist_bound`] — an upper bound on Michael Robinson's relation
//!   distance between two relations sharing a ground set, combining a greedy
//!   exact-column matcher with two `kappa` evaluations.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: every algorithm is a deterministic function of its
//!    arguments — no I/O, no state, no async
//! 2. **Clean DTOs**: [`Relation`] crosses all boundaries; ingestion and CLI
//!    never leak into the algorithms
//! 3. **Fail-fast validation**: precondition violations surface immediately
//!    as [`Error`], never as panics or wrapped indices
//!
//! ## Quick Start
//!
//! ```rust
//! use kappa_rs::{Relation, KappaOptions, kappa, rel_dist_bound};
//!
//! # fn example() -> kappa_rs::Result<()> {
//! let r = Relation::from_rows(vec![
//!     vec![1, 1, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 1],
//! ])?;
//!
//! // Two x-groups: {col 0, col 1} and {col 2}.
//! let k = kappa(&r, &KappaOptions::default())?;
//! assert_eq!(k, 1);
//!
//! let d = rel_dist_bound(&r, &r, true)?;
//! assert_eq!(d, 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod cluster;
pub mod kappa;
pub mod diff;
pub mod distance;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Relation, relation_from_dict};

// ============================================================================
// Re-exports: Algorithms
// ============================================================================

pub use cluster::{XGroup, x_groups};
pub use kappa::{KappaOptions, kappa};
pub use diff::rel_diff;
pub use distance::rel_dist_bound;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Entry at ({row}, {col}) is not binary: {value}")]
    NonBinaryEntry { row: usize, col: usize, value: u8 },

    #[error("Relations have different row counts: {left} vs {right}")]
    RowCountMismatch { left: usize, right: usize },

    #[error("Row {row} has {got} entries, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("Malformed relation: {0}")]
    MalformedRelation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
