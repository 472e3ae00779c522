//! # Relation Data Model
//!
//! Clean DTOs for binary relation matrices. These types cross every
//! boundary: ingestion ↔ clustering ↔ kappa ↔ CLI.
//!
//! Design rule: this module is pure data — no I/O, no state, no async.

pub mod matrix;
pub mod ingest;

pub use matrix::{ColumnSupport, Relation};
pub use ingest::relation_from_dict;
