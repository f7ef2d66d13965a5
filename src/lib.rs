//! Genealogical trees of vampires.
//!
//! Each vampire has exactly one creator and zero or more offspring. The
//! arena-backed [`LineageArena`] answers lineage-depth, seniority,
//! name-lookup, descendant-count, filtered-collection and
//! closest-common-ancestor queries over such trees.

pub mod domain;
pub mod tree_traits;
pub mod util;

pub use domain::{DomainError, DomainResult, LineageArena, LineageNode, Vampire};
pub use tree_traits::TreeNodeConvert;
