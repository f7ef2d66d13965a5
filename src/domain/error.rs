//! Domain-level errors

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of lineage-tree preconditions.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("no vampire at index {0:?}")]
    StaleIndex(Index),

    #[error("no common ancestor: {a} and {b} descend from different originals")]
    DisjointLineages { a: String, b: String },
}

/// Result type for lineage operations.
pub type DomainResult<T> = Result<T, DomainError>;
