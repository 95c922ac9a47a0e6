use thiserror::Error;

/// Reasons an [`ordtree::Tree`](crate::Tree) operation can fail.
///
/// Most of the API reports absence with `Option`/`bool`. These variants are returned by the
/// `try_*` methods for callers that need to know *why* nothing came back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one node.
    #[error("tree is empty")]
    EmptyTree,

    /// The requested key is not stored in the tree.
    #[error("key not found in tree")]
    NotFound,

    /// A structural check failed. This is always a bug in the tree's relinking logic.
    #[error("tree invariant violated: {0}")]
    InvariantViolation(String),
}
