use thiserror::Error;

/// Errors returned by [`Tree`][crate::Tree] queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The tree has no nodes, so the query has no answer.
    #[error("tree is empty: height is undefined")]
    EmptyTree,
}
