//! Error types raised while assembling a behavior tree.
//!
//! Evaluation itself never errors: every outcome is a [`Status`](crate::Status).

use thiserror::Error;

/// Structural problems detected when a tree is wrapped in a
/// [`BehaviorTree`](crate::BehaviorTree).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("tree depth {depth} exceeds the configured maximum of {max}")]
    TooDeep { depth: usize, max: usize },

    #[error("node '{node}' is its own descendant")]
    Cycle { node: String },
}

pub type Result<T> = std::result::Result<T, TreeError>;
