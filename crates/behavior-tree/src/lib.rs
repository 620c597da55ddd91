//! Lightweight behavior tree evaluator for agent decision logic.
//!
//! A tree is built from leaf actions and two composites, then evaluated
//! depth-first from the root:
//!
//! - **Run to completion**: `execute` returns only after every descendant
//!   evaluation has finished
//! - **No Running state**: a node either succeeds or fails
//! - **No blackboard**: leaves carry whatever state they need themselves
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, shared through [`Node`] handles
//! - [`Status`]: Success or Failure, interchangeable with `bool`
//! - Leaf nodes: [`AttackPlayer`], [`ChasePlayer`], [`PatrolArea`], [`Action`], [`FallibleAction`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - [`BehaviorTree`]: depth-checked root, limits from [`TreeConfig`]
//!
//! # Example
//!
//! ```rust
//! use behavior_tree::builder::{node, selector, sequence};
//! use behavior_tree::{AttackPlayer, BehaviorTree, ChasePlayer, PatrolArea};
//!
//! let root = selector([
//!     sequence([node(ChasePlayer), node(AttackPlayer)]),
//!     node(PatrolArea),
//! ]);
//!
//! let tree = BehaviorTree::new(root).unwrap();
//! assert!(tree.run());
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod config;
pub mod error;
pub mod leaf;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use config::TreeConfig;
pub use error::TreeError;
pub use leaf::{Action, AttackPlayer, ChasePlayer, FallibleAction, PatrolArea};
pub use status::Status;
pub use tree::BehaviorTree;
