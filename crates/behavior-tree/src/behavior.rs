//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes, and the [`Node`] handle that
//! composites use to hold their children.

use std::sync::Arc;

use crate::Status;

/// Shared handle to a behavior tree node.
///
/// The same sub-tree may be attached to several parents; it lives as long as
/// its longest holder.
pub type Node = Arc<dyn Behavior>;

/// A behavior tree node that can be evaluated.
pub trait Behavior: Send + Sync {
    /// Evaluate this behavior node.
    ///
    /// The call runs to completion, including every descendant evaluation,
    /// before it returns.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    fn execute(&self) -> Status;

    /// Label used when logging this node.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        // Strip the module path and any generic arguments.
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Child nodes in evaluation order. Leaves have none.
    fn children(&self) -> &[Node] {
        &[]
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior>` to also implement `Behavior`, so a boxed
/// node can be passed wherever a concrete behavior is expected.
impl Behavior for Box<dyn Behavior> {
    #[inline]
    fn execute(&self) -> Status {
        (**self).execute()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn children(&self) -> &[Node] {
        (**self).children()
    }
}
