//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Arc::new(Sequence::with_children(vec![...]))`, you can use shorter
//! functions like `sequence(vec![...])`.

use std::sync::Arc;

use crate::{Action, Behavior, Node, Selector, Sequence};

/// Creates a sequence node.
///
/// Shorthand for `Arc::new(Sequence::with_children(children))`.
#[inline]
pub fn sequence(children: impl IntoIterator<Item = Node>) -> Node {
    Arc::new(Sequence::with_children(children))
}

/// Creates a selector node.
///
/// Shorthand for `Arc::new(Selector::with_children(children))`.
#[inline]
pub fn selector(children: impl IntoIterator<Item = Node>) -> Node {
    Arc::new(Selector::with_children(children))
}

/// Creates a closure-driven leaf.
///
/// Shorthand for `Arc::new(Action::new(name, f))`.
#[inline]
pub fn action<F>(name: impl Into<String>, f: F) -> Node
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    Arc::new(Action::new(name, f))
}

/// Promotes any behavior to a shareable [`Node`].
#[inline]
pub fn node<B: Behavior + 'static>(behavior: B) -> Node {
    Arc::new(behavior)
}
