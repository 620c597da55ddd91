//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Children are evaluated in insertion order. Side effects of children that
//! already ran are never undone when a later child changes the outcome.

use crate::{Behavior, Node, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
/// A sequence with no children succeeds.
#[derive(Default)]
pub struct Sequence {
    children: Vec<Node>,
}

impl Sequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence with the given children, in evaluation order.
    pub fn with_children(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Appends `child` after the existing children.
    ///
    /// No uniqueness check is made; the same node may be added twice.
    pub fn add_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if no children were added.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Behavior for Sequence {
    fn execute(&self) -> Status {
        // Execute children in order until one fails
        for (index, child) in self.children.iter().enumerate() {
            match child.execute() {
                Status::Success => continue, // Move to next child
                Status::Failure => {
                    tracing::trace!(child = child.name(), index, "sequence short-circuited");
                    return Status::Failure;
                }
            }
        }
        // All children succeeded (vacuously, when there are none)
        Status::Success
    }

    fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
/// A selector with no children fails.
#[derive(Default)]
pub struct Selector {
    children: Vec<Node>,
}

impl Selector {
    /// Creates an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector with the given children, in priority order.
    pub fn with_children(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Appends `child` as the lowest-priority option.
    pub fn add_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if no children were added.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Behavior for Selector {
    fn execute(&self) -> Status {
        // Try children in order until one succeeds
        for (index, child) in self.children.iter().enumerate() {
            match child.execute() {
                Status::Success => {
                    tracing::trace!(child = child.name(), index, "selector short-circuited");
                    return Status::Success;
                }
                Status::Failure => continue, // Try next child
            }
        }
        // All children failed (vacuously, when there are none)
        Status::Failure
    }

    fn children(&self) -> &[Node] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every execution into a shared log.
    struct Probe {
        label: &'static str,
        outcome: Status,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Behavior for Probe {
        fn execute(&self) -> Status {
            self.log.lock().unwrap().push(self.label);
            self.outcome
        }
    }

    fn probe(log: &Arc<Mutex<Vec<&'static str>>>, label: &'static str, outcome: Status) -> Node {
        Arc::new(Probe {
            label,
            outcome,
            log: Arc::clone(log),
        })
    }

    fn new_log() -> Arc<Mutex<Vec<&'static str>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn calls(log: &Arc<Mutex<Vec<&'static str>>>) -> Vec<&'static str> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn sequence_all_success() {
        let log = new_log();
        let mut seq = Sequence::new();
        seq.add_child(probe(&log, "a", Status::Success))
            .add_child(probe(&log, "b", Status::Success));

        assert_eq!(seq.execute(), Status::Success);
        assert_eq!(calls(&log), ["a", "b"]);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let log = new_log();
        let seq = Sequence::with_children([
            probe(&log, "a", Status::Success),
            probe(&log, "b", Status::Failure),
            probe(&log, "c", Status::Success), // Should not execute
        ]);

        assert_eq!(seq.execute(), Status::Failure);
        assert_eq!(calls(&log), ["a", "b"]);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let seq = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.execute(), Status::Success);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let log = new_log();
        let sel = Selector::with_children([
            probe(&log, "a", Status::Failure),
            probe(&log, "b", Status::Success),
            probe(&log, "c", Status::Success), // Should not execute
        ]);

        assert_eq!(sel.execute(), Status::Success);
        assert_eq!(calls(&log), ["a", "b"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let log = new_log();
        let mut sel = Selector::new();
        sel.add_child(probe(&log, "a", Status::Failure))
            .add_child(probe(&log, "b", Status::Failure));

        assert_eq!(sel.execute(), Status::Failure);
        assert_eq!(calls(&log), ["a", "b"]);
    }

    #[test]
    fn empty_selector_fails() {
        let sel = Selector::new();
        assert!(sel.is_empty());
        assert_eq!(sel.execute(), Status::Failure);
    }

    #[test]
    fn selector_order_decides_invocations_not_result() {
        let log = new_log();
        let forward = Selector::with_children([
            probe(&log, "fail", Status::Failure),
            probe(&log, "pass", Status::Success),
        ]);
        assert_eq!(forward.execute(), Status::Success);
        assert_eq!(calls(&log), ["fail", "pass"]);

        let log = new_log();
        let reversed = Selector::with_children([
            probe(&log, "pass", Status::Success),
            probe(&log, "fail", Status::Failure),
        ]);
        assert_eq!(reversed.execute(), Status::Success);
        assert_eq!(calls(&log), ["pass"]);
    }

    #[test]
    fn duplicate_child_runs_at_each_position() {
        let log = new_log();
        let shared = probe(&log, "twice", Status::Success);
        let mut seq = Sequence::new();
        seq.add_child(Arc::clone(&shared)).add_child(shared);

        assert_eq!(seq.len(), 2);
        assert_eq!(seq.execute(), Status::Success);
        assert_eq!(calls(&log), ["twice", "twice"]);
    }

    #[test]
    fn composites_expose_children_in_order() {
        let log = new_log();
        let sel = Selector::with_children([
            probe(&log, "a", Status::Failure),
            probe(&log, "b", Status::Failure),
        ]);
        assert_eq!(sel.children().len(), 2);
        assert_eq!(sel.name(), "Selector");
    }
}
