//! Validated behavior tree root.
//!
//! [`BehaviorTree`] owns the root [`Node`] of an assembled tree. Construction
//! walks the structure once with an explicit stack and rejects trees deeper
//! than [`TreeConfig::max_depth`], so the recursive evaluation that follows
//! has a known bound. A sub-tree shared by several parents is measured once.
//!
//! [`Sequence`](crate::Sequence) and [`Selector`](crate::Selector) cannot form
//! cycles: `add_child` needs a unique `&mut` borrow, and a node behind an
//! `Arc` is immutable. A custom [`Behavior`] with interior mutability can
//! still point back at an ancestor. Construction rejects such trees with
//! [`TreeError::Cycle`]; calling `execute` on a cyclic node directly recurses
//! without end.

use std::collections::{HashMap, HashSet};

use crate::{Behavior, Node, Status, TreeConfig, TreeError, error::Result};

/// An assembled tree ready for evaluation.
pub struct BehaviorTree {
    root: Node,
    depth: usize,
    node_count: usize,
}

impl BehaviorTree {
    /// Wraps `root` using [`TreeConfig::default`].
    pub fn new(root: Node) -> Result<Self> {
        Self::with_config(root, &TreeConfig::default())
    }

    /// Wraps `root`, failing with [`TreeError::TooDeep`] if any root-to-leaf
    /// path is longer than `config.max_depth`, or [`TreeError::Cycle`] if a
    /// node is reachable from itself.
    pub fn with_config(root: Node, config: &TreeConfig) -> Result<Self> {
        let (depth, node_count) = measure(&root, config.max_depth)?;
        tracing::debug!(root = root.name(), depth, node_count, "behavior tree assembled");
        Ok(Self {
            root,
            depth,
            node_count,
        })
    }

    /// Evaluates the root.
    pub fn execute(&self) -> Status {
        let status = self.root.execute();
        tracing::debug!(root = self.root.name(), %status, "behavior tree evaluated");
        status
    }

    /// Evaluates the root and reports the outcome as a `bool`.
    pub fn run(&self) -> bool {
        self.execute().into()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Length of the longest root-to-leaf path, in nodes.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of distinct nodes. A sub-tree attached under several parents
    /// is counted once.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

impl std::fmt::Debug for BehaviorTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorTree")
            .field("root", &self.root.name())
            .field("depth", &self.depth)
            .field("node_count", &self.node_count)
            .finish()
    }
}

/// Identity of a node allocation, independent of its vtable.
fn key(node: &dyn Behavior) -> *const () {
    std::ptr::from_ref(node).cast()
}

/// Returns `(depth, distinct node count)`.
///
/// Post-order walk: a node's height is recorded once all of its children
/// have one, so shared sub-trees are visited a single time. Nodes whose
/// children are still pending stay in `on_path`; meeting one again is a cycle.
fn measure(root: &Node, max: usize) -> Result<(usize, usize)> {
    let mut heights: HashMap<*const (), usize> = HashMap::new();
    let mut on_path: HashSet<*const ()> = HashSet::new();
    let mut stack: Vec<(&dyn Behavior, bool)> = vec![(root.as_ref(), false)];

    while let Some((node, expanded)) = stack.pop() {
        let id = key(node);

        if expanded {
            let height = 1 + node
                .children()
                .iter()
                .map(|child| heights.get(&key(child.as_ref())).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);
            if height > max {
                return Err(TreeError::TooDeep { depth: height, max });
            }
            on_path.remove(&id);
            heights.insert(id, height);
            continue;
        }

        if heights.contains_key(&id) {
            continue;
        }
        if !on_path.insert(id) {
            return Err(TreeError::Cycle {
                node: node.name().to_string(),
            });
        }

        stack.push((node, true));
        for child in node.children() {
            let child = child.as_ref();
            if on_path.contains(&key(child)) {
                return Err(TreeError::Cycle {
                    node: child.name().to_string(),
                });
            }
            if !heights.contains_key(&key(child)) {
                stack.push((child, false));
            }
        }
    }

    let depth = heights.get(&key(root.as_ref())).copied().unwrap_or(0);
    Ok((depth, heights.len()))
}
