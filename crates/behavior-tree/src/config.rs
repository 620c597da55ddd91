//! Tree validation settings and their environment loader.
use std::env;
use std::str::FromStr;

/// Limits applied when a root node is wrapped in a [`BehaviorTree`](crate::BehaviorTree).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Deepest root-to-leaf path accepted, counted in nodes (a lone leaf has
    /// depth 1). Evaluation recurses once per level, so this bounds stack use.
    pub max_depth: usize,
}

impl TreeConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_MAX_DEPTH` - Maximum accepted tree depth (default: 32, minimum: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable source, using the
    /// same keys and rules as [`TreeConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(depth) = read_var::<usize>(&lookup, "BT_MAX_DEPTH") {
            config.max_depth = depth.max(1);
        }

        config
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_var<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse().ok())
}
