//! Demo configuration loaded from the environment.
use std::env;
use std::str::FromStr;

use behavior_tree::TreeConfig;

/// Settings for a single demonstration run.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub tree: TreeConfig,
    /// When `false`, chasing fails and the guard falls back to patrolling.
    pub player_visible: bool,
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_MAX_DEPTH` - Maximum accepted tree depth (default: 32)
    /// - `DEMO_PLAYER_VISIBLE` - Whether the guard can see the player (default: true)
    pub fn from_env() -> Self {
        Self {
            tree: TreeConfig::from_env(),
            player_visible: read_env::<bool>("DEMO_PLAYER_VISIBLE").unwrap_or(true),
        }
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
