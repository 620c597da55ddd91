//! Guard AI demonstration entry point.
mod config;

use anyhow::Result;
use behavior_tree::builder::{action, node, selector, sequence};
use behavior_tree::{AttackPlayer, BehaviorTree, ChasePlayer, Node, PatrolArea};
use config::DemoConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    let tree = BehaviorTree::with_config(guard(config.player_visible), &config.tree)?;

    let succeeded = tree.run();
    tracing::info!(succeeded, depth = tree.depth(), "guard evaluated");

    Ok(())
}

/// Chase and attack the player, otherwise patrol.
fn guard(player_visible: bool) -> Node {
    let chase = if player_visible {
        node(ChasePlayer)
    } else {
        action("ChasePlayer", || false)
    };

    selector([sequence([chase, node(AttackPlayer)]), node(PatrolArea)])
}
