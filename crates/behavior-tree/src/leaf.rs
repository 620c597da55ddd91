//! Leaf behavior nodes.
//!
//! Leaves have no children. They perform a concrete action, or answer a
//! question, and report the outcome as a [`Status`].
//!
//! The agent actions [`AttackPlayer`], [`ChasePlayer`] and [`PatrolArea`]
//! always succeed and log what they did. [`Action`] and [`FallibleAction`]
//! wrap arbitrary decision logic in a closure.

use std::fmt;

use crate::{Behavior, Status};

/// Attacks the player.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{AttackPlayer, Behavior, Status};
///
/// assert_eq!(AttackPlayer.execute(), Status::Success);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackPlayer;

impl Behavior for AttackPlayer {
    fn execute(&self) -> Status {
        tracing::info!(action = "attack", "Attacking player!");
        Status::Success
    }
}

/// Moves after the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChasePlayer;

impl Behavior for ChasePlayer {
    fn execute(&self) -> Status {
        tracing::info!(action = "chase", "Chasing player...");
        Status::Success
    }
}

/// Walks the patrol route. Used as the fallback when there is nothing to fight.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatrolArea;

impl Behavior for PatrolArea {
    fn execute(&self) -> Status {
        tracing::info!(action = "patrol", "Patrolling the area...");
        Status::Success
    }
}

/// Leaf driven by a closure.
///
/// The closure returns `true` for success and `false` for failure. Use this
/// for conditions and for actions whose outcome depends on outside state.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Status};
///
/// let hp = 12;
/// let low_health = Action::new("is_health_low", move || hp < 20);
/// assert_eq!(low_health.execute(), Status::Success);
/// ```
pub struct Action<F> {
    name: String,
    f: F,
}

impl<F> Action<F>
where
    F: Fn() -> bool + Send + Sync,
{
    /// Creates a named leaf that evaluates `f` on every execution.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Behavior for Action<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn execute(&self) -> Status {
        let status = Status::from((self.f)());
        tracing::debug!(node = %self.name, %status, "action evaluated");
        status
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for Action<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

/// Leaf driven by a closure that can hit an internal error.
///
/// An `Err` is not propagated: it is logged at `warn` level and the leaf
/// reports [`Status::Failure`], so the parent composite applies its usual
/// policy.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Behavior, FallibleAction, Status};
///
/// let parse = FallibleAction::new("read_target", || "7".parse::<u8>().map(|n| n > 3));
/// assert_eq!(parse.execute(), Status::Success);
///
/// let broken = FallibleAction::new("read_target", || "x".parse::<u8>().map(|n| n > 3));
/// assert_eq!(broken.execute(), Status::Failure);
/// ```
pub struct FallibleAction<F> {
    name: String,
    f: F,
}

impl<F, E> FallibleAction<F>
where
    F: Fn() -> Result<bool, E> + Send + Sync,
    E: fmt::Display,
{
    /// Creates a named leaf that evaluates `f` on every execution.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F, E> Behavior for FallibleAction<F>
where
    F: Fn() -> Result<bool, E> + Send + Sync,
    E: fmt::Display,
{
    fn execute(&self) -> Status {
        match (self.f)() {
            Ok(succeeded) => Status::from(succeeded),
            Err(err) => {
                tracing::warn!(node = %self.name, error = %err, "action error treated as failure");
                Status::Failure
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FallibleAction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallibleAction")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn agent_actions_always_succeed() {
        assert_eq!(AttackPlayer.execute(), Status::Success);
        assert_eq!(ChasePlayer.execute(), Status::Success);
        assert_eq!(PatrolArea.execute(), Status::Success);
    }

    #[test]
    fn agent_actions_use_type_names() {
        assert_eq!(AttackPlayer.name(), "AttackPlayer");
        assert_eq!(ChasePlayer.name(), "ChasePlayer");
        assert_eq!(PatrolArea.name(), "PatrolArea");
    }

    #[test]
    fn action_reports_closure_result() {
        assert_eq!(Action::new("yes", || true).execute(), Status::Success);
        assert_eq!(Action::new("no", || false).execute(), Status::Failure);
    }

    #[test]
    fn action_runs_closure_each_time() {
        let calls = AtomicUsize::new(0);
        let action = Action::new("count", || {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        });

        action.execute();
        action.execute();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(action.name(), "count");
    }

    #[test]
    fn fallible_action_maps_error_to_failure() {
        let failing = FallibleAction::new("broken", || Err::<bool, _>("sensor offline"));
        assert_eq!(failing.execute(), Status::Failure);

        let ok = FallibleAction::new("fine", || Ok::<_, String>(true));
        assert_eq!(ok.execute(), Status::Success);

        let declined = FallibleAction::new("declined", || Ok::<_, String>(false));
        assert_eq!(declined.execute(), Status::Failure);
    }
}
