mod density_navigator;
mod greedy;
mod replan_each_turn;
mod replan_on_capture;

pub use density_navigator::DensityNavigator;
pub use greedy::GreedyPolicy;
pub use replan_each_turn::ReplanEachTurnPolicy;
pub use replan_on_capture::ReplanOnCapturePolicy;

use thiserror::Error;

use crate::infra::Action;
use crate::state::{Maze, TurnView};

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown policy kind '{0}'")]
    UnknownKind(String),
}

/// A per-player decision policy. Called exactly once per game step and
/// expected to resolve every branch to a concrete move; nothing here is
/// allowed to abort the turn loop.
pub trait TurnPolicy {
    /// The player this policy decides for, as named in the `TurnView`.
    fn player(&self) -> &str;

    /// One-time setup before the first step. Policies that precompute
    /// (the all-pairs variant) do their heavy lifting here.
    fn setup(&mut self, maze: &dyn Maze, view: &TurnView) {
        let _ = (maze, view);
    }

    /// Decide the single move for this step.
    fn decide(&mut self, maze: &dyn Maze, view: &TurnView) -> Action;
}

/// Instantiate a policy by its configuration name.
pub fn build_policy(kind: &str, player: &str) -> Result<Box<dyn TurnPolicy>, PolicyError> {
    match kind {
        "greedy" => Ok(Box::new(GreedyPolicy::new(player))),
        "replan-on-capture" => Ok(Box::new(ReplanOnCapturePolicy::new(player))),
        "replan-each-turn" => Ok(Box::new(ReplanEachTurnPolicy::new(player))),
        "density" => Ok(Box::new(DensityNavigator::new(player))),
        other => Err(PolicyError::UnknownKind(other.to_string())),
    }
}
