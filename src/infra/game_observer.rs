use tracing::{debug, info};

use crate::game::MatchOutcome;
use crate::infra::{Action, Vertex};
use crate::state::TurnView;

/// Trait for observing game events during a match.
pub trait GameObserver {
    /// Called once before the first turn.
    fn on_game_start(&mut self, vertex_count: usize, resource_count: usize);

    /// Called at the start of every turn with the fresh snapshot.
    fn on_turn_start(&mut self, turn: u32, view: &TurnView) {
        let _ = (turn, view);
    }

    /// Called when a policy has decided its move.
    fn on_action(&mut self, player: &str, action: Action) {
        let _ = (player, action);
    }

    /// Called when a player collects a resource.
    fn on_resource_collected(&mut self, player: &str, vertex: Vertex, value: f64);

    /// Called when the match ends.
    fn on_game_finished(&mut self, outcome: &MatchOutcome);
}

/// Observer that reports match progress through tracing.
pub struct DefaultObserver;

impl GameObserver for DefaultObserver {
    fn on_game_start(&mut self, vertex_count: usize, resource_count: usize) {
        info!(vertex_count, resource_count, "Game started");
    }

    fn on_turn_start(&mut self, turn: u32, view: &TurnView) {
        debug!(turn, remaining = view.resources.len(), "Turn");
    }

    fn on_action(&mut self, player: &str, action: Action) {
        debug!(player, ?action, "Action selected");
    }

    fn on_resource_collected(&mut self, player: &str, vertex: Vertex, value: f64) {
        info!(player, vertex, value, "Resource collected");
    }

    fn on_game_finished(&mut self, outcome: &MatchOutcome) {
        info!(
            turns = outcome.turns,
            winner = outcome.winner.as_deref().unwrap_or("draw"),
            "Game finished"
        );
        for (player, score) in &outcome.scores {
            info!(player = %player, score = *score, "Final score");
        }
    }
}
