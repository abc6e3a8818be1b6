use std::collections::VecDeque;

use tracing::debug;

use crate::infra::{Action, PathTable, Vertex, step_action};
use crate::planners::TurnPolicy;
use crate::state::{Maze, TurnView};

/// Greedy policy backed by an all-pairs path table built once at setup.
///
/// Each step it follows the cached route to its committed resource,
/// one hop at a time. It replans only when the route runs out or the
/// committed resource has been collected by either player, picking the
/// resource with the shortest cached route from the current position.
pub struct GreedyPolicy {
    player: String,
    table: Option<PathTable>,
    target: Option<Vertex>,
    route: VecDeque<Vertex>,
}

impl GreedyPolicy {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            table: None,
            target: None,
            route: VecDeque::new(),
        }
    }

    /// Nearest resource by cached route length. Unreachable resources
    /// have an empty cached route and are skipped.
    fn closest_resource(&self, position: Vertex, resources: &[Vertex]) -> Option<Vertex> {
        let table = self.table.as_ref()?;
        let mut closest = None;
        let mut closest_len = usize::MAX;
        for &resource in resources {
            let len = table.route(position, resource).len();
            if len > 0 && len < closest_len {
                closest_len = len;
                closest = Some(resource);
            }
        }
        closest
    }
}

impl TurnPolicy for GreedyPolicy {
    fn player(&self) -> &str {
        &self.player
    }

    fn setup(&mut self, maze: &dyn Maze, _view: &TurnView) {
        self.table = Some(PathTable::build(maze));
    }

    #[tracing::instrument(level = "debug", skip_all, fields(player = %self.player))]
    fn decide(&mut self, maze: &dyn Maze, view: &TurnView) -> Action {
        let Some(position) = view.location_of(&self.player) else {
            return Action::Stay;
        };

        let target_gone = self.target.is_none_or(|t| !view.has_resource(t));
        if self.route.is_empty() || target_gone {
            self.target = self.closest_resource(position, &view.resources);
            self.route.clear();
            if let Some(target) = self.target
                && let Some(table) = self.table.as_ref()
            {
                self.route = table.route(position, target).iter().copied().collect();
                debug!(?target, hops = self.route.len(), "Retargeted");
            }
        }

        match self.route.pop_front() {
            Some(next) => step_action(maze, position, next),
            None => Action::Stay,
        }
    }
}
