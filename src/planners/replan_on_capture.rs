use std::collections::VecDeque;

use tracing::debug;

use crate::infra::{Action, ShortestPaths, Vertex, closest_accessible, step_action};
use crate::planners::TurnPolicy;
use crate::state::{Maze, TurnView};

/// Greedy policy that recomputes shortest paths only when it has to
/// replan: when its route is exhausted or its committed resource has
/// vanished. Between replans it follows the stored route one hop per
/// step, so a resource collected elsewhere costs nothing until the
/// committed one is affected.
pub struct ReplanOnCapturePolicy {
    player: String,
    target: Option<Vertex>,
    route: VecDeque<Vertex>,
}

impl ReplanOnCapturePolicy {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            target: None,
            route: VecDeque::new(),
        }
    }

    fn replan(&mut self, maze: &dyn Maze, position: Vertex, resources: &[Vertex]) {
        self.route.clear();
        let paths = ShortestPaths::compute(maze, position);
        self.target = closest_accessible(&paths, resources);
        if let Some(target) = self.target {
            self.route = paths.route_to(target).into_iter().collect();
            debug!(?target, hops = self.route.len(), "Replanned");
        }
    }
}

impl TurnPolicy for ReplanOnCapturePolicy {
    fn player(&self) -> &str {
        &self.player
    }

    #[tracing::instrument(level = "debug", skip_all, fields(player = %self.player))]
    fn decide(&mut self, maze: &dyn Maze, view: &TurnView) -> Action {
        let Some(position) = view.location_of(&self.player) else {
            return Action::Stay;
        };
        if view.resources.is_empty() {
            self.target = None;
            self.route.clear();
            return Action::Stay;
        }

        let target_gone = self.target.is_none_or(|t| !view.has_resource(t));
        if self.route.is_empty() || target_gone {
            self.replan(maze, position, &view.resources);
        }

        match self.route.pop_front() {
            Some(next) => step_action(maze, position, next),
            None => Action::Stay,
        }
    }
}
