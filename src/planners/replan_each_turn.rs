use tracing::debug;

use crate::infra::{Action, ShortestPaths, closest_accessible, step_action};
use crate::planners::TurnPolicy;
use crate::state::{Maze, TurnView};

/// The most reactive greedy variant: a fresh Dijkstra from the current
/// position on every step, always retargeting the globally nearest
/// resource and taking a single hop toward it. No state survives
/// between steps, at the cost of redundant recomputation.
pub struct ReplanEachTurnPolicy {
    player: String,
}

impl ReplanEachTurnPolicy {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
        }
    }
}

impl TurnPolicy for ReplanEachTurnPolicy {
    fn player(&self) -> &str {
        &self.player
    }

    #[tracing::instrument(level = "debug", skip_all, fields(player = %self.player))]
    fn decide(&mut self, maze: &dyn Maze, view: &TurnView) -> Action {
        let Some(position) = view.location_of(&self.player) else {
            return Action::Stay;
        };
        if view.resources.is_empty() {
            return Action::Stay;
        }

        let paths = ShortestPaths::compute(maze, position);
        let Some(target) = closest_accessible(&paths, &view.resources) else {
            debug!("No resource reachable");
            return Action::Stay;
        };

        let route = paths.route_to(target);
        match route.first() {
            Some(&next) => step_action(maze, position, next),
            None => Action::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Vertex;
    use crate::state::GridMaze;
    use std::collections::HashMap;

    fn view(position: Vertex, resources: Vec<Vertex>) -> TurnView {
        TurnView {
            player_locations: HashMap::from([("rat".to_string(), position)]),
            resources,
        }
    }

    #[test]
    fn test_retargets_every_step() {
        let maze = GridMaze::open(5, 1).unwrap();
        let mut policy = ReplanEachTurnPolicy::new("rat");

        // Nearest is 1; after a resource appears closer on the other
        // side there is no commitment to honor.
        assert_eq!(policy.decide(&maze, &view(2, vec![1, 4])), Action::West);
        assert_eq!(policy.decide(&maze, &view(2, vec![3, 4])), Action::East);
    }

    #[test]
    fn test_stays_on_empty_or_unreachable() {
        let mut maze = GridMaze::open(3, 1).unwrap();
        maze.remove_passage(1, 2);
        let mut policy = ReplanEachTurnPolicy::new("rat");

        assert_eq!(policy.decide(&maze, &view(0, vec![])), Action::Stay);
        assert_eq!(policy.decide(&maze, &view(0, vec![2])), Action::Stay);
    }

    #[test]
    fn test_walks_to_adjacent_resource() {
        let maze = GridMaze::open(3, 3).unwrap();
        let mut policy = ReplanEachTurnPolicy::new("rat");
        assert_eq!(policy.decide(&maze, &view(4, vec![7])), Action::South);
    }
}
