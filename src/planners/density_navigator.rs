use tracing::debug;

use crate::infra::{
    Action, ShortestPaths, assign_resources, closest_accessible, density_move, step_action,
};
use crate::planners::TurnPolicy;
use crate::state::{Maze, TurnView};

/// The opponent-aware variant. Every step it computes shortest paths
/// from both agents, ranks the resources it can win via
/// `assign_resources`, and heads for the top-ranked one.
///
/// Fallback cascade when nothing is winnable: first the closest
/// accessible resource regardless of contention, then a density-guided
/// exploratory move. Every branch resolves to a concrete action.
pub struct DensityNavigator {
    player: String,
}

impl DensityNavigator {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
        }
    }
}

impl TurnPolicy for DensityNavigator {
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

        // A missing opponent degenerates to racing against ourselves,
        // which makes every reachable resource winnable.
        let opponent_position = view
            .opponent_of(&self.player)
            .map(|(_, v)| v)
            .unwrap_or(position);

        let own = ShortestPaths::compute(maze, position);
        let opponent = ShortestPaths::compute(maze, opponent_position);

        let assigned = assign_resources(&own, &opponent, &view.resources);

        if assigned.is_empty() {
            // Nothing winnable: chase the closest resource anyway, and
            // failing that, drift toward resource density.
            if let Some(closest) = closest_accessible(&own, &view.resources) {
                let route = own.route_to(closest);
                if let Some(&next) = route.first() {
                    debug!(?closest, "No winnable resource, contesting closest");
                    return step_action(maze, position, next);
                }
            }
            debug!("No accessible resource, density fallback");
            return density_move(maze, &own, &view.resources, position);
        }

        let (target, distance) = assigned[0];
        debug!(?target, distance, "Pursuing winnable resource");
        let route = own.route_to(target);
        match route.first() {
            Some(&next) => step_action(maze, position, next),
            None => density_move(maze, &own, &view.resources, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Vertex;
    use crate::state::GridMaze;
    use std::collections::HashMap;

    fn view(own: Vertex, opponent: Vertex, resources: Vec<Vertex>) -> TurnView {
        TurnView {
            player_locations: HashMap::from([
                ("rat".to_string(), own),
                ("python".to_string(), opponent),
            ]),
            resources,
        }
    }

    #[test]
    fn test_pursues_winnable_resource_over_nearer_lost_one() {
        // Corridor 0..=4: agent at 0, opponent at 3. Resource 2 is
        // nearer to the opponent, resource 1 is winnable.
        let maze = GridMaze::open(5, 1).unwrap();
        let mut policy = DensityNavigator::new("rat");
        assert_eq!(policy.decide(&maze, &view(0, 3, vec![2, 1])), Action::East);
    }

    #[test]
    fn test_splits_contested_board() {
        // 4x4 grid, agent at 0, opponent at 15, resources at 5 and 10:
        // only 5 is winnable, and the first hop heads toward it.
        let maze = GridMaze::open(4, 4).unwrap();
        let mut policy = DensityNavigator::new("rat");
        let action = policy.decide(&maze, &view(0, 15, vec![10, 5]));
        assert!(matches!(action, Action::East | Action::South));
    }

    #[test]
    fn test_contests_closest_when_nothing_winnable() {
        // Opponent sits on top of the only resource's neighborhood.
        let maze = GridMaze::open(4, 1).unwrap();
        let mut policy = DensityNavigator::new("rat");
        // Resource 3: own distance 3, opponent distance 1 -> lost, but
        // still contested as the closest accessible one.
        assert_eq!(policy.decide(&maze, &view(0, 2, vec![3])), Action::East);
    }

    #[test]
    fn test_density_fallback_when_unreachable() {
        // The only resource is walled off; the policy must still emit
        // a structurally valid move.
        let mut maze = GridMaze::open(2, 2).unwrap();
        maze.remove_passage(1, 3);
        maze.remove_passage(2, 3);
        let mut policy = DensityNavigator::new("rat");
        let action = policy.decide(&maze, &view(0, 1, vec![3]));
        assert!(matches!(action, Action::South | Action::East));
    }

    #[test]
    fn test_stays_when_no_resources() {
        let maze = GridMaze::open(3, 3).unwrap();
        let mut policy = DensityNavigator::new("rat");
        assert_eq!(policy.decide(&maze, &view(4, 8, vec![])), Action::Stay);
    }

    #[test]
    fn test_handles_missing_opponent() {
        let maze = GridMaze::open(3, 1).unwrap();
        let mut policy = DensityNavigator::new("rat");
        let v = TurnView {
            player_locations: HashMap::from([("rat".to_string(), 0)]),
            resources: vec![2],
        };
        assert_eq!(policy.decide(&maze, &v), Action::East);
    }
}
