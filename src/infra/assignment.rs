use std::collections::HashSet;

use crate::infra::{ShortestPaths, Vertex};

/// Rank the resources the navigating agent can win against the opponent.
///
/// A resource is winnable when the agent's distance is at most the
/// opponent's; an exact tie counts as a win for the agent. The result is
/// ordered nearest first. The second pass re-checks the winnability of
/// every candidate before committing it, so the contract "no returned
/// resource is won by the opponent" holds independently of the filter.
///
/// An empty result is a normal outcome: every resource is either
/// unreachable or closer to the opponent, and the caller falls back.
pub fn assign_resources(
    own: &ShortestPaths,
    opponent: &ShortestPaths,
    resources: &[Vertex],
) -> Vec<(Vertex, f64)> {
    let mut candidates: Vec<(Vertex, f64)> = Vec::new();
    for &resource in resources {
        let d_own = own.distance(resource);
        let d_opp = opponent.distance(resource);
        if d_own <= d_opp {
            candidates.push((resource, d_own));
        }
    }

    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut assigned = Vec::new();
    let mut claimed: HashSet<Vertex> = HashSet::new();
    for (resource, d_own) in candidates {
        if claimed.contains(&resource) {
            continue;
        }
        if opponent.distance(resource) < own.distance(resource) {
            continue;
        }
        assigned.push((resource, d_own));
        claimed.insert(resource);
    }
    assigned
}

/// The nearest resource by the agent's own distances, ignoring the
/// opponent entirely. None when no resource is reachable at all.
pub fn closest_accessible(own: &ShortestPaths, resources: &[Vertex]) -> Option<Vertex> {
    let mut closest = None;
    let mut closest_distance = f64::INFINITY;
    for &resource in resources {
        let d = own.distance(resource);
        if d < closest_distance {
            closest_distance = d;
            closest = Some(resource);
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GridMaze;

    #[test]
    fn test_only_winnable_resources_returned() {
        // 4x4 grid, agent at 0, opponent at 15. Resource 5 is closer to
        // the agent, resource 10 closer to the opponent.
        let maze = GridMaze::open(4, 4).unwrap();
        let own = ShortestPaths::compute(&maze, 0);
        let opponent = ShortestPaths::compute(&maze, 15);

        let assigned = assign_resources(&own, &opponent, &[5, 10]);
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].0, 5);
        assert_eq!(assigned[0].1, own.distance(5));
    }

    #[test]
    fn test_tie_favors_navigating_agent() {
        // 3x1 corridor, both agents equidistant from the middle cell.
        let maze = GridMaze::open(3, 1).unwrap();
        let own = ShortestPaths::compute(&maze, 0);
        let opponent = ShortestPaths::compute(&maze, 2);

        let assigned = assign_resources(&own, &opponent, &[1]);
        assert_eq!(assigned, vec![(1, 1.0)]);
    }

    #[test]
    fn test_result_sorted_ascending() {
        let maze = GridMaze::open(5, 5).unwrap();
        let own = ShortestPaths::compute(&maze, 0);
        let opponent = ShortestPaths::compute(&maze, 24);

        let assigned = assign_resources(&own, &opponent, &[6, 1, 7, 2]);
        for pair in assigned.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
        for (resource, d) in &assigned {
            assert!(own.distance(*resource) <= opponent.distance(*resource));
            assert_eq!(*d, own.distance(*resource));
        }
    }

    #[test]
    fn test_empty_when_opponent_wins_everything() {
        let maze = GridMaze::open(4, 1).unwrap();
        let own = ShortestPaths::compute(&maze, 0);
        let opponent = ShortestPaths::compute(&maze, 3);

        // Both resources sit on the opponent's side of the corridor.
        assert!(assign_resources(&own, &opponent, &[2]).is_empty());
        assert!(assign_resources(&own, &opponent, &[3]).is_empty());
    }

    #[test]
    fn test_closest_accessible_skips_unreachable() {
        let mut maze = GridMaze::open(3, 1).unwrap();
        maze.remove_passage(1, 2);
        let own = ShortestPaths::compute(&maze, 0);

        assert_eq!(closest_accessible(&own, &[2, 1]), Some(1));
        assert_eq!(closest_accessible(&own, &[2]), None);
        assert_eq!(closest_accessible(&own, &[]), None);
    }
}
