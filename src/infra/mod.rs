mod all_pairs;
mod assignment;
mod density;
mod dijkstra;
mod game_observer;
mod types;

pub use all_pairs::PathTable;
pub use assignment::{assign_resources, closest_accessible};
pub use density::density_move;
pub use dijkstra::ShortestPaths;
pub use game_observer::{DefaultObserver, GameObserver};
pub use types::{Action, Coords, Vertex};

use crate::state::Maze;

// ============================================================================
// Helper functions
// ============================================================================

/// Translate one step between two adjacent vertices into a move command.
/// Assumes adjacency; any other coordinate delta (including none) maps
/// to `Stay`.
pub fn step_action(maze: &dyn Maze, from: Vertex, to: Vertex) -> Action {
    let a = maze.coords_of(from);
    let b = maze.coords_of(to);
    match (b.row - a.row, b.col - a.col) {
        (-1, _) => Action::North,
        (1, _) => Action::South,
        (_, -1) => Action::West,
        (_, 1) => Action::East,
        _ => Action::Stay,
    }
}

/// The vertex a move would land on, or None when it leaves the grid.
/// `Stay` lands on the current vertex. Walls are not consulted; this is
/// a structural probe.
pub fn simulate_move(maze: &dyn Maze, position: Vertex, action: Action) -> Option<Vertex> {
    if action == Action::Stay {
        return Some(position);
    }
    maze.vertex_at(maze.coords_of(position).shifted(action))
}

/// The directional moves that stay on the grid, in enumeration order.
pub fn valid_moves(maze: &dyn Maze, position: Vertex) -> Vec<Action> {
    Action::DIRECTIONS
        .into_iter()
        .filter(|&a| simulate_move(maze, position, a).is_some())
        .collect()
}
