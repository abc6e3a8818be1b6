pub mod game;
pub mod infra;
pub mod planners;
pub mod state;

// Re-export commonly used types for convenience
pub use game::{Game, MatchOutcome};
pub use infra::{Action, Coords, PathTable, ShortestPaths, Vertex};
pub use planners::{TurnPolicy, build_policy};
pub use state::{GridMaze, GridMazeParams, Maze, TurnView};
