mod maze;
mod view;

pub use maze::{GridMaze, GridMazeParams, Maze, MazeError};
pub use view::TurnView;
