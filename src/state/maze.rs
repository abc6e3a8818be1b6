use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::infra::{Coords, Vertex};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// The graph the decision engine navigates. Implementations expose the
/// vertex set, the neighbor relation with positive edge weights, and the
/// mapping between vertex identifiers and grid coordinates.
pub trait Maze {
    fn vertices(&self) -> Vec<Vertex>;

    fn neighbors(&self, vertex: Vertex) -> Vec<Vertex>;

    /// Weight of the edge between two adjacent vertices. Non-adjacent
    /// pairs report infinity.
    fn weight(&self, from: Vertex, to: Vertex) -> f64;

    fn coords_of(&self, vertex: Vertex) -> Coords;

    /// The vertex at the given coordinates, or None when off the grid.
    fn vertex_at(&self, coords: Coords) -> Option<Vertex>;
}

/// Parameters for random maze generation.
#[derive(Debug, Clone)]
pub struct GridMazeParams {
    pub width: usize,
    pub height: usize,
    /// Probability of reopening a wall on top of the spanning tree.
    pub extra_passages: f64,
    /// Probability that a passage is muddy (weight > 1).
    pub mud_chance: f64,
    /// Maximum mud weight; muddy passages get a weight in 2..=mud_max.
    pub mud_max: u32,
}

impl GridMazeParams {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            extra_passages: 0.2,
            mud_chance: 0.1,
            mud_max: 9,
        }
    }
}

/// A rectangular maze with symmetric weighted passages between
/// orthogonally adjacent cells. Vertices are numbered row-major.
#[derive(Debug, Clone)]
pub struct GridMaze {
    width: usize,
    height: usize,
    passages: HashMap<Vertex, Vec<(Vertex, f64)>>,
}

impl GridMaze {
    /// A maze with every orthogonal passage open at unit weight.
    pub fn open(width: usize, height: usize) -> Result<Self, MazeError> {
        let mut maze = Self::empty(width, height)?;
        for row in 0..height {
            for col in 0..width {
                let v = row * width + col;
                if col + 1 < width {
                    maze.add_passage(v, v + 1, 1.0);
                }
                if row + 1 < height {
                    maze.add_passage(v, v + width, 1.0);
                }
            }
        }
        Ok(maze)
    }

    /// A maze with no passages at all. Useful as a starting point for
    /// tests that build exact topologies via `add_passage`.
    pub fn empty(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            passages: HashMap::new(),
        })
    }

    /// Generate a random connected maze: a randomized-DFS spanning tree
    /// guarantees connectivity, then extra walls are reopened and some
    /// passages are weighted as mud.
    pub fn generate(params: &GridMazeParams, rng: &mut impl Rng) -> Result<Self, MazeError> {
        let mut maze = Self::empty(params.width, params.height)?;
        let total = params.width * params.height;

        let mut visited = vec![false; total];
        let mut stack = vec![0];
        visited[0] = true;
        while let Some(&current) = stack.last() {
            let mut unvisited: Vec<Vertex> = maze
                .grid_neighbors(current)
                .into_iter()
                .filter(|&n| !visited[n])
                .collect();
            if unvisited.is_empty() {
                stack.pop();
                continue;
            }
            unvisited.shuffle(rng);
            let next = unvisited[0];
            visited[next] = true;
            let weight = maze.roll_weight(params, rng);
            maze.add_passage(current, next, weight);
            stack.push(next);
        }

        // Reopen a fraction of the remaining walls so the maze has cycles.
        for v in 0..total {
            for n in maze.grid_neighbors(v) {
                if n > v && !maze.has_passage(v, n) && rng.random_bool(params.extra_passages) {
                    let weight = maze.roll_weight(params, rng);
                    maze.add_passage(v, n, weight);
                }
            }
        }

        Ok(maze)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn vertex_count(&self) -> usize {
        self.width * self.height
    }

    /// Open a symmetric passage between two cells, replacing any
    /// existing weight.
    pub fn add_passage(&mut self, a: Vertex, b: Vertex, weight: f64) {
        self.remove_passage(a, b);
        self.passages.entry(a).or_default().push((b, weight));
        self.passages.entry(b).or_default().push((a, weight));
    }

    /// Close the passage between two cells, if open.
    pub fn remove_passage(&mut self, a: Vertex, b: Vertex) {
        if let Some(list) = self.passages.get_mut(&a) {
            list.retain(|(n, _)| *n != b);
        }
        if let Some(list) = self.passages.get_mut(&b) {
            list.retain(|(n, _)| *n != a);
        }
    }

    pub fn has_passage(&self, a: Vertex, b: Vertex) -> bool {
        self.passages
            .get(&a)
            .is_some_and(|list| list.iter().any(|(n, _)| *n == b))
    }

    /// Orthogonally adjacent cells, ignoring walls.
    fn grid_neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        let coords = self.coords_of(vertex);
        crate::infra::Action::DIRECTIONS
            .iter()
            .filter_map(|&a| self.vertex_at(coords.shifted(a)))
            .collect()
    }

    fn roll_weight(&self, params: &GridMazeParams, rng: &mut impl Rng) -> f64 {
        if params.mud_max >= 2 && rng.random_bool(params.mud_chance) {
            rng.random_range(2..=params.mud_max) as f64
        } else {
            1.0
        }
    }
}

impl Maze for GridMaze {
    fn vertices(&self) -> Vec<Vertex> {
        (0..self.vertex_count()).collect()
    }

    fn neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        self.passages
            .get(&vertex)
            .map(|list| list.iter().map(|(n, _)| *n).collect())
            .unwrap_or_default()
    }

    fn weight(&self, from: Vertex, to: Vertex) -> f64 {
        self.passages
            .get(&from)
            .and_then(|list| list.iter().find(|(n, _)| *n == to))
            .map(|(_, w)| *w)
            .unwrap_or(f64::INFINITY)
    }

    fn coords_of(&self, vertex: Vertex) -> Coords {
        Coords::new((vertex / self.width) as i32, (vertex % self.width) as i32)
    }

    fn vertex_at(&self, coords: Coords) -> Option<Vertex> {
        if coords.row < 0
            || coords.col < 0
            || coords.row >= self.height as i32
            || coords.col >= self.width as i32
        {
            return None;
        }
        Some(coords.row as usize * self.width + coords.col as usize)
    }
}
