use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::infra::Vertex;
use crate::state::Maze;

#[derive(Clone)]
struct FrontierNode {
    vertex: Vertex,
    distance: f64,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.distance.total_cmp(&other.distance) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths over a weighted maze.
///
/// Distances to unreachable vertices are `f64::INFINITY` and their
/// predecessor is `None`; absence is never an error.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: Vertex,
    distances: HashMap<Vertex, f64>,
    previous: HashMap<Vertex, Option<Vertex>>,
}

impl ShortestPaths {
    /// Dijkstra with a binary-heap frontier and lazy deletion: stale
    /// heap entries are skipped when popped. Requires non-negative
    /// edge weights.
    pub fn compute(maze: &dyn Maze, source: Vertex) -> Self {
        let mut distances: HashMap<Vertex, f64> = HashMap::new();
        let mut previous: HashMap<Vertex, Option<Vertex>> = HashMap::new();
        for vertex in maze.vertices() {
            distances.insert(vertex, f64::INFINITY);
            previous.insert(vertex, None);
        }
        distances.insert(source, 0.0);

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierNode {
            vertex: source,
            distance: 0.0,
        });

        while let Some(FrontierNode { vertex, distance }) = frontier.pop() {
            if distance > distances.get(&vertex).copied().unwrap_or(f64::INFINITY) {
                continue;
            }

            for neighbor in maze.neighbors(vertex) {
                let weight = maze.weight(vertex, neighbor);
                let alt = distance + weight;
                if alt < distances.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                    distances.insert(neighbor, alt);
                    previous.insert(neighbor, Some(vertex));
                    frontier.push(FrontierNode {
                        vertex: neighbor,
                        distance: alt,
                    });
                }
            }
        }

        Self {
            source,
            distances,
            previous,
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Shortest distance from the source, or infinity when unreachable.
    pub fn distance(&self, vertex: Vertex) -> f64 {
        self.distances.get(&vertex).copied().unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Predecessor of a vertex on its shortest path from the source.
    /// `None` for the source itself and for unreached vertices.
    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.previous.get(&vertex).copied().flatten()
    }

    /// The shortest route from the source to `target`: every vertex
    /// after the source, in order, ending at `target`. Empty when the
    /// target is the source itself or is unreachable.
    pub fn route_to(&self, target: Vertex) -> Vec<Vertex> {
        let mut route = Vec::new();
        let mut current = target;
        while current != self.source {
            route.push(current);
            match self.predecessor(current) {
                Some(prev) => current = prev,
                None => return Vec::new(),
            }
        }
        route.reverse();
        route
    }
}
