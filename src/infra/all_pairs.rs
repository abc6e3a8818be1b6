use std::collections::HashMap;

use tracing::debug;

use crate::infra::{ShortestPaths, Vertex};
use crate::state::Maze;

/// All-pairs shortest routes, built once at setup by running Dijkstra
/// from every vertex. Trades O(V^2) memory for O(route length) lookups
/// per decision step.
pub struct PathTable {
    routes: HashMap<Vertex, HashMap<Vertex, Vec<Vertex>>>,
}

impl PathTable {
    pub fn build(maze: &dyn Maze) -> Self {
        let vertices = maze.vertices();
        debug!("Building path table for {} vertices", vertices.len());

        let mut routes = HashMap::with_capacity(vertices.len());
        for &source in &vertices {
            let paths = ShortestPaths::compute(maze, source);
            let mut from_source = HashMap::with_capacity(vertices.len());
            for &target in &vertices {
                from_source.insert(target, paths.route_to(target));
            }
            routes.insert(source, from_source);
        }
        Self { routes }
    }

    /// The cached route from one vertex to another, excluding the start
    /// vertex. Empty when the target is unreachable or equals the start.
    pub fn route(&self, from: Vertex, to: Vertex) -> &[Vertex] {
        self.routes
            .get(&from)
            .and_then(|targets| targets.get(&to))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
