use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::infra::{Action, GameObserver, Vertex, simulate_move};
use crate::planners::TurnPolicy;
use crate::state::{Maze, TurnView};

/// Result of a finished match.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub turns: u32,
    pub scores: Vec<(String, f64)>,
    /// None on a draw.
    pub winner: Option<String>,
}

struct PlayerSlot {
    name: String,
    policy: Box<dyn TurnPolicy>,
    position: Vertex,
    score: f64,
    /// Destination and remaining turns while crossing a muddy passage.
    transit: Option<(Vertex, u32)>,
}

/// Turn-loop orchestrator: runs two policies on one maze until every
/// resource is collected or the turn cap is reached. Both players act
/// each turn; crossing a passage of weight w keeps the player in
/// transit for w turns; simultaneous arrival on a resource splits its
/// value.
pub struct Game<M: Maze> {
    maze: M,
    players: Vec<PlayerSlot>,
    resources: Vec<Vertex>,
    max_turns: u32,
    observer: Box<dyn GameObserver>,
}

impl<M: Maze> Game<M> {
    pub fn new(maze: M, max_turns: u32, observer: impl GameObserver + 'static) -> Self {
        Self {
            maze,
            players: Vec::new(),
            resources: Vec::new(),
            max_turns,
            observer: Box::new(observer),
        }
    }

    pub fn add_player(&mut self, policy: Box<dyn TurnPolicy>, start: Vertex) {
        self.players.push(PlayerSlot {
            name: policy.player().to_string(),
            policy,
            position: start,
            score: 0.0,
            transit: None,
        });
    }

    pub fn place_resources(&mut self, resources: Vec<Vertex>) {
        self.resources = resources;
    }

    /// Drop `count` resources on distinct random vertices, avoiding the
    /// player starting positions.
    pub fn scatter_resources(&mut self, count: usize, rng: &mut impl Rng) {
        let occupied: Vec<Vertex> = self.players.iter().map(|p| p.position).collect();
        let mut free: Vec<Vertex> = self
            .maze
            .vertices()
            .into_iter()
            .filter(|v| !occupied.contains(v))
            .collect();
        free.shuffle(rng);
        free.truncate(count);
        self.resources = free;
    }

    fn snapshot(&self) -> TurnView {
        TurnView {
            player_locations: self
                .players
                .iter()
                .map(|p| (p.name.clone(), p.position))
                .collect(),
            resources: self.resources.clone(),
        }
    }

    pub fn run(&mut self) -> MatchOutcome {
        self.observer
            .on_game_start(self.maze.vertices().len(), self.resources.len());

        let view = self.snapshot();
        for player in &mut self.players {
            player.policy.setup(&self.maze, &view);
        }

        let mut turns = 0;
        while turns < self.max_turns && !self.resources.is_empty() {
            let view = self.snapshot();
            self.observer.on_turn_start(turns, &view);

            let maze = &self.maze;
            let actions: Vec<Action> = self
                .players
                .iter_mut()
                .map(|p| p.policy.decide(maze, &view))
                .collect();

            for (player, action) in self.players.iter_mut().zip(&actions) {
                self.observer.on_action(&player.name, *action);
                Self::advance(maze, player, *action);
            }
            self.collect_resources();
            turns += 1;
        }

        let scores: Vec<(String, f64)> = self
            .players
            .iter()
            .map(|p| (p.name.clone(), p.score))
            .collect();
        let outcome = MatchOutcome {
            turns,
            winner: Self::winner(&scores),
            scores,
        };
        self.observer.on_game_finished(&outcome);
        outcome
    }

    /// Resolve one player's move. Players in transit keep crossing
    /// their muddy passage and their queued action is discarded; a
    /// move without an open passage is a stay.
    fn advance(maze: &M, player: &mut PlayerSlot, action: Action) {
        if let Some((destination, remaining)) = player.transit {
            if remaining <= 1 {
                player.position = destination;
                player.transit = None;
            } else {
                player.transit = Some((destination, remaining - 1));
            }
            return;
        }

        let Some(next) = simulate_move(maze, player.position, action) else {
            return;
        };
        if next == player.position || !maze.neighbors(player.position).contains(&next) {
            if action != Action::Stay {
                debug!(player = %player.name, ?action, "Move blocked by wall");
            }
            return;
        }

        let weight = maze.weight(player.position, next).round() as u32;
        if weight <= 1 {
            player.position = next;
        } else {
            player.transit = Some((next, weight - 1));
        }
    }

    fn collect_resources(&mut self) {
        let mut positions: HashMap<Vertex, Vec<usize>> = HashMap::new();
        for (index, player) in self.players.iter().enumerate() {
            positions.entry(player.position).or_default().push(index);
        }

        let collected: Vec<Vertex> = self
            .resources
            .iter()
            .copied()
            .filter(|v| positions.contains_key(v))
            .collect();
        for vertex in collected {
            let collectors = &positions[&vertex];
            let value = 1.0 / collectors.len() as f64;
            for &index in collectors {
                self.players[index].score += value;
                self.observer
                    .on_resource_collected(&self.players[index].name, vertex, value);
            }
            self.resources.retain(|&v| v != vertex);
        }
    }

    fn winner(scores: &[(String, f64)]) -> Option<String> {
        let best = scores.iter().map(|(_, s)| *s).fold(f64::MIN, f64::max);
        let mut leaders = scores.iter().filter(|(_, s)| *s == best);
        let leader = leaders.next()?;
        if leaders.next().is_some() {
            None
        } else {
            Some(leader.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::DefaultObserver;
    use crate::planners::build_policy;
    use crate::state::GridMaze;

    fn corridor_game(policy_kind: &str, length: usize) -> Game<GridMaze> {
        let maze = GridMaze::open(length, 1).unwrap();
        let mut game = Game::new(maze, 100, DefaultObserver);
        game.add_player(build_policy(policy_kind, "rat").unwrap(), 0);
        game
    }

    #[test]
    fn test_single_player_collects_everything() {
        for kind in ["greedy", "replan-on-capture", "replan-each-turn", "density"] {
            let mut game = corridor_game(kind, 5);
            game.place_resources(vec![2, 4]);
            let outcome = game.run();
            assert_eq!(outcome.scores[0].1, 2.0, "policy {kind}");
            assert!(game.resources.is_empty());
            assert_eq!(outcome.winner.as_deref(), Some("rat"));
        }
    }

    #[test]
    fn test_turn_cap_stops_unwinnable_game() {
        let mut maze = GridMaze::open(3, 1).unwrap();
        maze.remove_passage(1, 2);
        let mut game = Game::new(maze, 10, DefaultObserver);
        game.add_player(build_policy("replan-each-turn", "rat").unwrap(), 0);
        game.place_resources(vec![2]);
        let outcome = game.run();
        assert_eq!(outcome.turns, 10);
        assert_eq!(outcome.scores[0].1, 0.0);
    }

    #[test]
    fn test_mud_delays_arrival() {
        let mut maze = GridMaze::open(2, 1).unwrap();
        maze.add_passage(0, 1, 3.0);
        let mut game = Game::new(maze, 100, DefaultObserver);
        game.add_player(build_policy("replan-each-turn", "rat").unwrap(), 0);
        game.place_resources(vec![1]);
        let outcome = game.run();
        // Crossing a weight-3 passage takes three turns.
        assert_eq!(outcome.turns, 3);
        assert_eq!(outcome.scores[0].1, 1.0);
    }

    #[test]
    fn test_simultaneous_arrival_splits_value() {
        let maze = GridMaze::open(3, 1).unwrap();
        let mut game = Game::new(maze, 100, DefaultObserver);
        game.add_player(build_policy("replan-each-turn", "rat").unwrap(), 0);
        game.add_player(build_policy("replan-each-turn", "python").unwrap(), 2);
        game.place_resources(vec![1]);
        let outcome = game.run();
        assert_eq!(outcome.turns, 1);
        assert_eq!(outcome.scores[0].1, 0.5);
        assert_eq!(outcome.scores[1].1, 0.5);
        assert_eq!(outcome.winner, None);
    }

    #[test]
    fn test_adversarial_policy_beats_distance_on_home_turf() {
        // Resources on the rat's side of the corridor belong to the
        // rat; the density navigator should take at least its half.
        let maze = GridMaze::open(7, 1).unwrap();
        let mut game = Game::new(maze, 200, DefaultObserver);
        game.add_player(build_policy("density", "rat").unwrap(), 0);
        game.add_player(build_policy("replan-each-turn", "python").unwrap(), 6);
        game.place_resources(vec![1, 5]);
        let outcome = game.run();
        let rat_score = outcome.scores[0].1;
        assert!(rat_score >= 1.0, "rat scored {rat_score}");
    }
}
