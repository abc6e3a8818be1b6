use std::env;

use dotenv::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use forager::game::Game;
use forager::infra::DefaultObserver;
use forager::planners::build_policy;
use forager::state::{GridMaze, GridMazeParams};

fn get_env_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|val| val.parse::<T>().ok())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forager=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let width: usize = get_env_var("FORAGER_WIDTH").unwrap_or(15);
    let height: usize = get_env_var("FORAGER_HEIGHT").unwrap_or(11);
    let resources: usize = get_env_var("FORAGER_RESOURCES").unwrap_or(21);
    let max_turns: u32 = get_env_var("FORAGER_TURNS").unwrap_or(2000);
    let seed: Option<u64> = get_env_var("FORAGER_SEED");
    let policy1 = env::var("FORAGER_POLICY1").unwrap_or_else(|_| "density".to_string());
    let policy2 = env::var("FORAGER_POLICY2").unwrap_or_else(|_| "greedy".to_string());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(width, height, resources, %policy1, %policy2, "Setting up match");

    let params = GridMazeParams::new(width, height);
    let maze = GridMaze::generate(&params, &mut rng)?;

    // Opposite corners.
    let start1 = 0;
    let start2 = maze.vertex_count() - 1;

    let mut game = Game::new(maze, max_turns, DefaultObserver);
    game.add_player(build_policy(&policy1, "player1")?, start1);
    game.add_player(build_policy(&policy2, "player2")?, start2);
    game.scatter_resources(resources, &mut rng);

    let outcome = game.run();
    match outcome.winner {
        Some(winner) => tracing::info!(%winner, turns = outcome.turns, "Match over"),
        None => tracing::info!(turns = outcome.turns, "Match over, draw"),
    }

    Ok(())
}
