//! Terminal demo of the bolt swarm dispatcher.
//!
//! Builds the factory-hall maze, compares the three search strategies on a
//! sample run, then registers a few bolts and drives them toward random
//! targets. Randomness lives here at the boundary; the core never
//! generates it.
//!
//! Run: RUST_LOG=debug cargo run --bin swarm-demo

use bolt_core::{Location, Maze};
use bolt_paths::{Pathfinder, manhattan};
use bolt_swarm::Swarm;
use rand::RngExt;

/// The factory floor: 0 = free, 1 = blocked.
const FACTORY_HALL: [[u8; 10]; 10] = [
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    [1, 1, 1, 1, 0, 1, 1, 0, 1, 1],
    [0, 0, 0, 0, 0, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [1, 1, 0, 1, 0, 0, 1, 0, 1, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 0, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 0, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 1, 1, 1, 1, 1],
];

fn compare_searches(maze: &Maze, start: Location, goal: Location) {
    let mut finder = Pathfinder::new();
    let dfs = finder.depth_first(maze, start, |l| l == goal);
    let bfs = finder.breadth_first(maze, start, |l| l == goal);
    let astar = finder.astar(maze, start, |l| l == goal, |l| manhattan(l, goal));

    println!("search comparison {start} -> {goal}:");
    for (name, result) in [("dfs", dfs), ("bfs", bfs), ("a*", astar)] {
        match result.path {
            Some(path) => println!(
                "  {name:<4} explored {:>3} cells, path length {}",
                result.explored,
                path.len()
            ),
            None => println!("  {name:<4} explored {:>3} cells, no path", result.explored),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let maze = Maze::from_rows(&FACTORY_HALL)?;
    log::info!("factory hall loaded: {}x{}", maze.width(), maze.height());
    print!("{maze}");
    compare_searches(&maze, Location::ZERO, Location::new(9, 4));

    let mut swarm = Swarm::new(maze);
    for _ in 0..3 {
        let bolt = swarm.register();
        println!("registered bolt {} at {}", bolt.id(), bolt.position());
    }

    let mut rng = rand::rng();
    for _ in 0..8 {
        let target = Location::new(rng.random_range(0..10), rng.random_range(0..10));
        match swarm.dispatch(target)? {
            Some((id, waypoints)) => {
                println!("bolt {id} -> {target} via {} waypoints", waypoints.len());
                while swarm.is_busy(id)? {
                    let pos = swarm.step(id)?;
                    println!("  bolt {id} now at {pos}");
                }
            }
            None => println!("no idle bolt can reach {target}"),
        }
    }

    for bolt in swarm.bolts() {
        println!(
            "bolt {} finished at {} (pending {})",
            bolt.id(),
            bolt.position(),
            bolt.pending_move()
        );
    }
    Ok(())
}
