//! npuzzle — command-line front end for the sliding puzzle solver.
//!
//! Scrambles a board, runs the selected search algorithm, and prints the
//! move sequence. All presentation concerns live here; the engine crates
//! only ever see two boards and an algorithm tag.

use std::time::Instant;

use rand::{Rng, RngExt};

use npuzzle_core::Board;
use npuzzle_search::{Algorithm, solve};

const USAGE: &str = "\
Usage: npuzzle [OPTIONS]

Options:
  -n, --side <N>          puzzle side length, 2..=16 (default 3)
  -a, --algorithm <NAME>  \"A*\" or \"Greedy Best First\" (default \"A*\")
  -s, --scramble <K>      scramble with K random moves from the goal
                          instead of a full shuffle
  -h, --help              print this help

Set RUST_LOG=debug for search statistics.";

struct Args {
    side: usize,
    algorithm: Algorithm,
    scramble: Option<usize>,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut parsed = Args {
        side: 3,
        algorithm: Algorithm::AStar,
        scramble: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" | "--side" => {
                let value = args.next().ok_or("--side needs a value")?;
                parsed.side = value.parse()?;
            }
            "-a" | "--algorithm" => {
                let value = args.next().ok_or("--algorithm needs a value")?;
                parsed.algorithm = value.parse()?;
            }
            "-s" | "--scramble" => {
                let value = args.next().ok_or("--scramble needs a value")?;
                parsed.scramble = Some(value.parse()?);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => {
                return Err(format!("unknown argument \u{201c}{other}\u{201d}\n\n{USAGE}").into());
            }
        }
    }
    if !(2..=16).contains(&parsed.side) {
        return Err("side must be in 2..=16".into());
    }
    Ok(parsed)
}

/// Scramble by applying `steps` random legal moves to the goal. Stays in
/// the solvable class by construction, and keeps the instance shallow
/// enough for the informed drivers on large boards.
fn random_walk<R: Rng>(goal: &Board, steps: usize, rng: &mut R) -> Board {
    let mut board = goal.clone();
    for _ in 0..steps {
        let mut successors = board.successors();
        let pick = rng.random_range(0..successors.len());
        board = successors.swap_remove(pick).1;
    }
    board
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = parse_args()?;

    let goal = Board::solved(args.side);
    let mut rng = rand::rng();
    let initial = match args.scramble {
        Some(steps) => random_walk(&goal, steps, &mut rng),
        None => Board::scrambled(args.side, &mut rng),
    };

    println!("{}-puzzle, {}:", args.side * args.side - 1, args.algorithm);
    println!("{initial}");

    let started = Instant::now();
    let outcome = solve(&initial, &goal, args.algorithm)?;
    let elapsed = started.elapsed();

    match outcome {
        None => println!("No solution found ({elapsed:.2?})"),
        Some(moves) if moves.is_empty() => println!("Already solved ({elapsed:.2?})"),
        Some(moves) => {
            let labels: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
            println!(
                "Solved in {} moves ({elapsed:.2?}): {}",
                moves.len(),
                labels.join(" ")
            );
            let mut board = initial;
            for &mv in &moves {
                board = board
                    .apply(mv)
                    .ok_or("solver returned an illegal move")?;
            }
            println!();
            println!("{board}");
        }
    }
    Ok(())
}
