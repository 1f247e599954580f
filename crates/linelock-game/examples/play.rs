//! Example playing a linelock game from the terminal.
//!
//! Reads `x y` coordinate pairs from stdin, one pair per line, and performs a
//! step on that cell. The board and any emitted events are printed after each
//! move. An empty line or EOF quits.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play
//! ```
//!
//! Start a 4x4 game pre-seeded with 5 locked givens:
//!
//! ```sh
//! cargo run --example play -- --size 4 --givens 5 --seed 42
//! ```

use std::io::{self, BufRead as _, Write as _};

use clap::Parser;
use linelock_game::Game;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board dimension N (values run 1..=N).
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: usize,

    /// Number of pre-filled, locked cells to seed the board with.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    givens: usize,

    /// RNG seed for reproducible seeding.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = Game::with_size(args.size);
    if args.givens > 0 {
        let placed = game.new_game_seeded(args.givens, args.seed);
        println!("Seeded {placed} given(s).");
    } else {
        game.new_game();
    }
    drain_events(&mut game);
    print!("{}", game.board());

    let stdin = io::stdin();
    loop {
        print!("step x y> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let Some((x, y)) = parse_coordinate(line) else {
            eprintln!("expected two numbers, e.g. `0 3`");
            continue;
        };
        match game.step(x, y) {
            Ok(()) => {
                drain_events(&mut game);
                print!("{}", game.board());
            }
            Err(err) => eprintln!("{err}"),
        }
        if game.is_game_over() {
            println!("You won!");
            break;
        }
    }
    Ok(())
}

fn parse_coordinate(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

fn drain_events(game: &mut Game) {
    while let Some(event) = game.poll_event() {
        println!("* {event}");
    }
}
