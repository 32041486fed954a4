use std::time::Instant;

use clap::Parser;
use owo_colors::OwoColorize;

use connect4::agents::{play_game, Agent};
use connect4::game::{Outcome, Piece};
use connect4::logging;

#[derive(Parser)]
#[command(about = "Simulate games between two agents.")]
struct Opts {
    #[arg(short, long, default_value = "10")]
    game_count: usize,
    #[arg(short, long)]
    verbose: bool,

    /// The first agent plays the computer side, the second one the player.
    #[arg(num_args = 2, required = true)]
    agents: Vec<Agent>,
}

fn main() {
    logging();

    let Opts {
        game_count,
        verbose,
        agents,
    } = Opts::parse();

    let start = Instant::now();

    // win, draw, loss and aborted games
    let mut results = [0; 4];
    for i in 0..game_count {
        // alternate the starting side
        let first = if i % 2 == 0 { Piece::Ai } else { Piece::Player };
        let outcome = play_game(&agents[0], &agents[1], first, verbose);
        let text = match outcome {
            Outcome::Winner(Piece::Ai) => {
                results[0] += 1;
                "Win".bright_green().to_string()
            }
            Outcome::Draw => {
                results[1] += 1;
                "Draw".bright_yellow().to_string()
            }
            Outcome::Winner(Piece::Player) => {
                results[2] += 1;
                "Loss".bright_red().to_string()
            }
            Outcome::Winner(Piece::Empty) | Outcome::None => {
                results[3] += 1;
                "Aborted".bright_black().to_string()
            }
        };
        println!("{}: {} {}ms", text, i, start.elapsed().as_millis());
    }

    println!(
        "Result: {}/{}/{} (win/draw/loss)",
        results[0], results[1], results[2]
    );
    if results[3] > 0 {
        println!("{} games aborted", results[3].bright_red());
    }
}
