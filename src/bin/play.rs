use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use log::{debug, warn};
use owo_colors::OwoColorize;
use rand::{rngs::SmallRng, SeedableRng};

use connect4::agents::{Agent, Difficulty};
use connect4::game::{Game, Outcome, Piece, COLUMNS};
use connect4::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum First {
    Player,
    Computer,
    Random,
}

#[derive(Parser)]
#[command(about = "Play connect four against the computer.")]
struct Opts {
    #[arg(short, long, value_enum, default_value_t)]
    difficulty: Difficulty,
    /// Who makes the first move.
    #[arg(short, long, value_enum, default_value = "random")]
    first: First,
    /// Overrides the difficulty with a custom configuration.
    #[arg(long)]
    config: Option<Agent>,
}

fn new_game(first: First, rng: &mut SmallRng) -> Game {
    match first {
        First::Player => Game::new(Piece::Player),
        First::Computer => Game::new(Piece::Ai),
        First::Random => Game::random(rng),
    }
}

fn print_game(game: &Game) {
    println!("{:?}", game.board);
    print!(" ");
    for col in 1..=COLUMNS {
        print!(" {}", col);
    }
    println!();
}

fn main() -> io::Result<()> {
    logging();

    let Opts {
        difficulty,
        first,
        config,
    } = Opts::parse();

    let agent = config.unwrap_or_else(|| Agent::from(difficulty));
    debug!("agent {}", agent);

    let mut rng = SmallRng::from_entropy();
    let mut game = new_game(first, &mut rng);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.turn == Piece::Ai && game.outcome() == Outcome::None {
            let result = agent.step(&game.board);
            match result.column.map(|col| (col, game.step(col))) {
                Some((col, Ok(_))) => println!("Computer plays {}", col + 1),
                other => {
                    warn!("computer failed to move: {:?}", other);
                    return Ok(());
                }
            }
            continue;
        }

        print_game(&game);
        match game.outcome() {
            Outcome::Winner(Piece::Player) => println!("{}", "You win!".bright_green()),
            Outcome::Winner(_) => println!("{}", "Computer wins!".bright_red()),
            Outcome::Draw => println!("{}", "Draw!".bright_yellow()),
            Outcome::None => {}
        }
        if game.outcome() == Outcome::None {
            print!("Your move [1-{}, r: reset, q: quit]: ", COLUMNS);
        } else {
            print!("[r: new game, q: quit]: ");
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim() {
            "q" => return Ok(()),
            "r" => game = new_game(first, &mut rng),
            input => match input.parse::<usize>() {
                Ok(col) if (1..=COLUMNS).contains(&col) => {
                    if let Err(e) = game.step(col - 1) {
                        println!("{}", e.red());
                    }
                }
                _ => println!("{}", "Enter a column number".red()),
            },
        }
    }
}
