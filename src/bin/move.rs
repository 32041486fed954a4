use clap::Parser;
use log::info;

use connect4::agents::Agent;
use connect4::game::Board;
use connect4::logging;

#[derive(Parser)]
#[command(about = "Compute the next computer move for a board.")]
struct Opts {
    /// Default configuration.
    #[arg(long, default_value_t)]
    config: Agent,
    /// Depth of the per column analysis.
    /// Defaults to the depth of a minimax configuration.
    #[arg(long)]
    depth: Option<usize>,
    /// Board rows from top to bottom separated by `/`,
    /// `.` empty, `x` player and `o` computer.
    /// The computer is to move.
    board: Board,
}

fn main() {
    logging();

    let Opts {
        config,
        depth,
        board,
    } = Opts::parse();

    info!("{:?}", board);
    info!("outcome {:?}", board.outcome());

    let scores = config.column_scores(&board, depth);
    info!("columns {:?}", scores);

    let step = config.step(&board);
    info!("Step: {:?}", step);
}
