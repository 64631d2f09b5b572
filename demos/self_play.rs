//! Self-play demo
//!
//! A Monte Carlo player (X) against a random player (O) on a 7x7 board.
//! Run with `RUST_LOG=debug` to watch every candidate evaluation.

use hexgraph_mc::{
    game::play_match,
    player::{MonteCarloPlayer, RandomPlayer},
    EvaluatorConfig, HexBoard, MatchConfig,
};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Hex Monte Carlo Self-Play");
    println!("=========================");
    println!();

    let config = MatchConfig::default().with_board_dim(7);
    let evaluator_config = EvaluatorConfig::default()
        .with_trials(200)
        .with_parallel(true);

    let mut board = HexBoard::new(config.board_dim).expect("valid board dimension");
    let mut ai = MonteCarloPlayer::new("Player1", config.board_dim, evaluator_config)
        .expect("valid evaluator configuration");
    let mut random = RandomPlayer::new("Player2", None);

    match play_match(&mut board, &mut ai, &mut random, &config) {
        Ok(report) => {
            print_board(&board);
            println!("{}", report.outcome);
            println!(
                "{} moves played, {} rejected",
                report.moves.len(),
                report.rejected_moves
            );
            println!("{}", ai.evaluator().statistics().summary());
        }
        Err(e) => println!("Error: {}", e),
    }
}

/// Prints the playable area, shifting each row to the right like a Hex board
fn print_board(board: &HexBoard) {
    let dim = board.get_playable_dim();
    for row in 0..dim {
        let mut line = " ".repeat(row);
        for col in 0..dim {
            let vertex = board.vertex_at(row, col).expect("in bounds");
            let color = board.get_vertex_label(vertex).expect("valid vertex");
            line.push_str(&format!("{} ", color));
        }
        println!("{}", line);
    }
    println!();
}
