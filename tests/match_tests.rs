use hexgraph_mc::{
    game::play_match,
    player::{MonteCarloPlayer, Player, RandomPlayer},
    EvaluatorConfig, GameStatus, HexBoard, HexError, MatchConfig, Outcome, Result,
};

/// Plays a fixed list of moves, then repeats the last one
struct ScriptedPlayer {
    moves: Vec<(usize, usize)>,
    next: usize,
    resets: usize,
}

impl ScriptedPlayer {
    fn new(moves: &[(usize, usize)]) -> Self {
        ScriptedPlayer {
            moves: moves.to_vec(),
            next: 0,
            resets: 0,
        }
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        "scripted"
    }

    fn choose_move(&mut self, _board: &HexBoard) -> Result<(usize, usize)> {
        let i = self.next.min(self.moves.len() - 1);
        self.next += 1;
        Ok(self.moves[i])
    }

    fn reset(&mut self) {
        self.next = 0;
        self.resets += 1;
    }
}

#[test]
fn test_random_player_stays_in_bounds() {
    let board = HexBoard::new(5).unwrap();
    let mut player = RandomPlayer::new("random", Some(9));

    assert_eq!(player.name(), "random");
    assert!(!player.is_interactive());
    for _ in 0..200 {
        let (row, col) = player.choose_move(&board).unwrap();
        assert!(row < 5 && col < 5);
    }
}

#[test]
fn test_monte_carlo_player_finishes_the_chain() {
    let mut board = HexBoard::new(3).unwrap();
    for &(row, col) in &[(1, 0), (0, 0), (1, 1), (0, 1)] {
        board.play(row, col).unwrap();
    }

    let config = EvaluatorConfig::default().with_trials(50).with_seed(4);
    let mut player = MonteCarloPlayer::new("mc", 3, config).unwrap();
    let (row, col) = player.choose_move(&board).unwrap();

    assert_eq!(board.play(row, col).unwrap(), Outcome::PlayerOneWins);
    assert_eq!(player.evaluator().statistics().candidates, 5);
}

#[test]
fn test_monte_carlo_player_on_full_board() {
    let mut board = HexBoard::new(3).unwrap();
    for (i, vertex) in board.get_free_vertices().unwrap().into_iter().enumerate() {
        let color = if i % 2 == 0 {
            hexgraph_mc::Color::Blue
        } else {
            hexgraph_mc::Color::Red
        };
        board.set_vertex_label(vertex, color).unwrap();
    }

    let config = EvaluatorConfig::default().with_trials(5).with_seed(4);
    let mut player = MonteCarloPlayer::new("mc", 3, config).unwrap();
    assert_eq!(player.choose_move(&board), Err(HexError::NoFreeVertices));
}

#[test]
fn test_scripted_match() {
    let mut board = HexBoard::new(3).unwrap();
    let mut first = ScriptedPlayer::new(&[(1, 0), (1, 1), (1, 2)]);
    let mut second = ScriptedPlayer::new(&[(0, 0), (0, 1)]);
    let config = MatchConfig::default().with_board_dim(3);

    let report = play_match(&mut board, &mut first, &mut second, &config).unwrap();

    assert_eq!(report.winner, 1);
    assert_eq!(report.outcome, Outcome::PlayerOneWins);
    assert_eq!(report.moves, vec![(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]);
    assert_eq!(report.rejected_moves, 0);
    assert_eq!(board.status(), GameStatus::WonByPlayerOne);
    assert_eq!((first.resets, second.resets), (1, 1));
}

#[test]
fn test_rejected_moves_are_retried() {
    let mut board = HexBoard::new(3).unwrap();
    // second player first proposes an occupied cell and an off-board one
    let mut first = ScriptedPlayer::new(&[(1, 0), (1, 1), (1, 2)]);
    let mut second = ScriptedPlayer::new(&[(1, 0), (7, 7), (0, 0), (0, 1)]);
    let config = MatchConfig::default().with_board_dim(3);

    let report = play_match(&mut board, &mut first, &mut second, &config).unwrap();

    assert_eq!(report.winner, 1);
    assert_eq!(report.rejected_moves, 2);
    assert_eq!(report.moves, vec![(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]);
}

#[test]
fn test_stubborn_player_aborts_match() {
    let mut board = HexBoard::new(3).unwrap();
    let mut first = ScriptedPlayer::new(&[(0, 0)]);
    let mut second = ScriptedPlayer::new(&[(0, 0)]);
    let config = MatchConfig::default()
        .with_board_dim(3)
        .with_max_rejected_moves(5);

    assert_eq!(
        play_match(&mut board, &mut first, &mut second, &config),
        Err(HexError::TooManyRejectedMoves(6))
    );
}

#[test]
fn test_board_must_match_config() {
    let mut board = HexBoard::new(4).unwrap();
    let mut first = RandomPlayer::new("a", Some(1));
    let mut second = RandomPlayer::new("b", Some(2));

    assert_eq!(
        play_match(&mut board, &mut first, &mut second, &MatchConfig::default()),
        Err(HexError::DimensionMismatch {
            expected: 11,
            found: 4
        })
    );
}

#[test]
fn test_monte_carlo_against_random() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = MatchConfig::default().with_board_dim(4);
    let mut board = HexBoard::new(4).unwrap();
    let evaluator_config = EvaluatorConfig::default().with_trials(60).with_seed(77);
    let mut ai = MonteCarloPlayer::new("mc", 4, evaluator_config).unwrap();
    let mut random = RandomPlayer::new("random", Some(77));

    let report = play_match(&mut board, &mut ai, &mut random, &config).unwrap();

    assert!(report.winner == 1 || report.winner == 2);
    assert!(report.moves.len() <= 16);
    assert!(board.is_victory(board.get_current_player_symbol()).unwrap());

    // every accepted move is a distinct cell
    let mut cells = report.moves.clone();
    cells.sort();
    cells.dedup();
    assert_eq!(cells.len(), report.moves.len());
}
