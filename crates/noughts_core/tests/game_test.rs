//! Tests for the tic-tac-toe turn state machine.

use noughts_core::rules::{LINES, check_winner, is_draw};
use noughts_core::{
    Board, Cell, Game, Mark, Mode, MoveReport, Opponent, Outcome, Phase, Position, RandomOpponent,
};

fn play(game: &mut Game, coords: &[(usize, usize)]) -> MoveReport {
    let mut last = MoveReport::Ignored;
    for &(row, col) in coords {
        last = game.attempt_move_at(row, col);
        assert!(last.is_applied(), "move ({row},{col}) was refused");
    }
    last
}

#[test]
fn test_top_row_scenario() {
    let mut game = Game::with_mode(Mode::Friend);
    let last = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(last, MoveReport::Finished(Outcome::Winner(Mark::X)));
    assert_eq!(game.phase(), &Phase::GameOver(Outcome::Winner(Mark::X)));
    for col in 0..3 {
        assert_eq!(game.board().get_at(0, col), Some(Cell::Occupied(Mark::X)));
    }
    assert_eq!(game.message().as_deref(), Some("Player X wins!"));
}

#[test]
fn test_full_board_draw_scenario() {
    let mut game = Game::with_mode(Mode::Friend);
    let last = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (2, 0),
            (1, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ],
    );

    assert_eq!(last, MoveReport::Finished(Outcome::Draw));
    assert!(game.board().is_full());
    assert_eq!(check_winner(game.board()), None);
    assert!(is_draw(game.board()));
    assert_eq!(game.message().as_deref(), Some("The game is a draw!"));
}

#[test]
fn test_each_line_wins_through_play() {
    // X fills each line while O, with only two marks, plays off the line.
    for line in LINES {
        let mut game = Game::with_mode(Mode::Friend);
        let mut spare = Position::ALL.iter().copied().filter(|p| !line.contains(p));
        let mut report = MoveReport::Ignored;

        for (i, pos) in line.iter().enumerate() {
            report = game.attempt_move(*pos);
            if i < 2 {
                assert_eq!(report, MoveReport::Continue, "line {line:?}");
                let o_pos = spare.next().expect("spare cell");
                assert_eq!(game.attempt_move(o_pos), MoveReport::Continue);
            }
        }

        assert_eq!(report, MoveReport::Finished(Outcome::Winner(Mark::X)), "line {line:?}");
        assert_eq!(check_winner(game.board()), Some(Mark::X));
    }
}

#[test]
fn test_occupied_cell_never_changes_board_or_turn() {
    let mut game = Game::with_mode(Mode::Friend);
    play(&mut game, &[(1, 1), (0, 0)]);
    let board = game.board().clone();
    let turn = *game.turn();

    for (row, col) in [(1, 1), (0, 0)] {
        assert_eq!(game.attempt_move_at(row, col), MoveReport::Ignored);
        assert_eq!(game.board(), &board);
        assert_eq!(*game.turn(), turn);
    }
}

#[test]
fn test_out_of_range_coordinates_ignored() {
    let mut game = Game::with_mode(Mode::Friend);
    assert_eq!(game.attempt_move_at(3, 0), MoveReport::Ignored);
    assert_eq!(game.attempt_move_at(0, 7), MoveReport::Ignored);
    assert!(game.history().is_empty());
}

#[test]
fn test_reset_clears_board_and_keeps_mode() {
    let mut game = Game::with_mode(Mode::Computer);
    game.attempt_move(Position::Center);
    game.play_computer_move(&mut RandomOpponent::seeded(3));
    game.reset();

    assert_eq!(game.board(), &Board::new());
    assert_eq!(*game.turn(), Mark::X);
    assert_eq!(*game.mode(), Some(Mode::Computer));
    assert_eq!(game.phase(), &Phase::InProgress);

    // Also from a finished round.
    let mut game = Game::with_mode(Mode::Friend);
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(*game.turn(), Mark::X);
    assert!(game.is_in_progress());
    assert_eq!(game.message(), None);
}

#[test]
fn test_computer_always_lands_on_empty_cell() {
    for seed in 0..50 {
        let mut game = Game::with_mode(Mode::Computer);
        let mut computer = RandomOpponent::seeded(seed);
        let mut human = RandomOpponent::seeded(seed + 1000);

        while game.is_in_progress() {
            if game.is_computer_turn() {
                let before = game.board().clone();
                let report = game.play_computer_move(&mut computer);
                assert!(report.is_applied());

                let placed = game.history().last().expect("computer moved");
                assert_eq!(placed.mark, Mark::O);
                assert_eq!(before.get(placed.position), Cell::Empty);
            } else {
                let pos = human.choose(game.board()).expect("board not full");
                game.attempt_move(pos);
            }
        }
        assert!(game.outcome().is_some());
    }
}

#[test]
fn test_computer_move_ignored_on_human_turn() {
    let mut game = Game::with_mode(Mode::Computer);
    let report = game.play_computer_move(&mut RandomOpponent::seeded(5));
    assert_eq!(report, MoveReport::Ignored);
    assert!(game.history().is_empty());

    let mut game = Game::with_mode(Mode::Friend);
    game.attempt_move(Position::Center);
    assert_eq!(
        game.play_computer_move(&mut RandomOpponent::seeded(5)),
        MoveReport::Ignored
    );
}

#[test]
fn test_computer_win_message() {
    // Script the opponent so O completes the middle column.
    struct Scripted(Vec<Position>);
    impl Opponent for Scripted {
        fn choose(&mut self, _board: &Board) -> Option<Position> {
            self.0.pop()
        }
    }

    let mut game = Game::with_mode(Mode::Computer);
    let mut computer = Scripted(vec![
        Position::BottomCenter,
        Position::Center,
        Position::TopCenter,
    ]);
    for human in [Position::TopLeft, Position::MiddleLeft, Position::BottomRight] {
        assert_eq!(game.attempt_move(human), MoveReport::ComputerToMove);
        game.play_computer_move(&mut computer);
    }

    assert_eq!(game.outcome(), Some(Outcome::Winner(Mark::O)));
    assert_eq!(game.message().as_deref(), Some("Computer wins!"));
}
