//! Property-based tests for board rules and the episode engine

use proptest::prelude::*;
use wild_tictactoe::{
    Board, Cell, Error,
    adapters::RandomSelector,
    config::EngineConfig,
    engine::{GameEngine, Outcome},
    ports::MoveSelector,
    tictactoe::{Counter, Move},
};

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::X), Just(Cell::O)]
}

fn arb_cells() -> impl Strategy<Value = [Cell; 9]> {
    prop::array::uniform9(arb_cell())
}

fn arb_move() -> impl Strategy<Value = Move> {
    (0usize..9, prop_oneof![Just(Counter::X), Just(Counter::O)])
        .prop_map(|(position, counter)| Move::new(position, counter))
}

/// Every row, column and diagonal checked cell by cell
fn brute_force_winner(cells: &[Cell; 9]) -> bool {
    let at = |r: usize, c: usize| cells[r * 3 + c];
    let same = |a: Cell, b: Cell, c: Cell| a != Cell::Empty && a == b && b == c;

    (0..3).any(|i| same(at(i, 0), at(i, 1), at(i, 2)) || same(at(0, i), at(1, i), at(2, i)))
        || same(at(0, 0), at(1, 1), at(2, 2))
        || same(at(0, 2), at(1, 1), at(2, 0))
}

// =============================================================================
// Board properties
// =============================================================================

proptest! {
    #[test]
    fn win_detection_matches_brute_force(cells in arb_cells()) {
        let board = Board::from_cells(cells);
        prop_assert_eq!(board.is_winner(), brute_force_winner(&cells));
        prop_assert_eq!(board.is_terminal(), board.is_winner() || board.is_full());
    }

    #[test]
    fn placement_fills_only_empty_cells(cells in arb_cells(), mv in arb_move()) {
        let mut board = Board::from_cells(cells);
        let before = board;
        match board.place(mv) {
            Ok(()) => {
                prop_assert_eq!(before.get(mv.position), Some(Cell::Empty));
                prop_assert_eq!(board.get(mv.position), Some(Cell::from(mv.counter)));
                prop_assert_eq!(board.occupied_count(), before.occupied_count() + 1);
            }
            Err(err) => {
                prop_assert!(
                    matches!(err, Error::IllegalMove { .. }),
                    "expected IllegalMove, got {:?}",
                    err
                );
                prop_assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn legal_moves_cover_every_empty_cell_twice(cells in arb_cells()) {
        let board = Board::from_cells(cells);
        let moves = board.legal_moves();
        prop_assert_eq!(moves.len(), 2 * board.empty_positions().len());
        prop_assert!(moves.iter().all(|mv| board.validate(*mv).is_ok()));
    }
}

// =============================================================================
// Engine properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_episodes_terminate_with_consistent_rewards(
        engine_seed in any::<u64>(),
        opponent_seed in any::<u64>(),
        player_seed in any::<u64>(),
    ) {
        let mut engine = GameEngine::with_config(
            RandomSelector::with_seed(opponent_seed),
            EngineConfig::new().with_seed(engine_seed),
        );
        let mut player = RandomSelector::with_seed(player_seed);

        let mut result = engine.reset().unwrap();
        let mut half_moves = usize::from(result.opponent_move.is_some());
        let mut total = result.reward;
        let mut steps = 0;

        while !result.done {
            let mv = player.choose_move(&result.board).unwrap();
            result = engine.step(mv).unwrap();
            half_moves += 1 + usize::from(result.opponent_move.is_some());
            prop_assert!((-1..=1).contains(&result.reward));
            total += result.reward;
            steps += 1;
            prop_assert!(steps <= 5);
        }

        prop_assert_eq!(result.board.occupied_count(), half_moves);
        prop_assert!(result.board.is_terminal());
        let outcome = engine.outcome().unwrap();
        prop_assert_eq!(total, outcome.reward());
        if outcome == Outcome::Draw {
            prop_assert!(result.board.is_full());
        }
    }

    #[test]
    fn illegal_step_leaves_engine_unchanged(
        seed in any::<u64>(),
        opening in 0usize..4,
        mv in arb_move(),
    ) {
        let mut engine = GameEngine::with_config(
            RandomSelector::with_seed(seed),
            EngineConfig::new().with_seed(seed),
        );
        let mut player = RandomSelector::with_seed(seed.wrapping_add(1));
        let mut result = engine.reset().unwrap();
        for _ in 0..opening {
            if result.done {
                break;
            }
            let next = player.choose_move(&result.board).unwrap();
            result = engine.step(next).unwrap();
        }
        prop_assume!(!result.done);
        prop_assume!(!result.board.is_empty_at(mv.position));

        let board = engine.board();
        let turn = engine.turn();
        prop_assert!(engine.step(mv).is_err());
        prop_assert_eq!(engine.board(), board);
        prop_assert_eq!(engine.turn(), turn);
        prop_assert!(!engine.is_done());
    }
}
