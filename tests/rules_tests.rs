//! Rules integration tests: paths, wall legality, pawn movement, turn flow.

use quoridor_engine::ai::{AiPlayer, Difficulty, Strategy};
use quoridor_engine::core::{GameState, Move, PlayerId, Position, Wall, WALLS_PER_PLAYER};
use quoridor_engine::rules::{
    apply_move, describe_legal_moves, is_terminal, legal_pawn_moves, MoveError, WallPlacementError,
};
use quoridor_engine::AiConfig;

fn assert_invariants(state: &GameState) {
    for player in PlayerId::all() {
        assert!(state.path_length(player).is_some(), "{player} has no path");
        let placed = state.walls().placed_by(player);
        assert_eq!(placed + usize::from(state.walls_remaining(player)), usize::from(WALLS_PER_PLAYER));
    }
    let walls: Vec<_> = state.walls().iter().map(|w| w.wall).collect();
    for (i, a) in walls.iter().enumerate() {
        for b in &walls[i + 1..] {
            assert!(!a.conflicts_with(*b), "{a} conflicts with {b}");
        }
    }
    assert_ne!(state.position(PlayerId::ONE), state.position(PlayerId::TWO));
}

// =============================================================================
// Path Length Tests
// =============================================================================

#[test]
fn test_empty_board_paths_are_eight() {
    let state = GameState::new();
    assert_eq!(state.path_length(PlayerId::ONE), Some(8));
    assert_eq!(state.path_length(PlayerId::TWO), Some(8));
}

#[test]
fn test_barrier_detour_lengths() {
    let mut state = GameState::new();
    for wall in [Wall::horizontal(4, 0), Wall::horizontal(4, 2), Wall::horizontal(4, 4), Wall::horizontal(4, 6)] {
        state.play(Move::Wall(wall)).unwrap();
    }
    // Only column 8 still crosses between rows 4 and 5.
    assert_eq!(state.path_length(PlayerId::ONE), Some(12));
    assert_eq!(state.path_length(PlayerId::TWO), Some(12));
}

// =============================================================================
// Wall Legality Tests
// =============================================================================

#[test]
fn test_closing_last_gap_is_rejected() {
    let mut state = GameState::new();
    let sequence = [
        Wall::horizontal(4, 0),
        Wall::horizontal(4, 2),
        Wall::horizontal(4, 4),
        Wall::horizontal(4, 6),
        Wall::vertical(4, 7),
    ];
    for wall in sequence {
        state.play(Move::Wall(wall)).unwrap();
        assert_invariants(&state);
    }
    assert_eq!(state.to_move(), PlayerId::TWO);

    // Capping (4, 8) from above seals the board in two.
    let before = state.clone();
    assert_eq!(
        state.play(Move::Wall(Wall::horizontal(3, 7))),
        Err(MoveError::InvalidWall(WallPlacementError::BlocksPath {
            wall: Wall::horizontal(3, 7),
            player: PlayerId::ONE,
        }))
    );
    assert_eq!(state, before);

    // The straight closure overlaps the barrier's last segment.
    assert!(matches!(
        state.play(Move::Wall(Wall::horizontal(4, 7))),
        Err(MoveError::InvalidWall(WallPlacementError::Conflict { .. }))
    ));
}

#[test]
fn test_crossing_walls_rejected() {
    let mut state = GameState::new();
    state.play(Move::Wall(Wall::vertical(2, 2))).unwrap();

    assert_eq!(
        state.play(Move::Wall(Wall::horizontal(2, 2))),
        Err(MoveError::InvalidWall(WallPlacementError::Conflict {
            wall: Wall::horizontal(2, 2),
            existing: Wall::vertical(2, 2),
        }))
    );
    // T-junction is fine.
    state.play(Move::Wall(Wall::horizontal(1, 2))).unwrap();
}

#[test]
fn test_supply_exhaustion() {
    let mut state = GameState::new();
    // Vertical walls never cut a vertical path.
    for row in (0..8).step_by(2) {
        for col in (0..8).step_by(2) {
            state.play(Move::Wall(Wall::vertical(row, col))).unwrap();
        }
    }
    assert_eq!(state.walls().len(), 16);

    // Finish both supplies on the right edge column.
    for row in [0, 2, 4, 6] {
        state.play(Move::Wall(Wall::vertical(row, 7))).unwrap();
    }
    assert_eq!(state.walls_remaining(PlayerId::ONE), 0);
    assert_eq!(state.walls_remaining(PlayerId::TWO), 0);
    assert_eq!(
        state.play(Move::Wall(Wall::horizontal(7, 7))),
        Err(MoveError::NoWallsRemaining { player: PlayerId::ONE })
    );
    assert!(describe_legal_moves(&state, PlayerId::ONE).wall_candidates.is_empty());
    assert_invariants(&state);
}

// =============================================================================
// Pawn Movement Tests
// =============================================================================

#[test]
fn test_head_on_approach_jumps() {
    let mut state = GameState::new();
    for (one, two) in [((7, 4), (1, 4)), ((6, 4), (2, 4)), ((5, 4), (3, 4))] {
        state.play(Move::Pawn(Position::new(one.0, one.1))).unwrap();
        state.play(Move::Pawn(Position::new(two.0, two.1))).unwrap();
    }
    // Player 1 at (5, 4), Player 2 at (3, 4): one empty cell between.
    state.play(Move::Pawn(Position::new(4, 4))).unwrap();

    let targets = legal_pawn_moves(&state, PlayerId::TWO);
    assert!(targets.contains(&Position::new(5, 4)));
    assert!(!targets.contains(&Position::new(4, 4)));

    state.play(Move::Pawn(Position::new(5, 4))).unwrap();
    assert_eq!(state.position(PlayerId::TWO), Position::new(5, 4));
}

#[test]
fn test_cannot_step_onto_opponent() {
    let state = GameState::builder()
        .position(PlayerId::ONE, Position::new(4, 4))
        .position(PlayerId::TWO, Position::new(3, 4))
        .build()
        .unwrap();
    assert_eq!(
        apply_move(&state, Move::Pawn(Position::new(3, 4))),
        Err(MoveError::IllegalPawnMove {
            from: Position::new(4, 4),
            to: Position::new(3, 4),
        })
    );
}

#[test]
fn test_wall_through_pawn_path_blocks_step() {
    let mut state = GameState::new();
    state.play(Move::Pawn(Position::new(7, 4))).unwrap();
    state.play(Move::Wall(Wall::horizontal(6, 4))).unwrap();

    assert!(matches!(
        state.play(Move::Pawn(Position::new(6, 4))),
        Err(MoveError::IllegalPawnMove { .. })
    ));
}

// =============================================================================
// Turn Flow Tests
// =============================================================================

#[test]
fn test_win_ends_game() {
    let state = GameState::builder()
        .position(PlayerId::ONE, Position::new(6, 1))
        .position(PlayerId::TWO, Position::new(7, 5))
        .to_move(PlayerId::TWO)
        .build()
        .unwrap();

    let done = apply_move(&state, Move::Pawn(Position::new(8, 5))).unwrap();
    assert_eq!(is_terminal(&done), Some(PlayerId::TWO));
    assert_eq!(apply_move(&done, Move::Pawn(Position::new(5, 1))), Err(MoveError::GameOver));
}

#[test]
fn test_undo_replays_to_start() {
    let mut state = GameState::new();
    let moves = [
        Move::Pawn(Position::new(7, 4)),
        Move::Wall(Wall::horizontal(6, 3)),
        Move::Pawn(Position::new(7, 3)),
        Move::Pawn(Position::new(1, 4)),
    ];
    for mv in moves {
        state.play(mv).unwrap();
    }
    let history: Vec<_> = state.history().map(|r| r.mv).collect();
    assert_eq!(history, moves);

    while state.undo().is_some() {}
    assert_eq!(state, GameState::new());
}

#[test]
fn test_ai_game_keeps_invariants() {
    let config = AiConfig::default().with_seed(7);
    let mut players = [
        AiPlayer::new(Difficulty::Medium, &config),
        AiPlayer::new(Difficulty::Easy, &config),
    ];
    let mut state = GameState::new();

    for _ in 0..300 {
        if state.is_over() {
            break;
        }
        let player = state.to_move();
        let mv = players[player.index()].decide(&state, player).unwrap();
        state.play(mv).unwrap();
        assert_invariants(&state);
    }

    if let Some(winner) = state.winner() {
        assert_eq!(state.position(winner).row, winner.goal_row());
    }
}
