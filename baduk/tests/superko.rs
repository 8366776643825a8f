use baduk::{GameState, Move, PlayError, Player, Point};

fn play(row: u8, col: u8) -> Move {
    Move::Play(Point::new(row, col))
}

fn play_all(state: GameState, moves: &[Move]) -> GameState {
    moves.iter().fold(state, |state, &mv| {
        state.play_move(mv).unwrap_or_else(|e| panic!("{mv} rejected: {e}"))
    })
}

/// Single ko in the middle of a 5x5 board. After black takes, white's
/// immediate retake would recreate the position black just captured
/// from.
fn ko_position() -> GameState {
    play_all(GameState::new_game(5), &[
        play(3, 2),
        play(2, 4),
        play(2, 3),
        play(3, 5),
        play(4, 3),
        play(4, 4),
        Move::Pass,
        play(3, 3),
        play(3, 4), // takes the ko
    ])
}

#[test]
fn immediate_ko_retake_is_rejected() {
    let state = ko_position();
    assert_eq!(state.board().stone_at(Point::new(3, 3)), None);

    let retake = play(3, 3);
    assert!(!state.is_valid_move(retake));
    assert_eq!(state.play_move(retake).unwrap_err(), PlayError::Ko);
}

#[test]
fn ko_retake_is_legal_after_exchanges_elsewhere() {
    let state = play_all(ko_position(), &[play(5, 1), play(5, 2)]);

    // The two extra stones make the recreated layout a new situation.
    let state = play_all(state, &[play(3, 3)]);
    assert_eq!(state.board().stone_at(Point::new(3, 4)), None);
}

/// Three kos on a 9x9 board, each a one-point pocket. Ko j sits at
/// rows r-1..r+1 with r in {2, 5, 8}: black walls the left pocket,
/// white walls the right one, and a lone stone flips between them.
fn triple_ko_position() -> GameState {
    play_all(GameState::new_game(9), &[
        play(2, 2),
        play(1, 4),
        play(1, 3),
        play(3, 4),
        play(3, 3),
        play(2, 5),
        play(5, 2),
        play(4, 4),
        play(4, 3),
        play(6, 4),
        play(6, 3),
        play(5, 5),
        play(8, 2),
        play(7, 4),
        play(7, 3),
        play(9, 4),
        play(9, 3),
        play(8, 5),
        play(5, 4), // black holds ko 2
        play(2, 3), // white holds ko 1
        Move::Pass,
        play(8, 3), // white holds ko 3
    ])
}

#[test]
fn cycle_through_three_kos_is_rejected() {
    let start = triple_ko_position();
    let start_hash = start.board().zobrist_hash();

    // Five captures later every ko has changed hands at least once.
    let state = play_all(start, &[
        play(2, 4), // black takes ko 1
        play(5, 3), // white takes ko 2
        play(8, 4), // black takes ko 3
        play(2, 3), // white retakes ko 1
        play(5, 4), // black retakes ko 2
    ]);
    assert_ne!(state.board().zobrist_hash(), start_hash);

    // White retaking ko 3 would reproduce the starting position with
    // black to move. The immediately preceding positions all differ,
    // so only whole-history repetition detection can reject it.
    let retake = play(8, 3);
    assert!(state.board().would_capture(Player::White, Point::new(8, 3)));
    assert_eq!(state.play_move(retake).unwrap_err(), PlayError::Ko);
}

#[test]
fn each_ko_capture_in_the_cycle_is_legal_on_its_own() {
    let state = play_all(triple_ko_position(), &[
        play(2, 4),
        play(5, 3),
        play(8, 4),
        play(2, 3),
        play(5, 4),
    ]);

    // Stone count is conserved: every capture in the cycle trades one
    // stone for one stone.
    let board = state.board();
    let occupied = board.points().filter(|&p| board.stone_at(p).is_some()).count();
    assert_eq!(occupied, 21);
}
