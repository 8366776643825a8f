use baduk::{GameState, Move, PlayError, Player, Point};

fn play(row: u8, col: u8) -> Move {
    Move::Play(Point::new(row, col))
}

fn play_all(state: GameState, moves: &[Move]) -> GameState {
    moves.iter().fold(state, |state, &mv| {
        state.play_move(mv).unwrap()
    })
}

/// Black builds a wall across row 3 while white only passes, so all
/// territory is black's.
fn black_dominant() -> GameState {
    play_all(GameState::new_game(5), &[
        play(3, 1),
        Move::Pass,
        play(3, 2),
        Move::Pass,
        play(3, 3),
        Move::Pass,
        play(3, 4),
        Move::Pass,
        play(3, 5),
    ])
}

#[test]
fn two_passes_end_the_game() {
    let state = black_dominant();
    assert!(!state.is_over());

    let one_pass = state.play_move(Move::Pass).unwrap();
    assert!(!one_pass.is_over());
    assert_eq!(one_pass.winner(), None);

    let two_passes = one_pass.play_move(Move::Pass).unwrap();
    assert!(two_passes.is_over());
    assert_eq!(two_passes.winner(), Some(Player::Black));
}

#[test]
fn a_pass_between_plays_does_not_end_the_game() {
    let state = play_all(GameState::new_game(5), &[
        play(3, 3),
        Move::Pass,
        play(4, 4),
    ]);
    assert!(!state.is_over());
}

#[test]
fn resignation_ends_the_game_immediately() {
    let state = play_all(GameState::new_game(5), &[play(3, 3)]);
    let resigned = state.play_move(Move::Resign).unwrap();
    assert!(resigned.is_over());
    // White resigned, so black wins regardless of the board.
    assert_eq!(resigned.winner(), Some(Player::Black));
}

#[test]
fn no_moves_are_accepted_after_the_end() {
    let over = play_all(black_dominant(), &[Move::Pass, Move::Pass]);
    assert_eq!(over.play_move(play(1, 1)).unwrap_err(), PlayError::GameOver);
    assert_eq!(over.play_move(Move::Pass).unwrap_err(), PlayError::GameOver);
    assert_eq!(over.play_move(Move::Resign).unwrap_err(), PlayError::GameOver);
    assert!(over.legal_moves().is_empty());
}

#[test]
fn komi_decides_an_empty_game() {
    let state = play_all(GameState::new_game(5), &[Move::Pass, Move::Pass]);
    assert!(state.is_over());
    assert_eq!(state.winner(), Some(Player::White));
}

#[test]
fn out_of_bounds_and_occupied_plays_are_rejected() {
    let state = play_all(GameState::new_game(5), &[play(3, 3)]);
    assert_eq!(state.play_move(play(6, 1)).unwrap_err(), PlayError::OutOfBounds);
    assert_eq!(state.play_move(play(1, 6)).unwrap_err(), PlayError::OutOfBounds);
    assert_eq!(state.play_move(play(0, 3)).unwrap_err(), PlayError::OutOfBounds);
    assert_eq!(state.play_move(play(3, 3)).unwrap_err(), PlayError::Occupied);
}

#[test]
fn legal_moves_cover_the_open_points_plus_pass_and_resign() {
    let state = play_all(GameState::new_game(3), &[play(2, 2)]);
    let moves = state.legal_moves();
    assert_eq!(moves.len(), 8 + 2);
    assert!(moves.contains(&Move::Pass));
    assert!(moves.contains(&Move::Resign));
    assert!(!moves.contains(&play(2, 2)));
}

#[test]
fn move_counter_follows_the_chain() {
    let state = black_dominant();
    assert_eq!(state.num_moves(), 9);
    assert_eq!(state.play_move(Move::Pass).unwrap().num_moves(), 10);
    assert_eq!(GameState::new_game(5).num_moves(), 0);
}

#[test]
fn previous_state_links_back() {
    let first = GameState::new_game(5);
    let second = first.play_move(play(3, 3)).unwrap();
    let third = second.play_move(Move::Pass).unwrap();

    assert_eq!(third.last_move(), Some(Move::Pass));
    let back = third.previous_state().unwrap();
    assert_eq!(back.last_move(), Some(play(3, 3)));
    assert_eq!(back.board().zobrist_hash(), second.board().zobrist_hash());
    assert!(back.previous_state().unwrap().previous_state().is_none());
}
