use flipside::{
    apply_action, is_terminal, legal_actions, score, Action, Board, GameState, IllegalMoveError,
    Player,
};

#[test]
fn initial_position_layout() {
    let state = GameState::initial();
    assert_eq!(state.to_move(), Player::Black, "black always starts");
    assert_eq!(state.move_count(), 0);
    assert_eq!(score(&state), (2, 2));
    assert_eq!(state.board.disc_at(3, 3), Some(Player::White));
    assert_eq!(state.board.disc_at(3, 4), Some(Player::Black));
    assert_eq!(state.board.disc_at(4, 3), Some(Player::Black));
    assert_eq!(state.board.disc_at(4, 4), Some(Player::White));
}

#[test]
fn initial_position_has_the_four_opening_moves() {
    let state = GameState::initial();
    let moves = legal_actions(&state);
    assert_eq!(
        moves,
        vec![
            Action::place(2, 3), // d3
            Action::place(3, 2), // c4
            Action::place(4, 5), // f5
            Action::place(5, 4), // e6
        ],
        "black's well-known opening moves, in canonical order"
    );
}

#[test]
fn legal_actions_are_sorted_canonically() {
    let mut state = GameState::initial();
    for _ in 0..6 {
        let moves = legal_actions(&state);
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted, "legal actions must arrive pre-sorted");
        state = apply_action(&state, moves[0]).expect("apply first legal");
    }
}

#[test]
fn apply_first_opening_move_round_trip() {
    let state = GameState::initial();
    let first = legal_actions(&state)[0];
    let next = apply_action(&state, first).expect("opening move applies");

    assert_eq!(next.move_count(), state.move_count() + 1);
    assert_eq!(next.to_move(), Player::White, "turn passes to white");
    // One disc placed, at least one flipped in the mover's favor.
    let (b0, _) = score(&state);
    let (b1, w1) = score(&next);
    assert!(b1 >= b0 + 2, "placement plus at least one flip for black");
    assert_eq!(b1 + w1, 5, "exactly one new disc on the board");
    // The original snapshot is untouched.
    assert_eq!(score(&state), (2, 2));
    assert_eq!(state.move_count(), 0);
}

#[test]
fn apply_rejects_occupied_cell() {
    let state = GameState::initial();
    let err = apply_action(&state, Action::place(3, 3)).unwrap_err();
    assert_eq!(err, IllegalMoveError::Occupied { row: 3, col: 3 });
}

#[test]
fn apply_rejects_non_capturing_placement() {
    let state = GameState::initial();
    let err = apply_action(&state, Action::place(0, 0)).unwrap_err();
    assert_eq!(err, IllegalMoveError::NoCapture { row: 0, col: 0 });
}

#[test]
fn apply_rejects_pass_while_placements_exist() {
    let state = GameState::initial();
    let err = apply_action(&state, Action::Pass).unwrap_err();
    assert_eq!(err, IllegalMoveError::PassWithPlacements);
}

#[test]
fn apply_rejects_out_of_range_coordinates() {
    let state = GameState::initial();
    let err = apply_action(&state, Action::Place { row: 8, col: 0 }).unwrap_err();
    assert_eq!(err, IllegalMoveError::OutOfRange { row: 8, col: 0 });
}

#[test]
fn full_board_is_terminal() {
    // Checkerboard-ish split: all 64 cells occupied.
    let board = Board::from_masks(0x00ff_00ff_00ff_00ff, 0xff00_ff00_ff00_ff00);
    let state = GameState::from_parts(board, Player::Black, 60);
    assert!(is_terminal(&state));
    assert_eq!(score(&state), (32, 32));
}

#[test]
fn action_order_is_row_major_with_pass_last() {
    let mut actions = vec![
        Action::Pass,
        Action::place(7, 7),
        Action::place(0, 1),
        Action::place(1, 0),
        Action::place(0, 0),
    ];
    actions.sort();
    assert_eq!(
        actions,
        vec![
            Action::place(0, 0),
            Action::place(0, 1),
            Action::place(1, 0),
            Action::place(7, 7),
            Action::Pass,
        ]
    );
}

#[test]
fn action_text_round_trip() {
    assert_eq!(Action::place(2, 3).to_string(), "d3");
    assert_eq!("d3".parse::<Action>().unwrap(), Action::place(2, 3));
    assert_eq!("pass".parse::<Action>().unwrap(), Action::Pass);
    assert!("z9".parse::<Action>().is_err());
}
