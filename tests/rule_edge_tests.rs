use rand::Rng;

use flipside::{
    apply_action, is_terminal, legal_actions, rng_for_stream, score, Action, Board, GameState,
    Player,
};

/// Black on a1, white on b1. Black can capture at c1; white has nothing.
fn lopsided_corner_board() -> Board {
    Board::from_masks(1 << 0, 1 << 1)
}

#[test]
fn player_without_placements_is_forced_to_pass() {
    let state = GameState::from_parts(lopsided_corner_board(), Player::White, 10);
    assert!(!is_terminal(&state), "black could still move here");
    assert_eq!(
        legal_actions(&state),
        vec![Action::Pass],
        "pass is the sole legal action for a blocked player"
    );

    let after = apply_action(&state, Action::Pass).expect("forced pass applies");
    assert_eq!(after.to_move(), Player::Black, "turn hands over unchanged");
    assert_eq!(after.board, state.board, "pass never touches the board");
    assert_eq!(after.move_count(), state.move_count() + 1);
}

#[test]
fn blocked_player_opponent_can_still_capture() {
    let state = GameState::from_parts(lopsided_corner_board(), Player::Black, 10);
    assert_eq!(
        legal_actions(&state),
        vec![Action::place(0, 2)],
        "black captures b1 by playing c1"
    );
    let after = apply_action(&state, Action::place(0, 2)).expect("capture applies");
    assert_eq!(score(&after), (3, 0), "b1 flipped to black");
}

#[test]
fn two_consecutive_passes_reach_a_terminal_state() {
    // Two isolated discs in opposite corners: neither side can ever capture.
    let board = Board::from_masks(1 << 0, 1 << 63);
    let state = GameState::from_parts(board, Player::Black, 20);

    assert!(
        is_terminal(&state),
        "a position where both sides must pass is already over"
    );

    // The pass actions still apply cleanly for drivers that walk through them.
    let after_one = apply_action(&state, Action::Pass).expect("first pass");
    assert_eq!(legal_actions(&after_one), vec![Action::Pass]);
    let after_two = apply_action(&after_one, Action::Pass).expect("second pass");

    assert!(is_terminal(&after_two));
    assert_eq!(after_two.board, state.board);
    assert_eq!(after_two.to_move(), Player::Black);
}

#[test]
fn board_full_and_mutual_block_both_terminate() {
    // Board full.
    let full = GameState::from_parts(
        Board::from_masks(u64::MAX ^ 0xff, 0xff),
        Player::White,
        60,
    );
    assert!(is_terminal(&full));

    // Board far from full, but no capture available to either side.
    let blocked = GameState::from_parts(Board::from_masks(1 << 27, 1 << 44), Player::Black, 4);
    assert!(is_terminal(&blocked));
}

#[test]
fn every_listed_placement_captures_at_least_one_disc() {
    // Random playouts: any placement the engine lists must flip something,
    // i.e. the mover's disc count grows by at least two.
    let mut rng = rng_for_stream(0xD15C_F11B, 7);
    for _ in 0..20 {
        let mut state = GameState::initial();
        while !state.is_terminal() {
            let actions = legal_actions(&state);
            let action = actions[rng.gen_range(0..actions.len())];
            let mover = state.to_move();
            let before = state.board.count(mover);
            let next = apply_action(&state, action).expect("listed action applies");
            if !action.is_pass() {
                let after = next.board.count(mover);
                assert!(
                    after >= before + 2,
                    "placement {action} flipped nothing (mover {before} -> {after})"
                );
            }
            state = next;
        }
    }
}
