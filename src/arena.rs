//! Minimal match driver: the harness-facing consumer of the agent contract.
//!
//! Each turn it asks the engine for the legal actions, hands
//! (state, actions, budget) to the agent on move, applies the returned
//! action, and repeats until terminal. Tournament statistics and report
//! serialization live outside this crate.

use crate::agents::{Agent, SearchBudget, SearchStats};
use crate::engine::apply::{apply_action, IllegalMoveError};
use crate::engine::score::winner;
use crate::state::GameState;
use crate::types::Player;

#[derive(Debug, Clone, Copy)]
pub struct MatchResult {
    /// Side with more discs at the end, `None` on a draw.
    pub winner: Option<Player>,
    pub final_state: GameState,
    pub placements: u32,
    pub passes: u32,
    pub black_stats: SearchStats,
    pub white_stats: SearchStats,
}

/// Run a single game from the starting position until termination.
///
/// An agent returning an illegal action aborts the match with the engine's
/// error; that is a defect in the agent, not a recoverable condition.
pub fn play_match(
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    budget: &SearchBudget,
) -> Result<MatchResult, IllegalMoveError> {
    black.reset();
    white.reset();

    let mut state = GameState::initial();
    let mut placements = 0u32;
    let mut passes = 0u32;

    while !state.is_terminal() {
        let legal = state.legal_actions();
        let agent: &mut dyn Agent = match state.to_move() {
            Player::Black => black,
            Player::White => white,
        };
        let action = agent.choose_action(&state, &legal, budget);
        state = apply_action(&state, action)?;
        if action.is_pass() {
            passes += 1;
        } else {
            placements += 1;
        }
    }

    Ok(MatchResult {
        winner: winner(&state),
        final_state: state,
        placements,
        passes,
        black_stats: black.stats(),
        white_stats: white.stats(),
    })
}
