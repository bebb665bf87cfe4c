//! Heuristic board evaluation.
//!
//! Pure function of (state, perspective): identical inputs always produce
//! identical outputs, and the result is strictly bounded to [-1, 1] so search
//! values stay comparable across depths.

use serde::{Deserialize, Serialize};

use crate::board::CORNER_MASK;
use crate::engine::score::{disc_diff, outcome};
use crate::rules::legal_moves_mask;
use crate::state::GameState;
use crate::types::Player;

/// Static cell weights: corners dominate, cells adjacent to empty corners
/// are liabilities, interior cells are near-neutral.
pub const POSITIONAL_WEIGHTS: [[i16; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Base blend weights for the four heuristic components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub parity: f32,
    pub mobility: f32,
    pub corners: f32,
    pub positional: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            parity: 0.2,
            mobility: 0.4,
            corners: 0.3,
            positional: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    #[inline]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// Blended heuristic value in [-1, 1] from `perspective`.
    ///
    /// The blend is phase-dependent: disc parity counts for little while the
    /// board is open (grabbing discs early is usually a trap) and dominates
    /// toward the endgame, while mobility fades as the board fills. The
    /// effective weights are renormalized so the bound holds in every phase.
    pub fn evaluate(&self, state: &GameState, perspective: Player) -> f32 {
        let filled = f32::from(state.board.filled_count());
        let phase = filled / 64.0;

        let w_parity = self.weights.parity * phase;
        let w_mobility = self.weights.mobility * (1.0 - phase);
        let w_corners = self.weights.corners;
        let w_positional = self.weights.positional;
        let total = w_parity + w_mobility + w_corners + w_positional;

        let value = (w_parity * parity(state, perspective)
            + w_mobility * mobility(state, perspective)
            + w_corners * corners(state, perspective)
            + w_positional * positional(state, perspective))
            / total.max(f32::EPSILON);

        debug_assert!(
            value.is_finite() && (-1.0..=1.0).contains(&value),
            "evaluator produced out-of-range value {value}"
        );
        value.clamp(-1.0, 1.0)
    }
}

/// Normalized disc-count difference, in [-1, 1].
#[inline]
fn parity(state: &GameState, perspective: Player) -> f32 {
    let diff = f32::from(disc_diff(state, perspective));
    let filled = f32::from(state.board.filled_count());
    diff / filled.max(1.0)
}

/// Normalized legal-move-count difference, in [-1, 1].
#[inline]
fn mobility(state: &GameState, perspective: Player) -> f32 {
    let own = state.board.bits(perspective);
    let opp = state.board.bits(perspective.other());
    let own_moves = legal_moves_mask(own, opp).count_ones() as f32;
    let opp_moves = legal_moves_mask(opp, own).count_ones() as f32;
    (own_moves - opp_moves) / (own_moves + opp_moves).max(1.0)
}

/// Corner occupancy difference, in [-1, 1]. Corners are unflippable.
#[inline]
fn corners(state: &GameState, perspective: Player) -> f32 {
    let own = (state.board.bits(perspective) & CORNER_MASK).count_ones() as f32;
    let opp = (state.board.bits(perspective.other()) & CORNER_MASK).count_ones() as f32;
    (own - opp) / 4.0
}

/// Static positional weighting, normalized per occupied disc into [-1, 1].
fn positional(state: &GameState, perspective: Player) -> f32 {
    let own = state.board.bits(perspective);
    let opp = state.board.bits(perspective.other());
    let mut sum: i32 = 0;
    let mut occupied = own | opp;
    while occupied != 0 {
        let idx = occupied.trailing_zeros();
        let bit = 1u64 << idx;
        let weight = i32::from(POSITIONAL_WEIGHTS[(idx / 8) as usize][(idx % 8) as usize]);
        if own & bit != 0 {
            sum += weight;
        } else {
            sum -= weight;
        }
        occupied &= occupied - 1;
    }
    let filled = f32::from(state.board.filled_count());
    sum as f32 / (100.0 * filled.max(1.0))
}

/// Leaf value for a decided game, strictly outside the heuristic's [-1, 1]
/// band so a known win or loss dominates any heuristic score.
#[inline]
pub fn terminal_value(state: &GameState, perspective: Player) -> f32 {
    let margin = f32::from(disc_diff(state, perspective).abs());
    outcome(state, perspective) * (10.0 + margin / 64.0)
}

/// Heuristic if the game is open, dominant terminal value once it is decided.
#[inline]
pub fn leaf_value(evaluator: &Evaluator, state: &GameState, perspective: Player) -> f32 {
    if state.is_terminal() {
        terminal_value(state, perspective)
    } else {
        evaluator.evaluate(state, perspective)
    }
}
