#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_precision_loss)] // disc and visit counts fit f32 comfortably

pub mod types;
pub mod board;
pub mod rules;
pub mod state;
pub mod eval;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod agents;
pub mod arena;

// Re-exports: stable minimal API surface for external callers
pub use crate::agents::{Agent, SearchBudget, SearchStats};
pub use crate::arena::{play_match, MatchResult};
pub use crate::board::Board;
pub use crate::engine::apply::{apply_action, IllegalMoveError};
pub use crate::engine::score::{outcome, score, winner};
pub use crate::eval::{EvalWeights, Evaluator};
pub use crate::rng::rng_for_stream;
pub use crate::state::{is_terminal, legal_actions, GameState};
pub use crate::types::{Action, Player};
