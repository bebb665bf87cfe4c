//! The common agent contract and the search strategies implementing it.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::engine::apply::apply_action;
use crate::state::GameState;
use crate::types::Action;

pub mod reflex;
pub mod minimax;
pub mod alphabeta;
pub mod expectimax;
pub mod graph;
pub mod astar;
pub mod mcts;
pub mod factory;

pub use alphabeta::AlphaBetaAgent;
pub use astar::AStarAgent;
pub use expectimax::{ExpectimaxAgent, OpponentPolicy, UniformPolicy};
pub use factory::{build_agent, AgentConfig, AgentKind};
pub use graph::{FrontierKind, GraphSearchAgent};
pub use mcts::{MctsAgent, MctsConfig, RolloutPolicy, UniformRollout};
pub use minimax::MinimaxAgent;
pub use reflex::ReflexAgent;

/// Limits for one `choose_action` invocation.
///
/// `max_depth` bounds the lookahead horizon; `max_nodes` and `time_ms`
/// optionally cap work. Budget exhaustion is never an error: agents return
/// the best candidate found so far.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchBudget {
    pub max_depth: u8,
    pub max_nodes: Option<u64>,
    pub time_ms: Option<u64>,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_nodes: None,
            time_ms: None,
        }
    }
}

impl SearchBudget {
    #[inline]
    pub fn depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    #[inline]
    pub fn with_time_ms(mut self, time_ms: u64) -> Self {
        self.time_ms = Some(time_ms);
        self
    }
}

/// Diagnostic counters accumulated across an agent's calls, read by the
/// harness after each move. Not part of any decision logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub moves: u64,
    pub elapsed: Duration,
}

/// Per-call budget accounting: one `tick` per node expansion, so a search can
/// overrun its deadline by at most one expansion step.
pub(crate) struct BudgetClock {
    budget: SearchBudget,
    started: Instant,
    nodes: u64,
}

impl BudgetClock {
    #[inline]
    pub fn start(budget: &SearchBudget) -> Self {
        Self {
            budget: *budget,
            started: Instant::now(),
            nodes: 0,
        }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.nodes += 1;
    }

    #[inline]
    pub fn expired(&self) -> bool {
        if let Some(cap) = self.budget.max_nodes {
            if self.nodes >= cap {
                return true;
            }
        }
        if let Some(ms) = self.budget.time_ms {
            if u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX) >= ms {
                return true;
            }
        }
        false
    }

    /// Fold this call's accounting into the agent's running stats.
    #[inline]
    pub fn finish(self, stats: &mut SearchStats) {
        stats.nodes += self.nodes;
        stats.moves += 1;
        stats.elapsed += self.started.elapsed();
    }
}

/// Shared capability of every search strategy: given a state, its precomputed
/// legal actions and a budget, return exactly one legal action.
///
/// Ties between equally good candidates break toward the canonical action
/// order (the order `legal` arrives in). `&mut self` exists only for stats
/// and RNG bookkeeping; agents hold no game history.
pub trait Agent {
    fn name(&self) -> &'static str;

    fn choose_action(
        &mut self,
        state: &GameState,
        legal: &[Action],
        budget: &SearchBudget,
    ) -> Action;

    fn stats(&self) -> SearchStats;

    /// Hook for clearing per-game bookkeeping between matches.
    fn reset(&mut self);
}

/// Guaranteed fallback: the first canonically-ordered legal action.
#[inline]
pub fn first_legal(legal: &[Action]) -> Action {
    legal.first().copied().unwrap_or(Action::Pass)
}

/// Successor helper for search internals. The actions fed to a search all
/// come from `legal_actions`, so an illegal one here is a defect and fails
/// loudly rather than being corrected.
#[inline]
pub(crate) fn successor(state: &GameState, action: Action) -> GameState {
    apply_action(state, action).expect("search generated an illegal action")
}
