use super::{first_legal, successor, Agent, BudgetClock, SearchBudget, SearchStats};
use crate::eval::{leaf_value, Evaluator};
use crate::state::GameState;
use crate::types::{Action, Player};

/// Minimax with alpha-beta bounds pruning.
///
/// Pruning is a performance optimization only: for any state, depth and
/// tie-break order this agent chooses the same action as `MinimaxAgent`.
/// Each root child is searched with a fresh (-inf, +inf) window, so a
/// pruned sibling can never displace an exactly-valued one.
#[derive(Debug, Default)]
pub struct AlphaBetaAgent {
    evaluator: Evaluator,
    stats: SearchStats,
}

impl AlphaBetaAgent {
    #[inline]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn min_value(
        &self,
        state: &GameState,
        depth: u8,
        mut beta: f32,
        alpha: f32,
        perspective: Player,
        clock: &mut BudgetClock,
        cutoffs: &mut u64,
    ) -> f32 {
        clock.tick();
        if depth == 0 || state.is_terminal() || clock.expired() {
            return leaf_value(&self.evaluator, state, perspective);
        }
        let mut value = f32::INFINITY;
        for action in state.legal_actions() {
            let child = successor(state, action);
            value = value.min(self.max_value(
                &child,
                depth - 1,
                alpha,
                beta,
                perspective,
                clock,
                cutoffs,
            ));
            beta = beta.min(value);
            if beta <= alpha {
                *cutoffs += 1;
                break;
            }
        }
        value
    }

    #[allow(clippy::too_many_arguments)]
    fn max_value(
        &self,
        state: &GameState,
        depth: u8,
        mut alpha: f32,
        beta: f32,
        perspective: Player,
        clock: &mut BudgetClock,
        cutoffs: &mut u64,
    ) -> f32 {
        clock.tick();
        if depth == 0 || state.is_terminal() || clock.expired() {
            return leaf_value(&self.evaluator, state, perspective);
        }
        let mut value = f32::NEG_INFINITY;
        for action in state.legal_actions() {
            let child = successor(state, action);
            value = value.max(self.min_value(
                &child,
                depth - 1,
                beta,
                alpha,
                perspective,
                clock,
                cutoffs,
            ));
            alpha = alpha.max(value);
            if alpha >= beta {
                *cutoffs += 1;
                break;
            }
        }
        value
    }
}

impl Agent for AlphaBetaAgent {
    fn name(&self) -> &'static str {
        "AlphaBeta"
    }

    fn choose_action(
        &mut self,
        state: &GameState,
        legal: &[Action],
        budget: &SearchBudget,
    ) -> Action {
        let mut clock = BudgetClock::start(budget);
        let mut cutoffs = 0u64;
        let perspective = state.to_move();

        let mut best = first_legal(legal);
        let mut best_value = f32::NEG_INFINITY;
        for &action in legal {
            let child = successor(state, action);
            let value = self.min_value(
                &child,
                budget.max_depth.saturating_sub(1),
                f32::INFINITY,
                f32::NEG_INFINITY,
                perspective,
                &mut clock,
                &mut cutoffs,
            );
            if value > best_value {
                best_value = value;
                best = action;
            }
        }

        self.stats.cutoffs += cutoffs;
        clock.finish(&mut self.stats);
        best
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset(&mut self) {
        self.stats = SearchStats::default();
    }
}
