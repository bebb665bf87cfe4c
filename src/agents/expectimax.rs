use super::{first_legal, successor, Agent, BudgetClock, SearchBudget, SearchStats};
use crate::eval::{leaf_value, Evaluator};
use crate::state::GameState;
use crate::types::{Action, Player};

/// Probability model for the opponent's reply, pluggable at the seam so the
/// traversal itself never changes.
///
/// Returns one non-negative weight per action; the search normalizes them.
pub trait OpponentPolicy {
    fn action_weights(&self, state: &GameState, actions: &[Action]) -> Vec<f32>;
}

/// Default model: uniform random over the legal actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPolicy;

impl OpponentPolicy for UniformPolicy {
    fn action_weights(&self, _state: &GameState, actions: &[Action]) -> Vec<f32> {
        vec![1.0; actions.len()]
    }
}

/// Like minimax, but the opponent layer computes an expectation over the
/// opponent's action distribution instead of a minimum.
pub struct ExpectimaxAgent {
    evaluator: Evaluator,
    policy: Box<dyn OpponentPolicy>,
    stats: SearchStats,
}

impl ExpectimaxAgent {
    #[inline]
    pub fn new(evaluator: Evaluator) -> Self {
        Self::with_policy(evaluator, Box::new(UniformPolicy))
    }

    #[inline]
    pub fn with_policy(evaluator: Evaluator, policy: Box<dyn OpponentPolicy>) -> Self {
        Self {
            evaluator,
            policy,
            stats: SearchStats::default(),
        }
    }

    fn value(
        &self,
        state: &GameState,
        depth: u8,
        maximizing: bool,
        perspective: Player,
        clock: &mut BudgetClock,
    ) -> f32 {
        clock.tick();
        if depth == 0 || state.is_terminal() || clock.expired() {
            return leaf_value(&self.evaluator, state, perspective);
        }

        let actions = state.legal_actions();
        if maximizing {
            let mut value = f32::NEG_INFINITY;
            for action in actions {
                let child = successor(state, action);
                value = value.max(self.value(&child, depth - 1, false, perspective, clock));
            }
            return value;
        }

        // Chance layer: expectation under the opponent model.
        let weights = self.policy.action_weights(state, &actions);
        debug_assert_eq!(weights.len(), actions.len());
        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return leaf_value(&self.evaluator, state, perspective);
        }
        let mut expectation = 0.0;
        for (action, weight) in actions.into_iter().zip(weights) {
            if weight <= 0.0 {
                continue;
            }
            let child = successor(state, action);
            expectation +=
                (weight / total) * self.value(&child, depth - 1, true, perspective, clock);
        }
        expectation
    }
}

impl Agent for ExpectimaxAgent {
    fn name(&self) -> &'static str {
        "Expectimax"
    }

    fn choose_action(
        &mut self,
        state: &GameState,
        legal: &[Action],
        budget: &SearchBudget,
    ) -> Action {
        let mut clock = BudgetClock::start(budget);
        let perspective = state.to_move();

        let mut best = first_legal(legal);
        let mut best_value = f32::NEG_INFINITY;
        for &action in legal {
            let child = successor(state, action);
            let value = self.value(
                &child,
                budget.max_depth.saturating_sub(1),
                false,
                perspective,
                &mut clock,
            );
            if value > best_value {
                best_value = value;
                best = action;
            }
        }

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
