use super::{first_legal, successor, Agent, BudgetClock, SearchBudget, SearchStats};
use crate::eval::{leaf_value, Evaluator};
use crate::state::GameState;
use crate::types::{Action, Player};

/// Depth-limited minimax over the full game tree.
///
/// Max layers are the perspective player's turns, min layers the opponent's.
/// A forced pass is a move of its own and consumes one ply of depth. Leaves
/// score with the heuristic, or with the dominant terminal value once the
/// game is decided.
#[derive(Debug, Default)]
pub struct MinimaxAgent {
    evaluator: Evaluator,
    stats: SearchStats,
}

impl MinimaxAgent {
    #[inline]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    fn min_value(
        &self,
        state: &GameState,
        depth: u8,
        perspective: Player,
        clock: &mut BudgetClock,
    ) -> f32 {
        clock.tick();
        if depth == 0 || state.is_terminal() || clock.expired() {
            return leaf_value(&self.evaluator, state, perspective);
        }
        let mut value = f32::INFINITY;
        for action in state.legal_actions() {
            let child = successor(state, action);
            value = value.min(self.max_value(&child, depth - 1, perspective, clock));
        }
        value
    }

    fn max_value(
        &self,
        state: &GameState,
        depth: u8,
        perspective: Player,
        clock: &mut BudgetClock,
    ) -> f32 {
        clock.tick();
        if depth == 0 || state.is_terminal() || clock.expired() {
            return leaf_value(&self.evaluator, state, perspective);
        }
        let mut value = f32::NEG_INFINITY;
        for action in state.legal_actions() {
            let child = successor(state, action);
            value = value.max(self.min_value(&child, depth - 1, perspective, clock));
        }
        value
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &'static str {
        "Minimax"
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
            let value = self.min_value(
                &child,
                budget.max_depth.saturating_sub(1),
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
