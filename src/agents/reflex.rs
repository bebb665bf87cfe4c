use super::{first_legal, successor, Agent, BudgetClock, SearchBudget, SearchStats};
use crate::eval::{leaf_value, Evaluator};
use crate::state::GameState;
use crate::types::Action;

/// One-ply agent: evaluates each legal action's resulting state and returns
/// the argmax, ties broken by canonical action order.
#[derive(Debug, Default)]
pub struct ReflexAgent {
    evaluator: Evaluator,
    stats: SearchStats,
}

impl ReflexAgent {
    #[inline]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
        }
    }
}

impl Agent for ReflexAgent {
    fn name(&self) -> &'static str {
        "Reflex"
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
            clock.tick();
            if clock.expired() {
                break;
            }
            let value = leaf_value(&self.evaluator, &successor(state, action), perspective);
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
