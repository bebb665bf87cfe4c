use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::BuildHasherDefault;

use hashbrown::HashMap;

use super::{first_legal, successor, Agent, BudgetClock, SearchBudget, SearchStats};
use crate::eval::{leaf_value, Evaluator};
use crate::state::GameState;
use crate::types::{Action, Player};

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type CostMap = HashMap<GameState, f32, FastHasher>;

/// Cost estimate for a state; lower is better. The default negates the
/// heuristic evaluator and shifts it non-negative, so "good for us" maps to
/// "cheap to reach".
pub type CostHeuristic = Box<dyn Fn(&GameState, Player) -> f32>;

/// State predicate that ends the search with the root action reaching it.
pub type GoalPredicate = Box<dyn Fn(&GameState, Player) -> bool>;

struct FrontierNode {
    priority: f32, // cost_so_far + heuristic estimate
    cost: f32,
    seq: u64, // insertion order, breaks float ties deterministically
    root_action: Action,
    state: GameState,
}

// Min-heap ordering on (priority, seq) over std's max-heap.
impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

/// Priority-queue search ordering the frontier by `cost + estimate`, with a
/// unit cost per ply.
///
/// Leaves at the horizon (or at terminal states) are scored with the
/// evaluator and the best-scored root action wins. When the node budget runs
/// out first, the first action on the path to the cheapest frontier node is
/// returned instead, so the agent always answers within budget.
pub struct AStarAgent {
    evaluator: Evaluator,
    heuristic: Option<CostHeuristic>,
    goal: Option<GoalPredicate>,
    stats: SearchStats,
}

impl AStarAgent {
    #[inline]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            heuristic: None,
            goal: None,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: CostHeuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    #[must_use]
    pub fn with_goal(mut self, goal: GoalPredicate) -> Self {
        self.goal = Some(goal);
        self
    }

    #[inline]
    fn estimate(&self, state: &GameState, perspective: Player) -> f32 {
        match &self.heuristic {
            Some(h) => h(state, perspective),
            // evaluate() is in [-1, 1]; 1 - evaluate() is in [0, 2].
            None => 1.0 - self.evaluator.evaluate(state, perspective),
        }
    }
}

impl Agent for AStarAgent {
    fn name(&self) -> &'static str {
        "AStar"
    }

    fn choose_action(
        &mut self,
        state: &GameState,
        legal: &[Action],
        budget: &SearchBudget,
    ) -> Action {
        let mut clock = BudgetClock::start(budget);
        let perspective = state.to_move();
        let horizon = f32::from(budget.max_depth.max(1));

        let mut heap: BinaryHeap<FrontierNode> = BinaryHeap::new();
        let mut closed: CostMap = CostMap::default();
        let mut seq = 0u64;

        for &action in legal {
            let child = successor(state, action);
            heap.push(FrontierNode {
                priority: 1.0 + self.estimate(&child, perspective),
                cost: 1.0,
                seq,
                root_action: action,
                state: child,
            });
            seq += 1;
        }

        let mut best_leaf: Option<(f32, Action)> = None;
        while let Some(node) = heap.pop() {
            clock.tick();
            if clock.expired() {
                // Cheapest-so-far fallback: the popped node competes with
                // whatever remains on the frontier.
                let cheapest = heap
                    .into_iter()
                    .min_by(|a, b| a.cost.total_cmp(&b.cost).then(a.seq.cmp(&b.seq)))
                    .map_or(node.root_action, |n| {
                        if n.cost < node.cost {
                            n.root_action
                        } else {
                            node.root_action
                        }
                    });
                clock.finish(&mut self.stats);
                return cheapest;
            }

            if let Some(prev) = closed.get(&node.state) {
                if node.cost >= *prev {
                    continue;
                }
            }
            closed.insert(node.state, node.cost);

            if let Some(goal) = &self.goal {
                if goal(&node.state, perspective) {
                    clock.finish(&mut self.stats);
                    return node.root_action;
                }
            }

            if node.state.is_terminal() || node.cost >= horizon {
                let value = leaf_value(&self.evaluator, &node.state, perspective);
                let replace = match best_leaf {
                    None => true,
                    Some((best_value, best_action)) => match value.total_cmp(&best_value) {
                        std::cmp::Ordering::Greater => true,
                        std::cmp::Ordering::Equal => node.root_action < best_action,
                        std::cmp::Ordering::Less => false,
                    },
                };
                if replace {
                    best_leaf = Some((value, node.root_action));
                }
                continue;
            }

            for action in node.state.legal_actions() {
                let child = successor(&node.state, action);
                let cost = node.cost + 1.0;
                heap.push(FrontierNode {
                    priority: cost + self.estimate(&child, perspective),
                    cost,
                    seq,
                    root_action: node.root_action,
                    state: child,
                });
                seq += 1;
            }
        }

        clock.finish(&mut self.stats);
        best_leaf.map_or_else(|| first_legal(legal), |(_, action)| action)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset(&mut self) {
        self.stats = SearchStats::default();
    }
}
