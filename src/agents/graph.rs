use std::collections::VecDeque;

use super::{first_legal, successor, Agent, BudgetClock, SearchBudget, SearchStats};
use crate::eval::{leaf_value, Evaluator};
use crate::state::GameState;
use crate::types::{Action, Player};

/// State predicate that ends the search early when satisfied.
pub type GoalPredicate = Box<dyn Fn(&GameState, Player) -> bool>;

/// Frontier discipline for the generic graph search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// FIFO frontier: breadth-first, level by level.
    Fifo,
    /// LIFO frontier: depth-first under an explicit work-stack.
    Lifo,
}

/// One node on the frontier: a reached state, the root action that leads to
/// it, and its depth below the root.
struct FrontierNode {
    state: GameState,
    root_action: Action,
    depth: u8,
}

/// Generic frontier search over the game-state graph.
///
/// The graph below any position is a tree (each placement fills a cell, so
/// states never repeat along a path) and cycle detection is unnecessary. The
/// horizon bounds depth for both disciplines; an optional goal predicate ends
/// the search immediately with the root action that reached it. With no goal
/// hit, the best explored leaf by the heuristic decides.
pub struct GraphSearchAgent {
    frontier: FrontierKind,
    evaluator: Evaluator,
    goal: Option<GoalPredicate>,
    stats: SearchStats,
}

impl GraphSearchAgent {
    #[inline]
    pub fn bfs(evaluator: Evaluator) -> Self {
        Self::new(FrontierKind::Fifo, evaluator)
    }

    #[inline]
    pub fn dfs(evaluator: Evaluator) -> Self {
        Self::new(FrontierKind::Lifo, evaluator)
    }

    #[inline]
    pub fn new(frontier: FrontierKind, evaluator: Evaluator) -> Self {
        Self {
            frontier,
            evaluator,
            goal: None,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn with_goal(mut self, goal: GoalPredicate) -> Self {
        self.goal = Some(goal);
        self
    }
}

impl Agent for GraphSearchAgent {
    fn name(&self) -> &'static str {
        match self.frontier {
            FrontierKind::Fifo => "BFS",
            FrontierKind::Lifo => "DFS",
        }
    }

    fn choose_action(
        &mut self,
        state: &GameState,
        legal: &[Action],
        budget: &SearchBudget,
    ) -> Action {
        let mut clock = BudgetClock::start(budget);
        let perspective = state.to_move();
        let horizon = budget.max_depth.max(1);

        let mut frontier: VecDeque<FrontierNode> = VecDeque::new();
        for &action in legal {
            frontier.push_back(FrontierNode {
                state: successor(state, action),
                root_action: action,
                depth: 1,
            });
        }

        let mut best: Option<(f32, Action)> = None;
        while let Some(node) = match self.frontier {
            FrontierKind::Fifo => frontier.pop_front(),
            FrontierKind::Lifo => frontier.pop_back(),
        } {
            clock.tick();
            if clock.expired() {
                break;
            }

            if let Some(goal) = &self.goal {
                if goal(&node.state, perspective) {
                    clock.finish(&mut self.stats);
                    return node.root_action;
                }
            }

            if node.depth >= horizon || node.state.is_terminal() {
                let value = leaf_value(&self.evaluator, &node.state, perspective);
                let replace = match best {
                    None => true,
                    Some((best_value, best_action)) => match value.total_cmp(&best_value) {
                        std::cmp::Ordering::Greater => true,
                        std::cmp::Ordering::Equal => node.root_action < best_action,
                        std::cmp::Ordering::Less => false,
                    },
                };
                if replace {
                    best = Some((value, node.root_action));
                }
                continue;
            }

            for action in node.state.legal_actions() {
                frontier.push_back(FrontierNode {
                    state: successor(&node.state, action),
                    root_action: node.root_action,
                    depth: node.depth + 1,
                });
            }
        }

        clock.finish(&mut self.stats);
        best.map_or_else(|| first_legal(legal), |(_, action)| action)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset(&mut self) {
        self.stats = SearchStats::default();
    }
}
