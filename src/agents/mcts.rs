//! Monte Carlo Tree Search with UCT selection.
//!
//! The tree lives in an arena `Vec` indexed by `NodeId`; nodes never outlive
//! the `choose_action` call that built them. Every source of randomness runs
//! through one seeded PCG stream, so identical (state, seed, budget) inputs
//! reproduce the identical chosen action.

use rand::Rng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use super::{first_legal, successor, Agent, BudgetClock, SearchBudget, SearchStats};
use crate::engine::score::outcome;
use crate::rng::rng_for_stream;
use crate::state::GameState;
use crate::types::{Action, Player};

/// Node ID in the arena-style tree.
pub type NodeId = usize;

/// Tuning knobs for one search. All of them are explicit parameters; nothing
/// is read from ambient state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Selection/expansion/rollout iterations per move.
    pub iterations: u32,
    /// UCT exploration constant.
    pub exploration_c: f32,
    /// Hard cap on rollout length, in placements.
    pub rollout_limit: u32,
    /// Seed for the rollout RNG.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 400,
            exploration_c: 1.4,
            rollout_limit: 150,
            seed: 0,
        }
    }
}

impl MctsConfig {
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_exploration_c(mut self, c: f32) -> Self {
        self.exploration_c = c;
        self
    }

    #[must_use]
    pub fn with_rollout_limit(mut self, limit: u32) -> Self {
        self.rollout_limit = limit;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Playout move picker, pluggable for biased rollouts.
pub trait RolloutPolicy {
    fn choose(&mut self, state: &GameState, actions: &[Action], rng: &mut Pcg64) -> Action;
}

/// Default rollout: uniform random over the legal actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRollout;

impl RolloutPolicy for UniformRollout {
    fn choose(&mut self, _state: &GameState, actions: &[Action], rng: &mut Pcg64) -> Action {
        actions[rng.gen_range(0..actions.len())]
    }
}

struct MctsNode {
    state: GameState,
    /// Action that led here (`None` at the root).
    action: Option<Action>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Untried actions, stored reversed so `pop()` yields canonical order.
    untried: Vec<Action>,
    visits: u32,
    /// Sum of playout values from the perspective of the player who moved
    /// into this node.
    value_sum: f32,
    terminal: bool,
}

impl MctsNode {
    fn new(state: GameState, action: Option<Action>, parent: Option<NodeId>) -> Self {
        let terminal = state.is_terminal();
        let mut untried = if terminal { Vec::new() } else { state.legal_actions() };
        untried.reverse();
        Self {
            state,
            action,
            parent,
            children: Vec::new(),
            untried,
            visits: 0,
            value_sum: 0.0,
            terminal,
        }
    }

    /// Mean playout value.
    #[inline]
    fn q(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f32
        }
    }
}

/// UCT agent: selection, expansion, seeded random simulation, sign-flipping
/// backpropagation. The final move is the root child with the most visits
/// (visit count reads search confidence better than raw mean under noisy
/// rollouts), ties broken by canonical action order.
pub struct MctsAgent {
    config: MctsConfig,
    rollout: Box<dyn RolloutPolicy>,
    rng: Pcg64,
    nodes: Vec<MctsNode>,
    stats: SearchStats,
}

impl MctsAgent {
    pub fn new(config: MctsConfig) -> Self {
        Self::with_rollout(config, Box::new(UniformRollout))
    }

    pub fn with_rollout(config: MctsConfig, rollout: Box<dyn RolloutPolicy>) -> Self {
        let rng = rng_for_stream(config.seed, 0);
        Self {
            config,
            rollout,
            rng,
            nodes: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Descend from the root while nodes are fully expanded, maximizing UCT
    /// over the children; stops at a node with untried actions or a terminal.
    fn select(&self, root: NodeId) -> NodeId {
        let c = self.config.exploration_c;
        let mut current = root;
        loop {
            let node = &self.nodes[current];
            if node.terminal || !node.untried.is_empty() || node.children.is_empty() {
                return current;
            }
            let ln_parent = (node.visits.max(1) as f32).ln();
            let best = node
                .children
                .iter()
                .copied()
                .max_by(|&a, &b| {
                    let ua = self.uct(a, ln_parent, c);
                    let ub = self.uct(b, ln_parent, c);
                    ua.partial_cmp(&ub).unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(current);
            current = best;
        }
    }

    /// `mean + C * sqrt(ln(parent_visits) / child_visits)`. Selected children
    /// always carry at least one visit from their expansion backup.
    #[inline]
    fn uct(&self, id: NodeId, ln_parent: f32, c: f32) -> f32 {
        let node = &self.nodes[id];
        node.q() + c * (ln_parent / node.visits.max(1) as f32).sqrt()
    }

    /// Add one child for an untried action; returns the leaf unchanged when
    /// nothing is left to expand.
    fn expand(&mut self, id: NodeId) -> NodeId {
        let Some(action) = self.nodes[id].untried.pop() else {
            return id;
        };
        let child_state = successor(&self.nodes[id].state, action);
        let child = MctsNode::new(child_state, Some(action), Some(id));
        let child_id = self.nodes.len();
        self.nodes.push(child);
        self.nodes[id].children.push(child_id);
        child_id
    }

    /// Play out to a terminal state (or the rollout cap) with the rollout
    /// policy; returns the outcome for the player who moved into `id`.
    fn simulate(&mut self, id: NodeId, clock: &mut BudgetClock) -> f32 {
        let leaf = &self.nodes[id];
        let mover_into_leaf = match leaf.parent {
            Some(parent) => self.nodes[parent].state.to_move(),
            None => leaf.state.to_move().other(),
        };
        let mut current = leaf.state;
        let mut placements = 0u32;
        while !current.is_terminal() && placements < self.config.rollout_limit {
            let actions = current.legal_actions();
            let action = self.rollout.choose(&current, &actions, &mut self.rng);
            current = successor(&current, action);
            if !action.is_pass() {
                placements += 1;
            }
            clock.tick();
        }
        self.playout_value(&current, mover_into_leaf)
    }

    #[inline]
    fn playout_value(&self, end: &GameState, perspective: Player) -> f32 {
        outcome(end, perspective)
    }

    /// Walk back to the root, updating visits and flipping the value sign at
    /// every perspective switch.
    fn backpropagate(&mut self, id: NodeId, value: f32) {
        let mut v = value;
        let mut current = Some(id);
        while let Some(i) = current {
            self.nodes[i].visits += 1;
            self.nodes[i].value_sum += v;
            v = -v;
            current = self.nodes[i].parent;
        }
    }
}

impl Agent for MctsAgent {
    fn name(&self) -> &'static str {
        "MCTS"
    }

    fn choose_action(
        &mut self,
        state: &GameState,
        legal: &[Action],
        budget: &SearchBudget,
    ) -> Action {
        let mut clock = BudgetClock::start(budget);

        self.nodes.clear();
        self.nodes.push(MctsNode::new(*state, None, None));
        let root: NodeId = 0;

        if self.nodes[root].terminal || legal.len() <= 1 {
            clock.finish(&mut self.stats);
            return first_legal(legal);
        }

        for _ in 0..self.config.iterations {
            clock.tick();
            if clock.expired() {
                break;
            }
            let leaf = self.select(root);
            let expanded = self.expand(leaf);
            let value = self.simulate(expanded, &mut clock);
            self.backpropagate(expanded, value);
        }

        // Most-visited root child; canonical order breaks visit ties.
        let mut best: Option<(u32, Action)> = None;
        for &child_id in &self.nodes[root].children {
            let child = &self.nodes[child_id];
            let action = child.action.expect("non-root node records its action");
            let replace = match best {
                None => true,
                Some((visits, best_action)) => {
                    child.visits > visits || (child.visits == visits && action < best_action)
                }
            };
            if replace {
                best = Some((child.visits, action));
            }
        }

        clock.finish(&mut self.stats);
        best.map_or_else(|| first_legal(legal), |(_, action)| action)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.rng = rng_for_stream(self.config.seed, 0);
        self.stats = SearchStats::default();
    }
}
