use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    AStarAgent, Agent, AlphaBetaAgent, ExpectimaxAgent, GraphSearchAgent, MctsAgent, MctsConfig,
    MinimaxAgent, ReflexAgent,
};
use crate::eval::{EvalWeights, Evaluator};

/// The closed set of search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    Reflex,
    Minimax,
    AlphaBeta,
    Expectimax,
    Bfs,
    Dfs,
    AStar,
    Mcts,
}

impl AgentKind {
    pub const ALL: [AgentKind; 8] = [
        AgentKind::Reflex,
        AgentKind::Minimax,
        AgentKind::AlphaBeta,
        AgentKind::Expectimax,
        AgentKind::Bfs,
        AgentKind::Dfs,
        AgentKind::AStar,
        AgentKind::Mcts,
    ];
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Reflex => "reflex",
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alphabeta",
            AgentKind::Expectimax => "expectimax",
            AgentKind::Bfs => "bfs",
            AgentKind::Dfs => "dfs",
            AgentKind::AStar => "astar",
            AgentKind::Mcts => "mcts",
        };
        write!(f, "{name}")
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reflex" => Ok(AgentKind::Reflex),
            "minimax" => Ok(AgentKind::Minimax),
            "alphabeta" => Ok(AgentKind::AlphaBeta),
            "expectimax" => Ok(AgentKind::Expectimax),
            "bfs" => Ok(AgentKind::Bfs),
            "dfs" => Ok(AgentKind::Dfs),
            "astar" => Ok(AgentKind::AStar),
            "mcts" => Ok(AgentKind::Mcts),
            other => Err(format!("unknown agent kind {other:?}")),
        }
    }
}

/// Construction-time parameters shared by every agent kind. Depth and
/// node/time limits travel separately, in the per-call `SearchBudget`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentConfig {
    pub weights: EvalWeights,
    pub iterations: u32,
    pub exploration_c: f32,
    pub rollout_limit: u32,
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        let mcts = MctsConfig::default();
        Self {
            weights: EvalWeights::default(),
            iterations: mcts.iterations,
            exploration_c: mcts.exploration_c,
            rollout_limit: mcts.rollout_limit,
            seed: 0,
        }
    }
}

/// Build any agent kind behind the shared interface. Callers depend only on
/// the `Agent` trait, never on the concrete variant.
pub fn build_agent(kind: AgentKind, config: &AgentConfig) -> Box<dyn Agent> {
    let evaluator = Evaluator::new(config.weights);
    match kind {
        AgentKind::Reflex => Box::new(ReflexAgent::new(evaluator)),
        AgentKind::Minimax => Box::new(MinimaxAgent::new(evaluator)),
        AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(evaluator)),
        AgentKind::Expectimax => Box::new(ExpectimaxAgent::new(evaluator)),
        AgentKind::Bfs => Box::new(GraphSearchAgent::bfs(evaluator)),
        AgentKind::Dfs => Box::new(GraphSearchAgent::dfs(evaluator)),
        AgentKind::AStar => Box::new(AStarAgent::new(evaluator)),
        AgentKind::Mcts => Box::new(MctsAgent::new(
            MctsConfig::default()
                .with_iterations(config.iterations)
                .with_exploration_c(config.exploration_c)
                .with_rollout_limit(config.rollout_limit)
                .with_seed(config.seed),
        )),
    }
}
