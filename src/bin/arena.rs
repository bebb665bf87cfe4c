use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use flipside::agents::{build_agent, AgentConfig, AgentKind};
use flipside::eval::EvalWeights;
use flipside::{play_match, Player, SearchBudget, SearchStats};

/// Arena driver: repeated games between two agent kinds, colors alternating
/// each game, every game independently seeded. Matches are fully isolated,
/// so they run in parallel.
#[derive(Parser, Debug)]
#[command(name = "arena", about = "Play Othello matches between two search agents")]
struct Args {
    /// First agent (reflex|minimax|alphabeta|expectimax|bfs|dfs|astar|mcts)
    #[arg(long, default_value = "alphabeta")]
    first: String,

    /// Second agent
    #[arg(long, default_value = "mcts")]
    second: String,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u64,

    /// Search depth / horizon per move
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Optional wall-clock cap per move, in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Optional node-expansion cap per move
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Base seed; each game derives its own
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// MCTS iterations per move
    #[arg(long, default_value_t = 400)]
    iterations: u32,

    /// MCTS exploration constant
    #[arg(long, default_value_t = 1.4)]
    exploration: f32,
}

struct GameRecord {
    /// +1 first agent won, -1 second agent won, 0 draw.
    outcome: i8,
    first_stats: SearchStats,
    second_stats: SearchStats,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let first_kind: AgentKind = args.first.parse().map_err(|e: String| anyhow!(e))?;
    let second_kind: AgentKind = args.second.parse().map_err(|e: String| anyhow!(e))?;

    let mut budget = SearchBudget::depth(args.depth);
    budget.time_ms = args.time_ms;
    budget.max_nodes = args.max_nodes;

    println!(
        "[arena] {first_kind} vs {second_kind}: {} games, depth {}, seed {}",
        args.games, args.depth, args.seed
    );

    let pb = ProgressBar::new(args.games);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] games {bar:40.cyan/blue} {pos}/{len}")?
            .progress_chars("=>-"),
    );

    let records = (0..args.games)
        .into_par_iter()
        .map(|game| -> Result<GameRecord> {
            let config = AgentConfig {
                weights: EvalWeights::default(),
                iterations: args.iterations,
                exploration_c: args.exploration,
                rollout_limit: 150,
                seed: args.seed.wrapping_add(game),
            };
            let mut first = build_agent(first_kind, &config);
            let mut second = build_agent(second_kind, &config);

            // Alternate colors so neither agent keeps the first-move edge.
            let first_is_black = game % 2 == 0;
            let result = if first_is_black {
                play_match(first.as_mut(), second.as_mut(), &budget)?
            } else {
                play_match(second.as_mut(), first.as_mut(), &budget)?
            };

            let first_color = if first_is_black {
                Player::Black
            } else {
                Player::White
            };
            let outcome = match result.winner {
                Some(p) if p == first_color => 1,
                Some(_) => -1,
                None => 0,
            };
            let (first_stats, second_stats) = if first_is_black {
                (result.black_stats, result.white_stats)
            } else {
                (result.white_stats, result.black_stats)
            };
            pb.inc(1);
            Ok(GameRecord {
                outcome,
                first_stats,
                second_stats,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();

    let wins = records.iter().filter(|r| r.outcome > 0).count();
    let losses = records.iter().filter(|r| r.outcome < 0).count();
    let draws = records.len() - wins - losses;
    println!("[arena] {first_kind}: {wins} wins, {losses} losses, {draws} draws");

    for (kind, stats) in [
        (first_kind, summarize(records.iter().map(|r| r.first_stats))),
        (second_kind, summarize(records.iter().map(|r| r.second_stats))),
    ] {
        println!(
            "[arena] {kind}: {} nodes over {} moves, {:.1} ms/move",
            stats.nodes,
            stats.moves,
            stats.elapsed.as_secs_f64() * 1000.0 / stats.moves.max(1) as f64
        );
    }

    Ok(())
}

fn summarize(per_game: impl Iterator<Item = SearchStats>) -> SearchStats {
    let mut total = SearchStats::default();
    for stats in per_game {
        total.nodes += stats.nodes;
        total.cutoffs += stats.cutoffs;
        total.moves += stats.moves;
        total.elapsed += stats.elapsed;
    }
    total
}
