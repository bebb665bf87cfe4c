use flipside::agents::{build_agent, AgentConfig, AgentKind, ReflexAgent};
use flipside::{legal_actions, play_match, Evaluator, GameState, SearchBudget};

#[test]
fn reflex_match_runs_to_completion() {
    let mut black = ReflexAgent::new(Evaluator::default());
    let mut white = ReflexAgent::new(Evaluator::default());
    let budget = SearchBudget::depth(1);

    let result = play_match(&mut black, &mut white, &budget).expect("agents stay legal");

    assert!(result.final_state.is_terminal());
    assert!(result.placements <= 60, "at most sixty placements fit");
    assert_eq!(
        result.final_state.board.filled_count(),
        4 + u8::try_from(result.placements).expect("placements fit in u8"),
        "each placement fills exactly one cell"
    );

    let (black_discs, white_discs) = flipside::score(&result.final_state);
    match result.winner {
        Some(flipside::Player::Black) => assert!(black_discs > white_discs),
        Some(flipside::Player::White) => assert!(white_discs > black_discs),
        None => assert_eq!(black_discs, white_discs),
    }

    assert!(result.black_stats.moves > 0);
    assert!(result.white_stats.moves > 0);
}

#[test]
fn match_is_deterministic_for_deterministic_agents() {
    let budget = SearchBudget::depth(2);
    let run = || {
        let mut black = ReflexAgent::new(Evaluator::default());
        let mut white = ReflexAgent::new(Evaluator::default());
        play_match(&mut black, &mut white, &budget).expect("agents stay legal")
    };
    let first = run();
    let second = run();
    assert_eq!(first.final_state.board, second.final_state.board);
    assert_eq!(first.winner, second.winner);
    assert_eq!(first.placements, second.placements);
    assert_eq!(first.passes, second.passes);
}

#[test]
fn every_agent_kind_builds_and_moves() {
    let state = GameState::initial();
    let legal = legal_actions(&state);
    let budget = SearchBudget::depth(2).with_max_nodes(500);
    let config = AgentConfig {
        iterations: 30,
        ..AgentConfig::default()
    };

    for kind in AgentKind::ALL {
        let mut agent = build_agent(kind, &config);
        let choice = agent.choose_action(&state, &legal, &budget);
        assert!(
            legal.contains(&choice),
            "{kind} produced an illegal opening move"
        );
        assert!(!agent.name().is_empty());
    }
}

#[test]
fn agent_kind_names_round_trip() {
    for kind in AgentKind::ALL {
        let parsed: AgentKind = kind.to_string().parse().expect("display parses back");
        assert_eq!(parsed, kind);
    }
    assert!("zergrush".parse::<AgentKind>().is_err());
}

#[test]
fn factory_matches_run_end_to_end() {
    let budget = SearchBudget::depth(2).with_max_nodes(2_000);
    let config = AgentConfig {
        iterations: 20,
        seed: 5,
        ..AgentConfig::default()
    };
    let mut black = build_agent(AgentKind::AlphaBeta, &config);
    let mut white = build_agent(AgentKind::Mcts, &config);

    let result = play_match(black.as_mut(), white.as_mut(), &budget).expect("agents stay legal");
    assert!(result.final_state.is_terminal());
}
