use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;
use rand_pcg::Pcg64;

use flipside::agents::{MctsAgent, MctsConfig, RolloutPolicy};
use flipside::{
    apply_action, legal_actions, rng_for_stream, Action, Agent, Board, GameState, Player,
    SearchBudget,
};

fn random_state(seed: u64, plies: u32) -> GameState {
    let mut rng = rng_for_stream(seed, 11);
    let mut state = GameState::initial();
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        let actions = legal_actions(&state);
        state = apply_action(&state, actions[rng.gen_range(0..actions.len())])
            .expect("listed action applies");
    }
    state
}

#[test]
fn seeded_search_is_reproducible() {
    let budget = SearchBudget::depth(3);
    for seed in 0..5u64 {
        let state = random_state(seed, 8);
        if state.is_terminal() {
            continue;
        }
        let legal = legal_actions(&state);
        let config = MctsConfig::default().with_iterations(120).with_seed(42);

        let mut a = MctsAgent::new(config);
        let mut b = MctsAgent::new(config);
        assert_eq!(
            a.choose_action(&state, &legal, &budget),
            b.choose_action(&state, &legal, &budget),
            "identical seeds diverged at playout seed {seed}"
        );
    }
}

#[test]
fn reset_restores_the_rng_stream() {
    let state = random_state(3, 10);
    let legal = legal_actions(&state);
    let budget = SearchBudget::depth(3);
    let mut agent = MctsAgent::new(MctsConfig::default().with_iterations(80).with_seed(7));

    let first = agent.choose_action(&state, &legal, &budget);
    agent.reset();
    let second = agent.choose_action(&state, &legal, &budget);
    assert_eq!(first, second);
}

#[test]
fn chosen_moves_are_always_legal() {
    let budget = SearchBudget::depth(3);
    let mut agent = MctsAgent::new(MctsConfig::default().with_iterations(60).with_seed(1));
    for seed in 0..10u64 {
        let state = random_state(seed, 1 + (seed as u32 % 14));
        if state.is_terminal() {
            continue;
        }
        let legal = legal_actions(&state);
        let choice = agent.choose_action(&state, &legal, &budget);
        assert!(legal.contains(&choice), "illegal pick {choice} at seed {seed}");
    }
}

#[test]
fn finds_the_forced_winning_move() {
    // Two empties left, black to move: a1 wins 37-27 along the only
    // continuation, h1 loses. Rollouts are forced, so every a1 playout wins.
    let board = Board::from_masks(0x0140_26fe_fede_7e00, 0xfebf_d901_0121_817e);
    let state = GameState::from_parts(board, Player::Black, 60);
    let legal = legal_actions(&state);
    assert_eq!(legal.len(), 2);

    let mut agent = MctsAgent::new(MctsConfig::default().with_iterations(200).with_seed(9));
    let choice = agent.choose_action(&state, &legal, &SearchBudget::depth(8));
    assert_eq!(choice, Action::place(0, 0));
}

/// Deterministic rollout that records how often the search consults it.
struct CountingFirstRollout {
    calls: Rc<Cell<u64>>,
}

impl RolloutPolicy for CountingFirstRollout {
    fn choose(&mut self, _state: &GameState, actions: &[Action], _rng: &mut Pcg64) -> Action {
        self.calls.set(self.calls.get() + 1);
        actions[0]
    }
}

#[test]
fn custom_rollout_policy_drives_the_playouts() {
    let state = GameState::initial();
    let legal = legal_actions(&state);
    let calls = Rc::new(Cell::new(0));
    let mut agent = MctsAgent::with_rollout(
        MctsConfig::default().with_iterations(25),
        Box::new(CountingFirstRollout {
            calls: Rc::clone(&calls),
        }),
    );

    let choice = agent.choose_action(&state, &legal, &SearchBudget::depth(3));
    assert!(legal.contains(&choice));
    assert!(
        calls.get() > 0,
        "every playout step must go through the installed policy"
    );
}

#[test]
fn node_cap_still_yields_a_legal_move() {
    let state = GameState::initial();
    let legal = legal_actions(&state);
    let budget = SearchBudget::depth(3).with_max_nodes(5);
    let mut agent = MctsAgent::new(MctsConfig::default().with_seed(2));
    assert!(legal.contains(&agent.choose_action(&state, &legal, &budget)));
}

#[test]
fn single_legal_move_is_returned_without_search() {
    // White has exactly one capture: c1 over the black disc on b1.
    let board = Board::from_masks(1 << 1, 1 << 0);
    let state = GameState::from_parts(board, Player::White, 12);
    assert!(!state.is_terminal());
    let legal = legal_actions(&state);

    let mut agent = MctsAgent::new(MctsConfig::default());
    assert_eq!(agent.choose_action(&state, &legal, &SearchBudget::depth(3)), legal[0]);
}
