use chopstix::{successors, switch_states, HandPair, HandSet, Rules, State};

fn state(pl: (u8, u8), op: (u8, u8)) -> State {
    State::new(HandPair::new(pl.0, pl.1), HandPair::new(op.0, op.1))
}

#[test]
fn equal_hands_attack_collapses_to_one_child_with_multiplicity() {
    let hands = HandSet::generate(5).expect("generate");
    let rules = Rules::attack_only(5);
    let succ = successors(&state((1, 1), (1, 1)), &hands, &rules);

    // two attacker hands times two targets, all producing the same position
    assert_eq!(succ.len(), 4);
    for s in &succ {
        assert_eq!(*s, state((1, 2), (1, 1)));
    }
}

#[test]
fn attack_wraps_and_resorts_defender_hands() {
    let hands = HandSet::generate(5).expect("generate");
    let rules = Rules::attack_only(5);
    let succ = successors(&state((0, 3), (1, 2)), &hands, &rules);

    // only the 3-hand can attack: (1+3)%5=4 -> (2,4), (2+3)%5=0 -> (0,1)
    assert_eq!(succ, vec![state((2, 4), (0, 3)), state((0, 1), (0, 3))]);
}

#[test]
fn dead_opponent_means_terminal_even_with_switching() {
    let hands = HandSet::generate(5).expect("generate");
    let rules = Rules::default();
    assert!(successors(&state((1, 1), (0, 0)), &hands, &rules).is_empty());
}

#[test]
fn dead_player_means_terminal_even_with_switching() {
    let hands = HandSet::generate(5).expect("generate");
    let rules = Rules::default();
    assert!(successors(&state((0, 0), (1, 1)), &hands, &rules).is_empty());
}

#[test]
fn switch_excludes_current_pair_unless_skipping() {
    let hands = HandSet::generate(5).expect("generate");
    let from = state((1, 2), (0, 4));

    // pairs summing to 3 are (0,3) and (1,2); (1,2) is the current pair
    let without_pass = switch_states(&from, &hands, false);
    assert_eq!(without_pass, vec![state((0, 4), (0, 3))]);

    let with_pass = switch_states(&from, &hands, true);
    assert_eq!(
        with_pass,
        vec![state((0, 4), (0, 3)), state((0, 4), (1, 2))]
    );
}

#[test]
fn switch_preserves_the_mover_finger_total() {
    let hands = HandSet::generate(4).expect("generate");
    for &player in &hands {
        for &opponent in &hands {
            let from = State::new(player, opponent);
            for succ in switch_states(&from, &hands, true) {
                // role swap: the mover's new hands are the successor's opponent
                assert_eq!(succ.player, opponent);
                assert_eq!(succ.opponent.sum(), player.sum());
            }
        }
    }
}

#[test]
fn switching_rules_add_switch_children() {
    let hands = HandSet::generate(5).expect("generate");
    let from = state((1, 2), (0, 4));

    let attack_only = successors(&from, &hands, &Rules::attack_only(5));
    let with_switch = successors(&from, &hands, &Rules::new(5, true, false));
    let with_pass = successors(&from, &hands, &Rules::all_enabled(5));

    assert_eq!(with_switch.len(), attack_only.len() + 1);
    assert_eq!(with_pass.len(), attack_only.len() + 2);
}
