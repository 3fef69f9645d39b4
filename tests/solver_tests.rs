use chopstix::{solve, Rules, SolveError};

#[test]
fn invalid_configuration_aborts_before_enumeration() {
    assert!(matches!(
        solve(Rules::new(0, true, false)),
        Err(SolveError::InvalidConfiguration(_))
    ));
}

#[test]
fn solved_result_is_internally_consistent() {
    let solved = solve(Rules::default()).expect("solve");
    let hand_count = solved.hand_set.len();
    assert_eq!(hand_count, 15);
    assert_eq!(solved.state_count(), hand_count * hand_count);
    assert_eq!(solved.classes.len(), solved.state_count());
    assert_eq!(solved.ranks.len(), solved.state_count());
    assert_eq!(solved.graph.state_count(), solved.state_count());
    assert!(solved.graph.is_symmetric());
    assert_eq!(solved.rules, Rules::default());
}

#[test]
fn degenerate_single_finger_game_is_all_draw() {
    let solved = solve(Rules::new(1, true, true)).expect("solve");
    assert_eq!(solved.state_count(), 1);
    assert_eq!(solved.ranks, vec![0.5]);
}

// Each invocation owns its own result; differing rulesets coexist.
#[test]
fn resolving_with_new_rules_replaces_nothing() {
    let small = solve(Rules::new(3, false, false)).expect("solve");
    let large = solve(Rules::new(5, true, false)).expect("solve");
    assert_eq!(small.state_count(), 36);
    assert_eq!(large.state_count(), 225);
    assert_eq!(small.hand_set.len(), 6);
}
