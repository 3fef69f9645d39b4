use chopstix::{HandPair, HandSet, SolveError};

#[test]
fn generate_size_and_lexicographic_order() {
    let hands = HandSet::generate(5).expect("generate");
    assert_eq!(hands.len(), 15); // 5 * 6 / 2

    let pairs: Vec<HandPair> = hands.iter().copied().collect();
    assert_eq!(pairs[0], HandPair::new(0, 0));
    assert_eq!(pairs[14], HandPair::new(4, 4));
    for pair in &pairs {
        assert!(pair.low <= pair.high && pair.high < 5);
    }
    for w in pairs.windows(2) {
        assert!(
            (w[0].low, w[0].high) < (w[1].low, w[1].high),
            "pairs must be strictly increasing"
        );
    }
}

#[test]
fn generate_rejects_zero_fingers() {
    assert!(matches!(
        HandSet::generate(0),
        Err(SolveError::InvalidConfiguration(_))
    ));
}

#[test]
fn single_finger_degenerate_set() {
    let hands = HandSet::generate(1).expect("generate");
    assert_eq!(hands.len(), 1);
    assert_eq!(hands.get(0), Some(HandPair::new(0, 0)));
}

#[test]
fn rank_matches_enumeration_position() {
    for fingers in [1u8, 2, 3, 5, 8] {
        let hands = HandSet::generate(fingers).expect("generate");
        for (i, &pair) in hands.iter().enumerate() {
            assert_eq!(hands.rank(pair), Some(i), "fingers={fingers} pair={pair:?}");
        }
        // one past the domain in the high component
        assert_eq!(hands.rank(HandPair::new(0, fingers)), None);
    }
}

// The pub fields (and serde) can produce a pair the sorting constructor
// never would; rank must refuse it rather than miscompute.
#[test]
fn rank_rejects_unsorted_pair() {
    let hands = HandSet::generate(5).expect("generate");
    assert_eq!(hands.rank(HandPair { low: 3, high: 1 }), None);
}
