use crate::hands::HandSet;
use crate::rules::Rules;
use crate::types::{HandPair, State};

/// All one-move successors of `state` under `rules`.
///
/// Successors are role-swapped: the side to move in each returned state is
/// the current opponent. Duplicates are intentionally preserved (the same
/// resulting position reached through different hand choices appears once
/// per choice); the graph builder deduplicates for adjacency while the rank
/// solve keeps the multiplicity.
///
/// Returns an empty list when no attack exists — one side has no live hand,
/// so the game is over and switching is not offered either.
pub fn successors(state: &State, hands: &HandSet, rules: &Rules) -> Vec<State> {
    let mut out = attack_states(state, hands.fingers());
    if out.is_empty() {
        return out;
    }
    if rules.switching {
        out.extend(switch_states(state, hands, rules.skipping));
    }
    out
}

/// Successors reached by attacking: each nonzero player hand strikes each
/// nonzero opponent hand, the struck hand becomes `(struck + attacker) mod
/// fingers`, and the opponent's pair is re-sorted. May be empty; may contain
/// duplicates.
pub fn attack_states(state: &State, fingers: u8) -> Vec<State> {
    let mut out = Vec::with_capacity(4);
    let attackers = [state.player.low, state.player.high];
    let targets = [state.opponent.low, state.opponent.high];
    for attacker in attackers {
        if attacker == 0 {
            continue;
        }
        for hit in 0..2 {
            if targets[hit] == 0 {
                continue;
            }
            let struck =
                ((u16::from(targets[hit]) + u16::from(attacker)) % u16::from(fingers)) as u8;
            let defender = HandPair::new(struck, targets[1 - hit]);
            out.push(State::new(defender, state.player));
        }
    }
    out
}

/// Successors reached by redistributing the player's fingers: every
/// hand-pair in the set with the same total as the player's current hands.
/// The current pair itself is excluded unless `skipping` allows the pass.
pub fn switch_states(state: &State, hands: &HandSet, skipping: bool) -> Vec<State> {
    let total = state.player.sum();
    let mut out = Vec::new();
    for &pair in hands {
        if pair.sum() != total {
            continue;
        }
        if !skipping && pair == state.player {
            continue;
        }
        out.push(State::new(state.opponent, pair));
    }
    out
}
