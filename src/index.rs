use crate::error::SolveError;
use crate::hands::HandSet;
use crate::types::State;

/// Bijective mapping between [`State`] and a dense index in
/// `[0, state_count)`, over a fixed hand set.
///
/// The index is `rank(player) * |handSet| + rank(opponent)`, so the
/// all-zero draw state is always index 0. Both directions round-trip
/// exactly over their domains.
#[derive(Debug, Clone, Copy)]
pub struct StateIndexer<'a> {
    hands: &'a HandSet,
}

impl<'a> StateIndexer<'a> {
    #[inline]
    pub const fn new(hands: &'a HandSet) -> Self {
        Self { hands }
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.hands.len() * self.hands.len()
    }

    pub fn state_to_index(&self, state: &State) -> Result<usize, SolveError> {
        let player = self.hands.rank(state.player).ok_or_else(|| {
            SolveError::IndexOutOfRange(format!(
                "hand pair ({},{}) not valid for {} fingers",
                state.player.low,
                state.player.high,
                self.hands.fingers()
            ))
        })?;
        let opponent = self.hands.rank(state.opponent).ok_or_else(|| {
            SolveError::IndexOutOfRange(format!(
                "hand pair ({},{}) not valid for {} fingers",
                state.opponent.low,
                state.opponent.high,
                self.hands.fingers()
            ))
        })?;
        Ok(player * self.hands.len() + opponent)
    }

    pub fn index_to_state(&self, index: usize) -> Result<State, SolveError> {
        let len = self.hands.len();
        let out_of_range = || {
            SolveError::IndexOutOfRange(format!(
                "state index {index} not in [0, {})",
                len * len
            ))
        };
        let player = self.hands.get(index / len).ok_or_else(out_of_range)?;
        let opponent = self.hands.get(index % len).ok_or_else(out_of_range)?;
        Ok(State::new(player, opponent))
    }
}
