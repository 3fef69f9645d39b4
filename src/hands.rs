use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::types::HandPair;

/// The ordered enumeration of every hand-pair a single player can hold:
/// all `(x, y)` with `0 <= x <= y < fingers`, in lexicographic order.
///
/// This is the sole source of truth for the state count and the indexing
/// formulas in [`crate::index`]. Size is `fingers * (fingers + 1) / 2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSet {
    pairs: Vec<HandPair>,
    fingers: u8,
}

impl HandSet {
    pub fn generate(fingers: u8) -> Result<Self, SolveError> {
        if fingers < 1 {
            return Err(SolveError::InvalidConfiguration(
                "fingers per hand must be at least 1".to_string(),
            ));
        }
        let f = usize::from(fingers);
        let mut pairs = Vec::with_capacity(f * (f + 1) / 2);
        for x in 0..fingers {
            for y in x..fingers {
                pairs.push(HandPair::new(x, y));
            }
        }
        Ok(Self { pairs, fingers })
    }

    #[inline]
    pub fn fingers(&self) -> u8 {
        self.fingers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, HandPair> {
        self.pairs.iter()
    }

    #[inline]
    pub fn get(&self, rank: usize) -> Option<HandPair> {
        self.pairs.get(rank).copied()
    }

    /// 0-based position of `pair` within the set, in closed form:
    /// the count of pairs with first component below `low` is
    /// `low * fingers - low*(low-1)/2`, and `high - low` pairs precede
    /// within the `low` block. `None` if `pair` is outside the domain,
    /// including unsorted pairs built around the sorting constructor.
    #[inline]
    pub fn rank(&self, pair: HandPair) -> Option<usize> {
        if pair.low > pair.high || pair.high >= self.fingers {
            return None;
        }
        let f = usize::from(self.fingers);
        let a = usize::from(pair.low);
        let b = usize::from(pair.high);
        Some(a * f - a * (a.saturating_sub(1)) / 2 + (b - a))
    }
}

impl<'a> IntoIterator for &'a HandSet {
    type Item = &'a HandPair;
    type IntoIter = std::slice::Iter<'a, HandPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
