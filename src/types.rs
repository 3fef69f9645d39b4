use serde::{Deserialize, Serialize};

/// One player's two hands, lower value first.
///
/// The constructor sorts, so `low <= high` holds for every value of this
/// type. Values are finger counts in `0..fingers` for the active ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandPair {
    pub low: u8,
    pub high: u8,
}

impl HandPair {
    #[inline]
    pub fn new(a: u8, b: u8) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[inline]
    pub fn sum(self) -> u16 {
        u16::from(self.low) + u16::from(self.high)
    }

    /// Both hands dead: nothing left to attack with (or to be attacked).
    #[inline]
    pub fn is_dead(self) -> bool {
        self.high == 0
    }
}

/// A full game position. The side to move is always `player`; every move
/// produces a successor with the roles swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub player: HandPair,
    pub opponent: HandPair,
}

impl State {
    #[inline]
    pub const fn new(player: HandPair, opponent: HandPair) -> Self {
        Self { player, opponent }
    }

    /// The unique draw state `((0,0),(0,0))`, a fixed point of the game.
    #[inline]
    pub fn is_all_zero(self) -> bool {
        self.player.is_dead() && self.opponent.is_dead()
    }
}

/// Outcome label assigned to every state by retrograde analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// The side to move can force a win.
    Win,
    /// Every move hands the opponent a forced win.
    Loss,
    /// The all-zero state; no moves, no winner.
    Draw,
    /// Neither outcome proven; rank comes from the linear solve.
    Contested,
}

impl Classification {
    /// Pinned rank for resolved states; `None` for `Contested`.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Classification::Win => Some(1.0),
            Classification::Loss => Some(0.0),
            Classification::Draw => Some(0.5),
            Classification::Contested => None,
        }
    }
}
