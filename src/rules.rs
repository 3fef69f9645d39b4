use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    /// Finger values per hand live in `0..fingers`. Must be at least 1.
    pub fingers: u8,
    /// Players may redistribute fingers between their own hands.
    pub switching: bool,
    /// A switch into the current configuration (a pass) is legal.
    /// Ignored when `switching` is false.
    pub skipping: bool,
}

impl Default for Rules {
    fn default() -> Self {
        // Defaults per the classic game: five fingers, switching on,
        // skipping off.
        Self {
            fingers: 5,
            switching: true,
            skipping: false,
        }
    }
}

impl Rules {
    #[inline]
    pub const fn new(fingers: u8, switching: bool, skipping: bool) -> Self {
        Self {
            fingers,
            switching,
            skipping,
        }
    }

    #[inline]
    pub const fn attack_only(fingers: u8) -> Self {
        Self {
            fingers,
            switching: false,
            skipping: false,
        }
    }

    #[inline]
    pub const fn all_enabled(fingers: u8) -> Self {
        Self {
            fingers,
            switching: true,
            skipping: true,
        }
    }
}
