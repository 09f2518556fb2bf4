//! Shuffled heavy-piece layout.

use super::RuleSet;
use crate::Board;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;

/// Kings on their home squares, every other heavy piece dropped at random,
/// no pawns. See [`Board::shuffled_heavy`].
///
/// Each call to [`initial_board`](RuleSet::initial_board) draws a new
/// layout from the variant's generator, so resetting a game reshuffles.
#[derive(Debug)]
pub struct ShuffledHeavy {
    rng: RefCell<StdRng>,
}

impl ShuffledHeavy {
    /// Creates the variant with a reproducible sequence of layouts.
    pub fn seeded(seed: u64) -> Self {
        ShuffledHeavy {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Creates the variant seeded from the operating system.
    pub fn from_entropy() -> Self {
        ShuffledHeavy {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }
}

impl Default for ShuffledHeavy {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RuleSet for ShuffledHeavy {
    fn initial_board(&self) -> Board {
        Board::shuffled_heavy(&mut *self.rng.borrow_mut())
    }
}
