use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{enabled_kinds, Randomizer};
use crate::piece::{PieceKind, PIECE_COUNT};

/// Shuffled-bag randomizer: every enabled kind appears exactly once per
/// bag, then the bag refills and reshuffles. Bounds the worst-case drought
/// at `2 * bag_size - 1` draws.
pub struct BagRandomizer {
    pool: Vec<PieceKind>,
    bag: Vec<PieceKind>,
    rng: ChaCha8Rng,
}

impl BagRandomizer {
    pub fn new() -> Self {
        Self {
            pool: PieceKind::ALL.to_vec(),
            bag: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn refill(&mut self) {
        self.bag = self.pool.clone();
        self.bag.shuffle(&mut self.rng);
    }
}

impl Default for BagRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for BagRandomizer {
    fn reset(&mut self, enable: Option<&[bool; PIECE_COUNT]>, seed: u64) {
        self.pool = enabled_kinds(enable);
        if self.pool.is_empty() {
            self.pool = PieceKind::ALL.to_vec();
        }
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.bag.clear();
    }

    fn next_piece(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        // refill() guarantees a non-empty bag since the pool is non-empty.
        self.bag.pop().unwrap()
    }
}
