use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{enabled_kinds, Randomizer};
use crate::piece::{PieceKind, PIECE_COUNT};

/// Uniform draw over the enabled kinds, no history.
///
/// This is the classic "pure random" generator: every draw is independent,
/// so droughts and floods of the same piece are possible.
pub struct MemorylessRandomizer {
    pool: Vec<PieceKind>,
    rng: ChaCha8Rng,
}

impl MemorylessRandomizer {
    pub fn new() -> Self {
        Self {
            pool: PieceKind::ALL.to_vec(),
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }
}

impl Default for MemorylessRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for MemorylessRandomizer {
    fn reset(&mut self, enable: Option<&[bool; PIECE_COUNT]>, seed: u64) {
        self.pool = enabled_kinds(enable);
        if self.pool.is_empty() {
            // A rule that disables every kind still has to produce pieces.
            self.pool = PieceKind::ALL.to_vec();
        }
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn next_piece(&mut self) -> PieceKind {
        self.pool[self.rng.gen_range(0..self.pool.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = MemorylessRandomizer::new();
        let mut b = MemorylessRandomizer::new();
        a.reset(None, 42);
        b.reset(None, 42);
        for _ in 0..100 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_only_enabled_kinds_appear() {
        let mut flags = [false; PIECE_COUNT];
        flags[PieceKind::S.index()] = true;
        flags[PieceKind::Z.index()] = true;

        let mut r = MemorylessRandomizer::new();
        r.reset(Some(&flags), 7);
        for _ in 0..200 {
            let kind = r.next_piece();
            assert!(kind == PieceKind::S || kind == PieceKind::Z);
        }
    }

    #[test]
    fn test_all_disabled_falls_back_to_catalog() {
        let mut r = MemorylessRandomizer::new();
        r.reset(Some(&[false; PIECE_COUNT]), 1);
        // Must not panic; draws come from the full catalog.
        for _ in 0..20 {
            let _ = r.next_piece();
        }
    }
}
