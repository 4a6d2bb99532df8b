//! Piece randomizers selectable by name from rule files.
//!
//! A randomizer decides the order in which piece kinds enter the next
//! queue. Rule files pick one by its fully-qualified type name; unknown
//! names fall back to the engine default via the component loader.

mod bag;
mod memoryless;

pub use bag::BagRandomizer;
pub use memoryless::MemorylessRandomizer;

use crate::piece::{PieceKind, PIECE_COUNT};

pub trait Randomizer {
    /// Reinitialize for a new game with the enabled piece set and a seed.
    /// `None` enables the whole catalog. The same seed must reproduce the
    /// same sequence.
    fn reset(&mut self, enable: Option<&[bool; PIECE_COUNT]>, seed: u64);

    /// Draw the next piece kind.
    fn next_piece(&mut self) -> PieceKind;
}

/// Built-in randomizers, keyed by the type name used in rule files.
pub const CATALOG: &[(&str, fn() -> Box<dyn Randomizer>)] = &[
    ("bf_core::randomizer::MemorylessRandomizer", || {
        Box::new(MemorylessRandomizer::new())
    }),
    ("bf_core::randomizer::BagRandomizer", || {
        Box::new(BagRandomizer::new())
    }),
];

/// The piece kinds a randomizer may emit for the given enablement flags.
pub(crate) fn enabled_kinds(enable: Option<&[bool; PIECE_COUNT]>) -> Vec<PieceKind> {
    match enable {
        None => PieceKind::ALL.to_vec(),
        Some(flags) => PieceKind::ALL
            .into_iter()
            .filter(|kind| flags[kind.index()])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_kinds_absent_is_full_catalog() {
        assert_eq!(enabled_kinds(None), PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_enabled_kinds_filters() {
        let mut flags = [false; PIECE_COUNT];
        flags[PieceKind::I.index()] = true;
        flags[PieceKind::T.index()] = true;
        assert_eq!(
            enabled_kinds(Some(&flags)),
            vec![PieceKind::I, PieceKind::T]
        );
    }
}
