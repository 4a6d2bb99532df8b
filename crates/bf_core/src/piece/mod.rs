//! Piece catalog: the fixed set of tetromino kinds and helpers over the
//! per-kind enablement flags used by rule files and randomizers.

pub mod sequence;

pub use sequence::parse_next_piece_sequence;

use serde::{Deserialize, Serialize};

/// Number of piece kinds in the catalog.
pub const PIECE_COUNT: usize = 7;

/// A tetromino kind. Discriminants are the catalog identifiers used in
/// rule files and next-queue strings; they must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    L = 1,
    O = 2,
    Z = 3,
    T = 4,
    J = 5,
    S = 6,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::J,
        PieceKind::S,
    ];

    /// Catalog identifier of this kind.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of `index()`. Returns `None` outside `[0, PIECE_COUNT)`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn glyph(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::Z => 'Z',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
        }
    }
}

/// Number of piece kinds that can appear.
///
/// `None` means no restriction is configured, so the whole catalog counts.
pub fn count_enabled(enable: Option<&[bool; PIECE_COUNT]>) -> usize {
    match enable {
        None => PIECE_COUNT,
        Some(flags) => flags.iter().filter(|&&on| on).count(),
    }
}

/// True if the enabled piece kinds are S, Z and O only.
///
/// An absent restriction enables everything, which is never SZO-only.
pub fn is_szo_only(enable: Option<&[bool; PIECE_COUNT]>) -> bool {
    let Some(flags) = enable else {
        return false;
    };

    flags.iter().enumerate().all(|(i, &on)| {
        !on || i == PieceKind::S.index() || i == PieceKind::Z.index() || i == PieceKind::O.index()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(PieceKind::from_index(PIECE_COUNT), None);
    }

    #[test]
    fn test_count_enabled_absent_means_all() {
        assert_eq!(count_enabled(None), PIECE_COUNT);
    }

    #[test]
    fn test_count_enabled_counts_true_flags() {
        let mut flags = [false; PIECE_COUNT];
        flags[0] = true;
        assert_eq!(count_enabled(Some(&flags)), 1);

        let all = [true; PIECE_COUNT];
        assert_eq!(count_enabled(Some(&all)), PIECE_COUNT);
    }

    #[test]
    fn test_szo_only_absent_is_false() {
        assert!(!is_szo_only(None));
    }

    #[test]
    fn test_szo_only_detects_restriction() {
        let mut flags = [false; PIECE_COUNT];
        flags[PieceKind::S.index()] = true;
        flags[PieceKind::Z.index()] = true;
        flags[PieceKind::O.index()] = true;
        assert!(is_szo_only(Some(&flags)));

        flags[PieceKind::T.index()] = true;
        assert!(!is_szo_only(Some(&flags)));
    }

    #[test]
    fn test_szo_only_empty_set_is_trivially_restricted() {
        // No kind enabled: the restriction holds vacuously.
        assert!(is_szo_only(Some(&[false; PIECE_COUNT])));
    }
}
