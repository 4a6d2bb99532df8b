//! Decoder for the compact digit string that persists a forced next-piece
//! queue in replays and rule presets.

use super::PieceKind;

/// Decode a digit string into a piece sequence, one piece per character.
///
/// Returns `None` for the empty string. Decoding is best effort: a character
/// that is not a decimal digit, or a digit outside `[0, PIECE_COUNT)`,
/// substitutes `PieceKind::I` for that position instead of aborting the
/// whole sequence. Persisted queues are user-editable text, so a stray
/// character must not invalidate the rest of the queue.
pub fn parse_next_piece_sequence(digits: &str) -> Option<Vec<PieceKind>> {
    if digits.is_empty() {
        return None;
    }

    let sequence = digits
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| PieceKind::from_index(d as usize))
                .unwrap_or(PieceKind::I)
        })
        .collect();

    Some(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PIECE_COUNT;
    use proptest::prelude::*;

    #[test]
    fn test_empty_string_is_absent() {
        assert_eq!(parse_next_piece_sequence(""), None);
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(parse_next_piece_sequence("0"), Some(vec![PieceKind::I]));
    }

    #[test]
    fn test_full_catalog_order() {
        assert_eq!(
            parse_next_piece_sequence("0123456"),
            Some(PieceKind::ALL.to_vec())
        );
    }

    #[test]
    fn test_out_of_range_digit_substitutes_i() {
        // PIECE_COUNT is 7, so '9' cannot name a piece.
        assert_eq!(parse_next_piece_sequence("9"), Some(vec![PieceKind::I]));
    }

    #[test]
    fn test_garbage_character_substitutes_i() {
        assert_eq!(
            parse_next_piece_sequence("a1"),
            Some(vec![PieceKind::I, PieceKind::L])
        );
    }

    proptest! {
        /// One output piece per input character, always in range.
        #[test]
        fn prop_length_preserved_and_in_range(s in ".{1,64}") {
            let decoded = parse_next_piece_sequence(&s).unwrap();
            prop_assert_eq!(decoded.len(), s.chars().count());
            for kind in decoded {
                prop_assert!(kind.index() < PIECE_COUNT);
            }
        }
    }
}
