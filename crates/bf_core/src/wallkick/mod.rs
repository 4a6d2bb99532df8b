//! Wall-kick resolvers selectable by name from rule files.
//!
//! A resolver only supplies the candidate offset table for a rotation; the
//! playfield collision test that picks the first fitting offset lives in
//! the engine, not here.

use crate::piece::PieceKind;

/// Candidate `(dx, dy)` translations to try, in order, when a rotation
/// collides in place. Offsets are in grid cells with +y pointing up.
pub trait Wallkick {
    fn kicks(&self, kind: PieceKind, from: u8, to: u8) -> &'static [(i8, i8)];
}

/// Built-in resolvers, keyed by the type name used in rule files.
pub const CATALOG: &[(&str, fn() -> Box<dyn Wallkick>)] = &[
    ("bf_core::wallkick::ClassicWallkick", || {
        Box::new(ClassicWallkick)
    }),
    ("bf_core::wallkick::StandardWallkick", || {
        Box::new(StandardWallkick)
    }),
];

/// The in-place test only; rotation fails if the piece does not fit where
/// it stands. Early rule sets behave this way.
pub struct ClassicWallkick;

impl Wallkick for ClassicWallkick {
    fn kicks(&self, _kind: PieceKind, _from: u8, _to: u8) -> &'static [(i8, i8)] {
        IN_PLACE
    }
}

/// Standard-rotation offset tables: five candidates per transition, with
/// a dedicated table for I. O never leaves its cell when rotating.
pub struct StandardWallkick;

impl Wallkick for StandardWallkick {
    fn kicks(&self, kind: PieceKind, from: u8, to: u8) -> &'static [(i8, i8)] {
        let Some(t) = transition_index(from, to) else {
            return IN_PLACE;
        };

        match kind {
            PieceKind::O => IN_PLACE,
            PieceKind::I => &I_KICKS[t],
            _ => &COMMON_KICKS[t],
        }
    }
}

const IN_PLACE: &[(i8, i8)] = &[(0, 0)];

/// Rotation states 0..4; only adjacent transitions are defined.
fn transition_index(from: u8, to: u8) -> Option<usize> {
    match (from, to) {
        (0, 1) => Some(0),
        (1, 0) => Some(1),
        (1, 2) => Some(2),
        (2, 1) => Some(3),
        (2, 3) => Some(4),
        (3, 2) => Some(5),
        (3, 0) => Some(6),
        (0, 3) => Some(7),
        _ => None,
    }
}

/// J, L, S, T, Z tables, indexed by `transition_index`.
#[rustfmt::skip]
const COMMON_KICKS: [[(i8, i8); 5]; 8] = [
    [(0, 0), (-1, 0), (-1,  1), (0, -2), (-1, -2)], // 0 -> 1
    [(0, 0), ( 1, 0), ( 1, -1), (0,  2), ( 1,  2)], // 1 -> 0
    [(0, 0), ( 1, 0), ( 1, -1), (0,  2), ( 1,  2)], // 1 -> 2
    [(0, 0), (-1, 0), (-1,  1), (0, -2), (-1, -2)], // 2 -> 1
    [(0, 0), ( 1, 0), ( 1,  1), (0, -2), ( 1, -2)], // 2 -> 3
    [(0, 0), (-1, 0), (-1, -1), (0,  2), (-1,  2)], // 3 -> 2
    [(0, 0), (-1, 0), (-1, -1), (0,  2), (-1,  2)], // 3 -> 0
    [(0, 0), ( 1, 0), ( 1,  1), (0, -2), ( 1, -2)], // 0 -> 3
];

/// I tables, indexed by `transition_index`.
#[rustfmt::skip]
const I_KICKS: [[(i8, i8); 5]; 8] = [
    [(0, 0), (-2, 0), ( 1, 0), (-2, -1), ( 1,  2)], // 0 -> 1
    [(0, 0), ( 2, 0), (-1, 0), ( 2,  1), (-1, -2)], // 1 -> 0
    [(0, 0), (-1, 0), ( 2, 0), (-1,  2), ( 2, -1)], // 1 -> 2
    [(0, 0), ( 1, 0), (-2, 0), ( 1, -2), (-2,  1)], // 2 -> 1
    [(0, 0), ( 2, 0), (-1, 0), ( 2,  1), (-1, -2)], // 2 -> 3
    [(0, 0), (-2, 0), ( 1, 0), (-2, -1), ( 1,  2)], // 3 -> 2
    [(0, 0), ( 1, 0), (-2, 0), ( 1, -2), (-2,  1)], // 3 -> 0
    [(0, 0), (-1, 0), ( 2, 0), (-1,  2), ( 2, -1)], // 0 -> 3
];
