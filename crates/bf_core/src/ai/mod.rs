//! AI controllers selectable by name from rule files.
//!
//! Only the loading contract lives here. Concrete play algorithms ship as
//! additional catalog entries; the engine falls back to `NoopAi` when a
//! configured name fails to load.

use crate::piece::PieceKind;

/// A placement decision for the current piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiDecision {
    /// Target column of the piece origin.
    pub x: i8,
    /// Target rotation state, 0..4.
    pub rotation: u8,
}

pub trait AiController {
    /// Display name shown in menus and logs.
    fn name(&self) -> &'static str;

    /// Called once when a new game starts.
    fn new_game(&mut self) {}

    /// Pick a placement for the current piece. `None` means no opinion and
    /// leaves the piece where gravity takes it.
    fn decide(&mut self, kind: PieceKind, board_width: u8) -> Option<AiDecision>;
}

/// Built-in controllers, keyed by the type name used in rule files.
pub const CATALOG: &[(&str, fn() -> Box<dyn AiController>)] =
    &[("bf_core::ai::NoopAi", || Box::new(NoopAi))];

/// The do-nothing controller. Serves as the loader fallback and as the
/// stand-in for "no AI" in player slots.
pub struct NoopAi;

impl AiController for NoopAi {
    fn name(&self) -> &'static str {
        "none"
    }

    fn decide(&mut self, _kind: PieceKind, _board_width: u8) -> Option<AiDecision> {
        None
    }
}
