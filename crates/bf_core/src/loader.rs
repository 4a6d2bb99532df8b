//! Name-keyed construction of pluggable strategy components.
//!
//! Rule files select a randomizer, wall-kick resolver and AI controller by
//! fully-qualified type name. Resolution is a pure lookup in the
//! capability's constant catalog; there is no global registry. Every
//! failure mode collapses into a soft `Degraded` result so a typo in a
//! rule file downgrades to the built-in default instead of crashing the
//! engine.

use crate::ai::AiController;
use crate::error::{Degraded, Soft};
use crate::randomizer::Randomizer;
use crate::wallkick::Wallkick;
use crate::{ai, randomizer, wallkick};

/// Look `type_name` up in `catalog` and construct a fresh instance.
///
/// A catalog entry pairs a type name with a zero-argument constructor.
/// `capability` only labels the warning on failure. The returned instance
/// is owned by the caller; repeated calls construct independent instances.
pub fn load_component<T: ?Sized>(
    capability: &str,
    catalog: &[(&str, fn() -> Box<T>)],
    type_name: &str,
) -> Soft<Box<T>> {
    match catalog.iter().find(|(name, _)| *name == type_name) {
        Some((_, construct)) => Ok(construct()),
        None => {
            log::warn!("Failed to load {} from {}", capability, type_name);
            Err(Degraded::new(format!(
                "unknown {} type: {}",
                capability, type_name
            )))
        }
    }
}

/// Load a randomizer by type name.
pub fn load_randomizer(type_name: &str) -> Soft<Box<dyn Randomizer>> {
    load_component("randomizer", randomizer::CATALOG, type_name)
}

/// Load a wall-kick resolver by type name.
pub fn load_wallkick(type_name: &str) -> Soft<Box<dyn Wallkick>> {
    load_component("wallkick", wallkick::CATALOG, type_name)
}

/// Load an AI controller by type name.
pub fn load_ai(type_name: &str) -> Soft<Box<dyn AiController>> {
    load_component("ai", ai::CATALOG, type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    #[test]
    fn test_load_known_randomizer() {
        let mut r = load_randomizer("bf_core::randomizer::BagRandomizer").unwrap();
        r.reset(None, 1);
        let _ = r.next_piece();
    }

    #[test]
    fn test_unknown_name_degrades_softly() {
        let result = load_randomizer("does.not.Exist");
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_of_one_capability_does_not_leak_into_another() {
        // A valid randomizer name is not a valid wallkick name.
        assert!(load_wallkick("bf_core::randomizer::BagRandomizer").is_err());
    }

    #[test]
    fn test_load_wallkick_and_ai() {
        let k = load_wallkick("bf_core::wallkick::StandardWallkick").unwrap();
        assert_eq!(k.kicks(PieceKind::O, 0, 1), &[(0, 0)]);

        let mut ai = load_ai("bf_core::ai::NoopAi").unwrap();
        assert_eq!(ai.decide(PieceKind::I, 10), None);
    }

    #[test]
    fn test_each_load_constructs_a_fresh_instance() {
        let mut a = load_randomizer("bf_core::randomizer::BagRandomizer").unwrap();
        let mut b = load_randomizer("bf_core::randomizer::BagRandomizer").unwrap();
        a.reset(None, 2);
        b.reset(None, 2);
        // Draining one instance must not advance the other.
        let seq_a: Vec<PieceKind> = (0..7).map(|_| a.next_piece()).collect();
        let seq_b: Vec<PieceKind> = (0..7).map(|_| b.next_piece()).collect();
        assert_eq!(seq_a, seq_b);
    }
}
