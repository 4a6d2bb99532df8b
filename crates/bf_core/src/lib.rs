//! # bf_core - Shared Utility Core for the Blockfall Puzzle Engine
//!
//! This library provides the stateless utility layer shared by the game
//! modes, menus and netplay code of a falling-block puzzle engine:
//!
//! - play-time and calendar timestamp formatting, including the portable
//!   GMT timestamp string used in save and replay metadata
//! - the digit-string codec for forced next-piece queues
//! - piece-enablement analysis helpers
//! - name-keyed loading of pluggable randomizers, wall-kick resolvers and
//!   AI controllers
//! - rule-file loading into `RuleOptions`
//!
//! Every operation is synchronous and holds no state between calls, so the
//! whole crate is safe to use from any thread without coordination.

pub mod ai;
pub mod error;
pub mod loader;
pub mod piece;
pub mod randomizer;
pub mod rule;
pub mod util;
pub mod wallkick;

// Re-export the main entry points
pub use ai::{AiController, AiDecision, NoopAi};
pub use error::{Degraded, Soft, UtilError};
pub use loader::{load_ai, load_component, load_randomizer, load_wallkick};
pub use piece::{count_enabled, is_szo_only, parse_next_piece_sequence, PieceKind, PIECE_COUNT};
pub use randomizer::{BagRandomizer, MemorylessRandomizer, Randomizer};
pub use rule::{load_rule, PropertyFile, RuleOptions};
pub use util::{
    combine_strings, export_timestamp, export_timestamp_at, format_date_time, format_mark,
    format_on_off, format_play_time, import_timestamp, validate_date_format,
};
pub use wallkick::{ClassicWallkick, StandardWallkick, Wallkick};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
