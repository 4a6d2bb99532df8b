//! The gameplay rule aggregate that rule files populate.

use serde::{Deserialize, Serialize};

use super::properties::PropertyFile;

/// Gameplay configuration selected by a rule file.
///
/// Every field has a playable default; reading from an empty source is
/// valid and leaves the defaults in place. The `randomizer` and `wallkick`
/// fields hold the fully-qualified type names resolved by the component
/// loader at game start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOptions {
    /// Display name of the rule set.
    pub rule_name: String,
    /// Type name of the piece randomizer.
    pub randomizer: String,
    /// Type name of the wall-kick resolver.
    pub wallkick: String,

    pub board_width: i32,
    pub board_height: i32,

    /// Next pieces shown to the player.
    pub next_display: i32,
    pub hold_enable: bool,
    /// Holds allowed per piece; -1 is unlimited.
    pub hold_limit: i32,
    pub harddrop_enable: bool,
    pub softdrop_enable: bool,
    /// Rotation may be buffered before the piece spawns.
    pub rotate_initial: bool,

    /// Frames a touching piece may still move before locking.
    pub lock_delay: i32,
    /// Delayed-auto-shift charge, in frames.
    pub das: i32,
    /// Entry delay between lock and next spawn, in frames.
    pub are: i32,
    /// Extra delay after a line clear, in frames.
    pub line_delay: i32,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            rule_name: "STANDARD".to_string(),
            randomizer: "bf_core::randomizer::BagRandomizer".to_string(),
            wallkick: "bf_core::wallkick::StandardWallkick".to_string(),
            board_width: 10,
            board_height: 20,
            next_display: 3,
            hold_enable: true,
            hold_limit: -1,
            harddrop_enable: true,
            softdrop_enable: true,
            rotate_initial: false,
            lock_delay: 30,
            das: 14,
            are: 25,
            line_delay: 40,
        }
    }
}

impl RuleOptions {
    /// Populate from a parsed source, keeping the current value wherever a
    /// key is missing or unparsable.
    pub fn read_property(&mut self, prop: &PropertyFile) {
        self.rule_name = prop.get_str("ruleopt.rule_name", &self.rule_name);
        self.randomizer = prop.get_str("ruleopt.randomizer", &self.randomizer);
        self.wallkick = prop.get_str("ruleopt.wallkick", &self.wallkick);
        self.board_width = prop.get_int("ruleopt.board_width", self.board_width);
        self.board_height = prop.get_int("ruleopt.board_height", self.board_height);
        self.next_display = prop.get_int("ruleopt.next_display", self.next_display);
        self.hold_enable = prop.get_bool("ruleopt.hold_enable", self.hold_enable);
        self.hold_limit = prop.get_int("ruleopt.hold_limit", self.hold_limit);
        self.harddrop_enable = prop.get_bool("ruleopt.harddrop_enable", self.harddrop_enable);
        self.softdrop_enable = prop.get_bool("ruleopt.softdrop_enable", self.softdrop_enable);
        self.rotate_initial = prop.get_bool("ruleopt.rotate_initial", self.rotate_initial);
        self.lock_delay = prop.get_int("ruleopt.lock_delay", self.lock_delay);
        self.das = prop.get_int("ruleopt.das", self.das);
        self.are = prop.get_int("ruleopt.are", self.are);
        self.line_delay = prop.get_int("ruleopt.line_delay", self.line_delay);
    }

    /// Mirror of `read_property` for saving an edited rule set.
    pub fn write_property(&self, prop: &mut PropertyFile) {
        prop.set("ruleopt.rule_name", &self.rule_name);
        prop.set("ruleopt.randomizer", &self.randomizer);
        prop.set("ruleopt.wallkick", &self.wallkick);
        prop.set("ruleopt.board_width", self.board_width);
        prop.set("ruleopt.board_height", self.board_height);
        prop.set("ruleopt.next_display", self.next_display);
        prop.set("ruleopt.hold_enable", self.hold_enable);
        prop.set("ruleopt.hold_limit", self.hold_limit);
        prop.set("ruleopt.harddrop_enable", self.harddrop_enable);
        prop.set("ruleopt.softdrop_enable", self.softdrop_enable);
        prop.set("ruleopt.rotate_initial", self.rotate_initial);
        prop.set("ruleopt.lock_delay", self.lock_delay);
        prop.set("ruleopt.das", self.das);
        prop.set("ruleopt.are", self.are);
        prop.set("ruleopt.line_delay", self.line_delay);
    }
}
