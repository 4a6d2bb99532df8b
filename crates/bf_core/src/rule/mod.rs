//! Rule files: the key/value source format and the options they populate.

mod options;
mod properties;

pub use options::RuleOptions;
pub use properties::PropertyFile;

use std::path::Path;

/// Load a rule set from a file path.
///
/// Always returns a fully-formed `RuleOptions`: an unreadable file logs a
/// warning and falls through to an empty source, which leaves every field
/// at its default. Menus call this with user-supplied paths, so a missing
/// rule file is ordinary input.
pub fn load_rule(path: impl AsRef<Path>) -> RuleOptions {
    let path = path.as_ref();

    let prop = match PropertyFile::load(path) {
        Ok(prop) => prop,
        Err(err) => {
            log::warn!("Failed to load rule from {}: {}", path.display(), err);
            PropertyFile::new()
        }
    };

    let mut ruleopt = RuleOptions::default();
    ruleopt.read_property(&prop);
    ruleopt
}
