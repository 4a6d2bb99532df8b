//! Flat `key=value` configuration text, the storage format of rule files.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::{fs, io};

/// A parsed key/value configuration source.
///
/// Lookups never fail: every getter takes a default that covers both a
/// missing key and a value that does not parse. An empty `PropertyFile` is
/// a valid source that yields defaults for everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFile {
    entries: BTreeMap<String, String>,
}

impl PropertyFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` lines. Blank lines and lines starting with `#` or
    /// `!` are ignored; lines without `=` are skipped. Whitespace around
    /// keys and values is trimmed.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { entries }
    }

    /// Read and parse a rule file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn set(&mut self, key: &str, value: impl Display) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn get_str(&self, key: &str, default: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get_parsed(key, default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_parsed(key, default)
    }

    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.get_parsed(key, default)
    }

    fn get_parsed<T: FromStr + Copy>(&self, key: &str, default: T) -> T {
        self.entries
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Render back to `key=value` text, keys sorted, for saving edited
    /// rules.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}
