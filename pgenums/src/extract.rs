//! Pattern matching over raw statement blocks.

use regex::Regex;

use crate::ident::camel_ident;
use crate::types::{EnumDecl, Strictness};

/// Shape of a recognized `CREATE TYPE <name> AS ENUM (<values>);` statement.
const ENUM_PATTERN: &str = r"(?i)CREATE TYPE (\w+) AS ENUM\s*\(([\w',\s]+)\);";

/// Matches raw statement blocks against the enum declaration shape and
/// extracts normalized declarations.
///
/// Holds its own compiled pattern; construct one per pipeline run rather
/// than sharing a process-wide instance.
pub struct Extractor {
    pattern: Regex,
    strictness: Strictness,
}

impl Extractor {
    pub fn new(strictness: Strictness) -> Self {
        Self {
            pattern: Regex::new(ENUM_PATTERN).expect("enum pattern compiles"),
            strictness,
        }
    }

    /// Extract a declaration from one raw block.
    ///
    /// Returns `None` for any block that does not have the recognized shape,
    /// including composite types and malformed value lists. That is normal
    /// filtering, not a fault.
    pub fn extract(&self, block: &str) -> Option<EnumDecl> {
        let caps = self.pattern.captures(block)?;
        let name = camel_ident(caps.get(1)?.as_str());
        let mut values: Vec<String> = caps.get(2)?.as_str().split(',').map(camel_ident).collect();

        if self.strictness == Strictness::Strict {
            values.retain(|value| !value.is_empty());
        }
        if values.is_empty() {
            return None;
        }

        Some(EnumDecl { name, values })
    }
}
