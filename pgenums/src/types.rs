//! Shared types for the scanning and emission pipeline.

/// One extracted `CREATE TYPE ... AS ENUM` declaration.
///
/// `name` and every entry in `values` are normalized UpperCamelCase
/// identifier components, with `values` kept in statement order. Duplicate
/// values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub values: Vec<String>,
}

/// How forgiving the scanner and extractor are about malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// A lone `-` at statement start skips the rest of the line, and empty
    /// comma-separated value tokens are kept.
    #[default]
    Lax,
    /// Line comments require `--`, and empty value tokens are dropped.
    Strict,
}
