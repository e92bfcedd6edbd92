//! Identifier normalization for extracted type names and values.

use heck::ToUpperCamelCase;

/// Normalize a captured name or value into an UpperCamelCase identifier
/// component.
///
/// Surrounding whitespace is trimmed; quote characters, underscores and
/// internal whitespace act as word boundaries and are dropped. Normalizing
/// an already normalized identifier returns it unchanged.
pub fn camel_ident(raw: &str) -> String {
    raw.trim().to_upper_camel_case()
}
