//! Accessor naming contract and identifier helpers.
//!
//! Callers and tests depend on these names verbatim.

/// Prefix for synthesized property accessors.
pub const PROPERTY_PREFIX: &str = "__test_";

/// Prefix for synthesized method accessors.
pub const METHOD_PREFIX: &str = "_test_";

/// Name of the static factory synthesized for initializers.
pub const INIT_FACTORY: &str = "_test_init";

/// Prefix of the positional names given to synthesized parameters.
pub const ARGUMENT_PREFIX: &str = "arg";

/// `__test_<name>`, with backtick escaping removed from `name`.
#[must_use]
pub fn property_accessor_name(name: &str) -> String {
    format!("{PROPERTY_PREFIX}{}", unescape(name))
}

/// `_test_<name>`, with backtick escaping removed from `name`.
#[must_use]
pub fn method_accessor_name(name: &str) -> String {
    format!("{METHOD_PREFIX}{}", unescape(name))
}

/// `arg<index>`.
#[must_use]
pub fn synthetic_argument(index: usize) -> String {
    format!("{ARGUMENT_PREFIX}{index}")
}

/// Strip surrounding backticks from an escaped identifier.
#[must_use]
pub fn unescape(name: &str) -> &str {
    name.strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(name)
}

/// Whether `text` is a single identifier (optionally backtick-escaped).
///
/// Operators and patterns such as `(a, b)` are not identifiers.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let text = unescape(text.trim());
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || first.is_alphabetic()) {
        return false;
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
