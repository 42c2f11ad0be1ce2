//! Engine and renderer options shared with configuration.

use serde::{Deserialize, Serialize};

/// Policy for annotated initializers that are not `required`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitPolicy {
    /// Every initializer gets a `_test_init` factory.
    #[default]
    Permissive,
    /// Reject non-`required` initializers of types the host reports as
    /// subclassable.
    Strict,
}

/// How synthesized declarations are laid out as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Multi-line, one accessor or statement per line.
    #[default]
    Expanded,
    /// Everything on a single line.
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive_and_expanded() {
        assert_eq!(InitPolicy::default(), InitPolicy::Permissive);
        assert_eq!(Layout::default(), Layout::Expanded);
    }
}
