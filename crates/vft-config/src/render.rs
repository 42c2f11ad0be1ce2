//! `[render]` section: textual layout of synthesized accessors.

use serde::{Deserialize, Serialize};
use vft_core::Layout;

use crate::ConfigError;

/// Accepted range for `render.indent_width`.
pub const INDENT_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 1..=16;

const fn default_indent_width() -> usize {
    4
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub layout: Layout,

    /// Spaces per nesting level in the expanded layout.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            indent_width: default_indent_width(),
        }
    }
}

impl RenderConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if INDENT_WIDTH_RANGE.contains(&self.indent_width) {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "render.indent_width",
                format!(
                    "{} is outside {}..={}",
                    self.indent_width,
                    INDENT_WIDTH_RANGE.start(),
                    INDENT_WIDTH_RANGE.end()
                ),
            ))
        }
    }
}
