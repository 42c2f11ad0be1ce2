//! `[expansion]` section: what the engine looks for and how strict it is.

use serde::{Deserialize, Serialize};
use vft_core::InitPolicy;
use vft_core::naming::is_identifier;

use crate::ConfigError;

fn default_annotation() -> String {
    "VisibleForTesting".to_string()
}

const fn default_strip_annotation() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExpansionConfig {
    /// Attribute name that marks a declaration, without the `@`.
    #[serde(default = "default_annotation")]
    pub annotation: String,

    #[serde(default)]
    pub init_policy: InitPolicy,

    /// Remove the annotation attribute when splicing accessors into source.
    #[serde(default = "default_strip_annotation")]
    pub strip_annotation: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            annotation: default_annotation(),
            init_policy: InitPolicy::default(),
            strip_annotation: default_strip_annotation(),
        }
    }
}

impl ExpansionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let annotation = self.annotation.trim_start_matches('@');
        if !is_identifier(annotation) {
            return Err(ConfigError::invalid(
                "expansion.annotation",
                format!("'{}' is not a Swift identifier", self.annotation),
            ));
        }
        Ok(())
    }

    /// Annotation name with any leading `@` removed.
    #[must_use]
    pub fn annotation_name(&self) -> &str {
        self.annotation.trim_start_matches('@')
    }
}
