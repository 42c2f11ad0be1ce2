//! Diagnostics reported by the expansion engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
        }
    }
}

/// Location of a declaration in its source text.
///
/// Lines are one-based; byte offsets are zero-based and half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start_line: u32,
    pub end_line: u32,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// Reference to the declaration a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationAnchor {
    pub description: String,
    pub span: Option<SourceSpan>,
}

impl DeclarationAnchor {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            span: None,
        }
    }

    #[must_use]
    pub const fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub anchor: DeclarationAnchor,
}

impl Diagnostic {
    #[must_use]
    pub fn error(message: impl Into<String>, anchor: DeclarationAnchor) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            anchor,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.anchor.span {
            Some(span) => write!(
                f,
                "{}: {}: {} ({})",
                span.start_line, self.severity, self.message, self.anchor.description
            ),
            None => write!(
                f,
                "{}: {} ({})",
                self.severity, self.message, self.anchor.description
            ),
        }
    }
}

/// Receiver for diagnostics raised during expansion.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_reported_diagnostics() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::error("boom", DeclarationAnchor::new("init")));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].severity, Severity::Error);
    }

    #[test]
    fn display_includes_line_when_span_known() {
        let anchor = DeclarationAnchor::new("init").with_span(SourceSpan {
            start_line: 12,
            end_line: 14,
            start_byte: 100,
            end_byte: 180,
        });
        let diagnostic = Diagnostic::error("can only be applied to a required init", anchor);
        assert_eq!(
            diagnostic.to_string(),
            "12: error: can only be applied to a required init (init)"
        );
    }
}
