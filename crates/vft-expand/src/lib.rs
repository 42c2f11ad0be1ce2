//! # vft-expand
//!
//! The expansion engine: turns one annotated declaration into the public
//! test accessors that expose it, or a diagnostic.
//!
//! - [`Expander`] classifies the declaration and dispatches to the property,
//!   method, or initializer synthesizer
//! - [`Renderer`] prints synthesized declarations as Swift source
//! - [`splice`] inserts rendered accessors next to their declarations
//!
//! Expansion is a pure function of its request: no I/O, no shared state.
//!
//! ```
//! use vft_core::{AnnotatedDeclaration, ArgumentLabel, ExpansionRequest, MethodDecl, Parameter};
//! use vft_expand::{Expander, Renderer};
//!
//! let request = ExpansionRequest::new(AnnotatedDeclaration::Method(MethodDecl {
//!     name: "f".to_string(),
//!     generic_params: None,
//!     parameters: vec![Parameter::new(ArgumentLabel::Wildcard, "String")],
//!     effects: Default::default(),
//!     return_type: Some("Int".to_string()),
//!     where_clause: None,
//!     is_static: false,
//! }));
//!
//! let expansion = Expander::default().expand_collecting(&request);
//! let text = Renderer::compact().render(&expansion.declarations[0]);
//! assert_eq!(text, "public func _test_f(_ arg0: String) -> Int { f(arg0) }");
//! ```

mod forwarding;
mod initializer;
mod method;
mod policy;
mod property;
pub mod render;
pub mod splice;

pub use render::Renderer;
pub use splice::{Insertion, splice};

use serde::Serialize;
use vft_core::{
    AnnotatedDeclaration, Diagnostic, DiagnosticSink, ExpansionRequest, InitPolicy,
    SynthesizedDeclaration,
};

/// Name of the annotation when none is configured.
pub const DEFAULT_ANNOTATION: &str = "VisibleForTesting";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderOptions {
    /// Annotation name without the leading `@`, used in diagnostics.
    pub annotation: String,
    pub init_policy: InitPolicy,
}

impl Default for ExpanderOptions {
    fn default() -> Self {
        Self {
            annotation: DEFAULT_ANNOTATION.to_string(),
            init_policy: InitPolicy::default(),
        }
    }
}

/// Outcome of one expansion with diagnostics collected alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub declarations: Vec<SynthesizedDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Expansion {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Expander {
    options: ExpanderOptions,
}

impl Expander {
    #[must_use]
    pub const fn new(options: ExpanderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ExpanderOptions {
        &self.options
    }

    /// Synthesize the accessors for one annotated declaration.
    ///
    /// Unrecognized shapes yield an empty result without a diagnostic.
    /// When a diagnostic is reported the result is always empty.
    pub fn expand(
        &self,
        request: &ExpansionRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<SynthesizedDeclaration> {
        let synthesized = match &request.declaration {
            AnnotatedDeclaration::Property(property) => property::synthesize(property),
            AnnotatedDeclaration::Method(method) => {
                method::synthesize(method).into_iter().collect()
            }
            AnnotatedDeclaration::Initializer(init) => {
                if let Some(diagnostic) = policy::check_initializer(
                    self.options.init_policy,
                    &self.options.annotation,
                    init,
                    request,
                ) {
                    sink.report(diagnostic);
                    return Vec::new();
                }
                if !forwarding::forwardable("init", &init.parameters) {
                    return Vec::new();
                }
                vec![initializer::synthesize(init)]
            }
            AnnotatedDeclaration::Unrecognized { kind } => {
                tracing::debug!(%kind, "no test accessor for declaration shape");
                Vec::new()
            }
        };

        tracing::trace!(
            declaration = %request.anchor.description,
            count = synthesized.len(),
            "synthesized test accessors"
        );
        forwarding::propagate_attributes(synthesized, &request.attributes)
    }

    /// [`Expander::expand`] with diagnostics collected into the result.
    #[must_use]
    pub fn expand_collecting(&self, request: &ExpansionRequest) -> Expansion {
        let mut diagnostics = Vec::new();
        let declarations = self.expand(request, &mut diagnostics);
        Expansion {
            declarations,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use vft_core::{
        AccessorKind, ArgumentLabel, BindingKind, BindingPattern, Effects, EnclosingKind,
        Failability, InitializerDecl, Parameter, PropertyBinding, PropertyDecl, TypeContext,
    };

    use super::*;

    fn non_required_init() -> AnnotatedDeclaration {
        AnnotatedDeclaration::Initializer(InitializerDecl {
            is_required: false,
            failability: Failability::None,
            generic_params: None,
            parameters: Vec::new(),
            effects: Effects::default(),
            where_clause: None,
        })
    }

    #[test]
    fn unrecognized_shape_is_silently_empty() {
        let request = ExpansionRequest::new(AnnotatedDeclaration::Unrecognized {
            kind: "subscript_declaration".to_string(),
        });
        let expansion = Expander::default().expand_collecting(&request);
        assert!(expansion.declarations.is_empty());
        assert!(!expansion.has_errors());
    }

    #[test]
    fn strict_policy_reports_and_returns_nothing() {
        let expander = Expander::new(ExpanderOptions {
            init_policy: InitPolicy::Strict,
            ..ExpanderOptions::default()
        });
        let request = ExpansionRequest::new(non_required_init())
            .with_enclosing(TypeContext::new(EnclosingKind::Class));

        let expansion = expander.expand_collecting(&request);

        assert!(expansion.declarations.is_empty());
        assert_eq!(expansion.diagnostics.len(), 1);
        assert_eq!(
            expansion.diagnostics[0].message,
            "@VisibleForTesting can only be applied to a required init"
        );
        assert_eq!(expansion.diagnostics[0].anchor.description, "init");
    }

    #[test]
    fn permissive_policy_accepts_non_required_class_init() {
        let request = ExpansionRequest::new(non_required_init())
            .with_enclosing(TypeContext::new(EnclosingKind::Class));
        let expansion = Expander::default().expand_collecting(&request);
        assert_eq!(expansion.declarations.len(), 1);
        assert_eq!(expansion.declarations[0].name(), "_test_init");
    }

    #[test]
    fn variadic_initializer_yields_nothing() {
        let request = ExpansionRequest::new(AnnotatedDeclaration::Initializer(InitializerDecl {
            is_required: true,
            failability: Failability::None,
            generic_params: None,
            parameters: vec![Parameter::new(
                ArgumentLabel::Named("values".to_string()),
                "String...",
            )],
            effects: Effects::default(),
            where_clause: None,
        }));
        let expansion = Expander::default().expand_collecting(&request);
        assert!(expansion.declarations.is_empty());
        assert!(!expansion.has_errors());
    }

    #[test]
    fn every_binding_receives_the_same_attributes() {
        let binding = |name: &str| PropertyBinding {
            pattern: BindingPattern::Identifier(name.to_string()),
            declared_type: Some("Int".to_string()),
            accessors: AccessorKind::Stored,
        };
        let request = ExpansionRequest::new(AnnotatedDeclaration::Property(PropertyDecl {
            binding_kind: BindingKind::Mutable,
            bindings: vec![binding("x"), binding("y")],
            is_static: false,
        }))
        .with_attributes(["@MainActor", "@objc"]);

        let declarations = Expander::default().expand_collecting(&request).declarations;

        assert_eq!(declarations.len(), 2);
        for declaration in &declarations {
            assert_eq!(declaration.attributes, vec!["@MainActor", "@objc"]);
        }
        assert_eq!(declarations[0].name(), "__test_x");
        assert_eq!(declarations[1].name(), "__test_y");
    }
}
