//! # vft-core
//!
//! Core types shared by every vft crate.
//!
//! This crate provides:
//! - The annotated declaration model (properties, methods, initializers)
//! - The structured synthesized-accessor model
//! - Diagnostics, anchors, and the diagnostic sink seam
//! - Expansion requests and enclosing-type context
//! - Policy and layout options
//! - Cross-cutting error types

pub mod context;
pub mod decl;
pub mod diagnostic;
pub mod errors;
pub mod naming;
pub mod options;
pub mod synth;

pub use context::{EnclosingKind, ExpansionRequest, TypeContext};
pub use decl::{
    AccessorKind, AnnotatedDeclaration, ArgumentLabel, BindingKind, BindingPattern, Effects,
    Failability, InitializerDecl, MethodDecl, Parameter, PropertyBinding, PropertyDecl,
};
pub use diagnostic::{DeclarationAnchor, Diagnostic, DiagnosticSink, Severity, SourceSpan};
pub use errors::CoreError;
pub use options::{InitPolicy, Layout};
pub use synth::{
    Argument, ForwardingCall, SynthesizedDeclaration, SynthesizedFunction, SynthesizedKind,
    SynthesizedParameter, SynthesizedProperty,
};
