//! Structured synthesized accessors.
//!
//! These are built by the engine and turned into text only by the renderer.

use serde::{Deserialize, Serialize};

use crate::decl::{ArgumentLabel, Effects};

/// Visibility every synthesized accessor is exposed at.
pub const ACCESSOR_VISIBILITY: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedDeclaration {
    /// Attributes copied from the annotated declaration, in order.
    pub attributes: Vec<String>,
    pub kind: SynthesizedKind,
}

impl SynthesizedDeclaration {
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.kind {
            SynthesizedKind::Property(property) => &property.name,
            SynthesizedKind::Function(function) => &function.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SynthesizedKind {
    Property(SynthesizedProperty),
    Function(SynthesizedFunction),
}

/// A computed property forwarding to a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedProperty {
    pub name: String,
    pub ty: String,
    pub is_static: bool,
    /// Member expression read by the getter and assigned by the setter.
    pub target: String,
    pub settable: bool,
}

/// A function whose body is a single forwarding call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedFunction {
    pub name: String,
    pub is_static: bool,
    pub generic_params: Option<String>,
    pub parameters: Vec<SynthesizedParameter>,
    pub effects: Effects,
    pub return_type: Option<String>,
    pub where_clause: Option<String>,
    pub body: ForwardingCall,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedParameter {
    pub label: ArgumentLabel,
    pub name: String,
    pub ty: String,
    pub default_value: Option<String>,
}

/// `try await callee(label: value, ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingCall {
    pub callee: String,
    pub arguments: Vec<Argument>,
    pub is_try: bool,
    pub is_await: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// `None` for positional (wildcard-labelled) arguments.
    pub label: Option<String>,
    pub value: String,
    pub is_inout: bool,
}
