//! Annotated declaration model.
//!
//! Declarations are carried as unresolved syntax: type and expression
//! fragments are kept verbatim as written in the source, never analyzed.

use serde::{Deserialize, Serialize};

/// The declaration an annotation is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum AnnotatedDeclaration {
    Property(PropertyDecl),
    Method(MethodDecl),
    Initializer(InitializerDecl),
    /// Any other declaration shape (subscript, deinit, nested type, ...).
    Unrecognized { kind: String },
}

impl AnnotatedDeclaration {
    /// Short human-readable description used for anchors and listings.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Property(property) => {
                let names = property
                    .bindings
                    .iter()
                    .map(|binding| binding.pattern.text())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} {names}", property.binding_kind.keyword())
            }
            Self::Method(method) => format!("func {}", method.name),
            Self::Initializer(init) => format!("init{}", init.failability.suffix()),
            Self::Unrecognized { kind } => kind.clone(),
        }
    }

    /// Stable lowercase name of the declaration shape.
    #[must_use]
    pub const fn shape_name(&self) -> &'static str {
        match self {
            Self::Property(_) => "property",
            Self::Method(_) => "method",
            Self::Initializer(_) => "initializer",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}

/// `var` or `let`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    Mutable,
    Immutable,
}

impl BindingKind {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Mutable => "var",
            Self::Immutable => "let",
        }
    }
}

/// A stored or computed property declaration.
///
/// A single declaration may introduce several bindings
/// (`var a: Int = 0, b: Int = 1`); each is handled independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub binding_kind: BindingKind,
    pub bindings: Vec<PropertyBinding>,
    /// Declared with `static` or `class`.
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBinding {
    pub pattern: BindingPattern,
    pub declared_type: Option<String>,
    #[serde(default)]
    pub accessors: AccessorKind,
}

impl PropertyBinding {
    /// Whether a test accessor for this binding may also provide a setter.
    #[must_use]
    pub const fn is_settable(&self, binding_kind: BindingKind) -> bool {
        match binding_kind {
            BindingKind::Immutable => false,
            BindingKind::Mutable => !matches!(self.accessors, AccessorKind::ComputedGetOnly),
        }
    }
}

/// The left-hand side of a property binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingPattern {
    /// A plain name, possibly backtick-escaped (`` `default` ``).
    Identifier(String),
    /// A tuple or other destructuring pattern, kept verbatim.
    Destructured(String),
}

impl BindingPattern {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Identifier(text) | Self::Destructured(text) => text,
        }
    }
}

/// How the property's value is provided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    #[default]
    Stored,
    /// Stored with `willSet` / `didSet` observers.
    Observed,
    ComputedGetOnly,
    ComputedGetSet,
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    /// Generic parameter clause including angle brackets, e.g. `<T: Codable>`.
    pub generic_params: Option<String>,
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub effects: Effects,
    pub return_type: Option<String>,
    /// Full `where` clause, e.g. `where T: Equatable`.
    pub where_clause: Option<String>,
    #[serde(default)]
    pub is_static: bool,
}

/// An initializer declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializerDecl {
    pub is_required: bool,
    #[serde(default)]
    pub failability: Failability,
    pub generic_params: Option<String>,
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub effects: Effects,
    pub where_clause: Option<String>,
}

/// `init`, `init?`, or `init!`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Failability {
    #[default]
    None,
    Optional,
    ImplicitlyUnwrapped,
}

impl Failability {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Optional => "?",
            Self::ImplicitlyUnwrapped => "!",
        }
    }
}

/// `async` and `throws` effects of a function-like declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    pub is_async: bool,
    /// Verbatim throwing clause: `throws`, `rethrows`, or `throws(MyError)`.
    pub throws: Option<String>,
}

impl Effects {
    #[must_use]
    pub const fn is_throwing(&self) -> bool {
        self.throws.is_some()
    }
}

/// One entry of a parameter clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub label: ArgumentLabel,
    /// Declared type, verbatim. May start with `inout`.
    pub ty: String,
    pub default_value: Option<String>,
}

impl Parameter {
    #[must_use]
    pub fn new(label: ArgumentLabel, ty: impl Into<String>) -> Self {
        Self {
            label,
            ty: ty.into(),
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Whether the argument must be passed with `&`.
    #[must_use]
    pub fn is_inout(&self) -> bool {
        self.ty.split_whitespace().next() == Some("inout")
    }

    /// `T...`: the argument list cannot be re-spread from an array.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.ty.trim_end().ends_with("...")
    }
}

/// The call-site label of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentLabel {
    Named(String),
    /// `_`: the argument is passed positionally.
    Wildcard,
}

impl ArgumentLabel {
    /// Build a label from source text, mapping `_` to [`ArgumentLabel::Wildcard`].
    #[must_use]
    pub fn from_source(text: &str) -> Self {
        match text.trim() {
            "_" => Self::Wildcard,
            named => Self::Named(named.to_string()),
        }
    }

    /// Text as written in a parameter clause.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Wildcard => "_",
        }
    }
}
