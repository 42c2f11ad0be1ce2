//! Expansion requests and the enclosing-type facts a host may supply.

use serde::{Deserialize, Serialize};

use crate::decl::AnnotatedDeclaration;
use crate::diagnostic::DeclarationAnchor;

/// Everything the engine receives for one annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionRequest {
    pub declaration: AnnotatedDeclaration,
    /// Attributes attached alongside the annotation, verbatim and in order.
    #[serde(default)]
    pub attributes: Vec<String>,
    pub anchor: DeclarationAnchor,
    /// Enclosing type, when the host knows it. Only the strict
    /// initializer policy consults this.
    #[serde(default)]
    pub enclosing: Option<TypeContext>,
}

impl ExpansionRequest {
    /// Build a request anchored on the declaration's own description.
    #[must_use]
    pub fn new(declaration: AnnotatedDeclaration) -> Self {
        let anchor = DeclarationAnchor::new(declaration.describe());
        Self {
            declaration,
            attributes: Vec::new(),
            anchor,
            enclosing: None,
        }
    }

    #[must_use]
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: DeclarationAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_enclosing(mut self, enclosing: TypeContext) -> Self {
        self.enclosing = Some(enclosing);
        self
    }
}

/// The type declaration an annotated member lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeContext {
    pub kind: EnclosingKind,
    pub name: Option<String>,
    #[serde(default)]
    pub is_final: bool,
}

impl TypeContext {
    #[must_use]
    pub const fn new(kind: EnclosingKind) -> Self {
        Self {
            kind,
            name: None,
            is_final: false,
        }
    }

    /// Whether the enclosing type can be subclassed.
    ///
    /// `None` when the answer is not visible syntactically: an extension
    /// or protocol may be attached to either kind of type.
    #[must_use]
    pub const fn is_subclassable(&self) -> Option<bool> {
        match self.kind {
            EnclosingKind::Class => Some(!self.is_final),
            EnclosingKind::Struct | EnclosingKind::Enum | EnclosingKind::Actor => Some(false),
            EnclosingKind::Extension | EnclosingKind::Protocol => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnclosingKind {
    Class,
    Struct,
    Enum,
    Actor,
    Extension,
    Protocol,
}

impl EnclosingKind {
    /// Map a declaration keyword to its kind.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "struct" => Some(Self::Struct),
            "enum" => Some(Self::Enum),
            "actor" => Some(Self::Actor),
            "extension" => Some(Self::Extension),
            "protocol" => Some(Self::Protocol),
            _ => None,
        }
    }
}
