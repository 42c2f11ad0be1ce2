//! Shared helpers for reading Swift declaration nodes.
//!
//! Type and expression fragments are taken verbatim from node text; only
//! names, modifiers, and structure are inspected.

use ast_grep_core::Node;
use vft_core::{ArgumentLabel, Effects, EnclosingKind, Parameter, TypeContext};

/// The annotation attribute on `node`, if present.
pub(super) fn find_annotation<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    annotation: &str,
) -> Option<Node<'r, D>> {
    attribute_nodes(node)
        .into_iter()
        .find(|attribute| attribute_name(&attribute.text()) == annotation)
}

/// Attributes attached next to the annotation, verbatim, in source order.
pub(super) fn attached_attributes<D: ast_grep_core::Doc>(
    node: &Node<D>,
    annotation: &str,
) -> Vec<String> {
    attribute_nodes(node)
        .into_iter()
        .map(|attribute| attribute.text().trim().to_string())
        .filter(|text| attribute_name(text) != annotation)
        .collect()
}

/// `@Module.Name(args)` → `Name`.
pub(super) fn attribute_name(text: &str) -> &str {
    let text = text.trim().trim_start_matches('@');
    let text = text.split('(').next().unwrap_or(text).trim();
    text.rsplit('.').next().unwrap_or(text).trim()
}

fn attribute_nodes<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let mut attributes = Vec::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "attribute" => attributes.push(child),
            "modifiers" => attributes.extend(
                child
                    .children()
                    .filter(|modifier| modifier.kind().as_ref() == "attribute"),
            ),
            _ => {}
        }
    }
    attributes
}

/// Modifier keywords (`private`, `static`, `required`, `final`, ...).
pub(super) fn modifier_keywords<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let mut keywords = Vec::new();
    for child in node.children() {
        let kind = child.kind();
        if kind.as_ref() == "modifiers" {
            for modifier in child.children() {
                if modifier.kind().as_ref() != "attribute" {
                    keywords.extend(modifier.text().split_whitespace().map(ToString::to_string));
                }
            }
        } else if kind.as_ref() == "class" && !child.is_named() {
            // `class func` / `class var` outside the modifier list
            keywords.push("class".to_string());
        }
    }
    keywords
}

pub(super) fn is_type_member(keywords: &[String]) -> bool {
    keywords.iter().any(|k| k == "static" || k == "class")
}

/// Parameters of a function or initializer, with their default values.
///
/// Defaults are siblings of the `parameter` nodes (`parameter`, `=`,
/// expression), so they are paired by walking the children in order.
pub(super) fn extract_parameters<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Parameter> {
    let mut parameters: Vec<Parameter> = Vec::new();
    let mut expecting_default = false;
    for child in node.children() {
        let kind = child.kind();
        match kind.as_ref() {
            "parameter" => {
                expecting_default = false;
                if let Some(parameter) = parse_parameter(&child.text()) {
                    parameters.push(parameter);
                }
            }
            "=" => expecting_default = true,
            _ if expecting_default && child.is_named() => {
                expecting_default = false;
                if let Some(last) = parameters.last_mut() {
                    last.default_value = Some(child.text().trim().to_string());
                }
            }
            _ => {}
        }
    }
    parameters
}

/// `label name: Type` or `name: Type`.
///
/// The first name is the call-site label; a lone name is both label and
/// internal name.
pub(super) fn parse_parameter(text: &str) -> Option<Parameter> {
    let (names, ty) = text.split_once(':')?;
    let label = names.split_whitespace().next()?;
    let ty = ty.trim();
    if ty.is_empty() {
        return None;
    }
    Some(Parameter::new(ArgumentLabel::from_source(label), ty))
}

pub(super) fn extract_effects<D: ast_grep_core::Doc>(node: &Node<D>) -> Effects {
    let mut effects = Effects::default();
    for child in node.children() {
        let kind = child.kind();
        match kind.as_ref() {
            "async" => effects.is_async = true,
            "throws" | "rethrows" => {
                effects.throws = Some(normalize_whitespace(&child.text()));
            }
            _ if !child.is_named() && child.text() == "async" => effects.is_async = true,
            _ => {}
        }
    }
    effects
}

/// Text of the first direct child of the given kind.
pub(super) fn child_text<D: ast_grep_core::Doc>(node: &Node<D>, kind: &str) -> Option<String> {
    node.children()
        .find(|child| child.kind().as_ref() == kind)
        .map(|child| normalize_whitespace(&child.text()))
}

/// Collapse runs of whitespace (including newlines) to single spaces.
pub(super) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Nearest enclosing type declaration.
pub(super) fn enclosing_type<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<TypeContext> {
    let mut current = node.parent();
    while let Some(parent) = current {
        match parent.kind().as_ref() {
            "class_declaration" => return type_context(&parent),
            "protocol_declaration" => {
                return Some(TypeContext {
                    kind: EnclosingKind::Protocol,
                    name: parent.field("name").map(|name| name.text().to_string()),
                    is_final: false,
                });
            }
            _ => current = parent.parent(),
        }
    }
    None
}

fn type_context<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<TypeContext> {
    let keyword = node
        .field("declaration_kind")
        .map(|kind| kind.text().to_string())
        .or_else(|| {
            node.children()
                .map(|child| child.text().to_string())
                .find(|text| EnclosingKind::from_keyword(text).is_some())
        })?;
    let kind = EnclosingKind::from_keyword(keyword.trim())?;

    Some(TypeContext {
        kind,
        name: node.field("name").map(|name| name.text().trim().to_string()),
        is_final: modifier_keywords(node).iter().any(|k| k == "final"),
    })
}

/// Leading whitespace of the line containing byte `offset`.
pub(super) fn line_indentation(source: &str, offset: usize) -> String {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map_or(0, |newline| newline + 1);
    source[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect()
}
