//! Declaration classifier: maps a Swift node to a declaration shape.

use ast_grep_core::Node;
use vft_core::naming::is_identifier;
use vft_core::{
    AccessorKind, AnnotatedDeclaration, BindingKind, BindingPattern, Failability,
    InitializerDecl, MethodDecl, PropertyBinding, PropertyDecl,
};

use super::helpers;

/// Lower an annotated declaration node using its syntactic shape only.
pub(super) fn lower<D: ast_grep_core::Doc>(node: &Node<D>) -> AnnotatedDeclaration {
    match node.kind().as_ref() {
        "property_declaration" => AnnotatedDeclaration::Property(lower_property(node)),
        "function_declaration" => lower_function(node).map_or_else(
            || unrecognized(node),
            AnnotatedDeclaration::Method,
        ),
        "init_declaration" => AnnotatedDeclaration::Initializer(lower_initializer(node)),
        _ => unrecognized(node),
    }
}

fn unrecognized<D: ast_grep_core::Doc>(node: &Node<D>) -> AnnotatedDeclaration {
    AnnotatedDeclaration::Unrecognized {
        kind: node.kind().to_string(),
    }
}

fn lower_property<D: ast_grep_core::Doc>(node: &Node<D>) -> PropertyDecl {
    let keywords = helpers::modifier_keywords(node);
    let mut binding_kind = BindingKind::Mutable;
    let mut bindings: Vec<PropertyBinding> = Vec::new();
    let mut initialized: Vec<bool> = Vec::new();

    for child in node.children() {
        let kind = child.kind();
        match kind.as_ref() {
            "value_binding_pattern" => {
                if child.text().split_whitespace().any(|word| word == "let") {
                    binding_kind = BindingKind::Immutable;
                }
            }
            "pattern" => {
                bindings.push(PropertyBinding {
                    pattern: binding_pattern(&child.text()),
                    declared_type: None,
                    accessors: AccessorKind::Stored,
                });
                initialized.push(false);
            }
            "=" => {
                if let Some(flag) = initialized.last_mut() {
                    *flag = true;
                }
            }
            "type_annotation" => {
                if let Some(binding) = bindings.last_mut() {
                    binding.declared_type = annotated_type(&child.text());
                }
            }
            "computed_property" => {
                if let Some(binding) = bindings.last_mut() {
                    binding.accessors = computed_accessors(&child);
                }
            }
            "willset_didset_block" => {
                if let Some(binding) = bindings.last_mut() {
                    binding.accessors = AccessorKind::Observed;
                }
            }
            _ => {}
        }
    }

    share_trailing_type(&mut bindings, &initialized);

    if bindings.is_empty()
        && let Some(name) = node.field("name")
    {
        bindings.push(PropertyBinding {
            pattern: binding_pattern(&name.text()),
            declared_type: helpers::child_text(node, "type_annotation")
                .and_then(|text| annotated_type(&text)),
            accessors: AccessorKind::Stored,
        });
    }

    PropertyDecl {
        binding_kind,
        bindings,
        is_static: helpers::is_type_member(&keywords),
    }
}

/// `var a, b: Int`: the annotation on `b` also types `a`.
///
/// Only untyped bindings without an initializer take the nearest later type.
fn share_trailing_type(bindings: &mut [PropertyBinding], initialized: &[bool]) {
    let mut trailing: Option<String> = None;
    for (binding, has_initializer) in bindings.iter_mut().zip(initialized).rev() {
        match &binding.declared_type {
            Some(ty) => trailing = Some(ty.clone()),
            None if !has_initializer => binding.declared_type.clone_from(&trailing),
            None => trailing = None,
        }
    }
}

fn binding_pattern(text: &str) -> BindingPattern {
    let text = text.trim();
    if is_identifier(text) {
        BindingPattern::Identifier(text.to_string())
    } else {
        BindingPattern::Destructured(helpers::normalize_whitespace(text))
    }
}

/// `: Int` → `Int`.
fn annotated_type(text: &str) -> Option<String> {
    let ty = helpers::normalize_whitespace(text.trim().trim_start_matches(':'));
    (!ty.is_empty()).then_some(ty)
}

fn computed_accessors<D: ast_grep_core::Doc>(node: &Node<D>) -> AccessorKind {
    let settable = node.children().any(|child| {
        matches!(
            child.kind().as_ref(),
            "computed_setter" | "computed_modify"
        )
    });
    if settable {
        AccessorKind::ComputedGetSet
    } else {
        AccessorKind::ComputedGetOnly
    }
}

fn lower_function<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<MethodDecl> {
    let name = node
        .field("name")
        .map(|name| name.text().trim().to_string())?;
    let keywords = helpers::modifier_keywords(node);

    Some(MethodDecl {
        name,
        generic_params: helpers::child_text(node, "type_parameters"),
        parameters: helpers::extract_parameters(node),
        effects: helpers::extract_effects(node),
        return_type: node
            .field("return_type")
            .map(|return_type| helpers::normalize_whitespace(&return_type.text())),
        where_clause: helpers::child_text(node, "type_constraints"),
        is_static: helpers::is_type_member(&keywords),
    })
}

fn lower_initializer<D: ast_grep_core::Doc>(node: &Node<D>) -> InitializerDecl {
    let keywords = helpers::modifier_keywords(node);

    InitializerDecl {
        is_required: keywords.iter().any(|k| k == "required"),
        failability: failability(&node.text()),
        generic_params: helpers::child_text(node, "type_parameters"),
        parameters: helpers::extract_parameters(node),
        effects: helpers::extract_effects(node),
        where_clause: helpers::child_text(node, "type_constraints"),
    }
}

/// `init?(` / `init!(`, read from the token after the `init` keyword.
fn failability(text: &str) -> Failability {
    for (offset, _) in text.match_indices("init") {
        let preceded_by_word = text[..offset]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '@' || c == '.');
        if preceded_by_word {
            continue;
        }
        let rest = text[offset + "init".len()..].trim_start();
        match rest.chars().next() {
            Some('?') => return Failability::Optional,
            Some('!') => return Failability::ImplicitlyUnwrapped,
            Some('(' | '<') => return Failability::None,
            _ => {}
        }
    }
    Failability::None
}
