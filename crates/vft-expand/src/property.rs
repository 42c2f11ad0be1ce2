//! Property accessor synthesis.

use vft_core::naming::{is_identifier, property_accessor_name};
use vft_core::{BindingPattern, PropertyBinding, PropertyDecl, SynthesizedKind, SynthesizedProperty};

/// One `__test_<name>` computed property per eligible binding.
///
/// A binding is eligible when its pattern is a plain identifier and it
/// carries an explicit type annotation; other bindings are skipped.
pub(crate) fn synthesize(property: &PropertyDecl) -> Vec<SynthesizedKind> {
    property
        .bindings
        .iter()
        .filter_map(|binding| accessor_for(property, binding))
        .map(SynthesizedKind::Property)
        .collect()
}

fn accessor_for(
    property: &PropertyDecl,
    binding: &PropertyBinding,
) -> Option<SynthesizedProperty> {
    let name = match &binding.pattern {
        BindingPattern::Identifier(name) if is_identifier(name) => name,
        pattern => {
            tracing::debug!(pattern = pattern.text(), "skipping non-identifier binding");
            return None;
        }
    };
    let Some(ty) = binding.declared_type.as_deref() else {
        tracing::debug!(%name, "skipping binding without type annotation");
        return None;
    };

    Some(SynthesizedProperty {
        name: property_accessor_name(name),
        ty: ty.to_string(),
        is_static: property.is_static,
        target: format!("self.{name}"),
        settable: binding.is_settable(property.binding_kind),
    })
}
