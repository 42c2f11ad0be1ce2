//! Required-initializer policy.
//!
//! The engine cannot see whether the enclosing type is subclassable; the
//! strict check only fires when the host supplied that fact.

use vft_core::{Diagnostic, ExpansionRequest, InitPolicy, InitializerDecl};

pub(crate) fn check_initializer(
    policy: InitPolicy,
    annotation: &str,
    init: &InitializerDecl,
    request: &ExpansionRequest,
) -> Option<Diagnostic> {
    if policy == InitPolicy::Permissive || init.is_required {
        return None;
    }

    let subclassable = request
        .enclosing
        .as_ref()
        .and_then(vft_core::TypeContext::is_subclassable);
    if subclassable != Some(true) {
        return None;
    }

    Some(Diagnostic::error(
        format!("@{annotation} can only be applied to a required init"),
        request.anchor.clone(),
    ))
}
